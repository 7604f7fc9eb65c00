//! Route interpolation.
//!
//! # Algorithm
//!
//! 1. Size the route at one waypoint per 0.1 estimated mile, clamped to
//!    `[MIN_WAYPOINTS, MAX_WAYPOINTS]`.
//! 2. Place waypoint `i` by linear interpolation between the endpoints,
//!    plus a deterministic per-axis jitter of roughly ±100 m that stands in
//!    for street-following deviation.  The first and last waypoints are the
//!    literal endpoints.
//! 3. Name each waypoint via [`name_street`] and classify its speed limit
//!    and traffic control via [`classify`].
//!
//! The whole pipeline is pure: no clock, no RNG state, no I/O.

use serde::{Deserialize, Serialize};

use rg_core::{GeoPoint, unit_offset};

use crate::namer::name_street;
use crate::rules::{RoadAttributes, TrafficControl, classify};

/// Fewest waypoints a route may have.
pub const MIN_WAYPOINTS: usize = 15;

/// Most waypoints a route may have.
pub const MAX_WAYPOINTS: usize = 40;

/// Waypoints per estimated mile of route.
const WAYPOINTS_PER_MILE: f64 = 10.0;

/// Jitter scale in degrees.  A unit offset in [-0.5, 0.5) times this gives
/// ±0.001°, roughly ±100 m at Atlanta's latitude.
const JITTER_DEGREES: f64 = 0.002;

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One point along a synthesized route.
///
/// `has_traffic_light` is derived from `traffic_control` at construction;
/// the two fields can never disagree in produced data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub street_name: String,
    pub speed_limit: u32,
    pub has_traffic_light: bool,
    pub traffic_control: TrafficControl,
}

impl Waypoint {
    fn new(position: GeoPoint, street_name: &str, attrs: RoadAttributes) -> Self {
        let rounded = position.round6();
        Waypoint {
            latitude: rounded.lat,
            longitude: rounded.lon,
            street_name: street_name.to_owned(),
            speed_limit: attrs.speed_limit,
            has_traffic_light: attrs.control == TrafficControl::TrafficLight,
            traffic_control: attrs.control,
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A full synthesized route record, one per driver leg.
///
/// `start_location` and `end_location` are human-readable `"lat, lon"`
/// strings of the unrounded input endpoints; the waypoint list carries the
/// rounded coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub description: String,
    pub start_location: String,
    pub end_location: String,
    pub waypoints: Vec<Waypoint>,
}

/// Synthesize the route for one leg.
///
/// Deterministic in all four arguments and total over finite coordinates.
pub fn interpolate(start: GeoPoint, end: GeoPoint, route_name: &str, description: &str) -> Route {
    let total = waypoint_count(start, end);
    let mut waypoints = Vec::with_capacity(total);

    for index in 0..total {
        let position = waypoint_position(start, end, route_name, index, total);
        let street = name_street(route_name, position, index, total);
        let progress = index as f64 / (total - 1) as f64;
        let attrs = classify(street, index, total, progress);
        waypoints.push(Waypoint::new(position, street, attrs));
    }

    Route {
        name: route_name.to_owned(),
        description: description.to_owned(),
        start_location: format!("{}, {}", start.lat, start.lon),
        end_location: format!("{}, {}", end.lat, end.lon),
        waypoints,
    }
}

/// One waypoint per 0.1 estimated mile, clamped to the legal range.
fn waypoint_count(start: GeoPoint, end: GeoPoint) -> usize {
    let raw = (start.grid_miles(end) * WAYPOINTS_PER_MILE) as usize;
    raw.clamp(MIN_WAYPOINTS, MAX_WAYPOINTS)
}

/// Position of waypoint `index`: exact endpoints at either end, jittered
/// interpolation between.
fn waypoint_position(
    start: GeoPoint,
    end: GeoPoint,
    route_name: &str,
    index: usize,
    total: usize,
) -> GeoPoint {
    if index == 0 {
        return start;
    }
    if index == total - 1 {
        return end;
    }

    let progress = index as f64 / (total - 1) as f64;
    let base = start.lerp(end, progress);
    GeoPoint::new(
        base.lat + unit_offset(&format!("{route_name}_{index}_lat")) * JITTER_DEGREES,
        base.lon + unit_offset(&format!("{route_name}_{index}_lon")) * JITTER_DEGREES,
    )
}
