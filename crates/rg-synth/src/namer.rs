//! Deterministic street naming.
//!
//! Every waypoint gets a label from the fixed catalog, selected by a stable
//! hash of the route name, the waypoint's coordinates (6-decimal form), and
//! its index.  Same inputs, same name, on every run and platform.

use rg_core::{GeoPoint, stable_index};

use crate::catalog::{DESTINATION_STREET, ORIGIN_STREET, STREETS};

/// Select the street label for one waypoint.
///
/// The first waypoint is always the origin driveway and the last always the
/// destination parking area; everything between is drawn from the catalog.
/// Coordinates enter the key in their 6-decimal form, matching the rounding
/// applied to emitted waypoints.
pub fn name_street(
    route_name: &str,
    position: GeoPoint,
    index: usize,
    total: usize,
) -> &'static str {
    if index == 0 {
        return ORIGIN_STREET;
    }
    if index == total - 1 {
        return DESTINATION_STREET;
    }

    let key = format!(
        "{route_name}_{lat:.6}_{lon:.6}_{index}",
        lat = position.lat,
        lon = position.lon,
    );
    STREETS[stable_index(&key, STREETS.len())]
}
