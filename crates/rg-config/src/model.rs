//! Daily-routine configuration model and leg expansion.

use serde::Deserialize;

use rg_core::{DriverId, GeoPoint};

use crate::error::ConfigError;
use crate::identity::{normalize, route_identity, title_case};

/// Sentinel stop name for the driver's home base.
pub const BASE_STOP: &str = "BASE";

/// One driver's daily routine: a home base, a set of remote locations, and
/// the standard order in which they are visited.
#[derive(Clone, Debug, Deserialize)]
pub struct DailyRoutine {
    pub driver_id: DriverId,
    pub driver_name: String,
    pub base_location: Location,
    pub remote_locations: Vec<RemoteLocation>,
    pub standard_sequence: Vec<String>,
    /// Probability that a simulated day follows `standard_sequence` rather
    /// than a shuffled order.  Carried from the configuration schema; the
    /// one-shot generator always uses the standard order.
    #[serde(default = "default_sequence_probability")]
    pub sequence_probability: f64,
}

/// A named coordinate without an id (the base location).
#[derive(Clone, Debug, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
}

/// A remote location with the id used by `standard_sequence`.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteLocation {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
}

impl RemoteLocation {
    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// One directed hop between consecutive stops, fully resolved: endpoint
/// coordinates plus the precomputed route identity and description.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub driver: DriverId,
    /// The route identity, used as the sink's storage key.
    pub route_name: String,
    pub description: String,
    pub from_stop: String,
    pub to_stop: String,
    pub from: GeoPoint,
    pub to: GeoPoint,
}

impl DailyRoutine {
    /// Look up a remote location by its sequence id.
    pub fn remote(&self, id: &str) -> Option<&RemoteLocation> {
        self.remote_locations.iter().find(|loc| loc.id == id)
    }

    #[inline]
    pub fn base_point(&self) -> GeoPoint {
        GeoPoint::new(self.base_location.latitude, self.base_location.longitude)
    }

    /// Expand the daily visiting order into legs:
    /// `BASE → stop_1 → ... → stop_k → BASE` yields `k + 1` legs.
    ///
    /// Fails with [`ConfigError::UnknownStop`] if `standard_sequence` names
    /// an id with no matching remote location; no partial leg list is
    /// returned.
    pub fn legs(&self) -> Result<Vec<Leg>, ConfigError> {
        let mut stops: Vec<(&str, GeoPoint)> =
            Vec::with_capacity(self.standard_sequence.len() + 2);

        stops.push((BASE_STOP, self.base_point()));
        for id in &self.standard_sequence {
            let loc = self.remote(id).ok_or_else(|| ConfigError::UnknownStop {
                driver: self.driver_name.clone(),
                stop: id.clone(),
            })?;
            stops.push((loc.name.as_str(), loc.point()));
        }
        stops.push((BASE_STOP, self.base_point()));

        let legs = stops
            .windows(2)
            .map(|pair| {
                let (from_stop, from) = pair[0];
                let (to_stop, to) = pair[1];
                let route_name = route_identity(&self.driver_name, from_stop, to_stop);
                let description = format!(
                    "{}: {} → {}",
                    self.driver_name,
                    title_case(&normalize(from_stop)),
                    title_case(&normalize(to_stop)),
                );
                Leg {
                    driver: self.driver_id,
                    route_name,
                    description,
                    from_stop: from_stop.to_owned(),
                    to_stop: to_stop.to_owned(),
                    from,
                    to,
                }
            })
            .collect();

        Ok(legs)
    }
}

fn default_sequence_probability() -> f64 {
    0.9
}
