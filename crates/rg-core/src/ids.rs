//! Strongly typed driver identifier.

use std::fmt;

/// Identifier of a driver in the routine configuration.
///
/// The inner integer is `pub` and appears verbatim as `driver_id` in the
/// JSON configuration; `serde(transparent)` keeps the wire format a bare
/// number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver {}", self.0)
    }
}
