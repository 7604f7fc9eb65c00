//! JSON configuration loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "daily_routines": [
//!     {
//!       "driver_id": 1,
//!       "driver_name": "Jane Smith",
//!       "base_location": { "name": "Home", "latitude": 34.19, "longitude": -84.13 },
//!       "remote_locations": [
//!         { "id": "gym", "name": "North Gym", "latitude": 34.22, "longitude": -84.10 }
//!       ],
//!       "standard_sequence": ["gym"],
//!       "sequence_probability": 0.9
//!     }
//!   ]
//! }
//! ```
//!
//! `description` fields on locations and `sequence_probability` are
//! optional; everything else is required.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::DailyRoutine;

#[derive(Deserialize)]
struct RoutineFile {
    daily_routines: Vec<DailyRoutine>,
}

/// Load daily routines from a JSON file.
pub fn load_routines(path: &Path) -> Result<Vec<DailyRoutine>, ConfigError> {
    let file = std::fs::File::open(path).map_err(ConfigError::Io)?;
    load_routines_reader(std::io::BufReader::new(file))
}

/// Like [`load_routines`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_routines_reader<R: Read>(reader: R) -> Result<Vec<DailyRoutine>, ConfigError> {
    let parsed: RoutineFile = serde_json::from_reader(reader)?;
    log::debug!("parsed {} daily routines", parsed.daily_routines.len());
    Ok(parsed.daily_routines)
}
