//! `rg-config` — driver daily-routine configuration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`model`]    | `DailyRoutine`, `Location`, `RemoteLocation`, `Leg`    |
//! | [`identity`] | Route-identity normalization and formatting            |
//! | [`loader`]   | `load_routines`, `load_routines_reader`                |
//! | [`error`]    | `ConfigError`, `ConfigResult<T>`                       |
//!
//! # Leg model (summary)
//!
//! A driver's day is `[BASE, stop_1, ..., stop_k, BASE]`.  Each adjacent
//! pair becomes one [`Leg`](model::Leg) with a precomputed route identity:
//!
//! ```text
//! {driver}_{from}_to_{to}    (lowercase, spaces and hyphens → underscores)
//! ```
//!
//! Legs are independent of one another; the sink uses the identity as its
//! skip-if-exists key.

pub mod error;
pub mod identity;
pub mod loader;
pub mod model;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use identity::{normalize, route_identity, title_case};
pub use loader::{load_routines, load_routines_reader};
pub use model::{DailyRoutine, Leg, Location, RemoteLocation};
