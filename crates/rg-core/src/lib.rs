//! `rg-core` — foundational types for the `routegen` fixture generator.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `rustc-hash`
//! and `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, grid-distance estimate, 6-dp rounding |
//! | [`hash`]  | Stable string hashing for deterministic synthesis |
//! | [`ids`]   | `DriverId`                                        |

pub mod geo;
pub mod hash;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, round6};
pub use hash::{stable_hash, stable_index, unit_offset};
pub use ids::DriverId;
