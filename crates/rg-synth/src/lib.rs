//! `rg-synth` — deterministic street-level route synthesis.
//!
//! Turns a pair of geographic endpoints into a plausible sequence of named
//! waypoints with road attributes.  Everything in this crate is a pure
//! function of its inputs: the same endpoints and route name produce a
//! byte-identical route on every run, which is what lets regeneration skip
//! legs whose output already exists.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`catalog`] | The fixed street-name catalog and endpoint labels       |
//! | [`namer`]   | `name_street` — hash-selected label per waypoint        |
//! | [`rules`]   | `TrafficControl`, `RoadAttributes`, the rule chain      |
//! | [`route`]   | `Waypoint`, `Route`, `interpolate`                      |

pub mod catalog;
pub mod namer;
pub mod route;
pub mod rules;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{DESTINATION_STREET, ORIGIN_STREET, STREETS};
pub use namer::name_street;
pub use route::{MAX_WAYPOINTS, MIN_WAYPOINTS, Route, Waypoint, interpolate};
pub use rules::{RoadAttributes, TrafficControl, classify};
