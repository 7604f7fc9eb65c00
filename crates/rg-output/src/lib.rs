//! `rg-output` — durable storage for generated route records.
//!
//! Routes are stored in a keyed sink; the key is the route identity and a
//! write is skipped when the key already exists, so regeneration never
//! rewrites or diverges from stored fixtures.
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`sink`]  | `RouteSink` trait, `WriteOutcome`          |
//! | [`store`] | `JsonFileStore` (one `{key}.json` per leg) |
//! | [`error`] | `StoreError`, `StoreResult<T>`             |

pub mod error;
pub mod sink;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use sink::{RouteSink, WriteOutcome};
pub use store::JsonFileStore;
