//! The `RouteSink` trait implemented by route stores.

use rg_synth::Route;

use crate::StoreResult;

/// What `write_if_absent` did with a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// A keyed store of route records.
///
/// Keys are route identities; storage is append-only.  Existing records are
/// never modified, which keeps previously generated fixtures stable across
/// regeneration runs.
pub trait RouteSink {
    /// Whether a record with this key already exists.
    fn contains(&self, key: &str) -> bool;

    /// Store a record under `key`, in full or not at all.
    fn write(&mut self, key: &str, route: &Route) -> StoreResult<()>;

    /// Store a record unless the key already exists.
    fn write_if_absent(&mut self, key: &str, route: &Route) -> StoreResult<WriteOutcome> {
        if self.contains(key) {
            return Ok(WriteOutcome::Skipped);
        }
        self.write(key, route)?;
        Ok(WriteOutcome::Written)
    }
}
