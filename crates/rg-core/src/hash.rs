//! Stable string hashing for deterministic fixture synthesis.
//!
//! # Determinism strategy
//!
//! Street selection and positional jitter must yield the same value for the
//! same key on every run and every platform: regeneration skips output that
//! already exists, and a hash that drifted between runs would make fresh
//! legs disagree with stored ones.
//!
//! `FxHasher` is seedless and well distributed, and it consumes the key as
//! UTF-8 bytes, so the result depends only on the key text.  The standard
//! library's `DefaultHasher` (SipHash) is randomly keyed per process and
//! would break the contract.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Hash a key to a stable, well-distributed 64-bit value.
pub fn stable_hash(key: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

/// Map a key onto an index in `0..len`.
///
/// `len` must be non-zero; callers index fixed non-empty catalogs.
#[inline]
pub fn stable_index(key: &str, len: usize) -> usize {
    (stable_hash(key) % len as u64) as usize
}

/// Map a key onto a symmetric unit offset in `[-0.5, 0.5)`.
///
/// The key is reduced to one of 1000 evenly spaced steps; callers scale the
/// result to the physical range they need.
#[inline]
pub fn unit_offset(key: &str) -> f64 {
    ((stable_hash(key) % 1000) as f64 - 500.0) / 1000.0
}
