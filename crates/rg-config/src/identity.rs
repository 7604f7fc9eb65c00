//! Route-identity normalization.
//!
//! The identity doubles as the sink's storage key, so it must be a pure
//! function of (driver, from-stop, to-stop): regeneration recomputes it and
//! skips keys that already exist.

/// Lowercase a display name and replace spaces and hyphens with
/// underscores.  `"BASE"` normalizes to `"base"` like any other name.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// The storage key for one leg: `{driver}_{from}_to_{to}`, all parts
/// normalized.
pub fn route_identity(driver_name: &str, from_stop: &str, to_stop: &str) -> String {
    format!(
        "{}_{}_to_{}",
        normalize(driver_name),
        normalize(from_stop),
        normalize(to_stop),
    )
}

/// Capitalize the letter following each non-alphabetic boundary of a
/// normalized token: `"gym_a"` → `"Gym_A"`.  Used for leg descriptions.
pub fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut boundary = true;
    for c in token.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}
