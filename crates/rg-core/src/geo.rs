//! Geographic coordinate type and route-length estimate.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Emitted waypoints are rounded
//! to 6 decimal places (~0.1 m), which is finer than `f32` can represent
//! reliably at metro scale, so the fixture pipeline stays in double
//! precision end to end.

/// A WGS-84 geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both axes rounded to 6 decimal places.
    #[inline]
    pub fn round6(self) -> Self {
        Self {
            lat: round6(self.lat),
            lon: round6(self.lon),
        }
    }

    /// Flat-earth route-length estimate in miles: `(|Δlat| + |Δlon|) * 69`.
    ///
    /// One degree is taken as 69 miles on both axes.  Not geodesic; the
    /// estimate only sizes synthetic routes and never feeds navigation.
    pub fn grid_miles(self, other: GeoPoint) -> f64 {
        ((other.lat - self.lat).abs() + (other.lon - self.lon).abs()) * 69.0
    }

    /// Linear interpolation between `self` and `other` at `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Round a single value to 6 decimal places (half away from zero).
#[inline]
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
