//! Physical constants and the fixed world-to-pixel scale.
//!
//! Positions, velocities, and display radii everywhere else in the crate are
//! in scaled pixel units; masses and physical radii fed into surface-gravity
//! computations stay unscaled (SI).

/// Gravitational constant, SI units.
pub const G_CONST: f64 = 6.67408e-11;

/// 1 px = 100 000 km
pub const SCALE: f64 = 1e-5;

/// One astronomical unit, km.
pub const AU: f64 = 149_597_870.7;

/// One astronomical unit in scaled pixels.
pub const AU_SCALE: f64 = AU * SCALE;

/// Round to 6 decimal places. Display-only; physics state keeps full precision.
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
