use macroquad::color::Color;
use macroquad::logging::info;
use macroquad::shapes::draw_circle;
use ultraviolet::DVec2;

use crate::units::{round6, G_CONST, SCALE};

/// Display-radius tier boundary: bodies with a physical radius under this get
/// a gentler rescale so they stay visible next to star-sized neighbors.
const RADIUS_TIER: f64 = 10_000_000.0;

/// One massive, roughly spherical object.
///
/// Position and velocity are in scaled pixel units and mutate every step;
/// `radius` and `surface_g` are derived once at construction and frozen.
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Unscaled physical mass (kg), used by the field-sample computation.
    pub true_mass: f64,
    /// Display radius, px.
    pub radius: f64,
    /// Surface gravitational acceleration, `G * true_mass / physical_radius^2`,
    /// from the raw (unscaled) constructor arguments.
    pub surface_g: f64,
    pub color: Color,
}

impl Body {
    /// `pos`/`vel` are already in scaled pixel units (caller's responsibility);
    /// `mass` (kg) and `physical_radius` (m) are raw physical quantities.
    pub fn new(pos: DVec2, mass: f64, physical_radius: f64, vel: DVec2, color: Color) -> Self {
        let radius = if physical_radius < RADIUS_TIER {
            physical_radius * SCALE / 25.0
        } else {
            physical_radius * SCALE / 1000.0
        };

        let body = Self {
            pos,
            vel,
            true_mass: mass,
            radius,
            surface_g: G_CONST * mass / (physical_radius * physical_radius),
            color,
        };

        info!("mass: {}", body.display_mass());
        info!("radius: {}", body.display_radius());
        info!("g: {}", body.display_surface_g());

        body
    }

    /// Scaled mass for display/debug only; never feeds back into physics.
    pub fn display_mass(&self) -> f64 {
        round6(self.true_mass * SCALE)
    }

    pub fn display_radius(&self) -> f64 {
        round6(self.radius)
    }

    pub fn display_surface_g(&self) -> f64 {
        round6(self.surface_g)
    }

    /// One explicit-Euler step (dt = 1 frame) toward `other`.
    ///
    /// The acceleration magnitude is `other.surface_g / distance^2`, with the
    /// frozen surface-gravity constant standing in for `G * mass`. Coincident
    /// bodies divide by zero and the resulting inf/NaN propagates silently.
    pub fn integrate(&mut self, other: &Body) {
        let displacement = other.pos - self.pos;
        let distance = displacement.mag();
        let inv_distance = 1.0 / distance;
        let inv_distance_squared = inv_distance * inv_distance;

        let acceleration =
            displacement * inv_distance * (other.surface_g * inv_distance_squared);

        self.vel += acceleration;
        self.pos += self.vel;
    }

    pub fn render(&self) {
        draw_circle(
            self.pos.x as f32,
            self.pos.y as f32,
            self.radius as f32,
            self.color,
        );
    }
}
