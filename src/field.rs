use macroquad::color::Color;
use macroquad::shapes::draw_line;
use ultraviolet::DVec2;

use crate::body::Body;
use crate::units::G_CONST;

/// Local field strength is capped here to avoid singular blow-up near a body
/// surface.
pub const FIELD_CAP: f64 = 100_000.0;

/// Upper clamp on glyph length; also the fixed length of angle-only glyphs.
pub const MAX_GLYPH_LEN: f64 = 10.0;

// Distance ramp endpoints for the blended color derivation.
const COLOR_MIN_DISTANCE: f64 = 50.0;
const COLOR_MAX_DISTANCE: f64 = 500.0;

/// One fixed grid point, rendered as a short oriented line segment.
///
/// The position never moves after construction; angle, length, and color are
/// recomputed wholesale each step from the current body state.
#[derive(Debug, Clone)]
pub struct FieldSample {
    pub pos: DVec2,
    pub angle: f64,
    pub length: f64,
    // Nominally 0-255 but deliberately unclamped; a distance ratio outside
    // [0, 1] yields out-of-range channels.
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl FieldSample {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            length: 0.0,
            red: 255.0,
            green: 255.0,
            blue: 255.0,
        }
    }

    /// Single-attractor update: angle and glyph length from one body's field.
    ///
    /// The atan2 recombination of the scaled sine/cosine components is a
    /// residual of a multi-source weighting scheme; with one source it
    /// collapses back to the bearing.
    pub fn update(&mut self, body: &Body) {
        let displacement = body.pos - self.pos;
        let distance = displacement.mag();
        let bearing = displacement.y.atan2(displacement.x);
        let g = (G_CONST * body.true_mass / (distance * distance)).min(FIELD_CAP);

        self.angle = (g * distance * bearing.sin() * 100.0)
            .atan2(g * distance * bearing.cos() * 100.0);
        self.length = (g / FIELD_CAP).min(MAX_GLYPH_LEN);
    }

    /// Blended two-body update: direction from both bodies' contributions,
    /// color from the combined distance.
    ///
    /// Each contribution is `surface_g * distance` (a linear proxy, not
    /// inverse-square) with the second body weighted x100; both values are
    /// visually tuned.
    pub fn update_pair(&mut self, first: &Body, second: &Body) {
        let d1 = first.pos - self.pos;
        let distance1 = d1.mag();
        let bearing1 = d1.y.atan2(d1.x);

        let d2 = second.pos - self.pos;
        let distance2 = d2.mag();
        let bearing2 = d2.y.atan2(d2.x);

        let sines = first.surface_g * distance1 * bearing1.sin()
            + second.surface_g * distance2 * bearing2.sin() * 100.0;
        let cosines = first.surface_g * distance1 * bearing1.cos()
            + second.surface_g * distance2 * bearing2.cos() * 100.0;

        self.angle = sines.atan2(cosines);
        // This variant carries no field magnitude; glyphs draw at full length.
        self.length = MAX_GLYPH_LEN;

        let ratio = (distance1 + distance2 - 2.0 * COLOR_MIN_DISTANCE)
            / (COLOR_MAX_DISTANCE - COLOR_MIN_DISTANCE);

        self.red = 255.0 * (1.0 - ratio);
        self.green = 255.0 * ratio * (1.0 - ratio);
        self.blue = 255.0 * ratio;
    }

    /// Points the glyph along the mean of the bearings to two other samples.
    pub fn align_between(&mut self, a: &FieldSample, b: &FieldSample) {
        let d1 = a.pos - self.pos;
        let d2 = b.pos - self.pos;
        let bearing1 = d1.y.atan2(d1.x);
        let bearing2 = d2.y.atan2(d2.x);

        self.angle = (bearing1 + bearing2) / 2.0;
    }

    pub fn render(&self) {
        let tip = self.pos + DVec2::new(self.angle.cos(), self.angle.sin()) * self.length;

        draw_line(
            self.pos.x as f32,
            self.pos.y as f32,
            tip.x as f32,
            tip.y as f32,
            1.0,
            Color::new(
                (self.red / 255.0) as f32,
                (self.green / 255.0) as f32,
                (self.blue / 255.0) as f32,
                1.0,
            ),
        );
    }
}
