use anyhow::bail;
use itertools::iproduct;
use macroquad::color::{Color, BLACK, BLUE, YELLOW};
use macroquad::window::clear_background;
use ultraviolet::DVec2;

use crate::body::Body;
use crate::config::{FieldModeConfig, ScenarioConfig};
use crate::field::FieldSample;
use crate::units::AU_SCALE;

pub const GRID_PADDING: f64 = 20.0;
pub const GRID_SPACING: f64 = 20.0;

/// Which field derivation the samples run each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Every sample reads the first body only.
    Primary,
    /// Every sample blends the first two bodies.
    Blended,
}

/// The aggregate of bodies and field samples plus the step/render
/// orchestration for one frame.
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub bodies: Vec<Body>,
    pub samples: Vec<FieldSample>,
    pub mode: FieldMode,
    /// Latest pointer position reported by the host surface. Inert telemetry,
    /// read by nothing.
    pub pointer: Option<DVec2>,
}

/// Tile a padded grid over the canvas, row-major.
pub fn sample_grid(width: f64, height: f64, padding: f64, spacing: f64) -> Vec<FieldSample> {
    let cols = ((width - 2.0 * padding) / spacing) as usize;
    let rows = ((height - 2.0 * padding) / spacing) as usize;

    iproduct!(0..rows, 0..cols)
        .map(|(row, col)| {
            FieldSample::new(DVec2::new(
                padding + col as f64 * spacing,
                padding + row as f64 * spacing,
            ))
        })
        .collect()
}

impl Scene {
    pub fn new(
        width: f64,
        height: f64,
        bodies: Vec<Body>,
        mode: FieldMode,
        padding: f64,
        spacing: f64,
    ) -> Self {
        Self {
            width,
            height,
            bodies,
            samples: sample_grid(width, height, padding, spacing),
            mode,
            pointer: None,
        }
    }

    /// The built-in two-body configuration: a Sun-like and an Earth-like body
    /// one AU apart, blended field.
    pub fn sun_earth(width: f64, height: f64) -> Self {
        let bodies = vec![
            Body::new(
                DVec2::new(500.0, 300.0),
                1.989e30,
                6.96e8,
                DVec2::new(0.1, 0.0),
                YELLOW,
            ),
            Body::new(
                DVec2::new(500.0, 300.0 + AU_SCALE),
                5.972e24,
                6.378e6,
                DVec2::new(0.1, -1.07),
                BLUE,
            ),
        ];

        Self::new(width, height, bodies, FieldMode::Blended, GRID_PADDING, GRID_SPACING)
    }

    /// Map a loaded [`ScenarioConfig`] onto a runtime scene.
    pub fn from_config(cfg: ScenarioConfig, width: f64, height: f64) -> anyhow::Result<Self> {
        let mode = match cfg.field {
            FieldModeConfig::Primary => FieldMode::Primary,
            FieldModeConfig::Blended => FieldMode::Blended,
        };

        if cfg.bodies.is_empty() {
            bail!("scenario has no bodies");
        }
        if mode == FieldMode::Blended && cfg.bodies.len() < 2 {
            bail!("blended field mode needs two bodies");
        }

        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| {
                Body::new(
                    DVec2::new(bc.x[0], bc.x[1]),
                    bc.mass,
                    bc.radius,
                    DVec2::new(bc.v[0], bc.v[1]),
                    Color::from_rgba(bc.color[0], bc.color[1], bc.color[2], 255),
                )
            })
            .collect();

        Ok(Self::new(
            width,
            height,
            bodies,
            mode,
            cfg.grid.padding,
            cfg.grid.spacing,
        ))
    }

    /// Advance one frame: samples first (reading pre-step body state), then
    /// the bodies pairwise.
    ///
    /// Body updates are sequential in index order, each reading the others'
    /// latest stored state, so later bodies see earlier bodies' post-step
    /// positions within the same frame. The order dependency is deliberate.
    pub fn step(&mut self) {
        match self.mode {
            FieldMode::Primary => {
                for sample in &mut self.samples {
                    sample.update(&self.bodies[0]);
                }
            }
            FieldMode::Blended => {
                for sample in &mut self.samples {
                    sample.update_pair(&self.bodies[0], &self.bodies[1]);
                }
            }
        }

        for i in 0..self.bodies.len() {
            for j in 0..self.bodies.len() {
                if i == j {
                    continue;
                }
                let other = self.bodies[j].clone();
                self.bodies[i].integrate(&other);
            }
        }
    }

    /// Clear the surface, then draw bodies before field samples.
    pub fn render(&self) {
        clear_background(BLACK);

        for body in &self.bodies {
            body.render();
        }

        for sample in &self.samples {
            sample.render();
        }
    }

    pub fn track_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some(DVec2::new(x, y));
    }
}
