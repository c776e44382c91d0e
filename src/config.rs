//! YAML-facing scenario description.
//!
//! A scenario file names the field mode, the grid tiling, and each body's
//! initial state:
//!
//! ```yaml
//! grid:
//!   padding: 20.0
//!   spacing: 20.0
//!
//! field: blended        # or: primary
//!
//! bodies:
//!   - x: [500.0, 300.0]     # scaled px
//!     v: [0.1, 0.0]         # scaled px per frame
//!     mass: 1.989e30        # kg, unscaled
//!     radius: 6.96e8        # m, unscaled
//!     color: [253, 249, 0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Which field derivation the scenario runs.
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum FieldModeConfig {
    #[serde(rename = "primary")] // every sample reads the first body only
    Primary,

    #[serde(rename = "blended")] // every sample blends the first two bodies
    Blended,
}

/// Field-sample grid tiling. Spacing constants double as the default.
#[derive(Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub padding: f64,
    pub spacing: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            padding: crate::scene::GRID_PADDING,
            spacing: crate::scene::GRID_SPACING,
        }
    }
}

/// A single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],   // initial position, scaled px
    pub v: [f64; 2],   // initial velocity, scaled px per frame
    pub mass: f64,     // physical mass, kg
    pub radius: f64,   // physical radius, m
    pub color: [u8; 3],
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub grid: GridConfig,
    pub field: FieldModeConfig,
    pub bodies: Vec<BodyConfig>,
}

pub fn load_scenario(path: &Path) -> anyhow::Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(cfg)
}
