pub mod body;
pub mod config;
pub mod field;
pub mod scene;
pub mod units;

pub use body::Body;
pub use config::{load_scenario, BodyConfig, FieldModeConfig, GridConfig, ScenarioConfig};
pub use field::{FieldSample, FIELD_CAP, MAX_GLYPH_LEN};
pub use scene::{sample_grid, FieldMode, Scene, GRID_PADDING, GRID_SPACING};
pub use units::{round6, AU, AU_SCALE, G_CONST, SCALE};
