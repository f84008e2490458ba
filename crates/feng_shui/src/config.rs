use crate::{
    constants::{
        DEFAULT_PIECE_COUNT, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, ENV_SEED, MAX_PIECE_COUNT,
    },
    error::{FengShuiError, Result},
    layout::{Bounds, Point},
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

/// Main settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub container: ContainerConfig,
}

/// Room size and how it gets furnished
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default = "default_piece_count")]
    pub piece_count: usize,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Fixed RNG seed for a reproducible room
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Where the room sits on the page; drops arrive in page coordinates
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContainerConfig {
    #[serde(default)]
    pub origin_x: f64,
    #[serde(default)]
    pub origin_y: f64,
}

fn default_piece_count() -> usize {
    DEFAULT_PIECE_COUNT
}
fn default_width() -> f64 {
    DEFAULT_ROOM_WIDTH
}
fn default_height() -> f64 {
    DEFAULT_ROOM_HEIGHT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            piece_count: DEFAULT_PIECE_COUNT,
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            seed: None,
        }
    }
}

impl Config {
    /// Load settings from a TOML file and validate them
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FengShuiError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            FengShuiError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Fill the seed from `FENG_SHUI_SEED` when none is configured
    pub fn apply_env(&mut self) -> Result<()> {
        if self.layout.seed.is_some() {
            return Ok(());
        }
        if let Ok(raw) = env::var(ENV_SEED)
            && !raw.trim().is_empty()
        {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                FengShuiError::Config(format!("{ENV_SEED} must be an unsigned integer: {e}"))
            })?;
            self.layout.seed = Some(seed);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !(layout.width.is_finite() && layout.width > 0.0) {
            return Err(FengShuiError::Config(format!(
                "width must be a positive number, got {}",
                layout.width
            )));
        }
        if !(layout.height.is_finite() && layout.height > 0.0) {
            return Err(FengShuiError::Config(format!(
                "height must be a positive number, got {}",
                layout.height
            )));
        }
        if layout.piece_count > MAX_PIECE_COUNT {
            return Err(FengShuiError::Config(format!(
                "piece_count must be at most {}, got {}",
                MAX_PIECE_COUNT, layout.piece_count
            )));
        }
        if !(self.container.origin_x.is_finite() && self.container.origin_y.is_finite()) {
            return Err(FengShuiError::Config(
                "container origin must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.layout.width, self.layout.height)
    }

    pub fn container_origin(&self) -> Point {
        Point::new(self.container.origin_x, self.container.origin_y)
    }
}
