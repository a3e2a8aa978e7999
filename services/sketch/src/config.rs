//! Sketch configuration.
//!
//! A sketch is described by a YAML (or JSON) file: output surface, sampling
//! grid, noise parameters, contour levels and stroke style. Files are
//! validated on load so the render loop never sees a bad value.

use std::fs;
use std::path::{Path, PathBuf};

use isoband::{
    bands_from_thresholds, generate_levels, level_count, Band, ClipBox, GridSize, IsobandError,
    OutputSize, MAX_LEVELS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest octave count the fractal noise accepts.
pub const MAX_OCTAVES: usize = 32;

/// RGBA colour.
pub type Rgba = [u8; 4];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("Invalid levels: {0}")]
    Levels(#[from] IsobandError),
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    pub output: OutputConfig,
    pub grid: GridConfig,
    pub noise: NoiseConfig,
    pub levels: LevelsConfig,
    #[serde(default)]
    pub smoothing_passes: u32,
    /// Distance kept clear along every edge of the output.
    #[serde(default)]
    pub clip_margin: f64,
    pub stroke: StrokeConfig,
    /// Number of frames rendered by `sketch frames`.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub seed: u32,
    pub frequency: f64,
    #[serde(default = "default_octaves")]
    pub octaves: usize,
    /// Position along the time axis of the first frame.
    #[serde(default)]
    pub time_offset: f64,
    /// Time advance between consecutive frames.
    #[serde(default = "default_time_step")]
    pub time_step: f64,
}

/// Contour levels, either listed or generated from a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelsConfig {
    Thresholds { thresholds: Vec<f64> },
    Interval { min: f64, max: f64, interval: f64 },
}

impl LevelsConfig {
    pub fn thresholds(&self) -> Vec<f64> {
        match self {
            LevelsConfig::Thresholds { thresholds } => thresholds.clone(),
            LevelsConfig::Interval { min, max, interval } => {
                generate_levels(*min, *max, *interval)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeConfig {
    pub line_width: f32,
    /// Hex colours cycled over the bands in order.
    pub colors: Vec<String>,
}

fn default_frames() -> u32 {
    1
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_octaves() -> usize {
    4
}

fn default_time_step() -> f64 {
    0.01
}

impl SketchConfig {
    /// Load and validate a config file. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        let config: SketchConfig = parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.width == 0 || self.output.height == 0 {
            return Err(ConfigError::invalid("output", "width and height must be positive"));
        }
        if self.grid.width < 2 || self.grid.height < 2 {
            return Err(ConfigError::invalid("grid", "need at least 2x2 samples"));
        }
        if !(self.noise.frequency.is_finite() && self.noise.frequency > 0.0) {
            return Err(ConfigError::invalid("noise.frequency", "must be positive"));
        }
        if self.noise.octaves == 0 || self.noise.octaves > MAX_OCTAVES {
            return Err(ConfigError::invalid(
                "noise.octaves",
                format!("must be between 1 and {}", MAX_OCTAVES),
            ));
        }
        if !self.noise.time_offset.is_finite() || !self.noise.time_step.is_finite() {
            return Err(ConfigError::invalid("noise", "time values must be finite"));
        }
        if !(self.clip_margin.is_finite() && self.clip_margin >= 0.0) {
            return Err(ConfigError::invalid("clip_margin", "must be zero or positive"));
        }
        if !(self.stroke.line_width.is_finite() && self.stroke.line_width > 0.0) {
            return Err(ConfigError::invalid("stroke.line_width", "must be positive"));
        }
        if self.frames == 0 {
            return Err(ConfigError::invalid("frames", "must be at least 1"));
        }

        if let LevelsConfig::Interval { min, max, interval } = self.levels {
            let count = level_count(min, max, interval);
            if count > MAX_LEVELS {
                return Err(ConfigError::invalid(
                    "levels",
                    format!(
                        "interval {} gives {} levels, at most {}",
                        interval, count, MAX_LEVELS
                    ),
                ));
            }
        }

        self.bands()?;
        self.palette()?;
        self.background()?;
        Ok(())
    }

    pub fn bands(&self) -> Result<Vec<Band>, ConfigError> {
        Ok(bands_from_thresholds(&self.levels.thresholds())?)
    }

    pub fn palette(&self) -> Result<Vec<Rgba>, ConfigError> {
        if self.stroke.colors.is_empty() {
            return Err(ConfigError::invalid("stroke.colors", "need at least one colour"));
        }
        self.stroke
            .colors
            .iter()
            .map(|c| {
                parse_color(c).ok_or_else(|| {
                    ConfigError::invalid("stroke.colors", format!("bad colour {:?}", c))
                })
            })
            .collect()
    }

    pub fn background(&self) -> Result<Rgba, ConfigError> {
        parse_color(&self.output.background).ok_or_else(|| {
            ConfigError::invalid(
                "output.background",
                format!("bad colour {:?}", self.output.background),
            )
        })
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.grid.width, self.grid.height)
    }

    pub fn output_size(&self) -> OutputSize {
        OutputSize::new(self.output.width as f64, self.output.height as f64)
    }

    /// The output surface shrunk by the clip margin.
    pub fn viewport(&self) -> ClipBox {
        ClipBox::from_size(self.output_size()).inset(self.clip_margin)
    }

    /// Noise time coordinate of frame `index`.
    pub fn frame_time(&self, index: u32) -> f64 {
        self.noise.time_offset + index as f64 * self.noise.time_step
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}
