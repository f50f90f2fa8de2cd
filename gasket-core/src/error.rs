//! Configuration-time errors for gasket generation.
//!
//! Generation itself never fails once a scene is accepted: every variant here
//! is raised while validating a configuration, before any triangle is emitted.

use std::path::PathBuf;

/// All errors produced by gasket-core.
#[derive(thiserror::Error, Debug)]
pub enum GasketError {
    #[error("subdivision depth {depth} exceeds the supported maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette color {index} has a component outside [0, 1]: ({r}, {g}, {b})")]
    ColorOutOfRange { index: usize, r: f32, g: f32, b: f32 },

    #[error("rotation speed must be finite, got {speed}")]
    InvalidRotationSpeed { speed: f32 },

    #[error("start angle must be finite, got {angle}")]
    InvalidStartAngle { angle: f32 },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GasketError>;
