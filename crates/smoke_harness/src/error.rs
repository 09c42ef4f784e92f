//! Error taxonomy for the harness
//!
//! Every failure is terminal: there is no retry anywhere. The binary prints
//! the error's display form as a single line on standard error and exits with
//! [`HarnessError::exit_code`].

use std::fmt;
use thiserror::Error;

/// Which of the two solid-color textures failed to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    /// Texture shown on even seconds
    First,
    /// Texture shown on odd seconds
    Second,
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Harness errors
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Library startup failed
    #[error("Could not initialize {backend}: {reason}")]
    Init {
        /// Name of the backend that refused to start
        backend: &'static str,
        /// Backend-provided failure message
        reason: String,
    },

    /// A factory was called on a context whose startup failed
    #[error("Graphics library is not initialized")]
    NotInitialized,

    /// Window creation returned no resource
    #[error("Could not create window: {0}")]
    WindowCreation(String),

    /// Renderer creation returned no resource
    #[error("Could not create renderer: {0}")]
    RendererCreation(String),

    /// Intermediate surface allocation failed
    #[error("Could not allocate surface: {0}")]
    SurfaceCreation(String),

    /// Filling the intermediate surface failed
    #[error("Could not fill surface: {0}")]
    SurfaceFill(String),

    /// Converting the surface into a texture failed
    #[error("Could not convert surface to texture: {0}")]
    TextureCreation(String),

    /// One of the two display textures could not be built
    #[error("Could not create {slot} texture: {source}")]
    Texture {
        /// Which texture failed
        slot: TextureSlot,
        /// Underlying factory failure
        #[source]
        source: Box<HarnessError>,
    },

    /// Writing the second counter failed
    #[error("Could not write to standard output: {0}")]
    Output(#[from] std::io::Error),
}

impl HarnessError {
    /// Wrap a texture factory failure with the slot it was building
    pub fn texture(slot: TextureSlot, source: Self) -> Self {
        Self::Texture {
            slot,
            source: Box::new(source),
        }
    }

    /// Process exit status for this failure
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

/// Result alias used throughout the harness
pub type HarnessResult<T> = Result<T, HarnessError>;
