//! # Harness Configuration
//!
//! Typed constants for the smoke test. The harness is deliberately not
//! configurable from outside the process: [`HarnessConfig::default`] is the
//! only configuration `main` ever uses. The structure exists so the pipeline
//! receives its parameters explicitly and tests can shrink them.

use crate::backend::InitFlags;

/// 8-bit opaque color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure red
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Pure cyan
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Window parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
}

impl WindowConfig {
    /// Client area size as `(width, height)`
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Test".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Renderer parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// Request hardware acceleration (not guaranteed by the driver)
    pub accelerated: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { accelerated: true }
    }
}

/// Complete harness configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Subsystems started by the library context
    pub init_flags: InitFlags,
    /// Window parameters
    pub window: WindowConfig,
    /// Renderer parameters
    pub renderer: RendererConfig,
    /// Color shown while the second counter is even
    pub first_color: Rgb,
    /// Color shown while the second counter is odd
    pub second_color: Rgb,
    /// Ticks that make up one counted second
    pub tick_interval_ms: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            init_flags: InitFlags::EVERYTHING,
            window: WindowConfig::default(),
            renderer: RendererConfig::default(),
            first_color: Rgb::RED,
            second_color: Rgb::CYAN,
            tick_interval_ms: 1000,
        }
    }
}
