//! # Backend Module
//!
//! The capability surface the harness consumes from a windowing/rendering
//! library. The library itself is opaque: the harness only sees raw handle
//! values and the primitives that create, use and release them.
//!
//! ## Contract
//!
//! - **Creation** returns the raw handle or the library's error message. A
//!   failed creation owns nothing and must never be released.
//! - **Release** is called exactly once per successful creation, by the
//!   ownership wrappers in [`crate::resource`], never by harness code directly.
//! - **Drawing** calls are fire-and-forget; their failures are not reported.
//!
//! Implementations are single-threaded and use `&self` throughout; a backend
//! that needs bookkeeping keeps it behind interior mutability.

use std::fmt;

use crate::config::{Rgb, WindowConfig};

#[cfg(test)]
pub(crate) mod mock;

bitflags::bitflags! {
    /// Library subsystems to start during initialization
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InitFlags: u32 {
        /// Timer subsystem
        const TIMER = 1 << 0;
        /// Audio subsystem
        const AUDIO = 1 << 1;
        /// Video subsystem (implies events)
        const VIDEO = 1 << 2;
        /// Joystick subsystem
        const JOYSTICK = 1 << 3;
        /// Haptic feedback subsystem
        const HAPTIC = 1 << 4;
        /// Game controller subsystem
        const GAME_CONTROLLER = 1 << 5;
        /// Event subsystem
        const EVENTS = 1 << 6;
        /// Sensor subsystem
        const SENSOR = 1 << 7;
        /// Every subsystem
        const EVERYTHING = Self::TIMER.bits()
            | Self::AUDIO.bits()
            | Self::VIDEO.bits()
            | Self::JOYSTICK.bits()
            | Self::HAPTIC.bits()
            | Self::GAME_CONTROLLER.bits()
            | Self::EVENTS.bits()
            | Self::SENSOR.bits();
    }
}

/// Input event as seen by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the application
    Quit,
    /// Any other event; drained and ignored
    Other,
}

/// Result of a backend creation primitive, carrying the library's message on failure
pub type BackendResult<T> = Result<T, String>;

/// Opaque windowing/rendering library
///
/// Raw handle types are plain `Copy` values (pointers, ids). Ownership of the
/// underlying resource is expressed by the wrapper that holds the value, not by
/// the value itself.
pub trait GraphicsBackend {
    /// Human-readable library name used in error messages
    const NAME: &'static str;

    /// Native window
    type Window: Copy + fmt::Debug;
    /// Native renderer bound to a window
    type Renderer: Copy + fmt::Debug;
    /// CPU-side pixel buffer used to stage fills
    type Surface: Copy + fmt::Debug;
    /// Renderer-owned image
    type Texture: Copy + fmt::Debug;

    /// Start the requested subsystems
    fn init(&self, flags: InitFlags) -> BackendResult<()>;

    /// Shut the library down; only called after a successful [`init`](Self::init)
    fn quit(&self);

    /// Create a centered, visible window
    fn create_window(&self, config: &WindowConfig) -> BackendResult<Self::Window>;

    /// Destroy a window
    fn destroy_window(&self, window: Self::Window);

    /// Create a renderer for `window` using the default driver
    fn create_renderer(
        &self,
        window: Self::Window,
        accelerated: bool,
    ) -> BackendResult<Self::Renderer>;

    /// Destroy a renderer
    fn destroy_renderer(&self, renderer: Self::Renderer);

    /// Allocate a surface with the default channel layout
    fn create_surface(&self, width: u32, height: u32, depth: u32) -> BackendResult<Self::Surface>;

    /// Encode a color in the surface's native pixel format
    fn map_rgb(&self, surface: Self::Surface, color: Rgb) -> u32;

    /// Fill the entire surface with an encoded pixel
    fn fill_surface(&self, surface: Self::Surface, pixel: u32) -> BackendResult<()>;

    /// Free a surface
    fn destroy_surface(&self, surface: Self::Surface);

    /// Upload a surface into a renderer-owned texture
    fn create_texture_from_surface(
        &self,
        renderer: Self::Renderer,
        surface: Self::Surface,
    ) -> BackendResult<Self::Texture>;

    /// Destroy a texture
    fn destroy_texture(&self, texture: Self::Texture);

    /// Clear the render target to the default clear color
    fn clear(&self, renderer: Self::Renderer);

    /// Copy a texture over the entire render target
    fn copy(&self, renderer: Self::Renderer, texture: Self::Texture);

    /// Make the back buffer visible
    fn present(&self, renderer: Self::Renderer);

    /// Return the next pending event without blocking
    fn poll_event(&self) -> Option<Event>;

    /// Monotonic milliseconds since initialization; wraps around at `u32::MAX`
    fn ticks(&self) -> u32;
}
