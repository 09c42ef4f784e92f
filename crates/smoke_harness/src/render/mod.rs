//! Rendering pipeline
//!
//! Factories for the three resource kinds and the frame loop that consumes
//! them. Data flows one way: window → renderer → textures → frame loop.
//!
//! # Module Organization
//!
//! - **`window`**: window factory
//! - **`renderer`**: renderer factory
//! - **`texture`**: solid-color texture factory
//! - **`frame_loop`**: the poll/count/draw state machine

pub mod frame_loop;
pub mod renderer;
pub mod texture;
pub mod window;

pub use frame_loop::{select_texture, FrameLoop, LoopReport, LoopState};
pub use renderer::{create_renderer, RendererHandle};
pub use texture::{create_rgb_texture, TextureHandle, SURFACE_DEPTH};
pub use window::{create_window, WindowHandle};
