//! # Smoke Harness
//!
//! Backend-agnostic core of a windowing/rendering smoke test. It initializes a
//! graphics library, opens a window, creates a renderer and two solid-color
//! textures, then alternates them once per second until the window is closed.
//!
//! ## Resource Lifetime
//!
//! Every native resource is wrapped at creation time together with the
//! operation that releases it:
//!
//! - **Shared handles**: [`resource::Shared`] releases its resource exactly once,
//!   when the last clone is dropped
//! - **Scoped guards**: [`resource::Owned`] releases a scratch resource on every
//!   exit path of the function that created it
//! - **Context-bound**: handles borrow the [`LibraryContext`], so nothing can
//!   outlive library shutdown
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smoke_harness::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     smoke_harness::foundation::logging::init();
//!     let stdout = std::io::stdout();
//!     match smoke_harness::run(MyBackend::default(), &HarnessConfig::default(), &mut stdout.lock()) {
//!         Ok(_) => std::process::ExitCode::SUCCESS,
//!         Err(e) => {
//!             eprintln!("{e}");
//!             std::process::ExitCode::from(e.exit_code())
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod foundation;
pub mod render;
pub mod resource;

mod harness;

#[cfg(test)]
mod tests;

pub use context::LibraryContext;
pub use error::{HarnessError, HarnessResult};
pub use harness::run;

/// Common imports for harness users
pub mod prelude {
    pub use crate::{
        backend::{Event, GraphicsBackend, InitFlags},
        config::{HarnessConfig, RendererConfig, Rgb, WindowConfig},
        context::LibraryContext,
        error::{HarnessError, HarnessResult, TextureSlot},
        render::{
            create_renderer, create_rgb_texture, create_window, FrameLoop, LoopReport,
            LoopState, RendererHandle, TextureHandle, WindowHandle,
        },
        resource::{Owned, Shared},
    };
}
