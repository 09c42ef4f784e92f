//! Harness entry point
//!
//! Acquires everything in pipeline order and lets scope exit release it.
//! Locals drop in reverse declaration order, so teardown is: second texture,
//! first texture, renderer, window, then library shutdown when the context
//! goes out of scope.

use std::io::Write;

use crate::backend::GraphicsBackend;
use crate::config::HarnessConfig;
use crate::context::LibraryContext;
use crate::error::{HarnessError, HarnessResult, TextureSlot};
use crate::render::{create_renderer, create_rgb_texture, create_window, FrameLoop, LoopReport};

/// Run the smoke test on `backend` until the user quits
///
/// Elapsed seconds are written to `out`, one per line. Any creation failure
/// ends the run with an error after releasing what was already acquired.
pub fn run<B: GraphicsBackend, W: Write>(
    backend: B,
    config: &HarnessConfig,
    out: &mut W,
) -> HarnessResult<LoopReport> {
    let context = LibraryContext::initialize(backend, config.init_flags);
    context.ensure_ready()?;

    let window = create_window(&context, &config.window)?;
    let renderer = create_renderer(&context, &window, config.renderer)?;

    let size = config.window.size();
    let first = create_rgb_texture(&context, &renderer, config.first_color, size)
        .map_err(|e| HarnessError::texture(TextureSlot::First, e))?;
    let second = create_rgb_texture(&context, &renderer, config.second_color, size)
        .map_err(|e| HarnessError::texture(TextureSlot::Second, e))?;

    let frame_loop = FrameLoop::new(&context, &renderer, &first, &second, config.tick_interval_ms);
    frame_loop.run(out)
}
