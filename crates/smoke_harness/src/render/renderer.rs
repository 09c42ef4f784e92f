//! Renderer factory

use crate::backend::GraphicsBackend;
use crate::config::RendererConfig;
use crate::context::LibraryContext;
use crate::error::{HarnessError, HarnessResult};
use crate::render::window::WindowHandle;
use crate::resource::Shared;

/// Shared, auto-releasing renderer
pub type RendererHandle<'a, B> = Shared<'a, <B as GraphicsBackend>::Renderer>;

/// Create a renderer for `window` with the platform-default driver
///
/// The window handle is only read during creation: the returned renderer does
/// not keep it alive.
pub fn create_renderer<'a, B: GraphicsBackend>(
    context: &'a LibraryContext<B>,
    window: &WindowHandle<'a, B>,
    config: RendererConfig,
) -> HarnessResult<RendererHandle<'a, B>> {
    let backend = context.ready_backend()?;
    let renderer = backend
        .create_renderer(window.raw(), config.accelerated)
        .map_err(HarnessError::RendererCreation)?;
    log::debug!(
        "Created renderer {:?} for window {:?} (accelerated: {})",
        renderer,
        window.raw(),
        config.accelerated
    );

    Ok(Shared::new(renderer, move |renderer| {
        log::debug!("Destroying renderer {:?}", renderer);
        backend.destroy_renderer(renderer);
    }))
}
