//! Window factory

use crate::backend::GraphicsBackend;
use crate::config::WindowConfig;
use crate::context::LibraryContext;
use crate::error::{HarnessError, HarnessResult};
use crate::resource::Shared;

/// Shared, auto-releasing window
pub type WindowHandle<'a, B> = Shared<'a, <B as GraphicsBackend>::Window>;

/// Create a centered, visible window
///
/// The returned handle destroys the window exactly once, when its last clone
/// drops. On failure nothing was created and nothing will be released.
pub fn create_window<'a, B: GraphicsBackend>(
    context: &'a LibraryContext<B>,
    config: &WindowConfig,
) -> HarnessResult<WindowHandle<'a, B>> {
    let backend = context.ready_backend()?;
    let window = backend
        .create_window(config)
        .map_err(HarnessError::WindowCreation)?;
    log::debug!(
        "Created window {:?} \"{}\" {}x{}",
        window,
        config.title,
        config.width,
        config.height
    );

    Ok(Shared::new(window, move |window| {
        log::debug!("Destroying window {:?}", window);
        backend.destroy_window(window);
    }))
}
