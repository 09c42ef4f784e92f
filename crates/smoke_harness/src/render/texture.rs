//! Solid-color texture factory
//!
//! A texture is staged through an intermediate surface: allocate, fill with one
//! pixel value, upload, free. The surface lives in an [`Owned`] guard so it is
//! freed whether the fill or the upload fails or succeeds.

use crate::backend::GraphicsBackend;
use crate::config::Rgb;
use crate::context::LibraryContext;
use crate::error::{HarnessError, HarnessResult};
use crate::render::renderer::RendererHandle;
use crate::resource::{Owned, Shared};

/// Shared, auto-releasing texture
pub type TextureHandle<'a, B> = Shared<'a, <B as GraphicsBackend>::Texture>;

/// Bits per pixel of the staging surface
pub const SURFACE_DEPTH: u32 = 32;

/// Create a texture of `width` × `height` filled with `color`
///
/// A returned handle is fully filled and ready to draw.
pub fn create_rgb_texture<'a, B: GraphicsBackend>(
    context: &'a LibraryContext<B>,
    renderer: &RendererHandle<'a, B>,
    color: Rgb,
    (width, height): (u32, u32),
) -> HarnessResult<TextureHandle<'a, B>> {
    let backend = context.ready_backend()?;

    let surface = backend
        .create_surface(width, height, SURFACE_DEPTH)
        .map_err(HarnessError::SurfaceCreation)?;
    let surface = Owned::new(surface, move |surface| backend.destroy_surface(surface));

    let pixel = backend.map_rgb(surface.raw(), color);
    backend
        .fill_surface(surface.raw(), pixel)
        .map_err(HarnessError::SurfaceFill)?;

    let converted = backend.create_texture_from_surface(renderer.raw(), surface.raw());
    drop(surface);
    let texture = converted.map_err(HarnessError::TextureCreation)?;
    log::debug!(
        "Created {}x{} texture {:?} filled with {:?}",
        width,
        height,
        texture,
        color
    );

    Ok(Shared::new(texture, move |texture| {
        log::debug!("Destroying texture {:?}", texture);
        backend.destroy_texture(texture);
    }))
}
