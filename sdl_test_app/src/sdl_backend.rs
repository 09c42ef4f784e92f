//! SDL2 implementation of the graphics backend
//!
//! Talks to the C API through `sdl2::sys` so every resource is a bare pointer
//! whose release is driven by the harness ownership wrappers, not by the
//! `sdl2` crate's own RAII types.

use std::ffi::{CStr, CString};
use std::mem::MaybeUninit;
use std::os::raw::c_int;
use std::ptr::{self, NonNull};

use sdl2::sys;
use smoke_harness::backend::{BackendResult, Event, GraphicsBackend, InitFlags};
use smoke_harness::config::{Rgb, WindowConfig};

/// Stateless handle to the process-wide SDL library
#[derive(Debug, Default, Clone, Copy)]
pub struct SdlBackend;

/// Current SDL error message
fn last_error() -> String {
    // SAFETY: SDL_GetError always returns a valid NUL-terminated string
    unsafe { CStr::from_ptr(sys::SDL_GetError()) }
        .to_string_lossy()
        .into_owned()
}

fn non_null<T>(raw: *mut T) -> BackendResult<NonNull<T>> {
    NonNull::new(raw).ok_or_else(last_error)
}

fn to_c_int(value: u32) -> BackendResult<c_int> {
    c_int::try_from(value).map_err(|_| format!("dimension {value} out of range"))
}

fn subsystem_bits(flags: InitFlags) -> u32 {
    [
        (InitFlags::TIMER, sys::SDL_INIT_TIMER),
        (InitFlags::AUDIO, sys::SDL_INIT_AUDIO),
        (InitFlags::VIDEO, sys::SDL_INIT_VIDEO),
        (InitFlags::JOYSTICK, sys::SDL_INIT_JOYSTICK),
        (InitFlags::HAPTIC, sys::SDL_INIT_HAPTIC),
        (InitFlags::GAME_CONTROLLER, sys::SDL_INIT_GAMECONTROLLER),
        (InitFlags::EVENTS, sys::SDL_INIT_EVENTS),
        (InitFlags::SENSOR, sys::SDL_INIT_SENSOR),
    ]
    .into_iter()
    .filter(|(flag, _)| flags.contains(*flag))
    .fold(0, |bits, (_, sdl)| bits | sdl)
}

impl GraphicsBackend for SdlBackend {
    const NAME: &'static str = "SDL";

    type Window = NonNull<sys::SDL_Window>;
    type Renderer = NonNull<sys::SDL_Renderer>;
    type Surface = NonNull<sys::SDL_Surface>;
    type Texture = NonNull<sys::SDL_Texture>;

    fn init(&self, flags: InitFlags) -> BackendResult<()> {
        if unsafe { sys::SDL_Init(subsystem_bits(flags)) } == 0 {
            Ok(())
        } else {
            Err(last_error())
        }
    }

    fn quit(&self) {
        unsafe { sys::SDL_Quit() };
    }

    fn create_window(&self, config: &WindowConfig) -> BackendResult<Self::Window> {
        let title = CString::new(config.title.as_str()).map_err(|e| e.to_string())?;
        let centered = sys::SDL_WINDOWPOS_CENTERED_MASK as c_int;
        let raw = unsafe {
            sys::SDL_CreateWindow(
                title.as_ptr(),
                centered,
                centered,
                to_c_int(config.width)?,
                to_c_int(config.height)?,
                sys::SDL_WindowFlags::SDL_WINDOW_SHOWN as u32,
            )
        };
        non_null(raw)
    }

    fn destroy_window(&self, window: Self::Window) {
        unsafe { sys::SDL_DestroyWindow(window.as_ptr()) };
    }

    fn create_renderer(&self, window: Self::Window, accelerated: bool) -> BackendResult<Self::Renderer> {
        let flags = if accelerated {
            sys::SDL_RendererFlags::SDL_RENDERER_ACCELERATED as u32
        } else {
            0
        };
        // -1 picks the first driver supporting the flags
        non_null(unsafe { sys::SDL_CreateRenderer(window.as_ptr(), -1, flags) })
    }

    fn destroy_renderer(&self, renderer: Self::Renderer) {
        unsafe { sys::SDL_DestroyRenderer(renderer.as_ptr()) };
    }

    fn create_surface(&self, width: u32, height: u32, depth: u32) -> BackendResult<Self::Surface> {
        let raw = unsafe {
            sys::SDL_CreateRGBSurface(
                0,
                to_c_int(width)?,
                to_c_int(height)?,
                to_c_int(depth)?,
                0,
                0,
                0,
                0,
            )
        };
        non_null(raw)
    }

    fn map_rgb(&self, surface: Self::Surface, color: Rgb) -> u32 {
        // SAFETY: surface is live for the duration of the call and owns its format
        unsafe { sys::SDL_MapRGB((*surface.as_ptr()).format, color.r, color.g, color.b) }
    }

    fn fill_surface(&self, surface: Self::Surface, pixel: u32) -> BackendResult<()> {
        if unsafe { sys::SDL_FillRect(surface.as_ptr(), ptr::null(), pixel) } == 0 {
            Ok(())
        } else {
            Err(last_error())
        }
    }

    fn destroy_surface(&self, surface: Self::Surface) {
        unsafe { sys::SDL_FreeSurface(surface.as_ptr()) };
    }

    fn create_texture_from_surface(
        &self,
        renderer: Self::Renderer,
        surface: Self::Surface,
    ) -> BackendResult<Self::Texture> {
        non_null(unsafe { sys::SDL_CreateTextureFromSurface(renderer.as_ptr(), surface.as_ptr()) })
    }

    fn destroy_texture(&self, texture: Self::Texture) {
        unsafe { sys::SDL_DestroyTexture(texture.as_ptr()) };
    }

    fn clear(&self, renderer: Self::Renderer) {
        if unsafe { sys::SDL_RenderClear(renderer.as_ptr()) } != 0 {
            log::trace!("SDL_RenderClear failed: {}", last_error());
        }
    }

    fn copy(&self, renderer: Self::Renderer, texture: Self::Texture) {
        let status = unsafe {
            sys::SDL_RenderCopy(renderer.as_ptr(), texture.as_ptr(), ptr::null(), ptr::null())
        };
        if status != 0 {
            log::trace!("SDL_RenderCopy failed: {}", last_error());
        }
    }

    fn present(&self, renderer: Self::Renderer) {
        unsafe { sys::SDL_RenderPresent(renderer.as_ptr()) };
    }

    fn poll_event(&self) -> Option<Event> {
        let mut raw = MaybeUninit::<sys::SDL_Event>::uninit();
        if unsafe { sys::SDL_PollEvent(raw.as_mut_ptr()) } == 0 {
            return None;
        }
        // SAFETY: SDL_PollEvent filled the event and every variant starts with `type_`
        let kind = unsafe { raw.assume_init().type_ };
        if kind == sys::SDL_EventType::SDL_QUIT as u32 {
            Some(Event::Quit)
        } else {
            Some(Event::Other)
        }
    }

    fn ticks(&self) -> u32 {
        unsafe { sys::SDL_GetTicks() }
    }
}
