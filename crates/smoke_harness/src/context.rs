//! Library context
//!
//! Owns the backend and the one-time startup/shutdown pair. Creating the
//! context starts the library; dropping it shuts the library down, but only if
//! startup succeeded. Every resource handle borrows the context, so all of them
//! are released before shutdown runs.

use crate::backend::{GraphicsBackend, InitFlags};
use crate::error::{HarnessError, HarnessResult};

/// Scoped ownership of the graphics library's global state
pub struct LibraryContext<B: GraphicsBackend> {
    backend: B,
    loaded: bool,
    init_error: Option<String>,
}

impl<B: GraphicsBackend> LibraryContext<B> {
    /// Start the requested subsystems
    ///
    /// Startup failure does not fail construction: it is reported through
    /// [`is_ready`](Self::is_ready) and the caller decides whether to abort.
    pub fn initialize(backend: B, flags: InitFlags) -> Self {
        log::info!("Initializing {} ({:?})", B::NAME, flags);

        match backend.init(flags) {
            Ok(()) => Self {
                backend,
                loaded: true,
                init_error: None,
            },
            Err(reason) => {
                log::debug!("{} startup failed: {}", B::NAME, reason);
                Self {
                    backend,
                    loaded: false,
                    init_error: Some(reason),
                }
            }
        }
    }

    /// Whether startup succeeded
    pub const fn is_ready(&self) -> bool {
        self.loaded
    }

    /// Backend message explaining a failed startup
    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    /// Turn a failed startup into the error reported to the user
    pub fn ensure_ready(&self) -> HarnessResult<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(HarnessError::Init {
                backend: B::NAME,
                reason: self.init_error.clone().unwrap_or_default(),
            })
        }
    }

    /// Backend access for code that already holds resources from this context
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Backend access for factories; refuses to hand out a library that never started
    pub(crate) fn ready_backend(&self) -> HarnessResult<&B> {
        if self.loaded {
            Ok(&self.backend)
        } else {
            Err(HarnessError::NotInitialized)
        }
    }
}

impl<B: GraphicsBackend> Drop for LibraryContext<B> {
    fn drop(&mut self) {
        if self.loaded {
            log::debug!("Shutting down {}", B::NAME);
            self.backend.quit();
        }
    }
}
