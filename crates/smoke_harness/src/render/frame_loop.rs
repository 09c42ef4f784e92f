//! Frame loop
//!
//! Two-state machine: `Running` until a quit event is seen, then `Quit`.
//! Each running iteration drains events, updates the second counter, and draws
//! one frame showing the texture picked by the counter's parity.

use std::io::Write;

use crate::backend::{Event, GraphicsBackend};
use crate::context::LibraryContext;
use crate::error::HarnessResult;
use crate::foundation::time::{FrameStats, SecondCounter};
use crate::render::renderer::RendererHandle;
use crate::render::texture::TextureHandle;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Polling and drawing
    Running,
    /// A quit event was observed; terminal
    Quit,
}

/// Summary returned when the loop ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopReport {
    /// Frames cleared, drawn and presented
    pub frames_presented: u64,
    /// Seconds reported on the output
    pub seconds_elapsed: u32,
    /// Average presentation rate
    pub average_fps: f32,
}

/// Pick the texture for the current second: even shows `first`, odd shows `second`
pub const fn select_texture<'t, T>(seconds: u32, first: &'t T, second: &'t T) -> &'t T {
    if seconds % 2 == 0 {
        first
    } else {
        second
    }
}

/// Poll/count/draw loop over borrowed resources
///
/// The loop only reads the renderer and textures; it never releases them.
pub struct FrameLoop<'r, 'a, B: GraphicsBackend> {
    context: &'a LibraryContext<B>,
    renderer: &'r RendererHandle<'a, B>,
    textures: [&'r TextureHandle<'a, B>; 2],
    counter: SecondCounter,
    stats: FrameStats,
    state: LoopState,
}

impl<'r, 'a, B: GraphicsBackend> FrameLoop<'r, 'a, B> {
    /// Prepare a loop; the tick mark is taken now
    pub fn new(
        context: &'a LibraryContext<B>,
        renderer: &'r RendererHandle<'a, B>,
        first: &'r TextureHandle<'a, B>,
        second: &'r TextureHandle<'a, B>,
        tick_interval_ms: u32,
    ) -> Self {
        let start = context.backend().ticks();
        Self {
            context,
            renderer,
            textures: [first, second],
            counter: SecondCounter::new(start, tick_interval_ms),
            stats: FrameStats::new(start),
            state: LoopState::Running,
        }
    }

    /// Current state
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Seconds counted so far
    pub const fn seconds(&self) -> u32 {
        self.counter.seconds()
    }

    /// Run one iteration, writing any elapsed second to `out`
    ///
    /// Once a quit event has been drained the iteration stops without counting
    /// or drawing, and every later call is a no-op.
    pub fn step<W: Write>(&mut self, out: &mut W) -> HarnessResult<LoopState> {
        if self.state == LoopState::Quit {
            return Ok(self.state);
        }

        let backend = self.context.backend();
        while let Some(event) = backend.poll_event() {
            if event == Event::Quit {
                log::debug!("Quit event received");
                self.state = LoopState::Quit;
            }
        }
        if self.state == LoopState::Quit {
            return Ok(self.state);
        }

        let now = backend.ticks();
        if let Some(second) = self.counter.advance(now) {
            log::trace!("Second {} elapsed at tick {}", second, now);
            writeln!(out, "{second}")?;
        }

        let renderer = self.renderer.raw();
        let [first, second] = self.textures;
        let texture = select_texture(self.counter.seconds(), first, second);

        backend.clear(renderer);
        backend.copy(renderer, texture.raw());
        backend.present(renderer);
        self.stats.record_frame(now);

        Ok(self.state)
    }

    /// Iterate until a quit event arrives
    pub fn run<W: Write>(mut self, out: &mut W) -> HarnessResult<LoopReport> {
        log::info!("Entering frame loop");
        while self.step(out)? == LoopState::Running {}

        let report = LoopReport {
            frames_presented: self.stats.frame_count(),
            seconds_elapsed: self.counter.seconds(),
            average_fps: self.stats.average_fps(),
        };
        log::info!(
            "Frame loop finished: {} frames over {} s ({:.1} fps)",
            report.frames_presented,
            report.seconds_elapsed,
            report.average_fps
        );
        Ok(report)
    }
}
