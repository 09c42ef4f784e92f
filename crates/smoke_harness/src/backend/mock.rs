//! Counting fake backend for tests
//!
//! Live resources sit in a generational arena, so a release of an unknown or
//! already-released key is detected instead of silently succeeding. Failures,
//! quit timing and tick advancement are scripted with builder methods. Clones
//! share state, which lets a test keep a probe while the harness owns the
//! backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use super::{BackendResult, Event, GraphicsBackend, InitFlags};
use crate::config::{Rgb, WindowConfig};

new_key_type! {
    /// Generation-checked id of a fake resource
    pub(crate) struct MockKey;
}

/// Resource category tracked by the fake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Kind {
    Window,
    Renderer,
    Surface,
    Texture,
}

/// Journal entry for every state-changing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Init(InitFlags),
    Quit,
    Create(Kind, MockKey),
    Destroy(Kind, MockKey),
    Fill(MockKey, u32),
    Clear(MockKey),
    CopyTexture(MockKey, MockKey),
    Present(MockKey),
}

#[derive(Default)]
struct Script {
    fail_init: bool,
    fail_window: bool,
    fail_renderer: bool,
    fail_surface: bool,
    fail_fill: bool,
    fail_texture_on: Option<usize>,
    quit_on_poll: Option<usize>,
    pending_events: usize,
    tick_step: u32,
}

#[derive(Default)]
struct MockState {
    script: Script,
    initialized: bool,
    live: SlotMap<MockKey, Kind>,
    created: HashMap<Kind, usize>,
    destroyed: HashMap<Kind, usize>,
    invalid_releases: usize,
    invalid_uses: usize,
    calls: Vec<Call>,
    polls: usize,
    texture_attempts: usize,
    quits: usize,
    now: u32,
}

impl MockState {
    fn create(&mut self, kind: Kind) -> BackendResult<MockKey> {
        if !self.initialized {
            return Err("library not initialized".to_string());
        }
        let key = self.live.insert(kind);
        *self.created.entry(kind).or_default() += 1;
        self.calls.push(Call::Create(kind, key));
        Ok(key)
    }

    fn destroy(&mut self, kind: Kind, key: MockKey) {
        match self.live.remove(key) {
            Some(found) if found == kind => {
                *self.destroyed.entry(kind).or_default() += 1;
                self.calls.push(Call::Destroy(kind, key));
            }
            _ => self.invalid_releases += 1,
        }
    }

    fn is_live(&self, kind: Kind, key: MockKey) -> bool {
        self.live.get(key) == Some(&kind)
    }

    fn check_use(&mut self, kind: Kind, key: MockKey) -> bool {
        let live = self.is_live(kind, key);
        if !live {
            self.invalid_uses += 1;
        }
        live
    }
}

/// Fake graphics library with shared, inspectable state
#[derive(Clone, Default)]
pub(crate) struct MockBackend {
    state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().script.tick_step = 16;
        backend
    }

    pub(crate) fn fail_init(self) -> Self {
        self.state.borrow_mut().script.fail_init = true;
        self
    }

    pub(crate) fn fail_window(self) -> Self {
        self.state.borrow_mut().script.fail_window = true;
        self
    }

    pub(crate) fn fail_renderer(self) -> Self {
        self.state.borrow_mut().script.fail_renderer = true;
        self
    }

    pub(crate) fn fail_surface(self) -> Self {
        self.state.borrow_mut().script.fail_surface = true;
        self
    }

    pub(crate) fn fail_fill(self) -> Self {
        self.state.borrow_mut().script.fail_fill = true;
        self
    }

    /// Fail the n-th (1-based) surface-to-texture conversion
    pub(crate) fn fail_texture_on(self, attempt: usize) -> Self {
        self.state.borrow_mut().script.fail_texture_on = Some(attempt);
        self
    }

    /// Deliver a quit event on the n-th (1-based) poll
    pub(crate) fn quit_on_poll(self, poll: usize) -> Self {
        self.state.borrow_mut().script.quit_on_poll = Some(poll);
        self
    }

    /// Deliver `count` unrelated events on the first polls
    pub(crate) fn with_pending_events(self, count: usize) -> Self {
        self.state.borrow_mut().script.pending_events = count;
        self
    }

    /// Advance the tick counter by `step` after every read
    pub(crate) fn with_tick_step(self, step: u32) -> Self {
        self.state.borrow_mut().script.tick_step = step;
        self
    }

    pub(crate) fn with_start_ticks(self, start: u32) -> Self {
        self.state.borrow_mut().now = start;
        self
    }

    pub(crate) fn created(&self, kind: Kind) -> usize {
        self.state.borrow().created.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn destroyed(&self, kind: Kind) -> usize {
        self.state.borrow().destroyed.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn live(&self, kind: Kind) -> usize {
        self.state.borrow().live.values().filter(|k| **k == kind).count()
    }

    pub(crate) fn invalid_releases(&self) -> usize {
        self.state.borrow().invalid_releases
    }

    pub(crate) fn invalid_uses(&self) -> usize {
        self.state.borrow().invalid_uses
    }

    pub(crate) fn quit_count(&self) -> usize {
        self.state.borrow().quits
    }

    pub(crate) fn texture_attempts(&self) -> usize {
        self.state.borrow().texture_attempts
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Textures copied to the target, in draw order
    pub(crate) fn copies(&self) -> Vec<MockKey> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::CopyTexture(_, texture) => Some(*texture),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn presents(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Present(_)))
            .count()
    }

    pub(crate) fn clears(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Clear(_)))
            .count()
    }

    /// Every creation has exactly one matching release and nothing was misused
    pub(crate) fn is_balanced(&self) -> bool {
        let state = self.state.borrow();
        state.live.is_empty()
            && state.invalid_releases == 0
            && state.invalid_uses == 0
            && state.created == state.destroyed
    }
}

impl GraphicsBackend for MockBackend {
    const NAME: &'static str = "mock";

    type Window = MockKey;
    type Renderer = MockKey;
    type Surface = MockKey;
    type Texture = MockKey;

    fn init(&self, flags: InitFlags) -> BackendResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Init(flags));
        if state.script.fail_init {
            return Err("mock init failure".to_string());
        }
        state.initialized = true;
        Ok(())
    }

    fn quit(&self) {
        let mut state = self.state.borrow_mut();
        state.quits += 1;
        state.initialized = false;
        state.calls.push(Call::Quit);
    }

    fn create_window(&self, config: &WindowConfig) -> BackendResult<MockKey> {
        let mut state = self.state.borrow_mut();
        if state.script.fail_window {
            return Err(format!("mock window failure ({}x{})", config.width, config.height));
        }
        state.create(Kind::Window)
    }

    fn destroy_window(&self, window: MockKey) {
        self.state.borrow_mut().destroy(Kind::Window, window);
    }

    fn create_renderer(&self, window: MockKey, _accelerated: bool) -> BackendResult<MockKey> {
        let mut state = self.state.borrow_mut();
        if !state.check_use(Kind::Window, window) {
            return Err("invalid window".to_string());
        }
        if state.script.fail_renderer {
            return Err("mock renderer failure".to_string());
        }
        state.create(Kind::Renderer)
    }

    fn destroy_renderer(&self, renderer: MockKey) {
        self.state.borrow_mut().destroy(Kind::Renderer, renderer);
    }

    fn create_surface(&self, _width: u32, _height: u32, _depth: u32) -> BackendResult<MockKey> {
        let mut state = self.state.borrow_mut();
        if state.script.fail_surface {
            return Err("mock surface failure".to_string());
        }
        state.create(Kind::Surface)
    }

    fn map_rgb(&self, _surface: MockKey, color: Rgb) -> u32 {
        (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b)
    }

    fn fill_surface(&self, surface: MockKey, pixel: u32) -> BackendResult<()> {
        let mut state = self.state.borrow_mut();
        if !state.check_use(Kind::Surface, surface) {
            return Err("invalid surface".to_string());
        }
        if state.script.fail_fill {
            return Err("mock fill failure".to_string());
        }
        state.calls.push(Call::Fill(surface, pixel));
        Ok(())
    }

    fn destroy_surface(&self, surface: MockKey) {
        self.state.borrow_mut().destroy(Kind::Surface, surface);
    }

    fn create_texture_from_surface(
        &self,
        renderer: MockKey,
        surface: MockKey,
    ) -> BackendResult<MockKey> {
        let mut state = self.state.borrow_mut();
        state.texture_attempts += 1;
        if !state.check_use(Kind::Renderer, renderer) || !state.check_use(Kind::Surface, surface) {
            return Err("invalid renderer or surface".to_string());
        }
        if state.script.fail_texture_on == Some(state.texture_attempts) {
            return Err("mock texture failure".to_string());
        }
        state.create(Kind::Texture)
    }

    fn destroy_texture(&self, texture: MockKey) {
        self.state.borrow_mut().destroy(Kind::Texture, texture);
    }

    fn clear(&self, renderer: MockKey) {
        let mut state = self.state.borrow_mut();
        state.check_use(Kind::Renderer, renderer);
        state.calls.push(Call::Clear(renderer));
    }

    fn copy(&self, renderer: MockKey, texture: MockKey) {
        let mut state = self.state.borrow_mut();
        state.check_use(Kind::Renderer, renderer);
        state.check_use(Kind::Texture, texture);
        state.calls.push(Call::CopyTexture(renderer, texture));
    }

    fn present(&self, renderer: MockKey) {
        let mut state = self.state.borrow_mut();
        state.check_use(Kind::Renderer, renderer);
        state.calls.push(Call::Present(renderer));
    }

    fn poll_event(&self) -> Option<Event> {
        let mut state = self.state.borrow_mut();
        state.polls += 1;
        if state.polls <= state.script.pending_events {
            Some(Event::Other)
        } else if state.script.quit_on_poll == Some(state.polls) {
            Some(Event::Quit)
        } else {
            None
        }
    }

    fn ticks(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        state.now = now.wrapping_add(state.script.tick_step);
        now
    }
}
