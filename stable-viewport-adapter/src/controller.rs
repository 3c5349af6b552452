use stable_viewport::{
    DecisionStore, ProbeBackend, Stabilizer, StabilizerOptions, StyleSink,
};

/// A framework-neutral controller that wraps a `stable_viewport::Stabilizer`
/// and manages the common adapter workflow.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - the `on_*` event forwarders when the corresponding host events occur
/// - `tick(now_ms)` each frame/timer tick (for debounce deadlines)
///
/// The host should keep its real event listeners attached while
/// [`Controller::is_attached`] is true and remove them once it flips false:
/// the engine decided the workaround is not needed on this browser, or
/// [`Controller::cleanup`] ran. `tick` returns the next pending deadline so
/// hosts with timer APIs can sleep instead of polling.
#[derive(Debug)]
pub struct Controller {
    s: Stabilizer,
}

impl Controller {
    pub fn new(
        probe: impl ProbeBackend + 'static,
        style: impl StyleSink + 'static,
        store: impl DecisionStore + 'static,
        options: StabilizerOptions,
    ) -> Self {
        Self {
            s: Stabilizer::new(probe, style, store, options),
        }
    }

    pub fn from_stabilizer(s: Stabilizer) -> Self {
        Self { s }
    }

    pub fn stabilizer(&self) -> &Stabilizer {
        &self.s
    }

    pub fn stabilizer_mut(&mut self) -> &mut Stabilizer {
        &mut self.s
    }

    pub fn into_stabilizer(self) -> Stabilizer {
        self.s
    }

    /// Puts the engine on duty. Returns whether listeners should be
    /// attached (a persisted "not needed" decision detaches immediately).
    pub fn init(&mut self) -> bool {
        self.s.init();
        self.s.is_active()
    }

    /// Whether the host should keep its event listeners attached.
    pub fn is_attached(&self) -> bool {
        self.s.is_active()
    }

    pub fn on_load(&mut self, width: u32, now_ms: u64) {
        self.s.on_load(width, now_ms);
    }

    pub fn on_scroll(&mut self, now_ms: u64) {
        self.s.on_scroll(now_ms);
    }

    pub fn on_touch_start(&mut self) {
        self.s.on_touch_start();
    }

    pub fn on_touch_move(&mut self) {
        self.s.on_touch_move();
    }

    pub fn on_touch_end(&mut self, now_ms: u64) {
        self.s.on_touch_end(now_ms);
    }

    pub fn on_resize(&mut self, width: u32, now_ms: u64) {
        self.s.on_resize(width, now_ms);
    }

    pub fn on_orientation_change(&mut self, width: u32, now_ms: u64) {
        self.s.on_orientation_change(width, now_ms);
    }

    /// Advances the engine's deadlines.
    ///
    /// Returns the next pending deadline, if any, so the host can schedule
    /// its next wakeup rather than ticking every frame.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.s.tick(now_ms);
        self.s.next_deadline_ms()
    }

    pub fn refresh_dimensions(&mut self, force: bool, now_ms: u64) {
        self.s.refresh_dimensions(force, now_ms);
    }

    pub fn cleanup(&mut self) {
        self.s.cleanup();
    }
}
