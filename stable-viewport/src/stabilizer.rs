use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use core::cell::Cell;

use crate::debounce::Debounce;
use crate::detector::{DecisionStore, Detector};
use crate::interaction::Interaction;
use crate::options::StabilizerOptions;
use crate::probe::{MeasureMethod, Probe, ProbeBackend};
use crate::state::{DetectionState, InteractionState, PublishedHeights, StabilizerState};
use crate::types::{PropertyName, UnitKind};

/// Receives custom-property writes for the document root.
///
/// Values arrive preformatted: pixel strings such as `"812px"` during normal
/// operation, or literal unit expressions such as `"1lvh"` on teardown
/// (reverting consumers to native unit behavior).
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// A headless viewport-height stabilization engine.
///
/// This type is intentionally host-agnostic:
/// - It does not hold any DOM objects.
/// - Your adapter drives it by forwarding raw gesture/resize events stamped
///   with a monotonic millisecond clock, and by calling [`Self::tick`]
///   periodically (each frame, or at [`Self::next_deadline_ms`]).
/// - Measurements, style writes, and persistence go through the
///   [`ProbeBackend`], [`StyleSink`], and [`DecisionStore`] seams.
///
/// The engine classifies interaction (scrolling / touching /
/// touch-scrolling) from the raw events, measures the rendered large/small
/// viewport heights, and publishes them as pixel values under custom style
/// properties. While a gesture is in flight only "gains space" updates are
/// published (lvh may grow, svh may shrink), so layout never visibly jumps
/// mid-scroll. A bounded sampling loop decides once per browser whether any
/// of this is needed; a negative decision is persisted and the engine
/// removes itself from duty.
///
/// For turnkey wiring (attach/detach semantics, simulation doubles), see
/// the `stable-viewport-adapter` crate.
pub struct Stabilizer {
    options: StabilizerOptions,
    probe: Probe,
    style: Box<dyn StyleSink>,
    store: Box<dyn DecisionStore>,

    fvh: f64,
    lvh: f64,
    svh: f64,
    current_width: u32,

    interaction: Interaction,
    detector: Detector,
    resize_settle: Debounce,

    active: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Stabilizer {
    /// Creates an inert engine. Call [`Self::init`] to put it on duty.
    pub fn new(
        probe: impl ProbeBackend + 'static,
        style: impl StyleSink + 'static,
        store: impl DecisionStore + 'static,
        options: StabilizerOptions,
    ) -> Self {
        let interaction = Interaction::new(
            options.scroll_end_delay_ms,
            options.touch_scroll_end_delay_ms,
        );
        let detector = Detector::new(options.max_detections);
        svdebug!(
            max_detections = options.max_detections,
            resize_settle_delay_ms = options.resize_settle_delay_ms,
            "Stabilizer::new"
        );
        Self {
            probe: Probe::new(probe),
            style: Box::new(style),
            store: Box::new(store),
            fvh: 0.0,
            lvh: 0.0,
            svh: 0.0,
            current_width: 0,
            interaction,
            detector,
            resize_settle: Debounce::new(),
            active: false,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &StabilizerOptions {
        &self.options
    }

    /// Whether the engine is on duty. `false` after [`Self::cleanup`] or a
    /// "not needed" decision; adapters detach their listeners then.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn published(&self) -> PublishedHeights {
        PublishedHeights {
            fvh: self.fvh,
            lvh: self.lvh,
            svh: self.svh,
        }
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction.snapshot()
    }

    pub fn detection(&self) -> DetectionState {
        self.detector.snapshot()
    }

    /// Accumulated lvh detection samples (introspection/debugging).
    pub fn lvh_samples(&self) -> &[f64] {
        self.detector.lvh_samples()
    }

    /// Accumulated svh detection samples (introspection/debugging).
    pub fn svh_samples(&self) -> &[f64] {
        self.detector.svh_samples()
    }

    pub fn current_width(&self) -> u32 {
        self.current_width
    }

    /// Returns a combined read-only snapshot.
    pub fn state(&self) -> StabilizerState {
        StabilizerState {
            interaction: self.interaction.snapshot(),
            detection: self.detector.snapshot(),
            published: self.published(),
            current_width: self.current_width,
            active: self.active,
        }
    }

    /// The earliest pending deadline, if any. Hosts can use this to
    /// schedule their next [`Self::tick`] wakeup instead of polling.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match (
            self.interaction.next_deadline_ms(),
            self.resize_settle.deadline_ms(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Stabilizer, InteractionState) + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Renames the published custom property for `kind`.
    ///
    /// Invalid names fall back to that unit's built-in default. The rename
    /// takes effect from the next publish.
    pub fn set_custom_property(&mut self, kind: UnitKind, name: &str) {
        let name = PropertyName::sanitize(kind, name);
        self.options.set_property_name(kind, name);
        self.notify();
    }

    /// Puts the engine on duty and applies any persisted necessity
    /// decision. A stored "not needed" tears the engine straight back
    /// down. Calling `init` on an already-active engine is a no-op.
    pub fn init(&mut self) {
        if self.active {
            return;
        }
        svdebug!("init");
        self.active = true;
        self.batch_update(|s| {
            if let Some(needed) = s.detector.load_decision(s.store.as_mut()) {
                if !needed {
                    s.teardown();
                }
            }
            s.notify();
        });
    }

    /// Removes the engine from duty: cancels every pending deadline,
    /// reverts the published properties to literal unit values, and ignores
    /// all further event intake. Idempotent; safe to call before `init`.
    pub fn cleanup(&mut self) {
        svdebug!("cleanup");
        self.batch_update(|s| s.teardown());
    }

    /// Initial page load: captures the starting width, forces a publish,
    /// and seeds the detector with one sample pair.
    pub fn on_load(&mut self, width: u32, now_ms: u64) {
        if !self.active {
            return;
        }
        svdebug!(width, now_ms, "on_load");
        self.batch_update(|s| {
            s.current_width = width;
            s.refresh_dimensions(true, now_ms);
            s.detector.seed(&mut s.probe);
            s.notify();
        });
    }

    /// A scroll frame arrived.
    pub fn on_scroll(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        svtrace!(now_ms, "on_scroll");
        self.batch_update(|s| {
            s.interaction.on_scroll(now_ms);
            s.notify();
        });
    }

    /// A touch began.
    pub fn on_touch_start(&mut self) {
        if !self.active {
            return;
        }
        svtrace!("on_touch_start");
        self.batch_update(|s| {
            s.interaction.on_touch_start();
            s.notify();
        });
    }

    /// A touch moved. Handled like [`Self::on_touch_start`]: it re-affirms
    /// the touch when a `touchstart` was missed or arrived late.
    pub fn on_touch_move(&mut self) {
        if !self.active {
            return;
        }
        svtrace!("on_touch_move");
        self.batch_update(|s| {
            s.interaction.on_touch_move();
            s.notify();
        });
    }

    /// The touch lifted.
    pub fn on_touch_end(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        svtrace!(now_ms, "on_touch_end");
        self.batch_update(|s| {
            if s.interaction.on_touch_end(now_ms) {
                s.sample_detector();
            }
            s.notify();
        });
    }

    /// The viewport resized.
    ///
    /// A width-preserving resize is the browser chrome animating during a
    /// scroll ("unintentional") and only earns a debounced, safety-filtered
    /// publish. A width-changing resize is a rotation or a real window
    /// resize ("intentional") and forces an immediate unconditional one.
    pub fn on_resize(&mut self, width: u32, now_ms: u64) {
        if !self.active {
            return;
        }
        svtrace!(width, now_ms, "on_resize");
        self.batch_update(|s| {
            if width != s.current_width {
                s.current_width = width;
                s.refresh_dimensions(true, now_ms);
            } else {
                s.refresh_dimensions(false, now_ms);
            }
        });
    }

    /// Orientation changed: always treated as intentional.
    pub fn on_orientation_change(&mut self, width: u32, now_ms: u64) {
        if !self.active {
            return;
        }
        svtrace!(width, now_ms, "on_orientation_change");
        self.batch_update(|s| {
            s.current_width = width;
            s.refresh_dimensions(true, now_ms);
        });
    }

    /// Advances debounce deadlines. Call periodically while any deadline is
    /// pending (see [`Self::next_deadline_ms`]).
    pub fn tick(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.batch_update(|s| {
            let fired = s.interaction.tick(now_ms);
            if fired.scroll_ended {
                s.sample_detector();
            }
            if s.resize_settle.fire(now_ms) {
                s.update_published(false);
            }
            if fired.scroll_ended || fired.touch_scroll_ended {
                s.notify();
            }
        });
    }

    /// Debounced publish entry point.
    ///
    /// A forced refresh publishes synchronously and, while detection is
    /// still running, restarts the sampling window. A non-forced refresh
    /// settles behind a debounce so resize storms coalesce into one safe
    /// publish; forcing also cancels any such pending refresh so a stale
    /// conflicting write cannot arrive later.
    pub fn refresh_dimensions(&mut self, force: bool, now_ms: u64) {
        self.batch_update(|s| {
            s.resize_settle.cancel();
            if force {
                if !s.detector.is_complete() {
                    s.detector.reset_samples();
                }
                s.update_published(true);
            } else {
                s.resize_settle.arm(now_ms, s.options.resize_settle_delay_ms);
            }
        });
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.interaction.snapshot());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn sample_detector(&mut self) {
        if let Some(needed) = self.detector.sample(&mut self.probe, self.store.as_mut()) {
            if !needed {
                self.teardown();
            }
        }
    }

    /// Measures and publishes per the current interaction state.
    fn update_published(&mut self, force: bool) {
        let new_fvh = self
            .probe
            .measure(UnitKind::Fvh.css_expr(), MeasureMethod::Computed, false);
        let new_lvh = self
            .probe
            .measure(UnitKind::Lvh.css_expr(), MeasureMethod::Computed, false);
        let new_svh = self
            .probe
            .measure(UnitKind::Svh.css_expr(), MeasureMethod::Computed, false);

        if force {
            self.publish(UnitKind::Lvh, new_lvh);
            self.publish(UnitKind::Svh, new_svh);
            self.publish(UnitKind::Fvh, new_fvh);
            return;
        }

        if self.interaction.any_active() {
            self.sample_detector();
            if !self.active {
                // The sample finalized a "not needed" decision and tore the
                // engine down; the properties now hold literal unit values.
                return;
            }
            // A gesture is in flight: the chrome may be mid-animation.
            // Publish only changes that move in the "gains space"
            // direction, so layout never visibly jumps. lvh may only grow
            // (chrome hiding), svh may only shrink (chrome showing).
            if new_lvh > self.lvh {
                self.publish(UnitKind::Lvh, new_lvh);
            }
            if self.svh == 0.0 || new_svh < self.svh {
                self.publish(UnitKind::Svh, new_svh);
            }
            return;
        }

        // Idle: no jank risk, publish unconditionally.
        self.publish(UnitKind::Lvh, new_lvh);
        self.publish(UnitKind::Svh, new_svh);
    }

    /// Writes one property and updates its mirror, so later comparisons see
    /// the last-published value rather than the last-measured one.
    fn publish(&mut self, kind: UnitKind, value: f64) {
        let name = match kind {
            UnitKind::Fvh => &self.options.fvh_property,
            UnitKind::Lvh => &self.options.lvh_property,
            UnitKind::Svh => &self.options.svh_property,
        };
        self.style.set_property(name.as_str(), &format!("{value}px"));
        match kind {
            UnitKind::Fvh => self.fvh = value,
            UnitKind::Lvh => self.lvh = value,
            UnitKind::Svh => self.svh = value,
        }
        self.notify();
    }

    fn teardown(&mut self) {
        self.clear_timers();
        self.reset_properties();
        self.active = false;
        self.notify();
    }

    fn clear_timers(&mut self) {
        self.interaction.clear_timers();
        self.resize_settle.cancel();
    }

    /// Reverts the published properties to literal unit expressions so the
    /// page falls back to native CSS unit behavior.
    fn reset_properties(&mut self) {
        for kind in [UnitKind::Lvh, UnitKind::Svh, UnitKind::Fvh] {
            let name = match kind {
                UnitKind::Fvh => &self.options.fvh_property,
                UnitKind::Lvh => &self.options.lvh_property,
                UnitKind::Svh => &self.options.svh_property,
            };
            self.style.set_property(name.as_str(), kind.css_expr());
        }
    }
}

impl core::fmt::Debug for Stabilizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stabilizer")
            .field("active", &self.active)
            .field("published", &self.published())
            .field("current_width", &self.current_width)
            .field("interaction", &self.interaction.snapshot())
            .field("detection", &self.detector.snapshot())
            .finish_non_exhaustive()
    }
}
