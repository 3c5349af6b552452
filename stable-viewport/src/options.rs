use alloc::sync::Arc;

use crate::stabilizer::Stabilizer;
use crate::state::InteractionState;
use crate::types::{PropertyName, UnitKind};

/// A callback fired when a stabilizer state update occurs.
///
/// The second argument is the interaction snapshot at notification time.
pub type OnChangeCallback = Arc<dyn Fn(&Stabilizer, InteractionState)>;

/// Quiet period, in milliseconds, used by every debounce unless overridden.
///
/// Applied after the last scroll event before a gesture counts as settled,
/// and to the resize-settle window before a safe publish runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Counted sample pairs collected before the necessity decision is made.
pub const DEFAULT_MAX_DETECTIONS: u32 = 10;

/// Configuration for [`crate::Stabilizer`].
///
/// This type is cheap to clone: the callback is stored in an `Arc`, so
/// adapters can tweak a few fields and rebuild without reallocating
/// closures.
#[derive(Clone)]
pub struct StabilizerOptions {
    /// Custom-property name published for the stabilized `vh` substitute.
    pub fvh_property: PropertyName,
    /// Custom-property name published for the large viewport height.
    pub lvh_property: PropertyName,
    /// Custom-property name published for the small viewport height.
    pub svh_property: PropertyName,

    /// Quiet period after the last scroll event before the gesture counts
    /// as settled (one detector sample, `is_scrolling` cleared).
    pub scroll_end_delay_ms: u64,
    /// Quiet period before `is_touch_scrolling` is cleared after the last
    /// touch-driven scroll signal.
    pub touch_scroll_end_delay_ms: u64,
    /// Debounce window coalescing width-preserving resizes into one safe
    /// (non-forced) publish.
    pub resize_settle_delay_ms: u64,

    /// Number of counted sample pairs before the necessity decision is
    /// finalized.
    pub max_detections: u32,

    /// Optional callback fired when the stabilizer's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl StabilizerOptions {
    pub fn new() -> Self {
        Self {
            fvh_property: PropertyName::default_for(UnitKind::Fvh),
            lvh_property: PropertyName::default_for(UnitKind::Lvh),
            svh_property: PropertyName::default_for(UnitKind::Svh),
            scroll_end_delay_ms: DEFAULT_DEBOUNCE_MS,
            touch_scroll_end_delay_ms: DEFAULT_DEBOUNCE_MS,
            resize_settle_delay_ms: DEFAULT_DEBOUNCE_MS,
            max_detections: DEFAULT_MAX_DETECTIONS,
            on_change: None,
        }
    }

    /// Sets the published property name for `kind`.
    ///
    /// Each name is validated independently; an invalid name falls back to
    /// that unit's own built-in default.
    pub fn with_property_name(mut self, kind: UnitKind, name: &str) -> Self {
        self.set_property_name(kind, PropertyName::sanitize(kind, name));
        self
    }

    pub fn with_scroll_end_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_end_delay_ms = delay_ms;
        self
    }

    pub fn with_touch_scroll_end_delay_ms(mut self, delay_ms: u64) -> Self {
        self.touch_scroll_end_delay_ms = delay_ms;
        self
    }

    pub fn with_resize_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resize_settle_delay_ms = delay_ms;
        self
    }

    pub fn with_max_detections(mut self, max_detections: u32) -> Self {
        self.max_detections = max_detections;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Stabilizer, InteractionState) + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn property_name(&self, kind: UnitKind) -> &PropertyName {
        match kind {
            UnitKind::Fvh => &self.fvh_property,
            UnitKind::Lvh => &self.lvh_property,
            UnitKind::Svh => &self.svh_property,
        }
    }

    pub(crate) fn set_property_name(&mut self, kind: UnitKind, name: PropertyName) {
        match kind {
            UnitKind::Fvh => self.fvh_property = name,
            UnitKind::Lvh => self.lvh_property = name,
            UnitKind::Svh => self.svh_property = name,
        }
    }
}

impl Default for StabilizerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for StabilizerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StabilizerOptions")
            .field("fvh_property", &self.fvh_property)
            .field("lvh_property", &self.lvh_property)
            .field("svh_property", &self.svh_property)
            .field("scroll_end_delay_ms", &self.scroll_end_delay_ms)
            .field("touch_scroll_end_delay_ms", &self.touch_scroll_end_delay_ms)
            .field("resize_settle_delay_ms", &self.resize_settle_delay_ms)
            .field("max_detections", &self.max_detections)
            .finish_non_exhaustive()
    }
}
