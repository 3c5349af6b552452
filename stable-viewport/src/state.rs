/// Derived interaction flags, inferred from raw gesture events.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionState {
    pub is_scrolling: bool,
    pub is_touching: bool,
    pub is_touch_scrolling: bool,
}

impl InteractionState {
    /// True while any gesture-derived flag is set.
    pub fn any(self) -> bool {
        self.is_scrolling || self.is_touching || self.is_touch_scrolling
    }
}

/// Outcome of the necessity detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionState {
    pub complete: bool,
    /// `None` until a decision has been reached.
    pub needed: Option<bool>,
    /// Counted sample pairs (the initial load-time seed is not counted).
    pub sample_count: u32,
}

/// Last-published pixel values.
///
/// These mirror what the style layer currently shows, not the most recent
/// measurement: the publisher's safety filter compares new measurements
/// against these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublishedHeights {
    pub fvh: f64,
    pub lvh: f64,
    pub svh: f64,
}

/// A combined read-only snapshot of the stabilizer.
///
/// This is what [`Stabilizer::state`](crate::Stabilizer::state) returns for
/// introspection (debug overlays, logging callbacks, tests).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StabilizerState {
    pub interaction: InteractionState,
    pub detection: DetectionState,
    pub published: PublishedHeights,
    pub current_width: u32,
    pub active: bool,
}
