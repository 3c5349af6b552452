use alloc::boxed::Box;

/// How the probe backend reads back a resolved height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMethod {
    /// Resolved computed style height (sub-pixel precision).
    #[default]
    Computed,
    /// Laid-out box height (integer pixels).
    OffsetHeight,
}

/// Resolves a CSS length expression to a pixel value.
///
/// This is the engine's only window into the host layout system. A DOM
/// backend lazily creates a single invisible, zero-size element appended to
/// the document body, sets its height style to the expression and reads it
/// back; the element is reused across all calls and never recreated once
/// present.
///
/// Returning `None` means the host is not ready to measure (the document has
/// no body yet). The engine treats that as a zero measurement.
pub trait ProbeBackend {
    fn resolve(&mut self, expr: &str, method: MeasureMethod) -> Option<f64>;
}

/// The measurement probe: a [`ProbeBackend`] plus the engine's measurement
/// conventions.
pub struct Probe {
    backend: Box<dyn ProbeBackend>,
}

impl Probe {
    pub fn new(backend: impl ProbeBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn boxed(backend: Box<dyn ProbeBackend>) -> Self {
        Self { backend }
    }

    /// Measures `expr` in pixels.
    ///
    /// Returns `0.0` when the backend reports the host is not ready. With
    /// `round`, the value is rounded to one decimal place rather than
    /// truncated to an integer, preserving the sub-pixel precision the
    /// detector relies on for equality comparisons.
    pub fn measure(&mut self, expr: &str, method: MeasureMethod, round: bool) -> f64 {
        let Some(value) = self.backend.resolve(expr, method) else {
            return 0.0;
        };
        if round { round_to_tenth(value) } else { value }
    }
}

impl core::fmt::Debug for Probe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Probe").finish_non_exhaustive()
    }
}

// Half-up rounding to one decimal without std float intrinsics. Heights are
// non-negative, so truncation after adding 0.5 matches round-half-up.
fn round_to_tenth(value: f64) -> f64 {
    ((value * 10.0 + 0.5) as u64) as f64 / 10.0
}
