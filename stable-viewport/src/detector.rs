use alloc::string::String;
use alloc::vec::Vec;

use crate::error::StoreError;
use crate::probe::{MeasureMethod, Probe};
use crate::state::DetectionState;
use crate::types::UnitKind;

/// Key under which the necessity decision is persisted across page loads.
pub const DECISION_KEY: &str = "fixedVhPolyfill_isModuleNeeded";

/// Key-value persistence for the necessity decision (`localStorage` in a
/// browser host).
///
/// Values written are the strings `"true"` and `"false"`. Backends that
/// cannot persist should return [`StoreError`]; the engine then fails open
/// and keeps the workaround active.
pub trait DecisionStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Decides once whether the workaround is needed at all.
///
/// Browsers without dynamic chrome report identical lvh/svh values no matter
/// how the page is scrolled. Sampling both during gestures and counting the
/// distinct values answers the question without user-agent sniffing; the
/// answer is persisted so later loads skip straight to the decision.
pub(crate) struct Detector {
    complete: bool,
    needed: Option<bool>,
    count: u32,
    max_detections: u32,
    lvh_samples: Vec<f64>,
    svh_samples: Vec<f64>,
}

impl Detector {
    pub(crate) fn new(max_detections: u32) -> Self {
        Self {
            complete: false,
            needed: None,
            count: 0,
            max_detections,
            lvh_samples: Vec::new(),
            svh_samples: Vec::new(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn snapshot(&self) -> DetectionState {
        DetectionState {
            complete: self.complete,
            needed: self.needed,
            sample_count: self.count,
        }
    }

    pub(crate) fn lvh_samples(&self) -> &[f64] {
        &self.lvh_samples
    }

    pub(crate) fn svh_samples(&self) -> &[f64] {
        &self.svh_samples
    }

    /// Applies a previously persisted decision, if any.
    ///
    /// Returns `Some(needed)` when a decision is now in force. A store
    /// failure fails open: the workaround is assumed needed and detection is
    /// marked complete. A stored value that is neither `"true"` nor
    /// `"false"` is treated as absent.
    pub(crate) fn load_decision(&mut self, store: &mut dyn DecisionStore) -> Option<bool> {
        match store.get(DECISION_KEY) {
            Ok(Some(value)) => match value.as_str() {
                "true" => {
                    self.conclude(true);
                    Some(true)
                }
                "false" => {
                    self.conclude(false);
                    Some(false)
                }
                _ => {
                    svwarn!("ignoring unrecognized stored decision");
                    self.needed = None;
                    None
                }
            },
            Ok(None) => {
                self.needed = None;
                None
            }
            Err(_) => {
                svwarn!("decision store unavailable, assuming the workaround is needed");
                self.conclude(true);
                Some(true)
            }
        }
    }

    /// Appends the initial lvh/svh sample pair without counting it toward
    /// the detection budget.
    pub(crate) fn seed(&mut self, probe: &mut Probe) {
        if self.complete {
            return;
        }
        self.push_samples(probe);
    }

    /// Records one lvh/svh sample pair and finalizes the decision once the
    /// budget is exhausted. Returns `Some(needed)` at the moment the
    /// decision is made.
    pub(crate) fn sample(
        &mut self,
        probe: &mut Probe,
        store: &mut dyn DecisionStore,
    ) -> Option<bool> {
        if self.complete {
            return None;
        }
        self.push_samples(probe);
        self.count += 1;
        if self.count >= self.max_detections {
            return Some(self.finalize(store));
        }
        None
    }

    /// Clears accumulated samples so measurement starts fresh. Only
    /// meaningful before the decision is made.
    pub(crate) fn reset_samples(&mut self) {
        self.count = 0;
        self.lvh_samples.clear();
        self.svh_samples.clear();
    }

    fn push_samples(&mut self, probe: &mut Probe) {
        let lvh = probe.measure(UnitKind::Lvh.css_expr(), MeasureMethod::Computed, true);
        let svh = probe.measure(UnitKind::Svh.css_expr(), MeasureMethod::Computed, true);
        self.lvh_samples.push(lvh);
        self.svh_samples.push(svh);
    }

    fn finalize(&mut self, store: &mut dyn DecisionStore) -> bool {
        // More than one distinct value for either unit means the viewport
        // units are dynamic on this browser.
        let needed = varies(&self.lvh_samples) || varies(&self.svh_samples);
        self.conclude(needed);
        svdebug!(needed, samples = self.count, "viewport dynamics decision");

        let value = if needed { "true" } else { "false" };
        if store.set(DECISION_KEY, value).is_err() {
            svwarn!("failed to persist decision, assuming the workaround is needed");
            self.conclude(true);
            return true;
        }
        needed
    }

    fn conclude(&mut self, needed: bool) {
        self.needed = Some(needed);
        self.complete = true;
    }
}

// Samples come out of the probe's one-decimal rounding, so bit equality is
// the intended comparison.
fn varies(samples: &[f64]) -> bool {
    let Some((first, rest)) = samples.split_first() else {
        return false;
    };
    rest.iter().any(|v| v.to_bits() != first.to_bits())
}
