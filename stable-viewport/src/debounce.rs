/// A cancellable one-shot deadline.
///
/// Owners keep at most one outstanding deadline per purpose: arming always
/// replaces the previous deadline, so the last scheduling site wins. This is
/// the headless equivalent of the clear-then-reschedule timeout pattern, and
/// the only ordering mechanism the engine relies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debounce {
    deadline_ms: Option<u64>,
}

impl Debounce {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Schedules the deadline `delay_ms` after `now_ms`, replacing any
    /// pending deadline.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` and disarms once the deadline has expired.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
