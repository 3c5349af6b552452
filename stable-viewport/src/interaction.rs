use crate::debounce::Debounce;
use crate::state::InteractionState;

/// What an [`Interaction::tick`] call observed expiring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionTick {
    /// The scroll-end debounce fired: the gesture settled, `is_scrolling`
    /// has been cleared and one detector sample is due.
    pub scroll_ended: bool,
    /// The touch-scroll-end debounce fired: `is_touch_scrolling` has been
    /// cleared.
    pub touch_scroll_ended: bool,
}

/// Classifies raw browser gestures into higher-level flags.
///
/// Browsers expose no direct "the user is touch-scrolling" signal; this
/// machine derives one by layering cancellable debounce deadlines over the
/// raw scroll and touch events. Touch signals take priority over scroll
/// signals: a still-active touch is the stronger indicator that a
/// chrome animation has not yet settled.
#[derive(Clone, Debug)]
pub struct Interaction {
    is_scrolling: bool,
    is_touching: bool,
    is_touch_scrolling: bool,

    scroll_end: Debounce,
    touch_scroll_end: Debounce,
    scroll_end_delay_ms: u64,
    touch_scroll_end_delay_ms: u64,
}

impl Interaction {
    pub fn new(scroll_end_delay_ms: u64, touch_scroll_end_delay_ms: u64) -> Self {
        Self {
            is_scrolling: false,
            is_touching: false,
            is_touch_scrolling: false,
            scroll_end: Debounce::new(),
            touch_scroll_end: Debounce::new(),
            scroll_end_delay_ms,
            touch_scroll_end_delay_ms,
        }
    }

    pub fn snapshot(&self) -> InteractionState {
        InteractionState {
            is_scrolling: self.is_scrolling,
            is_touching: self.is_touching,
            is_touch_scrolling: self.is_touch_scrolling,
        }
    }

    pub fn any_active(&self) -> bool {
        self.is_scrolling || self.is_touching || self.is_touch_scrolling
    }

    /// A touch began. Any pending touch-scroll-end deadline is stale.
    pub fn on_touch_start(&mut self) {
        self.touch_scroll_end.cancel();
        self.is_touching = true;
    }

    /// Same handling as [`Self::on_touch_start`]: a move event re-affirms
    /// the touch and guards against a missed or late `touchstart`.
    pub fn on_touch_move(&mut self) {
        self.on_touch_start();
    }

    /// A scroll frame arrived.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.scroll_end.cancel();
        self.touch_scroll_end.cancel();
        self.is_scrolling = true;

        if self.is_touching {
            // Still touching implies still scrolling by touch; no deadline
            // needed to infer it.
            self.is_touch_scrolling = true;
        } else {
            self.touch_scroll_end
                .arm(now_ms, self.touch_scroll_end_delay_ms);
        }
        self.scroll_end.arm(now_ms, self.scroll_end_delay_ms);
    }

    /// The touch lifted. Returns `true` when the caller should take one
    /// detector sample immediately (a touch-scroll was in flight).
    #[must_use]
    pub fn on_touch_end(&mut self, now_ms: u64) -> bool {
        self.touch_scroll_end.cancel();
        self.is_touching = false;
        if self.is_touch_scrolling {
            self.touch_scroll_end
                .arm(now_ms, self.touch_scroll_end_delay_ms);
            true
        } else {
            // Touch ended without any scroll; nothing to settle.
            false
        }
    }

    /// Advances the debounce deadlines and applies the transitions of
    /// whichever fired.
    pub fn tick(&mut self, now_ms: u64) -> InteractionTick {
        let mut fired = InteractionTick::default();
        if self.scroll_end.fire(now_ms) {
            self.is_scrolling = false;
            fired.scroll_ended = true;
        }
        if self.touch_scroll_end.fire(now_ms) {
            self.is_touch_scrolling = false;
            fired.touch_scroll_ended = true;
        }
        fired
    }

    /// Cancels every pending deadline without touching the flags.
    pub fn clear_timers(&mut self) {
        self.scroll_end.cancel();
        self.touch_scroll_end.cancel();
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match (self.scroll_end.deadline_ms(), self.touch_scroll_end.deadline_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
