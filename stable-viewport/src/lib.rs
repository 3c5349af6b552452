//! A headless engine that stabilizes CSS viewport-height units on mobile
//! browsers with dynamic chrome.
//!
//! For adapter-level utilities (controller, simulation doubles), see the
//! `stable-viewport-adapter` crate.
//!
//! Mobile browsers collapse and reveal their UI chrome (address bar,
//! toolbars) while the user scrolls, resizing the visual viewport and making
//! `vh`-based layouts jump. This crate measures the rendered large/small
//! viewport heights, publishes them as pixel values under custom style
//! properties, and suppresses unsafe updates while a gesture is in flight so
//! layout never visibly snaps mid-scroll. On browsers whose viewport units
//! are already static it decides so once, persists the decision, and steps
//! aside.
//!
//! It is host-agnostic. A browser/DOM (or simulation) layer is expected to
//! provide:
//! - raw `scroll`/`touchstart`/`touchmove`/`touchend`/`resize`/
//!   `orientationchange`/`load` events, stamped with a monotonic
//!   millisecond clock
//! - a [`ProbeBackend`] resolving CSS length expressions to pixels
//! - a [`StyleSink`] receiving the published custom properties
//! - a [`DecisionStore`] persisting the necessity decision across loads
//! - periodic [`Stabilizer::tick`] calls to advance debounce deadlines
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod detector;
mod error;
mod interaction;
mod options;
mod probe;
mod stabilizer;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use debounce::Debounce;
pub use detector::{DECISION_KEY, DecisionStore};
pub use error::{InvalidPropertyName, StoreError};
pub use interaction::{Interaction, InteractionTick};
pub use options::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_DETECTIONS, OnChangeCallback, StabilizerOptions,
};
pub use probe::{MeasureMethod, Probe, ProbeBackend};
pub use stabilizer::{Stabilizer, StyleSink};
pub use state::{DetectionState, InteractionState, PublishedHeights, StabilizerState};
pub use types::{PropertyName, UnitKind};
