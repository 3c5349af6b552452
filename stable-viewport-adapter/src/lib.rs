//! Adapter utilities for the `stable-viewport` crate.
//!
//! The `stable-viewport` crate is host-agnostic and focuses on the core
//! state machine and publish policy. This crate provides small,
//! framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that owns a stabilizer and turns its lifecycle into
//!   attach/detach guidance for the host's event listeners
//! - Simulation doubles ([`SimProbe`], [`RecordingSink`], [`MemoryStore`],
//!   [`FailingStore`]) for tests, demos, and headless environments
//!
//! This crate is intentionally framework-agnostic (no DOM/web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod sim;


pub use controller::Controller;
pub use sim::{FailingStore, MemoryStore, RecordingSink, SimProbe, SimViewport};
