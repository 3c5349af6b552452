use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use stable_viewport::{DecisionStore, MeasureMethod, ProbeBackend, StoreError, StyleSink};

/// Scriptable viewport geometry shared between a driver and the engine's
/// probe.
///
/// `vh` is the native unit's current rendered value; on dynamic-viewport
/// browsers it tracks the large viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimViewport {
    pub vh: f64,
    pub lvh: f64,
    pub svh: f64,
}

impl SimViewport {
    /// A static browser: every unit resolves to the same height no matter
    /// what the user does.
    pub fn fixed(px: f64) -> Self {
        Self {
            vh: px,
            lvh: px,
            svh: px,
        }
    }

    /// A dynamic-viewport browser with the chrome currently expanded.
    pub fn dynamic(small: f64, large: f64) -> Self {
        Self {
            vh: large,
            lvh: large,
            svh: small,
        }
    }
}

/// A probe backend over shared scriptable values.
///
/// Clones share the same cell, so a test or demo driver can move the
/// viewport mid-gesture while the engine owns its own handle.
#[derive(Clone, Debug)]
pub struct SimProbe {
    values: Rc<RefCell<SimViewport>>,
}

impl SimProbe {
    pub fn new(initial: SimViewport) -> Self {
        Self {
            values: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn set(&self, values: SimViewport) {
        *self.values.borrow_mut() = values;
    }

    pub fn values(&self) -> SimViewport {
        *self.values.borrow()
    }
}

impl ProbeBackend for SimProbe {
    fn resolve(&mut self, expr: &str, _method: MeasureMethod) -> Option<f64> {
        let v = self.values.borrow();
        match expr {
            "1vh" => Some(v.vh),
            "1lvh" => Some(v.lvh),
            "1svh" => Some(v.svh),
            _ => None,
        }
    }
}

/// A style sink that records every property write.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    /// The most recent value written for `name`.
    pub fn last(&self, name: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }
}

impl StyleSink for RecordingSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((name.to_owned(), value.to_owned()));
    }
}

/// An in-memory key-value store for hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry, e.g. a previously persisted decision.
    pub fn preset(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl DecisionStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A store that is never available (private browsing, sandboxed frame).
///
/// Useful to exercise the engine's fail-open path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStore;

impl DecisionStore for FailingStore {
    fn get(&mut self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
