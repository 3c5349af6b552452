// Example: minimal wiring with inline host doubles.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use stable_viewport::{
    DecisionStore, MeasureMethod, ProbeBackend, Stabilizer, StabilizerOptions, StoreError,
    StyleSink,
};

struct FixedProbe(f64);

impl ProbeBackend for FixedProbe {
    fn resolve(&mut self, _expr: &str, _method: MeasureMethod) -> Option<f64> {
        Some(self.0)
    }
}

struct PrintSink;

impl StyleSink for PrintSink {
    fn set_property(&mut self, name: &str, value: &str) {
        println!("{name}: {value}");
    }
}

#[derive(Default)]
struct MapStore(Rc<RefCell<HashMap<String, String>>>);

impl DecisionStore for MapStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

fn main() {
    let mut s = Stabilizer::new(
        FixedProbe(812.0),
        PrintSink,
        MapStore::default(),
        StabilizerOptions::new(),
    );
    s.init();
    s.on_load(375, 0);

    s.on_scroll(100);
    s.tick(400); // scroll settles: one detection sample is recorded

    println!("{:?}", s.state());
}
