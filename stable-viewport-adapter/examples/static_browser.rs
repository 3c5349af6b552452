// Example: on a static-viewport browser the engine disables itself and
// persists the decision for the next page load.
use stable_viewport::{DECISION_KEY, StabilizerOptions};
use stable_viewport_adapter::{Controller, MemoryStore, RecordingSink, SimProbe, SimViewport};

fn main() {
    let probe = SimProbe::new(SimViewport::fixed(900.0));
    let sink = RecordingSink::new();
    let store = MemoryStore::new();
    let mut c = Controller::new(probe, sink.clone(), store.clone(), StabilizerOptions::new());
    c.init();
    c.on_load(1280, 0);

    let mut now = 1_000;
    for _ in 0..10 {
        c.on_scroll(now);
        c.tick(now + 300);
        now += 1_000;
    }

    println!("attached: {}", c.is_attached());
    println!("decision: {:?}", store.value(DECISION_KEY));
    // The last writes revert the properties to native unit behavior.
    for (name, value) in sink.writes().iter().rev().take(3) {
        println!("{name}: {value}");
    }
}
