// Example: drive the stabilizer through a simulated address-bar animation.
use stable_viewport::StabilizerOptions;
use stable_viewport_adapter::{Controller, MemoryStore, RecordingSink, SimProbe, SimViewport};

fn main() {
    // Page loads with the chrome expanded; every unit resolves small.
    let probe = SimProbe::new(SimViewport {
        vh: 660.0,
        lvh: 660.0,
        svh: 660.0,
    });
    let sink = RecordingSink::new();
    let store = MemoryStore::new();
    let mut c = Controller::new(
        probe.clone(),
        sink.clone(),
        store.clone(),
        StabilizerOptions::new(),
    );
    c.init();
    c.on_load(390, 0);

    // Finger down, page scrolling: the address bar retracts and the
    // rendered unit values drift toward the large-viewport extreme. Each
    // chrome animation frame also fires a width-preserving resize.
    c.on_touch_start();
    let mut now = 1_000u64;
    for step in 1..=5u32 {
        let h = 660.0 + 28.0 * f64::from(step);
        probe.set(SimViewport {
            vh: h,
            lvh: h,
            svh: 660.0,
        });
        c.on_scroll(now);
        c.on_resize(390, now);
        c.tick(now);
        now += 50;
    }

    // Lift the finger and let every debounce settle.
    c.on_touch_end(now);
    while let Some(deadline) = c.tick(now) {
        now = deadline;
    }

    for (name, value) in sink.writes() {
        println!("{name}: {value}");
    }
    println!("attached: {}", c.is_attached());
    println!("state: {:?}", c.stabilizer().state());
}
