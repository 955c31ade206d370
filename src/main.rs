//! Ringfall entry point
//!
//! Headless demo: drives the simulator with a hand-advanced clock at a
//! fixed 60 Hz, prints a snapshot once per simulated second, and tweaks a
//! couple of parameters mid-run.

use ringfall::render::NullCanvas;
use ringfall::time::ManualClock;
use ringfall::{Preset, Simulator};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("ringfall (headless demo) starting");

    let mut sim = Simulator::new(ManualClock::new(), 800.0, 600.0);
    sim.initialize(Preset::ring_split());
    sim.start();

    let mut canvas = NullCanvas::new(800.0, 600.0);
    for frame in 0..600u32 {
        sim.clock_mut().advance(FRAME_MS);
        sim.frame(&mut canvas);

        if frame == 180 {
            sim.set_parameter("rotation_speed", 0.03);
        }
        if frame == 360 {
            sim.set_parameter("restitution", 1.1);
        }
        if frame % 60 == 59 {
            if let Ok(line) = serde_json::to_string(&sim.snapshot()) {
                println!("{line}");
            }
        }
    }

    let last = sim.snapshot();
    log::info!(
        "done: {} balls after {:.1}s",
        last.ball_count,
        last.simulation_time_s
    );
}
