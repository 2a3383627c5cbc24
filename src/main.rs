//! Lane Dodge entry point
//!
//! Window, GPU and keyboard backends are supplied by an embedding host. The
//! native binary runs a headless attract-mode session: the autopilot plays
//! over jittered frame times and the outcome is logged.

use rand::Rng;

use lane_dodge::input::ScriptedInput;
use lane_dodge::renderer::VertexSink;
use lane_dodge::sim::Lcg;
use lane_dodge::{App, Settings};

/// One minute of frames at roughly 60 fps
const DEMO_FRAMES: usize = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Lane Dodge (native) starting...");
    log::info!("Native mode has no window - running a headless attract session");

    let settings = Settings {
        idle_mode: true,
        ..Settings::load()
    };
    let mut app = App::new(&settings);
    let mut input = ScriptedInput::idle(DEMO_FRAMES);
    let mut sink = VertexSink::new();

    // Frame pacing wobbles between 45 and 75 fps, like a real display loop
    let mut pacing = Lcg::new(settings.seed.wrapping_add(1));
    let mut now = 0.0f64;
    let stats = app.run(&mut input, &mut sink, || {
        now += pacing.random_range(1.0 / 75.0..1.0 / 45.0);
        now
    });

    log::info!(
        "Simulated {:.1}s over {} frames: {} runs, {} crashes, {} cars spawned ({} dropped)",
        now,
        stats.frames,
        stats.runs,
        stats.crashes,
        stats.spawns,
        stats.dropped_spawns
    );
    log::info!(
        "Last frame: {:?}, {} vertices",
        app.state.phase,
        sink.vertex_count()
    );
}
