//! Frame driver
//!
//! One call to [`App::frame`] is one iteration of the game loop: sample the
//! clock, apply that frame's commands, advance the simulation, emit the draw
//! list.

use std::ops::ControlFlow;

use crate::input::InputSource;
use crate::renderer::frame::MAX_QUADS;
use crate::renderer::{Quad, RenderSink, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SimClock, TickInput, tick};

/// Session counters, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub runs: u32,
    pub crashes: u32,
    pub spawns: u32,
    pub dropped_spawns: u32,
}

/// Game instance holding all state
pub struct App {
    pub state: GameState,
    clock: SimClock,
    idle_mode: bool,
    quads: Vec<Quad>,
    stats: SessionStats,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "Session seed {} ({} timestep)",
            settings.seed,
            settings.timestep.as_str()
        );
        Self {
            state: GameState::new(settings.seed),
            clock: SimClock::new(settings.timestep),
            idle_mode: settings.idle_mode,
            quads: Vec::with_capacity(MAX_QUADS),
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Draw list of the most recent frame
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Run one frame at wall-clock time `now` (seconds)
    pub fn frame(
        &mut self,
        now: f64,
        input: TickInput,
        sink: &mut impl RenderSink,
    ) -> ControlFlow<()> {
        if input.quit {
            log::info!("Quit requested after {} frames", self.stats.frames);
            return ControlFlow::Break(());
        }

        if !input.is_empty() {
            log::trace!("Frame {} input: {:?}", self.stats.frames, input);
        }
        let mut input = input;
        input.idle_mode |= self.idle_mode;

        let steps = self.clock.sample(now);
        if steps.count == 0 {
            // Fixed mode between steps: commands still land this frame
            self.step(&input, 0.0);
        } else {
            // Commands apply on the first substep only
            let follow_up = TickInput {
                idle_mode: input.idle_mode,
                ..Default::default()
            };
            for i in 0..steps.count {
                let commands = if i == 0 { input } else { follow_up };
                self.step(&commands, steps.dt);
            }
        }

        build_frame(&self.state, &mut self.quads);
        sink.submit(&self.quads);
        self.stats.frames += 1;

        ControlFlow::Continue(())
    }

    fn step(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.state, input, dt);
        for event in &self.state.events {
            match event {
                GameEvent::Started => self.stats.runs += 1,
                GameEvent::Spawned { .. } => self.stats.spawns += 1,
                GameEvent::SpawnDropped => self.stats.dropped_spawns += 1,
                GameEvent::Crashed { .. } => self.stats.crashes += 1,
            }
        }
    }

    /// Drive frames until the input source asks to quit
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        mut now: impl FnMut() -> f64,
    ) -> SessionStats {
        loop {
            let commands = input.poll();
            if self.frame(now(), commands, sink).is_break() {
                break;
            }
        }
        self.stats
    }
}
