//! Per-frame simulation tick
//!
//! Advances the session by one (variable) timestep given the debounced
//! commands for that frame.

use super::collision::{Rect, check_collision};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::lane_x;

/// Input commands for a single tick, already edge-triggered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Close the game (handled by the driver, not the tick)
    pub quit: bool,
    /// Start or restart a run
    pub start: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Idle/demo mode - the autopilot drives
    pub idle_mode: bool,
}

impl TickInput {
    pub fn start() -> Self {
        Self {
            start: true,
            ..Default::default()
        }
    }

    pub fn left() -> Self {
        Self {
            move_left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            move_right: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// How far above the player the autopilot watches for traffic
const AUTOPILOT_LOOKAHEAD: f32 = 0.9;

/// Advance the game state by `dt` seconds
///
/// Nothing moves unless a run is in progress. Events produced along the way
/// replace the previous tick's `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let mut input = *input;
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    if input.start {
        state.start();
    }

    if !state.is_running() {
        return;
    }

    if input.move_left {
        state.player.move_left();
    }
    if input.move_right {
        state.player.move_right();
    }

    // Cars already on the road move before this tick's spawn, so a new car
    // shows up exactly at the spawn line
    state.enemies.advance(dt, DESPAWN_Y);

    update_spawner(state, dt);

    let player = state.player.rect();
    let hit = state
        .enemies
        .iter_active()
        .find(|(_, car)| check_collision(&player, &Rect::car(car.pos)))
        .map(|(slot, _)| slot);

    if let Some(slot) = hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Crashed { slot });
        log::info!("Game over: hit car in slot {} (lane {})", slot, state.player.lane);
    }
}

/// Accumulate spawn time and roll a new car when due.
///
/// Roll order is lane, speed, next delay. A full pool skips the lane and
/// speed rolls but still re-rolls the delay.
fn update_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer < state.spawn_delay {
        return;
    }

    match state.enemies.first_free() {
        Some(slot) => {
            let lane = state.rng.next_mod(LANE_POSITIONS.len() as u32) as usize;
            let speed = ENEMY_SPEED_BASE + state.rng.next_mod(ENEMY_SPEED_STEPS) as f32 / 100.0;
            if state.enemies.try_spawn(lane_x(lane), SPAWN_Y, speed) {
                state.events.push(GameEvent::Spawned { slot });
                log::debug!("Spawned car in lane {} at speed {:.2} (slot {})", lane, speed, slot);
            }
        }
        None => {
            state.events.push(GameEvent::SpawnDropped);
            log::debug!("Spawn dropped, all {} slots busy", MAX_ENEMIES);
        }
    }

    state.spawn_timer = 0.0;
    state.spawn_delay = SPAWN_DELAY_BASE + state.rng.next_mod(SPAWN_DELAY_STEPS) as f32 / 100.0;
}

/// Demo driver: keep a run going and dodge traffic
fn autopilot(state: &GameState, input: &mut TickInput) {
    if !state.is_running() {
        input.start = true;
        return;
    }

    let threatened = |lane: usize| {
        state.enemies.iter_active().any(|(_, car)| {
            nearest_lane(car.pos.x) == lane
                && car.pos.y > PLAYER_Y - CAR_HEIGHT
                && car.pos.y < PLAYER_Y + CAR_HEIGHT + AUTOPILOT_LOOKAHEAD
        })
    };

    let current = state.player.lane;
    if !threatened(current) {
        return;
    }

    // Nearest clear lane, left wins ties
    let target = (0..LANE_POSITIONS.len())
        .filter(|&lane| !threatened(lane))
        .min_by_key(|&lane| lane.abs_diff(current));

    match target {
        Some(lane) if lane < current => input.move_left = true,
        Some(lane) if lane > current => input.move_right = true,
        _ => {}
    }
}

fn nearest_lane(x: f32) -> usize {
    LANE_POSITIONS
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (x - **a)
                .abs()
                .partial_cmp(&(x - **b).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(lane, _)| lane)
        .unwrap_or(CENTER_LANE)
}
