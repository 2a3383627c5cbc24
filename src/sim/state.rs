//! Game state and core simulation types
//!
//! Everything needed to reproduce a session lives here, PRNG included.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::pool::EnemyPool;
use super::rng::Lcg;
use crate::consts::*;
use crate::lane_x;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Crashed; frozen until restarted
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (first start or restart)
    Started,
    /// An enemy car entered the road in this slot
    Spawned { slot: usize },
    /// A spawn was due but every slot was taken
    SpawnDropped,
    /// The player hit the car in this slot
    Crashed { slot: usize },
}

/// The player's car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 0 = left, 1 = centre, 2 = right
    pub lane: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self { lane: CENTER_LANE }
    }
}

impl Player {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(lane_x(self.lane), PLAYER_Y)
    }

    pub fn rect(&self) -> Rect {
        Rect::car(self.pos())
    }

    pub fn move_left(&mut self) {
        self.lane = self.lane.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.lane + 1 < LANE_POSITIONS.len() {
            self.lane += 1;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: EnemyPool,
    /// Seconds since the last spawn attempt
    pub spawn_timer: f32,
    /// Seconds between spawn attempts, re-rolled after each one
    pub spawn_delay: f32,
    pub rng: Lcg,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            player: Player::default(),
            enemies: EnemyPool::new(),
            spawn_timer: 0.0,
            spawn_delay: INITIAL_SPAWN_DELAY,
            rng: Lcg::new(seed),
            events: Vec::with_capacity(MAX_ENEMIES + 2),
        }
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a run from NotStarted or GameOver. Ignored while running.
    ///
    /// The spawn delay carries over from the previous run.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let restart = self.over();
        self.phase = GamePhase::Running;
        self.player = Player::default();
        self.enemies.reset();
        self.spawn_timer = 0.0;
        self.events.push(GameEvent::Started);

        if restart {
            log::info!("Run restarted");
        } else {
            log::info!("Run started");
        }
        true
    }
}
