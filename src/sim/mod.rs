//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, the same inputs and
//! the same sequence of frame deltas, a session plays out identically:
//! - Seeded session-owned PRNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod pool;
pub mod rng;
pub mod state;
pub mod tick;

pub use clock::{SimClock, Steps};
pub use collision::{Rect, check_collision};
pub use pool::{EnemyCar, EnemyPool};
pub use rng::{LCG_MAX, Lcg};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
