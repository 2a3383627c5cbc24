//! Fixed-capacity enemy car pool
//!
//! Slots are reused first-fit; a car keeps its slot for as long as it is
//! active, so the slot index doubles as its identity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_ENEMIES;

/// A single enemy car slot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyCar {
    pub pos: Vec2,
    /// Downward speed in units/second
    pub speed: f32,
    pub active: bool,
}

/// Owns every enemy slot. Never holds more than `MAX_ENEMIES` active cars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyPool {
    slots: [EnemyCar; MAX_ENEMIES],
}

impl EnemyPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the first free slot. Returns false (and changes nothing)
    /// when every slot is in use.
    pub fn try_spawn(&mut self, lane_x: f32, base_y: f32, speed: f32) -> bool {
        match self.slots.iter_mut().find(|car| !car.active) {
            Some(car) => {
                *car = EnemyCar {
                    pos: Vec2::new(lane_x, base_y),
                    speed,
                    active: true,
                };
                true
            }
            None => false,
        }
    }

    /// Move every active car down and retire the ones below `lower_bound`
    pub fn advance(&mut self, dt: f32, lower_bound: f32) {
        for car in self.slots.iter_mut().filter(|car| car.active) {
            car.pos.y -= car.speed * dt;
            if car.pos.y < lower_bound {
                car.active = false;
            }
        }
    }

    /// Active cars with their slot index, in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &EnemyCar)> + '_ {
        self.slots.iter().enumerate().filter(|(_, car)| car.active)
    }

    /// Deactivate every slot
    pub fn reset(&mut self) {
        for car in &mut self.slots {
            car.active = false;
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|car| car.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_free().is_none()
    }

    /// Slot the next successful `try_spawn` will use
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|car| !car.active)
    }

    /// Raw slot view (inactive slots included)
    pub fn slots(&self) -> &[EnemyCar; MAX_ENEMIES] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DESPAWN_Y, SPAWN_Y};
    use proptest::prelude::*;

    #[test]
    fn test_spawn_uses_first_free_slot() {
        let mut pool = EnemyPool::new();
        assert!(pool.try_spawn(-0.5, SPAWN_Y, 0.6));
        assert!(pool.try_spawn(0.0, SPAWN_Y, 0.7));
        assert!(pool.try_spawn(0.5, SPAWN_Y, 0.8));

        // Free the middle slot, next spawn must land there
        pool.slots[1].active = false;
        assert_eq!(pool.first_free(), Some(1));
        assert!(pool.try_spawn(0.5, SPAWN_Y, 0.9));
        assert_eq!(pool.slots()[1].speed, 0.9);
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn test_capacity_overflow_is_a_no_op() {
        let mut pool = EnemyPool::new();
        for i in 0..MAX_ENEMIES {
            assert!(pool.try_spawn(0.0, SPAWN_Y, 0.5 + i as f32 * 0.01));
        }
        let before = pool.clone();

        assert!(pool.is_full());
        assert!(!pool.try_spawn(0.5, 0.0, 9.0));
        assert_eq!(pool.active_count(), MAX_ENEMIES);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_advance_moves_and_retires() {
        let mut pool = EnemyPool::new();
        pool.try_spawn(0.0, SPAWN_Y, 0.5);
        pool.try_spawn(0.5, -1.0, 1.0);

        pool.advance(0.5, DESPAWN_Y);

        let slots = pool.slots();
        assert!((slots[0].pos.y - 0.95).abs() < 1e-6);
        assert!(slots[0].active);
        // -1.0 - 0.5 = -1.5 < -1.2
        assert!(!slots[1].active);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_advance_keeps_car_at_exact_bound() {
        let mut pool = EnemyPool::new();
        pool.try_spawn(0.0, -1.0, 1.0);
        pool.advance(0.25, -1.25);
        assert!(pool.slots()[0].active);
    }

    #[test]
    fn test_inactive_slots_do_not_move() {
        let mut pool = EnemyPool::new();
        pool.try_spawn(0.0, 0.5, 1.0);
        pool.reset();
        pool.advance(1.0, DESPAWN_Y);
        assert_eq!(pool.slots()[0].pos.y, 0.5);
    }

    #[test]
    fn test_iter_active_is_slot_ordered_and_restartable() {
        let mut pool = EnemyPool::new();
        for x in [-0.5, 0.0, 0.5, 0.0] {
            pool.try_spawn(x, SPAWN_Y, 0.5);
        }
        pool.slots[2].active = false;

        let first: Vec<usize> = pool.iter_active().map(|(slot, _)| slot).collect();
        let second: Vec<usize> = pool.iter_active().map(|(slot, _)| slot).collect();
        assert_eq!(first, vec![0, 1, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut pool = EnemyPool::new();
        for _ in 0..4 {
            pool.try_spawn(0.0, SPAWN_Y, 0.5);
        }
        pool.reset();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter_active().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_active_count_never_exceeds_capacity(
            ops in proptest::collection::vec((any::<bool>(), 0.0f32..2.0), 0..200)
        ) {
            let mut pool = EnemyPool::new();
            for (spawn, dt) in ops {
                if spawn {
                    pool.try_spawn(0.0, SPAWN_Y, 0.5);
                } else {
                    pool.advance(dt, DESPAWN_Y);
                }
                prop_assert!(pool.active_count() <= MAX_ENEMIES);
            }
        }
    }
}
