//! Per-frame draw list
//!
//! The simulation describes each frame as a list of colored quads and hands
//! it to whatever [`RenderSink`] the host provides.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::car_size;
use crate::consts::MAX_ENEMIES;
use crate::sim::GameState;

/// Lane divider centres (x)
pub const DIVIDER_X: [f32; 2] = [-0.25, 0.25];
/// Dividers are thin full-height strips
pub const DIVIDER_HALF_EXTENTS: Vec2 = Vec2::new(0.01, 1.0);

/// Start / game-over marker in the top-left corner
pub const INDICATOR_CENTER: Vec2 = Vec2::new(-0.8, 0.8);
pub const INDICATOR_HALF_EXTENTS: Vec2 = Vec2::new(0.05, 0.05);

/// Most quads a single frame can hold: dividers, player, every enemy, indicator
pub const MAX_QUADS: usize = DIVIDER_X.len() + 1 + MAX_ENEMIES + 1;

/// One axis-aligned colored rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub color: [f32; 4],
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Quad {
    pub fn new(color: [f32; 4], center: Vec2, half_extents: Vec2) -> Self {
        Self {
            color,
            center,
            half_extents,
        }
    }

    pub fn vertices(&self) -> [Vertex; 6] {
        shapes::quad(self.center, self.half_extents, self.color)
    }
}

/// Consumer of a finished frame
pub trait RenderSink {
    fn submit(&mut self, quads: &[Quad]);
}

/// Fill `out` with the draw list for the current state
///
/// Order: dividers, then player and enemies once started, then the indicator
/// when idle or crashed.
pub fn build_frame(state: &GameState, out: &mut Vec<Quad>) {
    out.clear();

    for x in DIVIDER_X {
        out.push(Quad::new(
            colors::LANE_DIVIDER,
            Vec2::new(x, 0.0),
            DIVIDER_HALF_EXTENTS,
        ));
    }

    if state.started() {
        let half_car = car_size() / 2.0;
        out.push(Quad::new(colors::PLAYER, state.player.pos(), half_car));
        out.extend(
            state
                .enemies
                .iter_active()
                .map(|(_, car)| Quad::new(colors::ENEMY, car.pos, half_car)),
        );
    }

    if !state.started() || state.over() {
        out.push(Quad::new(
            colors::INDICATOR,
            INDICATOR_CENTER,
            INDICATOR_HALF_EXTENTS,
        ));
    }
}

/// Sink that expands quads into a triangle list ready for a vertex buffer
#[derive(Debug, Default)]
pub struct VertexSink {
    vertices: Vec<Vertex>,
    frames: u64,
}

impl VertexSink {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(MAX_QUADS * 6),
            frames: 0,
        }
    }

    /// Vertices of the most recent frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a buffer upload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Frames submitted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for VertexSink {
    fn submit(&mut self, quads: &[Quad]) {
        self.vertices.clear();
        for quad in quads {
            self.vertices.extend_from_slice(&quad.vertices());
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn count(quads: &[Quad], color: [f32; 4]) -> usize {
        quads.iter().filter(|q| q.color == color).count()
    }

    #[test]
    fn test_title_screen_frame() {
        let state = GameState::new(1);
        let mut quads = Vec::new();
        build_frame(&state, &mut quads);

        assert_eq!(quads.len(), 3);
        assert_eq!(count(&quads, colors::LANE_DIVIDER), 2);
        assert_eq!(count(&quads, colors::INDICATOR), 1);
        assert_eq!(count(&quads, colors::PLAYER), 0);
    }

    #[test]
    fn test_running_frame_draws_cars() {
        let mut state = GameState::new(1);
        state.start();
        state.enemies.try_spawn(0.5, 0.3, 0.6);
        state.enemies.try_spawn(-0.5, 0.9, 0.6);

        let mut quads = Vec::new();
        build_frame(&state, &mut quads);

        assert_eq!(quads.len(), 5);
        assert_eq!(count(&quads, colors::INDICATOR), 0);
        assert_eq!(quads[2].color, colors::PLAYER);
        assert_eq!(quads[2].center, Vec2::new(0.0, -0.7));
        assert_eq!(quads[2].half_extents, Vec2::new(0.075, 0.125));
        assert_eq!(quads[3].center, Vec2::new(0.5, 0.3));
        assert_eq!(quads[4].center, Vec2::new(-0.5, 0.9));
    }

    #[test]
    fn test_game_over_frame_keeps_scene_and_indicator() {
        let mut state = GameState::new(1);
        state.start();
        state.enemies.try_spawn(0.0, -0.7, 0.6);
        state.phase = GamePhase::GameOver;

        let mut quads = vec![Quad::new(colors::ENEMY, Vec2::ZERO, Vec2::ONE); 20];
        build_frame(&state, &mut quads);

        assert_eq!(quads.len(), 5);
        assert_eq!(count(&quads, colors::ENEMY), 1);
        assert_eq!(quads.last().map(|q| q.color), Some(colors::INDICATOR));
    }

    #[test]
    fn test_full_frame_fits_capacity() {
        let mut state = GameState::new(1);
        state.start();
        for _ in 0..MAX_ENEMIES {
            state.enemies.try_spawn(0.5, 0.5, 0.5);
        }
        state.phase = GamePhase::GameOver;

        let mut quads = Vec::new();
        build_frame(&state, &mut quads);
        assert_eq!(quads.len(), MAX_QUADS);
    }

    #[test]
    fn test_vertex_sink_expands_quads() {
        let state = GameState::new(1);
        let mut quads = Vec::new();
        build_frame(&state, &mut quads);

        let mut sink = VertexSink::new();
        sink.submit(&quads);
        assert_eq!(sink.vertex_count(), 18);
        assert_eq!(sink.bytes().len(), 18 * std::mem::size_of::<Vertex>());

        sink.submit(&quads[..1]);
        assert_eq!(sink.vertex_count(), 6);
        assert_eq!(sink.frames(), 2);
    }
}
