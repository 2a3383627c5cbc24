//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering an axis-aligned rectangle
pub fn quad(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = center - half_extents;
    let max = center + half_extents;

    let bottom_left = Vertex::new(min.x, min.y, color);
    let bottom_right = Vertex::new(max.x, min.y, color);
    let top_right = Vertex::new(max.x, max.y, color);
    let top_left = Vertex::new(min.x, max.y, color);

    [
        bottom_left,
        bottom_right,
        top_right,
        top_right,
        top_left,
        bottom_left,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_extents() {
        let verts = quad(Vec2::new(0.5, -0.7), Vec2::new(0.075, 0.125), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();

        let min_x = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max_x = xs.iter().cloned().fold(f32::MIN, f32::max);
        let min_y = ys.iter().cloned().fold(f32::MAX, f32::min);
        let max_y = ys.iter().cloned().fold(f32::MIN, f32::max);

        assert!((min_x - 0.425).abs() < 1e-6);
        assert!((max_x - 0.575).abs() < 1e-6);
        assert!((min_y - -0.825).abs() < 1e-6);
        assert!((max_y - -0.575).abs() < 1e-6);
    }

    #[test]
    fn test_quad_triangles_are_counter_clockwise() {
        let verts = quad(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        for tri in verts.chunks(3) {
            let a = Vec2::from(tri[0].position);
            let b = Vec2::from(tri[1].position);
            let c = Vec2::from(tri[2].position);
            assert!((b - a).perp_dot(c - a) > 0.0);
        }
    }
}
