//! Shape tessellation for 2D primitives
//!
//! Every function returns triangle-list vertices in logical canvas pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count giving smooth edges for a circle of this radius
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    radial_gradient(center, radius, color, color, segments)
}

/// Filled circle whose color blends from `inner` at the center to `outer` at the edge
pub fn radial_gradient(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            outer,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            outer,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    ring_sector(center, inner_radius, outer_radius, 0.0, TAU, color, segments)
}

/// Part of a ring between two angles (radians, clockwise on screen since y points down)
pub fn ring_sector(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = end_angle - start_angle;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start_angle + span * (i as f32 / segments as f32);
        let theta2 = start_angle + span * ((i + 1) as f32 / segments as f32);

        let (s1, c1) = theta1.sin_cos();
        let (s2, c2) = theta2.sin_cos();
        let inner1 = center + Vec2::new(c1, s1) * inner_radius;
        let outer1 = center + Vec2::new(c1, s1) * outer_radius;
        let inner2 = center + Vec2::new(c2, s2) * inner_radius;
        let outer2 = center + Vec2::new(c2, s2) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(pos, size, [color; 4])
}

/// Rectangle with per-corner colors: top-left, top-right, bottom-right, bottom-left
pub fn gradient_rect(pos: Vec2, size: Vec2, corners: [[f32; 4]; 4]) -> Vec<Vertex> {
    let [tl, tr, br, bl] = corners;
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, tl),
        Vertex::new(x1, y0, tr),
        Vertex::new(x1, y1, br),
        Vertex::new(x0, y0, tl),
        Vertex::new(x1, y1, br),
        Vertex::new(x0, y1, bl),
    ]
}

/// Filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Thick line segment as a quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Outline of an axis-aligned rectangle
pub fn rect_lines(pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(pos, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x + size.x - t, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::ZERO, 10.0, [1.0; 4], 16);
        assert_eq!(v.len(), 48);
        // Every edge vertex sits on the radius
        for edge in v.iter().skip(1).step_by(3) {
            let r = Vec2::from(edge.position).length();
            assert!((r - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert!(v.iter().any(|p| p.position == [10.0, 20.0]));
        assert!(v.iter().any(|p| p.position == [40.0, 60.0]));
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]).is_empty());
        assert_eq!(line(Vec2::ZERO, Vec2::X, 2.0, [1.0; 4]).len(), 6);
    }

    #[test]
    fn test_ring_sector_radii() {
        let v = ring_sector(Vec2::ZERO, 5.0, 10.0, 0.0, 1.0, [1.0; 4], 4);
        assert_eq!(v.len(), 24);
        for p in &v {
            let r = Vec2::from(p.position).length();
            assert!(r > 4.99 && r < 10.01);
        }
    }
}
