//! Immediate-mode draw list
//!
//! Demos record shapes into a `Canvas` each frame; the render state uploads
//! the accumulated vertices in one draw call. Coordinates are logical canvas
//! pixels with the origin at the top-left.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::Vertex;

pub struct Canvas {
    size: Vec2,
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Drop recorded geometry and set the background for the next frame
    pub fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    pub fn circle_gradient(&mut self, center: Vec2, radius: f32, inner: [f32; 4], outer: [f32; 4]) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::radial_gradient(center, radius, inner, outer, segments));
    }

    /// Circle outline of the given thickness
    pub fn circle_lines(&mut self, center: Vec2, radius: f32, thickness: f32, color: [f32; 4]) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices.extend(shapes::ring(
            center,
            (radius - thickness).max(0.0),
            radius,
            color,
            segments,
        ));
    }

    pub fn ring(&mut self, center: Vec2, inner: f32, outer: f32, color: [f32; 4]) {
        let segments = shapes::segments_for_radius(outer);
        self.vertices
            .extend(shapes::ring(center, inner, outer, color, segments));
    }

    /// Ring sector between two angles in radians
    pub fn ring_sector(
        &mut self,
        center: Vec2,
        inner: f32,
        outer: f32,
        start: f32,
        end: f32,
        color: [f32; 4],
    ) {
        let full = shapes::segments_for_radius(outer) as f32;
        let segments = ((end - start).abs() / std::f32::consts::TAU * full).ceil() as u32;
        self.vertices.extend(shapes::ring_sector(
            center,
            inner,
            outer,
            start,
            end,
            color,
            segments.max(1),
        ));
    }

    pub fn rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(pos, size, color));
    }

    pub fn rect_lines(&mut self, pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::rect_lines(pos, size, thickness, color));
    }

    /// Rectangle with corner colors top-left, top-right, bottom-right, bottom-left
    pub fn gradient_rect(&mut self, pos: Vec2, size: Vec2, corners: [[f32; 4]; 4]) {
        self.vertices
            .extend(shapes::gradient_rect(pos, size, corners));
    }

    /// Left-to-right gradient
    pub fn gradient_h(&mut self, pos: Vec2, size: Vec2, left: [f32; 4], right: [f32; 4]) {
        self.gradient_rect(pos, size, [left, right, right, left]);
    }

    /// Top-to-bottom gradient
    pub fn gradient_v(&mut self, pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) {
        self.gradient_rect(pos, size, [top, top, bottom, bottom]);
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::triangle(a, b, c, color));
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::line(from, to, thickness, color));
    }

    /// Regular polygon rotated by `rotation` radians
    pub fn poly(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, color: [f32; 4]) {
        let sides = sides.max(3);
        let step = std::f32::consts::TAU / sides as f32;
        for i in 0..sides {
            let a = rotation + step * i as f32;
            let b = a + step;
            self.vertices.extend(shapes::triangle(
                center,
                center + Vec2::from_angle(a) * radius,
                center + Vec2::from_angle(b) * radius,
                color,
            ));
        }
    }

    /// Text with its top-left corner at `pos`
    pub fn text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
        self.vertices.extend(font::text(text, pos, size, color));
    }

    /// Text horizontally centered on `center_x`
    pub fn text_centered(&mut self, text: &str, center_x: f32, y: f32, size: f32, color: [f32; 4]) {
        let width = font::measure(text, size);
        self.text(text, Vec2::new(center_x - width * 0.5, y), size, color);
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        font::measure(text, size)
    }

    /// Append pre-tessellated triangles
    pub fn extend(&mut self, vertices: impl IntoIterator<Item = Vertex>) {
        self.vertices.extend(vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_clear_resets_geometry() {
        let mut canvas = Canvas::new(800.0, 600.0);
        canvas.rect(Vec2::ZERO, Vec2::ONE, colors::RED);
        assert_eq!(canvas.vertices().len(), 6);

        canvas.clear(colors::RAYWHITE);
        assert!(canvas.vertices().is_empty());
        assert_eq!(canvas.clear_color(), colors::RAYWHITE);
    }

    #[test]
    fn test_draw_order_is_preserved() {
        let mut canvas = Canvas::new(800.0, 600.0);
        canvas.rect(Vec2::ZERO, Vec2::ONE, colors::RED);
        canvas.rect(Vec2::ZERO, Vec2::ONE, colors::BLUE);
        assert_eq!(canvas.vertices()[0].color, colors::RED);
        assert_eq!(canvas.vertices()[6].color, colors::BLUE);
    }

    #[test]
    fn test_poly_has_one_triangle_per_side() {
        let mut canvas = Canvas::new(800.0, 600.0);
        canvas.poly(Vec2::ZERO, 6, 10.0, 0.0, colors::WHITE);
        assert_eq!(canvas.vertices().len(), 18);
    }

    #[test]
    fn test_centered_text_straddles_center() {
        let mut canvas = Canvas::new(800.0, 600.0);
        canvas.text_centered("PAUSED", 400.0, 100.0, 16.0, colors::WHITE);
        let min_x = canvas
            .vertices()
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        let max_x = canvas
            .vertices()
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!(((min_x + max_x) * 0.5 - 400.0).abs() < 1.0);
    }
}
