//! Letterboxed mapping between the logical canvas and the window
//!
//! Demos draw on a fixed logical canvas (y down). The viewport scales it
//! uniformly to fit the window and centers it, leaving bars on the long axis.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical canvas size
    pub logical: Vec2,
    /// Physical window size in pixels
    pub physical: Vec2,
}

impl Viewport {
    pub fn new(logical: Vec2, width: u32, height: u32) -> Self {
        Self {
            logical,
            physical: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.physical = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    /// Uniform logical-to-physical scale
    #[inline]
    pub fn scale(&self) -> f32 {
        (self.physical.x / self.logical.x).min(self.physical.y / self.logical.y)
    }

    /// Top-left corner of the canvas in physical pixels
    #[inline]
    pub fn offset(&self) -> Vec2 {
        (self.physical - self.logical * self.scale()) * 0.5
    }

    /// Logical canvas point to normalized device coordinates
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let px = self.offset() + p * self.scale();
        Vec2::new(
            px.x / self.physical.x * 2.0 - 1.0,
            1.0 - px.y / self.physical.y * 2.0,
        )
    }

    /// Physical window point (e.g. cursor position) to logical canvas coordinates
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        (physical - self.offset()) / self.scale()
    }

    /// Whether a logical point lies on the canvas
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.logical.x && p.y <= self.logical.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LOGICAL: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_exact_fit_maps_corners() {
        let vp = Viewport::new(LOGICAL, 800, 600);
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(LOGICAL), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_wide_window_letterboxes_horizontally() {
        let vp = Viewport::new(LOGICAL, 1600, 600);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::new(400.0, 0.0));
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-0.5, 1.0));
    }

    #[test]
    fn test_zero_size_does_not_divide_by_zero() {
        let vp = Viewport::new(LOGICAL, 0, 0);
        assert!(vp.scale() > 0.0);
        assert!(vp.to_ndc(Vec2::new(400.0, 300.0)).is_finite());
    }

    proptest! {
        #[test]
        fn logical_round_trips_through_physical(
            w in 100u32..4000,
            h in 100u32..4000,
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
        ) {
            let vp = Viewport::new(LOGICAL, w, h);
            let p = Vec2::new(x, y);
            let physical = vp.offset() + p * vp.scale();
            let back = vp.to_logical(physical);
            prop_assert!((back - p).length() < 0.01);
            prop_assert!(vp.contains(back.clamp(Vec2::ZERO, LOGICAL)));
        }
    }
}
