//! Bouncing ball

use glam::Vec2;

use super::{Demo, FrameStats, draw_fps};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Input, Key};
use crate::renderer::{Canvas, colors};

pub const BALL_RADIUS: f32 = 20.0;
/// 5 and 4 pixels per frame at 60 Hz
pub const BALL_VELOCITY: Vec2 = Vec2::new(300.0, 240.0);

pub const PALETTE: [[f32; 4]; 8] = [
    colors::MAROON,
    colors::ORANGE,
    colors::DARKGREEN,
    colors::DARKBLUE,
    colors::DARKPURPLE,
    colors::BROWN,
    colors::DARKGRAY,
    colors::RED,
];

#[derive(Debug, Clone)]
pub struct BounceDemo {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color_index: usize,
    fps: f32,
}

impl BounceDemo {
    pub fn new() -> Self {
        log::info!("Bouncing ball: SPACE changes color, ESC exits");
        Self {
            pos: Vec2::new(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5),
            vel: BALL_VELOCITY,
            radius: BALL_RADIUS,
            color_index: 0,
            fps: 0.0,
        }
    }

    pub fn color(&self) -> [f32; 4] {
        PALETTE[self.color_index]
    }

    /// Integrate and reflect off the window edges
    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        if self.pos.x >= SCREEN_WIDTH - self.radius || self.pos.x <= self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y >= SCREEN_HEIGHT - self.radius || self.pos.y <= self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTE.len();
    }
}

impl Default for BounceDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for BounceDemo {
    fn title(&self) -> String {
        "Bouncing Ball".into()
    }

    fn update(&mut self, input: &Input<'_>, dt: f32) {
        self.step(dt);
        if input.key_pressed(Key::Space) {
            self.next_color();
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.text("BOUNCING BALL", Vec2::new(10.0, 10.0), 20.0, colors::DARKGRAY);
        canvas.text(
            "Press SPACE to change color",
            Vec2::new(10.0, 40.0),
            10.0,
            colors::GRAY,
        );
        canvas.text("Press ESC to exit", Vec2::new(10.0, 55.0), 10.0, colors::GRAY);

        canvas.circle(self.pos, self.radius, self.color());

        canvas.rect(
            Vec2::new(10.0, SCREEN_HEIGHT - 30.0),
            Vec2::new(200.0, 20.0),
            colors::LIGHTGRAY,
        );
        canvas.text(
            "Immediate mode is fun!",
            Vec2::new(15.0, SCREEN_HEIGHT - 25.0),
            10.0,
            colors::DARKGRAY,
        );

        draw_fps(canvas, self.fps);
    }

    fn status(&self) -> String {
        format!("{:.0} FPS", self.fps)
    }

    fn on_frame(&mut self, stats: &FrameStats) {
        self.fps = stats.fps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::platform::{InputFrame, InputState};

    #[test]
    fn test_moves_five_by_four_per_frame() {
        let mut ball = BounceDemo::new();
        let start = ball.pos;
        ball.step(SIM_DT);
        let moved = ball.pos - start;
        assert!((moved.x - 5.0).abs() < 1e-3);
        assert!((moved.y - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflects_at_edges() {
        let mut ball = BounceDemo::new();
        ball.pos = Vec2::new(SCREEN_WIDTH - BALL_RADIUS - 1.0, 300.0);
        ball.step(SIM_DT);
        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y > 0.0);

        ball.pos = Vec2::new(400.0, BALL_RADIUS + 1.0);
        ball.vel = Vec2::new(300.0, -240.0);
        ball.step(SIM_DT);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_stays_inside_window() {
        let mut ball = BounceDemo::new();
        for _ in 0..10_000 {
            ball.step(SIM_DT);
            assert!(ball.pos.x > 0.0 && ball.pos.x < SCREEN_WIDTH);
            assert!(ball.pos.y > 0.0 && ball.pos.y < SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_space_cycles_palette() {
        let mut ball = BounceDemo::new();
        let state = InputState::default();
        let space = InputFrame {
            keys_pressed: vec![Key::Space],
            ..Default::default()
        };
        for i in 1..=8 {
            ball.update(&Input::new(&state, &space), SIM_DT);
            assert_eq!(ball.color_index, i % 8);
        }
        assert_eq!(ball.color(), colors::MAROON);
    }
}
