//! Tabbed feature showcase
//!
//! Six tabs, each exercising one part of the canvas: shapes, text, colours,
//! input, particles and a software-projected 3D scene.

pub mod scene3d;
pub mod strings;

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub use scene3d::OrbitCamera;
pub use strings::{DemoTab, FeatureText};

use super::{Demo, FrameStats, draw_fps};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::controls::DOUBLE_TAP_WINDOW;
use crate::platform::{Input, Key};
use crate::renderer::{Canvas, colors, font};
use crate::settings::Settings;
use crate::sim::particles::{Burst, ParticleMotion, ParticleSystem};
use crate::hsv_to_rgba;

pub const MAX_DOTS: usize = 500;
pub const MAX_PARTICLES: usize = 1000;
pub const PARTICLE_DAMPING: f32 = 0.98;

const TAB_BAR_TOP: f32 = 50.0;
const TAB_BAR_HEIGHT: f32 = 30.0;
const TAB_WIDTH: f32 = SCREEN_WIDTH / DemoTab::ALL.len() as f32;
const CONTENT_TOP: f32 = 95.0;
const FOOTER_Y: f32 = SCREEN_HEIGHT - 25.0;

/// Where the Input tab collects dots
const DOT_AREA_POS: Vec2 = Vec2::new(300.0, 120.0);
const DOT_AREA_SIZE: Vec2 = Vec2::new(460.0, 420.0);

const CAMERA_KEY_SPEED: f32 = 1.5;
const CAMERA_DRAG_SPEED: f32 = 0.01;
const CUBE_SPIN: f32 = 0.8;

const SWATCHES: [([f32; 4], &str); 8] = [
    (colors::RED, "RED"),
    (colors::ORANGE, "ORANGE"),
    (colors::GOLD, "GOLD"),
    (colors::GREEN, "GREEN"),
    (colors::SKYBLUE, "SKYBLUE"),
    (colors::BLUE, "BLUE"),
    (colors::PURPLE, "PURPLE"),
    (colors::BROWN, "BROWN"),
];

fn in_rect(p: Vec2, pos: Vec2, size: Vec2) -> bool {
    p.x >= pos.x && p.y >= pos.y && p.x < pos.x + size.x && p.y < pos.y + size.y
}

/// Tab under `p` when it lies on the tab bar
fn tab_at(p: Vec2) -> Option<DemoTab> {
    if p.y < TAB_BAR_TOP || p.y >= TAB_BAR_TOP + TAB_BAR_HEIGHT || p.x < 0.0 || p.x >= SCREEN_WIDTH {
        return None;
    }
    Some(DemoTab::from_index((p.x / TAB_WIDTH) as isize))
}

pub struct ShowcaseDemo {
    tab: DemoTab,
    show_info: bool,
    /// Seconds since the last tap outside the tab bar
    since_last_tap: Option<f32>,
    time: f32,
    fps: f32,
    show_fps: bool,

    pointer: Option<Vec2>,
    pointer_down: bool,
    touch: bool,
    /// Pointer position during the previous step while held
    last_drag: Option<Vec2>,
    last_key: Option<Key>,
    wheel: f32,
    dots: VecDeque<Vec2>,

    particles: ParticleSystem,
    rng: Pcg32,

    camera: OrbitCamera,
    cube_angle: f32,

    /// Characters of the Unicode sample the bitmap font lacks
    missing: Vec<char>,
}

impl ShowcaseDemo {
    pub fn new(settings: &Settings) -> Self {
        let missing = font::missing_glyphs(strings::UNICODE_SAMPLE);
        log::info!(
            "Showcase ready: {} sample characters need a fallback font",
            missing.len()
        );
        let cap = MAX_PARTICLES.min(settings.max_particles());
        Self {
            tab: DemoTab::Shapes,
            show_info: false,
            since_last_tap: None,
            time: 0.0,
            fps: 0.0,
            show_fps: settings.show_fps,
            pointer: None,
            pointer_down: false,
            touch: false,
            last_drag: None,
            last_key: None,
            wheel: 0.0,
            dots: VecDeque::with_capacity(MAX_DOTS),
            particles: ParticleSystem::with_cap(ParticleMotion::Damping(PARTICLE_DAMPING), cap),
            rng: Pcg32::seed_from_u64(settings.seed_or_random()),
            camera: OrbitCamera::default(),
            cube_angle: 0.0,
            missing,
        }
    }

    pub fn tab(&self) -> DemoTab {
        self.tab
    }

    pub fn show_info(&self) -> bool {
        self.show_info
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn select(&mut self, tab: DemoTab) {
        if tab == self.tab {
            return;
        }
        log::info!("Tab: {} / {}", tab.name_en(), tab.name_cn());
        self.tab = tab;
        self.last_drag = None;
    }

    fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
        log::debug!("Info panel {}", if self.show_info { "shown" } else { "hidden" });
    }

    fn handle_navigation(&mut self, input: &Input<'_>) {
        // Arrow keys belong to the camera on the 3D tab
        if self.tab != DemoTab::ThreeD {
            if input.key_pressed(Key::ArrowRight) {
                self.select(self.tab.next());
            }
            if input.key_pressed(Key::ArrowLeft) {
                self.select(self.tab.prev());
            }
        }
        if input.key_pressed(Key::Tab) {
            self.select(self.tab.next());
        }
        for key in &input.frame.keys_pressed {
            if let Some(d @ 1..=6) = key.digit() {
                self.select(DemoTab::from_index(d as isize - 1));
            }
        }
        if input.key_pressed(Key::I) {
            self.toggle_info();
        }

        if !input.pointer_pressed() {
            return;
        }
        let Some(p) = input.pointer() else {
            return;
        };
        if let Some(tab) = tab_at(p) {
            self.select(tab);
            return;
        }
        match self.since_last_tap {
            Some(t) if t <= DOUBLE_TAP_WINDOW => {
                self.toggle_info();
                self.since_last_tap = None;
            }
            _ => self.since_last_tap = Some(0.0),
        }
    }

    fn update_input_tab(&mut self, input: &Input<'_>) {
        if input.key_pressed(Key::Backspace) {
            self.dots.clear();
        }
        let Some(p) = self.pointer else {
            return;
        };
        if !self.pointer_down || !in_rect(p, DOT_AREA_POS, DOT_AREA_SIZE) {
            return;
        }
        if self.dots.back().is_some_and(|last| last.distance(p) < 2.0) {
            return;
        }
        if self.dots.len() >= MAX_DOTS {
            self.dots.pop_front();
        }
        self.dots.push_back(p);
    }

    fn spawn_burst(&mut self, pos: Vec2, count: usize) {
        let hue = self.rng.random_range(0.0..360.0);
        let burst = Burst {
            pos,
            color: hsv_to_rgba(hue, 0.8, 1.0, 1.0),
            count,
            speed: 50.0..200.0,
            lifetime: 1.5,
            size: 2.0..6.0,
        };
        self.particles.add_burst(&burst, &mut self.rng);
    }

    fn update_animation_tab(&mut self, input: &Input<'_>) {
        let Some(p) = self.pointer else {
            return;
        };
        if p.y < CONTENT_TOP {
            return;
        }
        if input.pointer_pressed() {
            self.spawn_burst(p, 30);
        } else if self.pointer_down && self.last_drag.is_some_and(|last| last != p) {
            self.spawn_burst(p, 3);
        }
    }

    fn update_scene_tab(&mut self, input: &Input<'_>, dt: f32) {
        let dir = input.direction();
        self.camera
            .orbit(dir.x * CAMERA_KEY_SPEED * dt, -dir.y * CAMERA_KEY_SPEED * dt);
        if let (Some(last), Some(p)) = (self.last_drag, self.pointer) {
            if self.pointer_down {
                let delta = p - last;
                self.camera
                    .orbit(-delta.x * CAMERA_DRAG_SPEED, delta.y * CAMERA_DRAG_SPEED);
            }
        }
    }

    fn draw_header(&self, canvas: &mut Canvas) {
        canvas.text("FEATURES DEMO", Vec2::new(20.0, 15.0), 24.0, colors::DARKGRAY);
        if self.show_fps {
            draw_fps(canvas, self.fps);
        }

        for tab in DemoTab::ALL {
            let pos = Vec2::new(tab.index() as f32 * TAB_WIDTH, TAB_BAR_TOP);
            let size = Vec2::new(TAB_WIDTH, TAB_BAR_HEIGHT);
            let (fill, ink) = if tab == self.tab {
                (colors::SKYBLUE, colors::DARKBLUE)
            } else {
                (colors::LIGHTGRAY, colors::DARKGRAY)
            };
            canvas.rect(pos, size, fill);
            canvas.rect_lines(pos, size, 1.0, colors::GRAY);
            let label = format!("{} {}", tab.index() + 1, tab.name_en());
            canvas.text_centered(&label, pos.x + TAB_WIDTH * 0.5, pos.y + 10.0, 10.0, ink);
        }
    }

    fn draw_footer(&self, canvas: &mut Canvas) {
        let hint = if self.touch {
            strings::INFO_HINT_TOUCH
        } else {
            strings::INFO_HINT
        };
        canvas.text(
            "LEFT/RIGHT or 1-6: switch tabs",
            Vec2::new(20.0, FOOTER_Y),
            10.0,
            colors::GRAY,
        );
        let x = SCREEN_WIDTH - canvas.text_width(hint, 10.0) - 20.0;
        canvas.text(hint, Vec2::new(x, FOOTER_Y), 10.0, colors::GRAY);
    }

    fn draw_shapes(&self, canvas: &mut Canvas) {
        let label = |canvas: &mut Canvas, text: &str, cx: f32, y: f32| {
            canvas.text_centered(text, cx, y, 10.0, colors::DARKGRAY);
        };

        canvas.circle(Vec2::new(120.0, 180.0), 50.0, colors::RED);
        canvas.circle_lines(Vec2::new(120.0, 330.0), 50.0, 3.0, colors::DARKBLUE);
        label(canvas, "CIRCLE", 120.0, 240.0);
        label(canvas, "OUTLINE", 120.0, 390.0);

        canvas.rect(Vec2::new(230.0, 130.0), Vec2::new(120.0, 100.0), colors::BLUE);
        canvas.rect_lines(
            Vec2::new(230.0, 280.0),
            Vec2::new(120.0, 100.0),
            3.0,
            colors::DARKGREEN,
        );
        label(canvas, "RECTANGLE", 290.0, 240.0);
        label(canvas, "RECT LINES", 290.0, 390.0);

        canvas.triangle(
            Vec2::new(470.0, 130.0),
            Vec2::new(410.0, 230.0),
            Vec2::new(530.0, 230.0),
            colors::VIOLET,
        );
        label(canvas, "TRIANGLE", 470.0, 240.0);

        canvas.gradient_h(
            Vec2::new(590.0, 130.0),
            Vec2::new(160.0, 100.0),
            colors::RED,
            colors::GOLD,
        );
        label(canvas, "GRADIENT", 670.0, 240.0);

        canvas.ring(Vec2::new(470.0, 330.0), 30.0, 50.0, colors::ORANGE);
        label(canvas, "RING", 470.0, 390.0);

        canvas.poly(Vec2::new(670.0, 330.0), 6, 50.0, self.time, colors::BROWN);
        label(canvas, "POLYGON", 670.0, 390.0);

        for i in 0..5 {
            let y = 430.0 + i as f32 * 22.0;
            canvas.line(
                Vec2::new(60.0, y),
                Vec2::new(740.0, y + 10.0),
                1.0 + i as f32,
                colors::LIME,
            );
        }
    }

    fn draw_text(&self, canvas: &mut Canvas) {
        let mut y = CONTENT_TOP + 10.0;
        for size in [10.0, 20.0, 30.0, 40.0] {
            canvas.text(&format!("Size {size:.0}"), Vec2::new(40.0, y), size, colors::DARKGRAY);
            y += size + 12.0;
        }

        let mut x = 40.0;
        for (color, word) in [(colors::RED, "RED "), (colors::GREEN, "GREEN "), (colors::BLUE, "BLUE")] {
            canvas.text(word, Vec2::new(x, 300.0), 20.0, color);
            x += canvas.text_width(word, 20.0);
        }

        let wave = "WAVE TEXT";
        let mut x = 40.0;
        for (i, c) in wave.chars().enumerate() {
            let glyph = c.to_string();
            let dy = (self.time * 4.0 + i as f32 * 0.5).sin() * 8.0;
            let color = hsv_to_rgba(i as f32 * 40.0, 0.8, 0.9, 1.0);
            canvas.text(&glyph, Vec2::new(x, 360.0 + dy), 30.0, color);
            x += canvas.text_width(&glyph, 30.0);
        }

        canvas.text(strings::UNICODE_SAMPLE, Vec2::new(40.0, 430.0), 20.0, colors::DARKBLUE);
        canvas.text(
            &format!("{} characters need a fallback font", self.missing.len()),
            Vec2::new(40.0, 465.0),
            10.0,
            colors::GRAY,
        );
    }

    fn draw_colors(&self, canvas: &mut Canvas) {
        for (i, (color, name)) in SWATCHES.iter().enumerate() {
            let x = 40.0 + i as f32 * 90.0;
            canvas.rect(Vec2::new(x, CONTENT_TOP + 10.0), Vec2::new(70.0, 50.0), *color);
            canvas.text_centered(name, x + 35.0, CONTENT_TOP + 66.0, 10.0, colors::DARKGRAY);
        }

        let strip_y = CONTENT_TOP + 95.0;
        for i in 0..72 {
            let color = hsv_to_rgba(i as f32 * 5.0, 1.0, 1.0, 1.0);
            canvas.rect(Vec2::new(40.0 + i as f32 * 10.0, strip_y), Vec2::new(10.0, 30.0), color);
        }

        let grad_y = strip_y + 55.0;
        canvas.gradient_v(
            Vec2::new(40.0, grad_y),
            Vec2::new(200.0, 140.0),
            colors::SKYBLUE,
            colors::DARKBLUE,
        );
        canvas.gradient_h(
            Vec2::new(270.0, grad_y),
            Vec2::new(200.0, 140.0),
            colors::GOLD,
            colors::MAROON,
        );
        canvas.circle_gradient(Vec2::new(620.0, grad_y + 70.0), 70.0, colors::WHITE, colors::PURPLE);

        let alpha_y = grad_y + 170.0;
        canvas.text("ALPHA", Vec2::new(40.0, alpha_y + 20.0), 10.0, colors::DARKGRAY);
        for i in 0..5 {
            let alpha = 0.2 * (i + 1) as f32;
            canvas.rect(
                Vec2::new(110.0 + i as f32 * 60.0, alpha_y),
                Vec2::new(90.0, 50.0),
                colors::with_alpha(colors::RED, alpha),
            );
        }
    }

    fn draw_input(&self, canvas: &mut Canvas) {
        let pointer = match self.pointer {
            Some(p) => format!("POINTER: {:.0}, {:.0}", p.x, p.y),
            None => "POINTER: OUTSIDE".to_string(),
        };
        let button = if self.pointer_down { "BUTTON: DOWN" } else { "BUTTON: UP" };
        let device = if self.touch { "DEVICE: TOUCH" } else { "DEVICE: MOUSE" };
        let key = match self.last_key {
            Some(k) => format!("LAST KEY: {}", k.label()),
            None => "LAST KEY: NONE".to_string(),
        };
        let lines = [
            pointer,
            button.to_string(),
            device.to_string(),
            format!("WHEEL: {:.1}", self.wheel),
            key,
            format!("DOTS: {}", self.dots.len()),
        ];
        for (i, line) in lines.iter().enumerate() {
            canvas.text(line, Vec2::new(40.0, 130.0 + i as f32 * 25.0), 10.0, colors::DARKGRAY);
        }
        canvas.text("BACKSPACE clears", Vec2::new(40.0, 300.0), 10.0, colors::GRAY);

        canvas.rect(DOT_AREA_POS, DOT_AREA_SIZE, colors::with_alpha(colors::SKYBLUE, 0.15));
        canvas.rect_lines(DOT_AREA_POS, DOT_AREA_SIZE, 2.0, colors::SKYBLUE);
        for dot in &self.dots {
            canvas.circle(*dot, 3.0, colors::DARKBLUE);
        }
        if let Some(p) = self.pointer.filter(|p| in_rect(*p, DOT_AREA_POS, DOT_AREA_SIZE)) {
            let color = if self.pointer_down { colors::RED } else { colors::GRAY };
            canvas.circle_lines(p, 10.0, 2.0, color);
        }
    }

    fn draw_animation(&self, canvas: &mut Canvas) {
        canvas.text(
            "Click or drag to spawn particles",
            Vec2::new(40.0, CONTENT_TOP + 10.0),
            10.0,
            colors::DARKGRAY,
        );
        canvas.text(
            &format!("PARTICLES: {}", self.particles.len()),
            Vec2::new(40.0, CONTENT_TOP + 30.0),
            10.0,
            colors::DARKGRAY,
        );

        for i in 0..12 {
            let phase = self.time * 3.0 + i as f32 * 0.5;
            let center = Vec2::new(100.0 + i as f32 * 50.0, 470.0 + phase.sin() * 30.0);
            canvas.circle(center, 10.0, hsv_to_rgba(i as f32 * 30.0, 0.7, 0.9, 1.0));
        }

        canvas.poly(
            Vec2::new(640.0, 220.0),
            4,
            60.0,
            self.time * std::f32::consts::FRAC_PI_2,
            colors::PURPLE,
        );

        for p in self.particles.iter() {
            canvas.circle(p.pos, p.size, p.faded_color());
        }
    }

    fn draw_scene(&self, canvas: &mut Canvas) {
        scene3d::draw_scene(
            canvas,
            &self.camera,
            self.cube_angle,
            Vec2::new(0.0, CONTENT_TOP),
            Vec2::new(SCREEN_WIDTH, FOOTER_Y - CONTENT_TOP - 10.0),
        );
        canvas.text(
            "ARROWS or drag to orbit",
            Vec2::new(20.0, CONTENT_TOP + 5.0),
            10.0,
            colors::DARKGRAY,
        );
    }

    fn draw_info(&self, canvas: &mut Canvas) {
        canvas.rect(
            Vec2::ZERO,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            colors::with_alpha(colors::BLACK, 0.4),
        );
        let pos = Vec2::new(100.0, 170.0);
        let size = Vec2::new(600.0, 220.0);
        canvas.rect(pos, size, colors::RAYWHITE);
        canvas.rect_lines(pos, size, 2.0, colors::DARKBLUE);

        let feature = self.tab.feature();
        let cx = SCREEN_WIDTH * 0.5;
        canvas.text_centered(feature.name_en, cx, pos.y + 25.0, 20.0, colors::DARKBLUE);
        canvas.text_centered(feature.desc_en, cx, pos.y + 80.0, 10.0, colors::DARKGRAY);
        canvas.text_centered(feature.usage_en, cx, pos.y + 110.0, 10.0, colors::GRAY);
        let close = if self.touch { "Double tap to close" } else { "Press I to close" };
        canvas.text_centered(close, cx, pos.y + 180.0, 10.0, colors::GRAY);
    }
}

impl Demo for ShowcaseDemo {
    fn title(&self) -> String {
        strings::APP_TITLE.into()
    }

    fn update(&mut self, input: &Input<'_>, dt: f32) {
        self.time += dt;
        if let Some(t) = self.since_last_tap.as_mut() {
            *t += dt;
        }

        self.pointer = input.pointer();
        self.pointer_down = input.pointer_down();
        self.touch = input.state.touch;
        self.wheel += input.frame.wheel;
        if let Some(key) = input.frame.keys_pressed.last() {
            self.last_key = Some(*key);
        }

        self.handle_navigation(input);

        match self.tab {
            DemoTab::Input => self.update_input_tab(input),
            DemoTab::Animation => self.update_animation_tab(input),
            DemoTab::ThreeD => self.update_scene_tab(input, dt),
            _ => {}
        }

        self.particles.update(dt);
        self.cube_angle = (self.cube_angle + CUBE_SPIN * dt) % std::f32::consts::TAU;
        self.last_drag = if self.pointer_down { self.pointer } else { None };
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.draw_header(canvas);
        match self.tab {
            DemoTab::Shapes => self.draw_shapes(canvas),
            DemoTab::Text => self.draw_text(canvas),
            DemoTab::Colors => self.draw_colors(canvas),
            DemoTab::Input => self.draw_input(canvas),
            DemoTab::Animation => self.draw_animation(canvas),
            DemoTab::ThreeD => self.draw_scene(canvas),
        }
        self.draw_footer(canvas);
        if self.show_info {
            self.draw_info(canvas);
        }
    }

    fn status(&self) -> String {
        format!(
            "{} / {} | {:.0} FPS",
            self.tab.name_en(),
            self.tab.name_cn(),
            self.fps
        )
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

    fn demo() -> ShowcaseDemo {
        ShowcaseDemo::new(&Settings {
            seed: Some(7),
            ..Settings::default()
        })
    }

    fn press(demo: &mut ShowcaseDemo, key: Key) {
        let state = InputState::default();
        let frame = InputFrame {
            keys_pressed: vec![key],
            ..Default::default()
        };
        demo.update(&Input::new(&state, &frame), SIM_DT);
    }

    fn idle(demo: &mut ShowcaseDemo, state: &InputState) {
        demo.update(&Input::new(state, &InputFrame::default()), SIM_DT);
    }

    fn tap(demo: &mut ShowcaseDemo, at: Vec2) {
        let mut state = InputState {
            pointer_pos: Some(at),
            pointer_down: true,
            ..Default::default()
        };
        let frame = InputFrame {
            pointer_pressed: true,
            ..Default::default()
        };
        demo.update(&Input::new(&state, &frame), SIM_DT);
        state.pointer_down = false;
        let frame = InputFrame {
            pointer_released: true,
            ..Default::default()
        };
        demo.update(&Input::new(&state, &frame), SIM_DT);
    }

    #[test]
    fn test_arrow_keys_wrap_tabs() {
        let mut demo = demo();
        press(&mut demo, Key::ArrowLeft);
        assert_eq!(demo.tab(), DemoTab::ThreeD);
        press(&mut demo, Key::Tab);
        assert_eq!(demo.tab(), DemoTab::Shapes);
        press(&mut demo, Key::ArrowRight);
        assert_eq!(demo.tab(), DemoTab::Text);
    }

    #[test]
    fn test_digits_select_tabs() {
        let mut demo = demo();
        press(&mut demo, Key::Digit4);
        assert_eq!(demo.tab(), DemoTab::Input);
        press(&mut demo, Key::Digit0);
        assert_eq!(demo.tab(), DemoTab::Input);
        press(&mut demo, Key::Digit6);
        assert_eq!(demo.tab(), DemoTab::ThreeD);
    }

    #[test]
    fn test_arrows_orbit_camera_on_scene_tab() {
        let mut demo = demo();
        demo.select(DemoTab::ThreeD);
        let yaw = demo.camera().yaw;
        let state = InputState {
            keys_down: [Key::ArrowRight].into_iter().collect(),
            ..Default::default()
        };
        let frame = InputFrame {
            keys_pressed: vec![Key::ArrowRight],
            ..Default::default()
        };
        demo.update(&Input::new(&state, &frame), SIM_DT);
        assert_eq!(demo.tab(), DemoTab::ThreeD);
        assert!(demo.camera().yaw > yaw);
    }

    #[test]
    fn test_clicking_tab_bar_selects_column() {
        let mut demo = demo();
        tap(&mut demo, Vec2::new(TAB_WIDTH * 2.5, TAB_BAR_TOP + 5.0));
        assert_eq!(demo.tab(), DemoTab::Colors);
        assert!(!demo.show_info());
    }

    #[test]
    fn test_double_tap_toggles_info() {
        let mut demo = demo();
        let at = Vec2::new(400.0, 300.0);
        tap(&mut demo, at);
        assert!(!demo.show_info());
        tap(&mut demo, at);
        assert!(demo.show_info());

        // Slow taps do nothing
        tap(&mut demo, at);
        for _ in 0..30 {
            idle(&mut demo, &InputState::default());
        }
        tap(&mut demo, at);
        assert!(demo.show_info());
    }

    #[test]
    fn test_info_key_toggles() {
        let mut demo = demo();
        press(&mut demo, Key::I);
        assert!(demo.show_info());
        press(&mut demo, Key::I);
        assert!(!demo.show_info());
    }

    #[test]
    fn test_dots_are_bounded() {
        let mut demo = demo();
        demo.select(DemoTab::Input);
        for i in 0..(MAX_DOTS + 50) {
            let x = DOT_AREA_POS.x + 1.0 + (i % 150) as f32 * 3.0;
            let y = DOT_AREA_POS.y + 1.0 + (i / 150) as f32 * 10.0;
            let state = InputState {
                pointer_pos: Some(Vec2::new(x, y)),
                pointer_down: true,
                ..Default::default()
            };
            idle(&mut demo, &state);
        }
        assert_eq!(demo.dot_count(), MAX_DOTS);

        press(&mut demo, Key::Backspace);
        assert_eq!(demo.dot_count(), 0);
    }

    #[test]
    fn test_click_spawns_capped_particles() {
        let mut demo = demo();
        demo.select(DemoTab::Animation);
        tap(&mut demo, Vec2::new(400.0, 300.0));
        assert!(demo.particle_count() > 0);
        for _ in 0..100 {
            tap(&mut demo, Vec2::new(400.0, 300.0));
            assert!(demo.particle_count() <= MAX_PARTICLES);
        }
    }

    #[test]
    fn test_status_is_bilingual() {
        let mut demo = demo();
        press(&mut demo, Key::Digit5);
        let status = demo.status();
        assert!(status.contains("Animation"));
        assert!(status.contains("动画"));
    }

    #[test]
    fn test_every_tab_draws() {
        let mut demo = demo();
        for tab in DemoTab::ALL {
            demo.select(tab);
            let mut canvas = Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT);
            demo.draw(&mut canvas);
            assert!(!canvas.vertices().is_empty(), "{:?} drew nothing", tab);
        }
    }
}
