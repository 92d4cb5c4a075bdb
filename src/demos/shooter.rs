//! Space shooter
//!
//! Thin shell around the deterministic `sim`: turns input into `TickInput`,
//! reacts to game events (leaderboard, logging) and draws each phase.

use glam::Vec2;

use super::{Demo, FrameStats, draw_fps};
use crate::consts::{
    BULLET_RADIUS, ENEMY_RADIUS, PLAYER_MAX_HEALTH, PLAYER_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::highscores::HighScores;
use crate::platform::{Input, InputMode, PointerInput};
use crate::renderer::{Canvas, colors};
use crate::settings::{InputPreference, Settings};
use crate::sim::effects::PLAYER_COLOR;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

const BULLET_COLOR: [f32; 4] = [1.0, 0.95, 0.4, 1.0];
const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.6];

pub struct ShooterDemo {
    state: GameState,
    controls: InputMode,
    /// Switch to pointer controls on the first touch
    auto_detect: bool,
    high_scores: HighScores,
    /// Leaderboard rank of the last finished run
    last_rank: Option<usize>,
    show_fps: bool,
    starfield: bool,
    fps: f32,
    /// Wall-clock seconds, drives blinking prompts
    time: f32,
}

impl ShooterDemo {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed_or_random();
        let state = GameState::new(seed).with_particle_cap(settings.max_particles());
        let controls = InputMode::from_preference(settings.input);
        log::info!(
            "Shooter ready: seed {}, {} controls, particle cap {}",
            seed,
            controls.name(),
            settings.max_particles()
        );

        Self {
            state,
            controls,
            auto_detect: settings.input == InputPreference::Auto,
            high_scores: HighScores::new(),
            last_rank: None,
            show_fps: settings.show_fps,
            starfield: settings.quality.starfield_enabled(),
            fps: 0.0,
            time: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    fn handle_events(&mut self) {
        for event in &self.state.events {
            match *event {
                GameEvent::SessionStarted => self.last_rank = None,
                GameEvent::GameOver { score, wave } => {
                    self.last_rank = self.high_scores.add_score(score, wave);
                    if let Some(rank) = self.last_rank {
                        log::info!("new high score #{rank}: {score} (wave {wave})");
                    }
                }
                GameEvent::PlayerHit { health } => log::debug!("player hit, {health} hp left"),
                GameEvent::Paused | GameEvent::Resumed | GameEvent::ReturnedToMenu => {
                    log::debug!("{event:?}")
                }
                _ => {}
            }
        }
    }

    fn draw_stars(&self, canvas: &mut Canvas) {
        if !self.starfield {
            return;
        }
        for (i, star) in self.state.stars.iter().enumerate() {
            let y = (star.y + self.state.star_offset).rem_euclid(SCREEN_HEIGHT);
            let size = if i % 3 == 0 { 2.0 } else { 1.0 };
            canvas.rect(Vec2::new(star.x, y), Vec2::splat(size), colors::GRAY);
        }
    }

    fn draw_world(&self, canvas: &mut Canvas) {
        for (_, bullet) in self.state.bullets.iter() {
            canvas.circle(bullet.pos, BULLET_RADIUS, BULLET_COLOR);
        }

        for (_, enemy) in self.state.enemies.iter() {
            canvas.poly(enemy.pos, 6, ENEMY_RADIUS, enemy.rotation, enemy.color());
            canvas.circle(enemy.pos, ENEMY_RADIUS * 0.4, colors::with_alpha(colors::BLACK, 0.4));
        }

        for particle in self.state.particles.iter() {
            canvas.circle(particle.pos, particle.size, particle.faded_color());
        }

        let player = &self.state.player;
        // Blink while invincible
        let visible = !player.invincible || (player.invincible_timer * 10.0) as i32 % 2 == 0;
        if visible && self.state.phase != GamePhase::GameOver {
            let p = player.pos;
            let r = PLAYER_RADIUS;
            canvas.triangle(
                p + Vec2::new(0.0, -r),
                p + Vec2::new(-r, r),
                p + Vec2::new(r, r),
                PLAYER_COLOR,
            );
            canvas.circle(p + Vec2::new(0.0, r * 0.2), r * 0.3, colors::WHITE);
        }
    }

    fn draw_hud(&self, canvas: &mut Canvas) {
        let player = &self.state.player;
        canvas.text(
            &format!("SCORE: {}", player.score),
            Vec2::new(10.0, 10.0),
            16.0,
            colors::WHITE,
        );
        canvas.text(
            &format!("WAVE: {}", self.state.wave),
            Vec2::new(10.0, 32.0),
            16.0,
            colors::SKYBLUE,
        );

        canvas.text("HP", Vec2::new(10.0, 54.0), 16.0, colors::WHITE);
        for i in 0..PLAYER_MAX_HEALTH {
            let color = if i < player.health {
                colors::RED
            } else {
                colors::DARKGRAY
            };
            canvas.rect(
                Vec2::new(36.0 + i as f32 * 18.0, 54.0),
                Vec2::new(14.0, 12.0),
                color,
            );
        }

        if self.show_fps {
            draw_fps(canvas, self.fps);
        }
    }

    fn draw_menu(&self, canvas: &mut Canvas) {
        let cx = SCREEN_WIDTH * 0.5;
        canvas.text_centered("SPACE SHOOTER", cx, 140.0, 48.0, colors::GOLD);

        let prompt = if self.controls.is_pointer() {
            "TAP TO START"
        } else {
            "PRESS SPACE OR ENTER TO START"
        };
        if (self.time * 2.0) as i32 % 2 == 0 {
            canvas.text_centered(prompt, cx, 260.0, 20.0, colors::WHITE);
        }

        let help = if self.controls.is_pointer() {
            "DRAG TO MOVE - HOLD TO FIRE - DOUBLE TAP TO PAUSE"
        } else {
            "ARROWS/WASD MOVE - SPACE FIRE - P PAUSE"
        };
        canvas.text_centered(help, cx, 310.0, 12.0, colors::LIGHTGRAY);

        if let Some(best) = self.high_scores.top_score() {
            canvas.text_centered(
                &format!("BEST: {best}"),
                cx,
                360.0,
                16.0,
                colors::SKYBLUE,
            );
        }
    }

    fn draw_paused(&self, canvas: &mut Canvas) {
        canvas.rect(Vec2::ZERO, canvas.size(), OVERLAY);
        let cx = SCREEN_WIDTH * 0.5;
        canvas.text_centered("PAUSED", cx, 240.0, 40.0, colors::WHITE);
        let hint = if self.controls.is_pointer() {
            "DOUBLE TAP TO RESUME"
        } else {
            "PRESS P TO RESUME"
        };
        canvas.text_centered(hint, cx, 300.0, 16.0, colors::LIGHTGRAY);
    }

    fn draw_game_over(&self, canvas: &mut Canvas) {
        canvas.rect(Vec2::ZERO, canvas.size(), OVERLAY);
        let cx = SCREEN_WIDTH * 0.5;
        canvas.text_centered("GAME OVER", cx, 100.0, 48.0, colors::RED);
        canvas.text_centered(
            &format!(
                "SCORE: {}   WAVE: {}",
                self.state.player.score, self.state.wave
            ),
            cx,
            170.0,
            20.0,
            colors::WHITE,
        );
        if let Some(rank) = self.last_rank {
            canvas.text_centered(
                &format!("NEW HIGH SCORE! RANK #{rank}"),
                cx,
                200.0,
                16.0,
                colors::GOLD,
            );
        }

        canvas.text_centered("HIGH SCORES", cx, 240.0, 16.0, colors::SKYBLUE);
        for (i, entry) in self.high_scores.entries.iter().enumerate() {
            let color = if Some(i + 1) == self.last_rank {
                colors::GOLD
            } else {
                colors::LIGHTGRAY
            };
            canvas.text_centered(
                &format!("{:>2}. {:>6}  WAVE {}", i + 1, entry.score, entry.wave),
                cx,
                266.0 + i as f32 * 20.0,
                12.0,
                color,
            );
        }

        let prompt = if self.controls.is_pointer() {
            "TAP FOR MENU"
        } else {
            "PRESS ENTER FOR MENU"
        };
        canvas.text_centered(prompt, cx, 530.0, 16.0, colors::WHITE);
    }
}

impl Demo for ShooterDemo {
    fn title(&self) -> String {
        "Space Shooter".into()
    }

    fn update(&mut self, input: &Input<'_>, dt: f32) {
        if self.auto_detect && input.state.touch && !self.controls.is_pointer() {
            log::info!("touch detected, switching to pointer controls");
            self.controls = InputMode::Pointer(PointerInput::default());
        }

        let tick_input = self
            .controls
            .tick_input(input, self.state.player.pos, dt);
        tick(&mut self.state, &tick_input, dt);
        self.handle_events();
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.draw_stars(canvas);
        match self.state.phase {
            GamePhase::Menu => {
                // Leftover explosions fade behind the title
                for particle in self.state.particles.iter() {
                    canvas.circle(particle.pos, particle.size, particle.faded_color());
                }
                self.draw_menu(canvas);
            }
            GamePhase::Playing => {
                self.draw_world(canvas);
                self.draw_hud(canvas);
            }
            GamePhase::Paused => {
                self.draw_world(canvas);
                self.draw_hud(canvas);
                self.draw_paused(canvas);
            }
            GamePhase::GameOver => {
                self.draw_world(canvas);
                self.draw_game_over(canvas);
            }
        }
    }

    fn status(&self) -> String {
        let phase = match self.state.phase {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game over",
        };
        format!(
            "{} - score {} - wave {} - {} particles - {:.0} FPS",
            phase,
            self.state.player.score,
            self.state.wave,
            self.state.particles.len(),
            self.fps
        )
    }

    fn clear_color(&self) -> [f32; 4] {
        colors::SPACE
    }

    fn exit_on_escape(&self) -> bool {
        // Escape pauses instead
        false
    }

    fn on_frame(&mut self, stats: &FrameStats) {
        self.fps = stats.fps;
        self.time += stats.dt;
    }
}
