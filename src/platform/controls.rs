//! Control schemes mapping raw input to shooter `TickInput`
//!
//! One capability type covers both desktop and touch play. The scheme is
//! chosen at startup from settings; in `auto` mode the first touch switches
//! a keyboard scheme over to pointer controls.

use glam::Vec2;

use super::input::{Input, Key};
use crate::settings::InputPreference;
use crate::sim::TickInput;

/// Pointer must be this far from the player before it pulls the ship
pub const TOUCH_DEADZONE: f32 = 50.0;
/// Maximum gap between two taps counted as a double-tap (seconds)
pub const DOUBLE_TAP_WINDOW: f32 = 0.3;

const PAUSE_KEYS: [Key; 2] = [Key::P, Key::Escape];

/// Arrow keys / WASD to move, SPACE or left mouse to fire
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn tick_input(&mut self, input: &Input<'_>) -> TickInput {
        TickInput {
            movement: input.direction(),
            fire: input.key_down(Key::Space) || input.pointer_down(),
            pause: input.any_pressed(&PAUSE_KEYS),
            confirm: input.any_pressed(&[Key::Space, Key::Enter]) || input.pointer_pressed(),
        }
    }
}

/// Drag-to-move with auto-fire, tap to confirm, double-tap to pause
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Seconds since the last tap, None before the first one
    since_last_tap: Option<f32>,
}

impl PointerInput {
    pub fn tick_input(&mut self, input: &Input<'_>, player_pos: Vec2, dt: f32) -> TickInput {
        if let Some(t) = self.since_last_tap.as_mut() {
            *t += dt;
        }

        let mut pause = input.any_pressed(&PAUSE_KEYS);
        if input.pointer_pressed() {
            match self.since_last_tap {
                Some(t) if t <= DOUBLE_TAP_WINDOW => {
                    pause = true;
                    // A third tap starts a new pair
                    self.since_last_tap = None;
                }
                _ => self.since_last_tap = Some(0.0),
            }
        }

        let movement = match input.pointer() {
            Some(target) if input.pointer_down() => {
                let offset = target - player_pos;
                if offset.length() > TOUCH_DEADZONE {
                    offset.normalize()
                } else {
                    Vec2::ZERO
                }
            }
            _ => Vec2::ZERO,
        };

        TickInput {
            movement,
            fire: input.pointer_down(),
            pause,
            confirm: input.pointer_pressed(),
        }
    }
}

/// The active control scheme
#[derive(Debug, Clone)]
pub enum InputMode {
    Keyboard(KeyboardInput),
    Pointer(PointerInput),
}

impl InputMode {
    /// Initial scheme for a preference; `Auto` starts on the keyboard
    pub fn from_preference(pref: InputPreference) -> Self {
        match pref {
            InputPreference::Pointer => InputMode::Pointer(PointerInput::default()),
            InputPreference::Auto | InputPreference::Keyboard => {
                InputMode::Keyboard(KeyboardInput)
            }
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, InputMode::Pointer(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputMode::Keyboard(_) => "keyboard",
            InputMode::Pointer(_) => "pointer",
        }
    }

    pub fn tick_input(&mut self, input: &Input<'_>, player_pos: Vec2, dt: f32) -> TickInput {
        match self {
            InputMode::Keyboard(keyboard) => keyboard.tick_input(input),
            InputMode::Pointer(pointer) => pointer.tick_input(input, player_pos, dt),
        }
    }
}
