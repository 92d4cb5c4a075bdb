//! Platform-agnostic input state
//!
//! `InputState` holds what is currently down; `InputFrame` records the
//! transitions that happened since the last simulation step. Both are fed by
//! `InputEvent`s translated from winit in `platform::window`.

use std::collections::HashSet;

use glam::Vec2;

/// Keyboard key identifier
///
/// Only keys the demos react to get their own variant; everything else maps
/// to `Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Other,
}

impl Key {
    /// Numeric value of a digit key
    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Digit0 => Some(0),
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            Key::Digit4 => Some(4),
            Key::Digit5 => Some(5),
            Key::Digit6 => Some(6),
            Key::Digit7 => Some(7),
            Key::Digit8 => Some(8),
            Key::Digit9 => Some(9),
            _ => None,
        }
    }

    /// Short printable label
    pub fn label(self) -> String {
        match self {
            Key::Escape => "ESC".into(),
            Key::Enter => "ENTER".into(),
            Key::Tab => "TAB".into(),
            Key::Space => "SPACE".into(),
            Key::Backspace => "BACKSPACE".into(),
            Key::ArrowUp => "UP".into(),
            Key::ArrowDown => "DOWN".into(),
            Key::ArrowLeft => "LEFT".into(),
            Key::ArrowRight => "RIGHT".into(),
            Key::Other => "?".into(),
            key => match key.digit() {
                Some(d) => d.to_string(),
                None => format!("{key:?}"),
            },
        }
    }
}

/// Raw input event after translation from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, pressed: bool, repeat: bool },
    /// Pointer moved, in logical canvas coordinates
    PointerMoved(Vec2),
    /// Primary button or first touch went down/up
    PointerButton { pressed: bool, pos: Vec2, touch: bool },
    PointerLeft,
    Wheel(f32),
    Focused(bool),
}

/// Current input state for the window
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub focused: bool,
    /// Pointer position in logical canvas coordinates
    pub pointer_pos: Option<Vec2>,
    /// Primary pointer (left button or first touch) is held
    pub pointer_down: bool,
    /// The most recent pointer activity came from a touch screen
    pub touch: bool,
    pub keys_down: HashSet<Key>,
}

/// Transitions since the last consumed step
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputFrame {
    /// Keys pressed this frame in press order (auto-repeat excluded)
    pub keys_pressed: Vec<Key>,
    pub keys_released: Vec<Key>,
    pub pointer_pressed: bool,
    pub pointer_released: bool,
    pub wheel: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.pointer_pressed = false;
        self.pointer_released = false;
        self.wheel = 0.0;
    }

    pub fn is_empty(&self) -> bool {
        self.keys_pressed.is_empty()
            && self.keys_released.is_empty()
            && !self.pointer_pressed
            && !self.pointer_released
            && self.wheel == 0.0
    }
}

impl InputState {
    /// Apply an event to the held state and record transitions into `frame`
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Avoid stuck keys when focus changes mid-press
                    self.keys_down.clear();
                    self.pointer_down = false;
                }
            }
            InputEvent::Key {
                key,
                pressed,
                repeat,
            } => {
                if pressed {
                    if self.keys_down.insert(key) && !repeat {
                        frame.keys_pressed.push(key);
                    }
                } else if self.keys_down.remove(&key) {
                    frame.keys_released.push(key);
                }
            }
            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = Some(pos);
            }
            InputEvent::PointerButton {
                pressed,
                pos,
                touch,
            } => {
                self.pointer_pos = Some(pos);
                self.touch = touch;
                if pressed && !self.pointer_down {
                    self.pointer_down = true;
                    frame.pointer_pressed = true;
                } else if !pressed && self.pointer_down {
                    self.pointer_down = false;
                    frame.pointer_released = true;
                }
            }
            InputEvent::PointerLeft => {
                if !self.pointer_down {
                    self.pointer_pos = None;
                }
            }
            InputEvent::Wheel(delta) => {
                frame.wheel += delta;
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

/// Read-only view handed to demos for one simulation step
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    pub state: &'a InputState,
    pub frame: &'a InputFrame,
}

impl<'a> Input<'a> {
    pub fn new(state: &'a InputState, frame: &'a InputFrame) -> Self {
        Self { state, frame }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.state.key_down(*k))
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.frame.keys_pressed.contains(&key)
    }

    pub fn any_pressed(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.key_pressed(*k))
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.state.pointer_pos
    }

    pub fn pointer_down(&self) -> bool {
        self.state.pointer_down
    }

    pub fn pointer_pressed(&self) -> bool {
        self.frame.pointer_pressed
    }

    pub fn pointer_released(&self) -> bool {
        self.frame.pointer_released
    }

    /// Arrow keys or WASD as a direction (y down); not normalized
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.any_down(&[Key::ArrowLeft, Key::A]) {
            dir.x -= 1.0;
        }
        if self.any_down(&[Key::ArrowRight, Key::D]) {
            dir.x += 1.0;
        }
        if self.any_down(&[Key::ArrowUp, Key::W]) {
            dir.y -= 1.0;
        }
        if self.any_down(&[Key::ArrowDown, Key::S]) {
            dir.y += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key,
            pressed,
            repeat: false,
        }
    }

    #[test]
    fn test_press_and_release_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Space, true));
        state.apply_event(
            &mut frame,
            InputEvent::Key {
                key: Key::Space,
                pressed: true,
                repeat: true,
            },
        );
        assert_eq!(frame.keys_pressed, vec![Key::Space]);
        assert!(state.key_down(Key::Space));

        state.apply_event(&mut frame, key(Key::Space, false));
        assert_eq!(frame.keys_released, vec![Key::Space]);
        assert!(!state.key_down(Key::Space));
    }

    #[test]
    fn test_focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::A, true));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn test_pointer_button_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let pos = Vec2::new(10.0, 20.0);

        state.apply_event(
            &mut frame,
            InputEvent::PointerButton {
                pressed: true,
                pos,
                touch: true,
            },
        );
        assert!(frame.pointer_pressed);
        assert!(state.pointer_down);
        assert!(state.touch);
        assert_eq!(state.pointer_pos, Some(pos));

        frame.clear();
        assert!(frame.is_empty());
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton {
                pressed: false,
                pos,
                touch: true,
            },
        );
        assert!(frame.pointer_released);
        assert!(!state.pointer_down);
    }

    #[test]
    fn test_direction_from_wasd_and_arrows() {
        let mut state = InputState::default();
        let frame = InputFrame::default();
        state.keys_down.insert(Key::A);
        state.keys_down.insert(Key::ArrowDown);
        let input = Input::new(&state, &frame);
        assert_eq!(input.direction(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(Key::Digit7.label(), "7");
        assert_eq!(Key::Q.label(), "Q");
        assert_eq!(Key::ArrowLeft.label(), "LEFT");
    }
}
