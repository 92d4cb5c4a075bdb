//! Platform layer
//!
//! - `input`: key/pointer state fed from window events
//! - `controls`: keyboard and pointer schemes for the shooter
//! - `clock`: frame timing and FPS
//! - `window`: winit event loop driving a `Demo`

pub mod clock;
pub mod controls;
pub mod input;
pub mod window;

pub use clock::FrameClock;
pub use controls::{InputMode, KeyboardInput, PointerInput};
pub use input::{Input, InputEvent, InputFrame, InputState, Key};
pub use window::run;
