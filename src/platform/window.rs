//! Window and event loop
//!
//! Owns the winit window and the render state and drives a [`Demo`] with a
//! fixed-timestep accumulator. One-shot inputs (presses, taps) are handed to
//! the first substep of a frame only, so they are never applied twice and
//! never lost on frames that run zero substeps.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::clock::FrameClock;
use super::input::{Input, InputEvent, InputFrame, InputState, Key};
use crate::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use crate::demos::{Demo, FrameStats, GpuSummary};
use crate::renderer::{Canvas, RenderState, SurfaceAction, Viewport};

/// Window title refresh interval (seconds)
const TITLE_REFRESH: f32 = 0.5;

/// Open a window and run `demo` until the window closes
pub fn run<D: Demo + 'static>(demo: D) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(demo);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => {
            log::info!("{} finished", app.demo.title());
            Ok(())
        }
    }
}

struct App<D: Demo> {
    demo: D,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    canvas: Canvas,
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    /// Unsimulated time carried to the next frame
    accumulator: f32,
    title_timer: f32,
    /// Touch id currently acting as the pointer
    active_touch: Option<u64>,
    fatal: Option<anyhow::Error>,
}

impl<D: Demo> App<D> {
    fn new(demo: D) -> Self {
        Self {
            demo,
            window: None,
            render: None,
            canvas: Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::new(),
            accumulator: 0.0,
            title_timer: TITLE_REFRESH,
            active_touch: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.demo.title())
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let render = pollster::block_on(RenderState::new(
            window.clone(),
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ))?;

        let info = render.adapter_info();
        let summary = GpuSummary {
            adapter: info.name.clone(),
            backend: format!("{:?}", info.backend),
            surface_format: format!("{:?}", render.surface_format()),
        };
        log::info!(
            "Renderer ready: {} ({}), surface {}",
            summary.adapter,
            summary.backend,
            summary.surface_format
        );
        self.demo.on_gpu_ready(&summary);

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.clock.reset();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn viewport(&self) -> Viewport {
        match &self.render {
            Some(render) => *render.viewport(),
            None => Viewport::new(
                Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                SCREEN_WIDTH as u32,
                SCREEN_HEIGHT as u32,
            ),
        }
    }

    fn to_canvas(&self, pos: PhysicalPosition<f64>) -> Vec2 {
        self.viewport()
            .to_logical(Vec2::new(pos.x as f32, pos.y as f32))
    }

    fn apply(&mut self, ev: InputEvent) {
        self.input_state.apply_event(&mut self.input_frame, ev);
    }

    /// Run pending simulation steps, then draw and present
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        self.accumulator += dt;

        let empty = InputFrame::default();
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            let frame = if steps == 0 {
                &self.input_frame
            } else {
                &empty
            };
            self.demo
                .update(&Input::new(&self.input_state, frame), SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::trace!("dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        if steps > 0 {
            self.input_frame.clear();
        }

        self.demo.on_frame(&FrameStats {
            dt,
            fps: self.clock.fps(),
        });

        self.canvas.clear(self.demo.clear_color());
        self.demo.draw(&mut self.canvas);

        let action = match self.render.as_mut() {
            Some(render) => match render.render(&self.canvas) {
                Ok(()) => None,
                Err(err) => Some(render.handle_surface_error(err)),
            },
            None => None,
        };
        match action {
            Some(SurfaceAction::Reconfigured) => log::warn!("surface lost, reconfigured"),
            Some(SurfaceAction::SkipFrame) => log::debug!("frame skipped"),
            Some(SurfaceAction::Fatal) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
                return;
            }
            None => {}
        }

        self.title_timer += dt;
        if self.title_timer >= TITLE_REFRESH {
            self.title_timer = 0.0;
            if let Some(window) = &self.window {
                let status = self.demo.status();
                if status.is_empty() {
                    window.set_title(&self.demo.title());
                } else {
                    window.set_title(&format!("{} | {}", self.demo.title(), status));
                }
            }
        }
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err.context("failed to start"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    render.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            WindowEvent::Focused(focused) => self.apply(InputEvent::Focused(focused)),
            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                let pressed = event.state == ElementState::Pressed;
                if pressed && key == Key::Escape && self.demo.exit_on_escape() {
                    event_loop.exit();
                    return;
                }
                self.apply(InputEvent::Key {
                    key,
                    pressed,
                    repeat: event.repeat,
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_canvas(position);
                self.apply(InputEvent::PointerMoved(pos));
            }
            WindowEvent::CursorLeft { .. } => self.apply(InputEvent::PointerLeft),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.input_state.pointer_pos.unwrap_or(Vec2::ZERO);
                self.apply(InputEvent::PointerButton {
                    pressed: state == ElementState::Pressed,
                    pos,
                    touch: false,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 20.0,
                };
                self.apply(InputEvent::Wheel(lines));
            }
            WindowEvent::Touch(touch) => {
                // Only the first finger drives the pointer
                if self.active_touch.is_some_and(|id| id != touch.id) {
                    return;
                }
                let pos = self.to_canvas(touch.location);
                match touch.phase {
                    TouchPhase::Started => {
                        self.active_touch = Some(touch.id);
                        self.apply(InputEvent::PointerButton {
                            pressed: true,
                            pos,
                            touch: true,
                        });
                    }
                    TouchPhase::Moved => self.apply(InputEvent::PointerMoved(pos)),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.active_touch = None;
                        self.apply(InputEvent::PointerButton {
                            pressed: false,
                            pos,
                            touch: true,
                        });
                    }
                }
            }
            _ => {}
        }
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let code = match pk {
        PhysicalKey::Code(code) => code,
        PhysicalKey::Unidentified(_) => return Key::Other,
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,
        KeyCode::Backspace => Key::Backspace,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit0,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Digit3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Digit4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Digit5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Digit6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Digit7,
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Digit8,
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Digit9,

        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_letters_and_digits() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Numpad3)), Key::Digit3);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F5)), Key::Other);
    }
}
