use bloxel_core::math::IVec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::{EditKeys, Input, MouseButton};

impl Input {
    /// Feed a window event. Returns true if the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse
                    .set_position(IVec2::new(position.x as i32, position.y as i32));
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    _ => return false,
                };
                self.mouse
                    .set_button(button, *state == ElementState::Pressed);
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || !self.keyboard.is_enabled() {
                    return false;
                }
                match &event.logical_key {
                    Key::Named(NamedKey::Backspace) => self.keyboard.push_char('\u{8}'),
                    Key::Named(NamedKey::Enter) => self.keyboard.push_char('\r'),
                    Key::Named(NamedKey::Escape) => self.keyboard.push_char('\u{1b}'),
                    Key::Named(NamedKey::ArrowLeft) => self.keyboard.press(EditKeys::LEFT),
                    Key::Named(NamedKey::ArrowRight) => self.keyboard.press(EditKeys::RIGHT),
                    Key::Character(c) if self.modifiers.control_key() => {
                        if c.eq_ignore_ascii_case("a") {
                            self.keyboard.push_char('\u{1}');
                        }
                    }
                    _ => {
                        if let Some(text) = &event.text {
                            self.keyboard.push_str(text);
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }
}
