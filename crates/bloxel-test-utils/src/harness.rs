//! Frame-by-frame input scripting.

use std::time::Duration;

use bloxel_core::math::IVec2;
use bloxel_gui::{ControlEvent, FrameTime, GuiConfig, GuiManager};
use bloxel_input::{EditKeys, MouseButton};

use crate::mock_render::{DrawCall, MockRenderer, mock_content};

/// A [`GuiManager`] on a [`MockRenderer`] with a simulated clock.
///
/// Every input helper runs exactly one update and returns the events it
/// produced, so press and release land on separate frames the way real
/// input does.
pub struct GuiHarness {
    pub gui: GuiManager,
    pub renderer: MockRenderer,
    now: Duration,
    step: Duration,
}

impl GuiHarness {
    pub fn new() -> Self {
        Self::with_config(GuiConfig::default())
    }

    pub fn with_config(config: GuiConfig) -> Self {
        let renderer = MockRenderer::new();
        let gui = GuiManager::new(config, mock_content(), Box::new(renderer.clone()))
            .expect("failed to create GUI manager");
        Self {
            gui,
            renderer,
            now: Duration::ZERO,
            step: Duration::from_millis(16),
        }
    }

    /// Simulated time of the last frame.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock without running a frame.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Run one update with whatever input is pending.
    pub fn frame(&mut self) -> Vec<ControlEvent> {
        self.now += self.step;
        self.gui
            .update(FrameTime::new(self.now, self.step))
            .expect("GUI update failed");
        self.gui.pop_events()
    }

    /// Run `count` idle frames and collect their events.
    pub fn frames(&mut self, count: usize) -> Vec<ControlEvent> {
        (0..count).flat_map(|_| self.frame()).collect()
    }

    pub fn move_mouse(&mut self, position: IVec2) -> Vec<ControlEvent> {
        self.gui.input_mut().mouse.set_position(position);
        self.frame()
    }

    pub fn press(&mut self, button: MouseButton) -> Vec<ControlEvent> {
        self.gui.input_mut().mouse.set_button(button, true);
        self.frame()
    }

    pub fn release(&mut self, button: MouseButton) -> Vec<ControlEvent> {
        self.gui.input_mut().mouse.set_button(button, false);
        self.frame()
    }

    pub fn press_left(&mut self) -> Vec<ControlEvent> {
        self.press(MouseButton::Left)
    }

    pub fn release_left(&mut self) -> Vec<ControlEvent> {
        self.release(MouseButton::Left)
    }

    /// Move, press and release the left button over three frames.
    pub fn click_at(&mut self, position: IVec2) -> Vec<ControlEvent> {
        let mut events = self.move_mouse(position);
        events.extend(self.press_left());
        events.extend(self.release_left());
        events
    }

    /// Feed text to the keyboard buffer and run a frame.
    ///
    /// Control characters are translated the same way a window backend's
    /// would be, so `"\u{8}"` is a backspace.
    pub fn type_text(&mut self, text: &str) -> Vec<ControlEvent> {
        self.gui.input_mut().keyboard.push_str(text);
        self.frame()
    }

    pub fn press_keys(&mut self, keys: EditKeys) -> Vec<ControlEvent> {
        self.gui.input_mut().keyboard.press(keys);
        self.frame()
    }

    /// Run the draw pass and return exactly what it drew.
    pub fn draw(&mut self) -> Vec<DrawCall> {
        self.renderer.clear_calls();
        self.gui.draw().expect("GUI draw failed");
        self.renderer.calls()
    }
}

impl Default for GuiHarness {
    fn default() -> Self {
        Self::new()
    }
}
