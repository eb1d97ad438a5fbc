use bloxel_core::math::IVec2;
use bloxel_input::{KeyboardBuffer, Mouse};

use crate::config::GuiConfig;
use crate::content::ContentLibrary;
use crate::event::EventQueue;
use crate::render::Renderer;
use crate::time::FrameTime;

/// Everything a control may read or touch during the update pass.
///
/// The manager builds one per frame by splitting borrows of its own fields;
/// nothing in here is global.
pub struct UpdateContext<'a> {
    pub mouse: &'a Mouse,
    pub keyboard: &'a mut KeyboardBuffer,
    pub events: &'a mut EventQueue,
    /// Text metrics only. Nothing is drawn during update.
    pub renderer: &'a dyn Renderer,
    pub content: &'a ContentLibrary,
    pub config: &'a GuiConfig,
    pub time: FrameTime,
}

impl UpdateContext<'_> {
    pub fn viewport(&self) -> IVec2 {
        self.config.viewport
    }

    /// Left or right button went down this frame.
    pub fn focus_click(&self) -> bool {
        self.mouse.any_pressed_edge()
    }

    pub fn mouse_position(&self) -> IVec2 {
        self.mouse.position()
    }
}
