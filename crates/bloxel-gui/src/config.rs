//! Runtime configuration for the GUI core.

use std::time::Duration;

use bloxel_core::math::{IVec2, ivec2};

use crate::color::Color;

/// Settings handed to [`GuiManager::new`](crate::GuiManager::new).
///
/// Everything has a sensible default, so hosts usually only set the viewport:
///
/// ```
/// use bloxel_gui::{GuiConfig, ivec2};
///
/// let config = GuiConfig {
///     viewport: ivec2(1280, 720),
///     ..Default::default()
/// };
/// assert_eq!(config.caret_blink_interval.as_millis(), 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    /// Size of the rendering surface. The root control always covers it.
    pub viewport: IVec2,
    pub caret_blink_interval: Duration,
    pub root_overlay_unfocused: Color,
    pub root_overlay_focused: Color,
    /// Client size of an auto-generated tab header button.
    pub tab_header_size: IVec2,
    /// Horizontal distance between consecutive tab headers.
    pub tab_header_pitch: i32,
    /// Gap between a textbox's client edge and its first glyph.
    pub textbox_padding: f32,
    /// Caret distance from the right client edge that triggers scrolling.
    pub textbox_scroll_margin: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            viewport: ivec2(800, 600),
            caret_blink_interval: Duration::from_millis(500),
            root_overlay_unfocused: Color::TRANSPARENT,
            root_overlay_focused: Color::rgba(0.0, 0.0, 0.0, 0.5),
            tab_header_size: ivec2(50, 25),
            tab_header_pitch: 52,
            textbox_padding: 2.0,
            textbox_scroll_margin: 3.0,
        }
    }
}
