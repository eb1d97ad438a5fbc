//! Recording renderer for tests.

use std::sync::Arc;

use bloxel_core::geometry::IRect;
use bloxel_core::math::{IVec2, Vec2};
use bloxel_gui::{Color, ContentHandles, ContentLibrary, FontId, Renderer, TextureId};
use parking_lot::Mutex;

/// Width of every glyph in the mock font.
pub const GLYPH_WIDTH: f32 = 8.0;
/// Line spacing of the mock font.
pub const LINE_HEIGHT: f32 = 12.0;

pub const DUMMY_TEXTURE: TextureId = TextureId(0);
pub const CURSOR_TEXTURE: TextureId = TextureId(1);
pub const FONT_SMALL: FontId = FontId(0);
pub const FONT_SMALLER: FontId = FontId(1);

/// Records a draw call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Texture {
        texture: TextureId,
        rect: IRect,
        tint: Color,
        clip: Option<IRect>,
    },
    Sprite {
        texture: TextureId,
        position: IVec2,
    },
    Text {
        font: FontId,
        text: String,
        position: Vec2,
        color: Color,
        clip: Option<IRect>,
    },
}

/// Renderer that records instead of drawing.
///
/// Clones share one call log, so a test can hand a clone to the
/// [`GuiManager`](bloxel_gui::GuiManager) and inspect the original.
///
/// # Example
///
/// ```rust
/// use bloxel_gui::{Renderer, FontId};
/// use bloxel_test_utils::{MockRenderer, GLYPH_WIDTH};
///
/// let mock = MockRenderer::new();
/// assert_eq!(mock.measure_text(FontId(0), "abc").x, 3.0 * GLYPH_WIDTH);
/// assert_eq!(mock.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRenderer {
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Strings drawn, in draw order.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles filled with `tint`, in draw order.
    pub fn rects_with_tint(&self, tint: Color) -> Vec<IRect> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Texture { rect, tint: t, .. } if *t == tint => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn count_sprites(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DrawCall::Sprite { .. }))
            .count()
    }
}

impl Renderer for MockRenderer {
    fn draw_texture(&mut self, texture: TextureId, dest: IRect, tint: Color, clip: Option<IRect>) {
        self.calls.lock().push(DrawCall::Texture {
            texture,
            rect: dest,
            tint,
            clip,
        });
    }

    fn draw_sprite(&mut self, texture: TextureId, position: IVec2, _tint: Color) {
        self.calls
            .lock()
            .push(DrawCall::Sprite { texture, position });
    }

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        position: Vec2,
        color: Color,
        clip: Option<IRect>,
    ) {
        self.calls.lock().push(DrawCall::Text {
            font,
            text: text.to_string(),
            position,
            color,
            clip,
        });
    }

    fn measure_text(&self, _font: FontId, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * GLYPH_WIDTH, LINE_HEIGHT)
    }

    fn line_spacing(&self, _font: FontId) -> f32 {
        LINE_HEIGHT
    }
}

/// Content library wired to the mock texture and font ids.
pub fn mock_content() -> ContentLibrary {
    ContentLibrary::new(ContentHandles {
        dummy_texture: DUMMY_TEXTURE,
        mouse_cursor: CURSOR_TEXTURE,
        ui_font_small: FONT_SMALL,
        ui_font_smaller: FONT_SMALLER,
    })
}
