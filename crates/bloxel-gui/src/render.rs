//! The rendering collaborator and the shape helpers built on it.
//!
//! The GUI core never talks to a graphics API. Hosts implement [`Renderer`]
//! over whatever sprite batch they have; widgets draw through
//! [`ShapeRenderer`], which adds flat fills and borders on top of plain
//! textured quads.

use bloxel_core::geometry::IRect;
use bloxel_core::math::{IVec2, Vec2};

use crate::color::Color;
use crate::content::{ContentLibrary, FontId, TextureId};

/// Immediate-mode 2D drawing and text metrics supplied by the host.
///
/// Calls arrive in painter's order. `clip`, when present, is a scissor
/// rectangle in surface coordinates that is already clamped to the viewport.
pub trait Renderer {
    /// Draw `texture` stretched over `dest`, multiplied by `tint`.
    fn draw_texture(&mut self, texture: TextureId, dest: IRect, tint: Color, clip: Option<IRect>);

    /// Draw `texture` at its natural size with its top-left at `position`.
    fn draw_sprite(&mut self, texture: TextureId, position: IVec2, tint: Color);

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        position: Vec2,
        color: Color,
        clip: Option<IRect>,
    );

    /// Pixel extent of `text` rendered in `font`.
    fn measure_text(&self, font: FontId, text: &str) -> Vec2;

    /// Height of one line of `font`.
    fn line_spacing(&self, font: FontId) -> f32;
}

/// Draw helpers shared by all widgets during the draw pass.
pub struct ShapeRenderer<'a> {
    renderer: &'a mut dyn Renderer,
    content: &'a ContentLibrary,
    clip: Option<IRect>,
}

impl<'a> ShapeRenderer<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, content: &'a ContentLibrary) -> Self {
        Self {
            renderer,
            content,
            clip: None,
        }
    }

    pub fn content(&self) -> &ContentLibrary {
        self.content
    }

    pub fn clip(&self) -> Option<IRect> {
        self.clip
    }

    /// Replace the scissor rectangle, returning the previous one.
    pub fn set_clip(&mut self, clip: Option<IRect>) -> Option<IRect> {
        std::mem::replace(&mut self.clip, clip)
    }

    /// Solid fill using the dummy texture.
    pub fn fill_rect(&mut self, color: Color, rect: IRect) {
        let dummy = self.content.dummy_texture();
        self.draw_texture(dummy, rect, color);
    }

    pub fn draw_texture(&mut self, texture: TextureId, rect: IRect, tint: Color) {
        self.renderer.draw_texture(texture, rect, tint, self.clip);
    }

    /// Four strips of `width` pixels hugging the outside of `inner`.
    pub fn draw_border(&mut self, color: Color, inner: IRect, width: i32) {
        if width <= 0 {
            return;
        }
        let outer_width = inner.width + width * 2;
        // top, bottom, left, right
        self.fill_rect(
            color,
            IRect::new(inner.x - width, inner.y - width, outer_width, width),
        );
        self.fill_rect(
            color,
            IRect::new(inner.x - width, inner.bottom(), outer_width, width),
        );
        self.fill_rect(color, IRect::new(inner.x - width, inner.y, width, inner.height));
        self.fill_rect(color, IRect::new(inner.right(), inner.y, width, inner.height));
    }

    pub fn draw_sprite(&mut self, texture: TextureId, position: IVec2, tint: Color) {
        self.renderer.draw_sprite(texture, position, tint);
    }

    pub fn draw_text(&mut self, font: FontId, text: &str, position: Vec2, color: Color) {
        self.renderer
            .draw_text(font, text, position, color, self.clip);
    }

    pub fn measure_text(&self, font: FontId, text: &str) -> Vec2 {
        self.renderer.measure_text(font, text)
    }

    pub fn line_spacing(&self, font: FontId) -> f32 {
        self.renderer.line_spacing(font)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A minimal recording renderer for unit tests inside this crate.
    //!
    //! Integration tests use `bloxel_test_utils::MockRenderer` instead; this
    //! copy exists because a dev-dependency on that crate would be cyclic
    //! for unit tests.

    use super::*;
    use crate::content::ContentHandles;

    pub const GLYPH_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 12.0;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Texture(TextureId, IRect, Color),
        Sprite(TextureId, IVec2),
        Text(String, Vec2, Option<IRect>),
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_texture(&mut self, texture: TextureId, dest: IRect, tint: Color, _clip: Option<IRect>) {
            self.calls.push(Call::Texture(texture, dest, tint));
        }

        fn draw_sprite(&mut self, texture: TextureId, position: IVec2, _tint: Color) {
            self.calls.push(Call::Sprite(texture, position));
        }

        fn draw_text(&mut self, _font: FontId, text: &str, position: Vec2, _color: Color, clip: Option<IRect>) {
            self.calls.push(Call::Text(text.to_string(), position, clip));
        }

        fn measure_text(&self, _font: FontId, text: &str) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * GLYPH_WIDTH, LINE_HEIGHT)
        }

        fn line_spacing(&self, _font: FontId) -> f32 {
            LINE_HEIGHT
        }
    }

    pub fn content() -> ContentLibrary {
        ContentLibrary::new(ContentHandles {
            dummy_texture: TextureId(0),
            mouse_cursor: TextureId(1),
            ui_font_small: FontId(0),
            ui_font_smaller: FontId(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_border_surrounds_inner_rect() {
        let content = content();
        let mut renderer = RecordingRenderer::default();
        let mut shapes = ShapeRenderer::new(&mut renderer, &content);

        shapes.draw_border(Color::BLACK, IRect::new(10, 10, 20, 5), 2);

        let rects: Vec<IRect> = renderer
            .calls
            .iter()
            .map(|call| match call {
                Call::Texture(_, rect, _) => *rect,
                other => panic!("unexpected call {:?}", other),
            })
            .collect();
        assert_eq!(
            rects,
            vec![
                IRect::new(8, 8, 24, 2),
                IRect::new(8, 15, 24, 2),
                IRect::new(8, 10, 2, 5),
                IRect::new(30, 10, 2, 5),
            ]
        );
    }

    #[test]
    fn test_zero_width_border_draws_nothing() {
        let content = content();
        let mut renderer = RecordingRenderer::default();
        ShapeRenderer::new(&mut renderer, &content).draw_border(Color::BLACK, IRect::new(0, 0, 4, 4), 0);
        assert!(renderer.calls.is_empty());
    }
}
