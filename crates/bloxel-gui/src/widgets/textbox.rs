//! Single-line text editor.
//!
//! While focused a [`Textbox`] owns keyboard capture: gaining focus enables
//! the [`KeyboardBuffer`](bloxel_input::KeyboardBuffer), losing it disables
//! it. Each frame the textbox drains what was typed and applies it at the
//! caret in a fixed order:
//!
//! 1. A left-button release inside the client area places the caret.
//! 2. Typed text is inserted at the caret.
//! 3. Backspace deletes the character before the caret.
//! 4. Left/right move the caret, clamped to the text.
//! 5. The horizontal scroll offset is nudged so the caret stays visible.
//!
//! The caret index counts characters, not bytes, and stays within
//! `0..=text.chars().count()` after every step. Any edit or caret move forces
//! the caret visible for the frame; otherwise it blinks on a fixed interval.

use std::rc::Rc;
use std::time::Duration;

use bloxel_core::geometry::IRect;
use bloxel_core::math::{Vec2, vec2};

use crate::color::Color;
use crate::content::FontSize;
use crate::context::UpdateContext;
use crate::control::ControlId;
use crate::error::GuiResult;
use crate::event::ControlEvent;
use crate::render::{Renderer, ShapeRenderer};
use crate::tree::ControlTree;

/// Called with the textbox id and its new content after an edit.
pub type TextChangeCallback = Rc<dyn Fn(ControlId, &str)>;

const FONT: FontSize = FontSize::Small;

#[derive(Clone)]
pub struct Textbox {
    text: String,
    caret: usize,
    scroll_offset: f32,

    pub background_color: Color,
    pub border_color_unfocused: Color,
    pub border_color_focused: Color,
    pub text_color: Color,
    pub on_change: Option<TextChangeCallback>,

    caret_visible: bool,
    last_caret_toggle: Duration,
    force_caret_visible: bool,
    caret_position: Vec2,
    text_origin: Vec2,
    clip_rect: IRect,
}

impl Textbox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            caret: 0,
            scroll_offset: 0.0,
            background_color: Color::rgb(0.9, 0.9, 0.9),
            border_color_unfocused: Color::rgb(0.2, 0.2, 0.2),
            border_color_focused: Color::BLACK,
            text_color: Color::BLACK,
            on_change: None,
            caret_visible: false,
            last_caret_toggle: Duration::ZERO,
            force_caret_visible: false,
            caret_position: Vec2::ZERO,
            text_origin: Vec2::ZERO,
            clip_rect: IRect::default(),
        }
    }

    /// Initial content. The caret starts at the end.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.caret = self.char_count();
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(ControlId, &str) + 'static,
    {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content, pulling the caret back inside if needed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.caret.min(self.char_count());
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.char_count());
    }

    /// Leftmost visible pixel column of the text.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn is_caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Top-left of the caret bar in surface coordinates, as of the last update.
    pub fn caret_position(&self) -> Vec2 {
        self.caret_position
    }

    /// Scissor rectangle used when drawing the text.
    pub fn clip_rect(&self) -> IRect {
        self.clip_rect
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    fn prefix(&self, chars: usize) -> &str {
        &self.text[..self.byte_index(chars)]
    }

    /// Insert at the caret and advance past the insertion.
    pub fn insert(&mut self, fragment: &str) -> bool {
        if fragment.is_empty() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.text.insert_str(at, fragment);
        self.caret += fragment.chars().count();
        self.force_caret_visible = true;
        true
    }

    /// Delete the character before the caret. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        self.force_caret_visible = true;
        if self.caret == 0 {
            return false;
        }
        let at = self.byte_index(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
        true
    }

    pub fn move_caret_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
        self.force_caret_visible = true;
    }

    pub fn move_caret_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_count());
        self.force_caret_visible = true;
    }

    /// Put the caret under a click `x` pixels right of the text's left edge.
    ///
    /// Walks back from the end of the text one glyph at a time until the
    /// remaining width fits left of the click.
    pub(crate) fn place_caret(&mut self, x: f32, padding: f32, measure: impl Fn(&str) -> f32) {
        let mut width = measure(&self.text) - self.scroll_offset + padding;
        if width <= x {
            self.caret = self.char_count();
            return;
        }

        let chars: Vec<char> = self.text.chars().collect();
        let mut buf = [0u8; 4];
        self.caret = 0;
        for (i, c) in chars.iter().enumerate().rev() {
            width -= measure(c.encode_utf8(&mut buf));
            if width <= x {
                self.caret = i;
                break;
            }
        }
    }

    /// Pixel column of the caret relative to the unscrolled text origin.
    ///
    /// Between two glyphs the caret sits halfway between the end of the
    /// previous glyph and the start of the next.
    fn caret_x(&self, padding: f32, measure: &impl Fn(&str) -> f32) -> f32 {
        let before = measure(self.prefix(self.caret));
        let Some(next) = self.text.chars().nth(self.caret) else {
            return padding + padding + before;
        };
        let mut buf = [0u8; 4];
        let through_next = measure(self.prefix(self.caret + 1)) - measure(next.encode_utf8(&mut buf));
        padding + (through_next + before) / 2.0
    }

    /// Shift the scroll offset just enough to keep the caret inside
    /// `[padding, width - margin]`. Returns the caret column.
    pub(crate) fn scroll_caret_into_view(
        &mut self,
        width: f32,
        padding: f32,
        margin: f32,
        measure: impl Fn(&str) -> f32,
    ) -> f32 {
        let x = self.caret_x(padding, &measure);
        if x - self.scroll_offset > width - margin {
            self.scroll_offset += x - self.scroll_offset - (width - margin);
        }
        if x - self.scroll_offset < padding {
            self.scroll_offset = x - padding;
        }
        x
    }

    fn tick_caret_blink(&mut self, now: Duration, interval: Duration) {
        if now.saturating_sub(self.last_caret_toggle) >= interval || self.force_caret_visible {
            self.last_caret_toggle = now;
            self.caret_visible = !self.caret_visible || self.force_caret_visible;
        }
    }

    pub(crate) fn reset_caret_blink(&mut self) {
        self.last_caret_toggle = Duration::ZERO;
        self.caret_visible = false;
    }
}

impl Default for Textbox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Textbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Textbox")
            .field("text", &self.text)
            .field("caret", &self.caret)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

pub(crate) fn update(
    tree: &mut ControlTree,
    id: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<()> {
    let client = tree.client_rect(id)?;
    let focused = tree.is_focused(id)?;
    let viewport = ctx.viewport();
    let config = ctx.config;
    let renderer: &dyn Renderer = ctx.renderer;
    let font = ctx.content.font(FONT);
    let measure = |text: &str| renderer.measure_text(font, text).x;

    let padding = config.textbox_padding;
    let line = renderer.line_spacing(font);

    let textbox = tree.textbox_mut(id)?;
    textbox.force_caret_visible = false;
    let mut changed = false;

    if focused {
        if ctx.mouse.is_left_released() && client.contains(ctx.mouse_position()) {
            let x = ctx.mouse.x() as f32 - (client.x as f32 + padding);
            textbox.place_caret(x, padding, measure);
        }

        let typed = ctx.keyboard.take_text();
        changed |= textbox.insert(&typed);
        if ctx.keyboard.backspace() {
            changed |= textbox.backspace();
        }
        if ctx.keyboard.left() {
            textbox.move_caret_left();
        }
        if ctx.keyboard.right() {
            textbox.move_caret_right();
        }
        if ctx.keyboard.enter() {
            ctx.events.push(ControlEvent::TextSubmitted(id));
        }
        if ctx.keyboard.escape() {
            ctx.events.push(ControlEvent::EditCancelled(id));
        }

        let caret_x = textbox.scroll_caret_into_view(
            client.width as f32,
            padding,
            config.textbox_scroll_margin,
            measure,
        );
        textbox.caret_position = client.position().as_vec2()
            + vec2(
                caret_x - textbox.scroll_offset,
                (client.height as f32 - line) / 2.0,
            );
        textbox.tick_caret_blink(ctx.time.total, config.caret_blink_interval);
    }

    textbox.text_origin = client.position().as_vec2()
        + vec2(padding - textbox.scroll_offset, (client.height as f32 - line) / 2.0);
    textbox.clip_rect = client.clamp_to_surface(viewport);

    if changed {
        ctx.events.push(ControlEvent::TextChanged(id));
        if let Some(callback) = textbox.on_change.clone() {
            callback(id, &textbox.text);
        }
    }
    Ok(())
}

pub(crate) fn draw(
    tree: &ControlTree,
    id: ControlId,
    textbox: &Textbox,
    shapes: &mut ShapeRenderer<'_>,
) -> GuiResult<()> {
    let client = tree.client_rect(id)?;
    let focused = tree.is_focused(id)?;
    let border = if focused {
        textbox.border_color_focused
    } else {
        textbox.border_color_unfocused
    };

    shapes.fill_rect(textbox.background_color, client);
    shapes.draw_border(border, client, tree.get(id)?.border_width());

    let font = shapes.content().font(FONT);
    let line = shapes.line_spacing(font);
    let previous = shapes.set_clip(Some(textbox.clip_rect));

    shapes.draw_text(font, &textbox.text, textbox.text_origin, textbox.text_color);

    if focused && textbox.caret_visible {
        let caret = textbox.caret_position.as_ivec2();
        shapes.fill_rect(
            textbox.text_color,
            IRect::new(caret.x, caret.y, 1, line as i32),
        );
    }

    shapes.set_clip(previous);
    Ok(())
}
