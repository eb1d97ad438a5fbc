use std::rc::Rc;

use crate::color::Color;
use crate::content::{ContentLibrary, FontSize, TextureId};
use crate::context::UpdateContext;
use crate::control::ControlId;
use crate::error::GuiResult;
use crate::event::ControlEvent;
use crate::render::ShapeRenderer;
use crate::tree::ControlTree;

/// Callback type for button notifications. Receives the button's id.
pub type ButtonCallback = Rc<dyn Fn(ControlId)>;

/// Clickable button with a centred label.
///
/// Textures left as `None` are set to the dummy texture when the button is
/// attached, so the colours alone decide its look.
#[derive(Clone)]
pub struct Button {
    pub text: String,
    pub font_size: FontSize,

    pub background_color: Color,
    pub background_color_mouseover: Color,
    pub background_color_clicked: Color,
    pub background_texture: Option<TextureId>,
    pub background_texture_mouseover: Option<TextureId>,
    pub background_texture_clicked: Option<TextureId>,

    pub border_color_focused: Color,
    pub text_color: Color,
    pub text_color_mouseover: Color,
    pub text_color_clicked: Color,

    /// Fires on the frame the left button is released over a focused button.
    pub on_click: Option<ButtonCallback>,
    /// Fires every frame the left button is held on a focused button.
    pub on_press: Option<ButtonCallback>,

    is_hovered: bool,
    is_pressed: bool,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        let background = Color::rgb(0.18, 0.45, 1.0);
        Self {
            text: text.into(),
            font_size: FontSize::Small,
            background_color: background,
            background_color_mouseover: background,
            background_color_clicked: Color::from_rgb_u8(15, 99, 193),
            background_texture: None,
            background_texture_mouseover: None,
            background_texture_clicked: None,
            border_color_focused: Color::BLACK,
            text_color: Color::WHITE,
            text_color_mouseover: Color::BLACK,
            text_color_clicked: Color::BLACK,
            on_click: None,
            on_press: None,
            is_hovered: false,
            is_pressed: false,
        }
    }

    pub fn font_size(mut self, size: FontSize) -> Self {
        self.font_size = size;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn hover_color(mut self, color: Color) -> Self {
        self.background_color_mouseover = color;
        self
    }

    pub fn clicked_color(mut self, color: Color) -> Self {
        self.background_color_clicked = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(ControlId) + 'static,
    {
        self.on_click = Some(Rc::new(callback));
        self
    }

    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: Fn(ControlId) + 'static,
    {
        self.on_press = Some(Rc::new(callback));
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub(crate) fn on_loaded(&mut self, content: &ContentLibrary) {
        let dummy = content.dummy_texture();
        for texture in [
            &mut self.background_texture,
            &mut self.background_texture_mouseover,
            &mut self.background_texture_clicked,
        ] {
            texture.get_or_insert(dummy);
        }
    }

    /// Background texture, tint and text colour for the current state.
    /// Pressed wins over hovered.
    fn appearance(&self) -> (Option<TextureId>, Color, Color) {
        if self.is_pressed {
            (
                self.background_texture_clicked,
                self.background_color_clicked,
                self.text_color_clicked,
            )
        } else if self.is_hovered {
            (
                self.background_texture_mouseover,
                self.background_color_mouseover,
                self.text_color_mouseover,
            )
        } else {
            (self.background_texture, self.background_color, self.text_color)
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("is_hovered", &self.is_hovered)
            .field("is_pressed", &self.is_pressed)
            .finish_non_exhaustive()
    }
}

/// Refresh hover/pressed state and fire notifications.
///
/// Returns whether the button was clicked this frame, for owners that drive
/// a button directly (tab headers).
pub(crate) fn update_button(
    tree: &mut ControlTree,
    id: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<bool> {
    let hovered = tree.outer_rect(id)?.contains(ctx.mouse_position());
    let focused = tree.is_focused(id)?;
    let pressed = focused && ctx.mouse.is_left_down(false);
    let clicked = focused && ctx.mouse.is_left_released();

    let button = tree.button_mut(id)?;
    button.is_hovered = hovered;
    button.is_pressed = pressed;
    let on_press = button.on_press.clone();
    let on_click = button.on_click.clone();

    if pressed {
        ctx.events.push(ControlEvent::MousePress(id));
        if let Some(callback) = on_press {
            callback(id);
        }
    }
    if clicked {
        tracing::trace!("Button {} clicked", id);
        ctx.events.push(ControlEvent::Click(id));
        if let Some(callback) = on_click {
            callback(id);
        }
    }
    Ok(clicked)
}

pub(crate) fn update(
    tree: &mut ControlTree,
    id: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<()> {
    update_button(tree, id, ctx).map(|_| ())
}

pub(crate) fn draw(
    tree: &ControlTree,
    id: ControlId,
    button: &Button,
    shapes: &mut ShapeRenderer<'_>,
) -> GuiResult<()> {
    let outer = tree.outer_rect(id)?;
    let client = tree.client_rect(id)?;
    let (texture, background, text_color) = button.appearance();

    if let Some(texture) = texture {
        shapes.draw_texture(texture, outer, background);
    }
    if tree.is_focused(id)? {
        shapes.draw_border(button.border_color_focused, client, 1);
    }

    let font = shapes.content().font(button.font_size);
    let extent = shapes.measure_text(font, &button.text);
    let position = client.center().as_vec2() - extent / 2.0;
    shapes.draw_text(font, &button.text, position, text_color);
    Ok(())
}
