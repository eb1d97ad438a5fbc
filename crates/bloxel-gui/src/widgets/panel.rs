use crate::color::Color;
use crate::content::{ContentLibrary, TextureId};
use crate::context::UpdateContext;
use crate::control::ControlId;
use crate::error::GuiResult;
use crate::focus;
use crate::render::ShapeRenderer;
use crate::tree::ControlTree;

/// Container with a tinted background and a one pixel border.
#[derive(Debug, Clone)]
pub struct Panel {
    pub background_unfocused: Color,
    pub background_focused: Color,
    pub border_color_unfocused: Color,
    pub border_color_focused: Color,
    pub background_texture_unfocused: Option<TextureId>,
    pub background_texture_focused: Option<TextureId>,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            background_unfocused: Color::LIGHT_GRAY,
            background_focused: Color::WHITE,
            border_color_unfocused: Color::LIGHT_GRAY,
            border_color_focused: Color::BLACK,
            background_texture_unfocused: None,
            background_texture_focused: None,
        }
    }

    pub fn background(mut self, unfocused: Color, focused: Color) -> Self {
        self.background_unfocused = unfocused;
        self.background_focused = focused;
        self
    }

    pub fn border(mut self, unfocused: Color, focused: Color) -> Self {
        self.border_color_unfocused = unfocused;
        self.border_color_focused = focused;
        self
    }

    pub(crate) fn on_loaded(&mut self, content: &ContentLibrary) {
        let dummy = content.dummy_texture();
        self.background_texture_unfocused.get_or_insert(dummy);
        self.background_texture_focused.get_or_insert(dummy);
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn update(
    tree: &mut ControlTree,
    id: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<()> {
    focus::update_children(tree, id, ctx)
}

pub(crate) fn draw(
    tree: &ControlTree,
    id: ControlId,
    panel: &Panel,
    shapes: &mut ShapeRenderer<'_>,
) -> GuiResult<()> {
    let client = tree.client_rect(id)?;
    let focused = tree.is_focused(id)?;
    let (texture, background, border) = if focused {
        (
            panel.background_texture_focused,
            panel.background_focused,
            panel.border_color_focused,
        )
    } else {
        (
            panel.background_texture_unfocused,
            panel.background_unfocused,
            panel.border_color_unfocused,
        )
    };

    if let Some(texture) = texture {
        shapes.draw_texture(texture, client, background);
    }
    for child in tree.children(id)? {
        tree.draw_control(*child, shapes)?;
    }
    shapes.draw_border(border, client, 1);
    Ok(())
}
