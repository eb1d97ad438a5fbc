use crate::color::Color;
use crate::context::UpdateContext;
use crate::control::ControlId;
use crate::error::GuiResult;
use crate::focus;
use crate::render::ShapeRenderer;
use crate::tree::ControlTree;

/// The top of the control tree.
///
/// Sits at the surface origin, has no border and always covers the viewport;
/// moving or resizing it is an error. It paints a full-screen overlay whose
/// colour depends on whether the GUI holds focus.
#[derive(Debug, Clone)]
pub struct RootControl {
    pub overlay_unfocused: Color,
    pub overlay_focused: Color,
}

impl Default for RootControl {
    fn default() -> Self {
        Self {
            overlay_unfocused: Color::TRANSPARENT,
            overlay_focused: Color::rgba(0.0, 0.0, 0.0, 0.5),
        }
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
    root: &RootControl,
    shapes: &mut ShapeRenderer<'_>,
) -> GuiResult<()> {
    let overlay = if tree.is_focused(id)? {
        root.overlay_focused
    } else {
        root.overlay_unfocused
    };
    shapes.fill_rect(overlay, tree.outer_rect(id)?);
    for child in tree.children(id)? {
        tree.draw_control(*child, shapes)?;
    }
    Ok(())
}
