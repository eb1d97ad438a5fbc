//! Per-container focus routing.
//!
//! Once per frame every container decides which single child holds focus.
//! Only a left or right button *press edge* can move focus; without one the
//! current assignment stands. With one, the first child in attach order whose
//! outer rectangle contains the mouse wins, so earlier children take
//! overlapping regions. Clicking where no child is clears the container's
//! focus.
//!
//! Every child is updated afterwards, focused or not.

use bloxel_core::math::IVec2;

use crate::context::UpdateContext;
use crate::control::ControlId;
use crate::error::GuiResult;
use crate::tree::ControlTree;

/// First of `candidates` whose outer rectangle contains `point`.
pub fn hit_test(tree: &ControlTree, candidates: &[ControlId], point: IVec2) -> Option<ControlId> {
    candidates.iter().copied().find(|id| {
        tree.outer_rect(*id)
            .map(|rect| rect.contains(point))
            .unwrap_or(false)
    })
}

/// Route focus among the children of `container`, then update them all.
///
/// A container without focus cannot hand it to its children.
pub(crate) fn update_children(
    tree: &mut ControlTree,
    container: ControlId,
    ctx: &mut UpdateContext<'_>,
) -> GuiResult<()> {
    let node = tree.node(container)?;
    let children = node.children.clone();

    if node.focused && ctx.focus_click() {
        let target = hit_test(tree, &children, ctx.mouse_position());
        let current = node.focused_child;
        if target != current {
            if let Some(current) = current {
                tree.set_focused(current, false, ctx.keyboard, ctx.events)?;
            }
            tree.node_mut(container)?.focused_child = None;
            // Only record the new child once it actually holds focus.
            if let Some(target) = target {
                tree.set_focused(target, true, ctx.keyboard, ctx.events)?;
                tree.node_mut(container)?.focused_child = Some(target);
            }
        }
    }

    for child in children {
        tree.update_control(child, ctx)?;
    }
    Ok(())
}
