//! Arena-backed control hierarchy.
//!
//! The tree owns every control. Parent links, child lists and each
//! container's focused-child reference are [`ControlId`]s into the same
//! arena, so there are no back-pointers to keep alive and a removed control
//! simply stops resolving.
//!
//! Geometry is derived, never stored: a control's absolute position is the
//! sum of its own position and each ancestor's client origin, walking up to
//! the root at `(0, 0)`.

use bloxel_core::alloc::Arena;
use bloxel_core::geometry::IRect;
use bloxel_core::math::IVec2;
use bloxel_input::KeyboardBuffer;

use crate::content::ContentLibrary;
use crate::context::UpdateContext;
use crate::control::{Control, ControlId, ControlKind};
use crate::error::{GuiError, GuiResult};
use crate::event::{ControlEvent, EventQueue};
use crate::render::ShapeRenderer;
use crate::widgets::{self, Button, Panel, RootControl, TabControl, Textbox};

pub(crate) struct ControlNode {
    pub(crate) control: Control,
    pub(crate) parent: Option<ControlId>,
    pub(crate) focused: bool,
    pub(crate) children: Vec<ControlId>,
    pub(crate) focused_child: Option<ControlId>,
}

impl ControlNode {
    fn new(control: Control, parent: Option<ControlId>) -> Self {
        Self {
            control,
            parent,
            focused: false,
            children: Vec::new(),
            focused_child: None,
        }
    }
}

type UpdateFn = fn(&mut ControlTree, ControlId, &mut UpdateContext<'_>) -> GuiResult<()>;

pub struct ControlTree {
    nodes: Arena<ControlNode>,
    root: ControlId,
}

impl ControlTree {
    /// A tree holding only an unfocused root covering `viewport`.
    pub fn new(root: RootControl, viewport: IVec2) -> Self {
        let mut nodes = Arena::new();
        let mut control = Control::new(ControlKind::Root(root));
        control.size = viewport;
        let root = ControlId(nodes.insert(ControlNode::new(control, None)));
        Self { nodes, root }
    }

    pub fn root(&self) -> ControlId {
        self.root
    }

    /// Number of live controls, root and tab page parts included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains(id.0)
    }

    pub(crate) fn node(&self, id: ControlId) -> GuiResult<&ControlNode> {
        self.nodes.get(id.0).ok_or(GuiError::UnknownControl(id))
    }

    pub(crate) fn node_mut(&mut self, id: ControlId) -> GuiResult<&mut ControlNode> {
        self.nodes.get_mut(id.0).ok_or(GuiError::UnknownControl(id))
    }

    pub fn get(&self, id: ControlId) -> GuiResult<&Control> {
        Ok(&self.node(id)?.control)
    }

    pub fn get_mut(&mut self, id: ControlId) -> GuiResult<&mut Control> {
        Ok(&mut self.node_mut(id)?.control)
    }

    pub fn parent(&self, id: ControlId) -> GuiResult<Option<ControlId>> {
        Ok(self.node(id)?.parent)
    }

    /// Attached children in scan order. Empty for non-containers.
    pub fn children(&self, id: ControlId) -> GuiResult<&[ControlId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn focused_child(&self, id: ControlId) -> GuiResult<Option<ControlId>> {
        Ok(self.node(id)?.focused_child)
    }

    pub fn is_focused(&self, id: ControlId) -> GuiResult<bool> {
        Ok(self.node(id)?.focused)
    }

    /// First control with this name, in arena order.
    pub fn find_by_name(&self, name: &str) -> Option<ControlId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.control.name == name)
            .map(|(slot, _)| ControlId(slot))
    }

    /// The chain of focused controls starting below the root.
    pub fn focus_path(&self) -> Vec<ControlId> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Ok(node) = self.node(current) {
            let next = match &node.control.kind {
                ControlKind::TabControl(tabs) => tabs
                    .pages()
                    .iter()
                    .flat_map(|page| [page.panel, page.header])
                    .find(|part| self.is_focused(*part).unwrap_or(false)),
                _ => node.focused_child,
            };
            match next {
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => break,
            }
        }
        path
    }

    pub(crate) fn set_viewport(&mut self, viewport: IVec2) {
        if let Some(node) = self.nodes.get_mut(self.root.0) {
            node.control.size = viewport;
        }
    }

    // ---- geometry -------------------------------------------------------

    /// Top-left corner of the outer rectangle in surface coordinates.
    pub fn absolute_position(&self, id: ControlId) -> GuiResult<IVec2> {
        let mut node = self.node(id)?;
        let mut position = node.control.position;
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            position += node.control.position + IVec2::splat(node.control.border_width());
        }
        Ok(position)
    }

    /// Rectangle including the border. Used for hit-testing.
    pub fn outer_rect(&self, id: ControlId) -> GuiResult<IRect> {
        let node = self.node(id)?;
        let border = node.control.border_width();
        let position = self.absolute_position(id)?;
        Ok(IRect::from_pos_size(
            position,
            node.control.size + IVec2::splat(2 * border),
        ))
    }

    /// Content area inside the border.
    pub fn client_rect(&self, id: ControlId) -> GuiResult<IRect> {
        let node = self.node(id)?;
        let border = node.control.border_width();
        let position = self.absolute_position(id)?;
        Ok(IRect::from_pos_size(
            position + IVec2::splat(border),
            node.control.size,
        ))
    }

    // ---- structure ------------------------------------------------------

    /// Attach `control` as the last child of `parent`.
    pub fn attach(
        &mut self,
        parent: ControlId,
        control: Control,
        content: &ContentLibrary,
    ) -> GuiResult<ControlId> {
        let parent_node = self.node(parent)?;
        if !parent_node.control.kind.is_container() {
            return Err(GuiError::NotAContainer(parent));
        }
        if control.is_root() {
            return Err(GuiError::DuplicateRoot);
        }
        let id = self.insert_detached(parent, control, content);
        self.node_mut(parent)?.children.push(id);
        tracing::debug!("Attached control {} to {}", id, parent);
        Ok(id)
    }

    /// Store a control that belongs to `owner` without entering its child
    /// list. Tab page parts live this way.
    pub(crate) fn insert_detached(
        &mut self,
        owner: ControlId,
        mut control: Control,
        content: &ContentLibrary,
    ) -> ControlId {
        control.kind.on_loaded(content);
        ControlId(self.nodes.insert(ControlNode::new(control, Some(owner))))
    }

    /// Detach and free `id` with its whole subtree.
    ///
    /// A focused control is unfocused first, so hooks such as keyboard
    /// capture release run before the control disappears.
    pub fn remove(
        &mut self,
        id: ControlId,
        keyboard: &mut KeyboardBuffer,
        events: &mut EventQueue,
    ) -> GuiResult<()> {
        if id == self.root {
            return Err(GuiError::CannotRemoveRoot);
        }
        let parent = self.node(id)?.parent.ok_or(GuiError::UnknownControl(id))?;
        if !self.node(parent)?.control.kind.is_container() {
            // Tab page parts go away with their tab control only.
            return Err(GuiError::NotAContainer(parent));
        }

        self.set_focused(id, false, keyboard, events)?;
        let parent_node = self.node_mut(parent)?;
        if parent_node.focused_child == Some(id) {
            parent_node.focused_child = None;
        }
        parent_node.children.retain(|child| *child != id);

        self.free_subtree(id);
        tracing::debug!("Removed control {} from {}", id, parent);
        Ok(())
    }

    /// Remove every child of `container` named `name`. Returns how many went.
    pub fn remove_all_named(
        &mut self,
        container: ControlId,
        name: &str,
        keyboard: &mut KeyboardBuffer,
        events: &mut EventQueue,
    ) -> GuiResult<usize> {
        let doomed: Vec<ControlId> = self
            .node(container)?
            .children
            .iter()
            .copied()
            .filter(|child| {
                self.node(*child)
                    .map(|node| node.control.name == name)
                    .unwrap_or(false)
            })
            .collect();
        for id in &doomed {
            self.remove(*id, keyboard, events)?;
        }
        Ok(doomed.len())
    }

    fn free_subtree(&mut self, id: ControlId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.remove(current.0) else {
                continue;
            };
            stack.extend(node.children);
            if let ControlKind::TabControl(tabs) = &node.control.kind {
                stack.extend(tabs.pages().iter().flat_map(|page| [page.header, page.panel]));
            }
        }
    }

    // ---- focus ----------------------------------------------------------

    /// Change the focus flag of one control and run its hooks.
    ///
    /// Setting the current value again does nothing. Unfocusing cascades to
    /// every focused descendant first and clears the control's focused-child
    /// reference.
    pub(crate) fn set_focused(
        &mut self,
        id: ControlId,
        focused: bool,
        keyboard: &mut KeyboardBuffer,
        events: &mut EventQueue,
    ) -> GuiResult<()> {
        let node = self.node(id)?;
        if node.focused == focused {
            return Ok(());
        }

        if focused {
            if let ControlKind::Textbox(_) = node.control.kind {
                keyboard.enable()?;
            }
            self.node_mut(id)?.focused = true;
            tracing::debug!("Control {} ({:?}) gained focus", id, self.node(id)?.control.kind);
            events.push(ControlEvent::FocusGained(id));
            return Ok(());
        }

        let mut descendants: Vec<ControlId> = node.focused_child.into_iter().collect();
        if let ControlKind::TabControl(tabs) = &node.control.kind {
            descendants.extend(tabs.pages().iter().flat_map(|page| [page.panel, page.header]));
        }
        for descendant in descendants {
            self.set_focused(descendant, false, keyboard, events)?;
        }

        let node = self.node_mut(id)?;
        node.focused = false;
        node.focused_child = None;
        if let ControlKind::Textbox(textbox) = &mut node.control.kind {
            keyboard.disable();
            textbox.reset_caret_blink();
        }
        tracing::debug!("Control {} lost focus", id);
        events.push(ControlEvent::FocusLost(id));
        Ok(())
    }

    // ---- frame passes ---------------------------------------------------

    pub(crate) fn update_control(
        &mut self,
        id: ControlId,
        ctx: &mut UpdateContext<'_>,
    ) -> GuiResult<()> {
        let update: UpdateFn = match &self.node(id)?.control.kind {
            ControlKind::Root(_) => widgets::root::update,
            ControlKind::Button(_) => widgets::button::update,
            ControlKind::Panel(_) => widgets::panel::update,
            ControlKind::TabControl(_) => widgets::tab_control::update,
            ControlKind::Textbox(_) => widgets::textbox::update,
        };
        update(self, id, ctx)
    }

    pub(crate) fn draw_control(&self, id: ControlId, shapes: &mut ShapeRenderer<'_>) -> GuiResult<()> {
        let node = self.node(id)?;
        match &node.control.kind {
            ControlKind::Root(root) => widgets::root::draw(self, id, root, shapes),
            ControlKind::Button(button) => widgets::button::draw(self, id, button, shapes),
            ControlKind::Panel(panel) => widgets::panel::draw(self, id, panel, shapes),
            ControlKind::TabControl(tabs) => widgets::tab_control::draw(self, id, tabs, shapes),
            ControlKind::Textbox(textbox) => widgets::textbox::draw(self, id, textbox, shapes),
        }
    }
}

macro_rules! typed_access {
    ($($get:ident, $vis:vis $get_mut:ident => $as_ref:ident, $as_mut:ident, $ty:ty, $expected:literal;)*) => {
        /// Kind-checked lookups.
        impl ControlTree {
            $(
                pub fn $get(&self, id: ControlId) -> GuiResult<&$ty> {
                    let control = self.get(id)?;
                    control.$as_ref().ok_or(GuiError::WrongKind {
                        id,
                        expected: $expected,
                        found: control.kind.name(),
                    })
                }

                $vis fn $get_mut(&mut self, id: ControlId) -> GuiResult<&mut $ty> {
                    let control = self.get_mut(id)?;
                    let found = control.kind.name();
                    control.$as_mut().ok_or(GuiError::WrongKind {
                        id,
                        expected: $expected,
                        found,
                    })
                }
            )*
        }
    };
}

typed_access! {
    button, pub button_mut => as_button, as_button_mut, Button, "button";
    panel, pub panel_mut => as_panel, as_panel_mut, Panel, "panel";
    tab_control, pub(crate) tab_control_mut => as_tab_control, as_tab_control_mut, TabControl, "tab control";
    textbox, pub textbox_mut => as_textbox, as_textbox_mut, Textbox, "textbox";
    root_control, pub root_control_mut => as_root, as_root_mut, RootControl, "root";
}
