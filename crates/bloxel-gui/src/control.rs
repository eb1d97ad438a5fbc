//! Control values and their identifiers.
//!
//! A [`Control`] carries what every widget has in common (name, tag, position
//! and client size) plus a [`ControlKind`] with the widget-specific state.
//! Once attached, controls live in the [`ControlTree`](crate::ControlTree)
//! arena and are addressed by [`ControlId`].

use std::fmt;

use bloxel_core::alloc::SlotId;
use bloxel_core::math::IVec2;

use crate::content::ContentLibrary;
use crate::error::{GuiError, GuiResult};
use crate::widgets::{Button, Panel, RootControl, TabControl, Textbox};

/// Stable handle to a control in the tree.
///
/// Ids of removed controls never resolve again, even if their storage is
/// reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(pub(crate) SlotId);

impl ControlId {
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl fmt::Debug for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlId({:?})", self.0)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.index())
    }
}

pub enum ControlKind {
    Root(RootControl),
    Button(Button),
    Panel(Panel),
    TabControl(TabControl),
    Textbox(Textbox),
}

impl ControlKind {
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Root(_) => "root",
            ControlKind::Button(_) => "button",
            ControlKind::Panel(_) => "panel",
            ControlKind::TabControl(_) => "tab control",
            ControlKind::Textbox(_) => "textbox",
        }
    }

    /// Width of the frame between the outer and client rectangles.
    pub fn border_width(&self) -> i32 {
        match self {
            ControlKind::Root(_) => 0,
            ControlKind::Button(_) | ControlKind::Panel(_) | ControlKind::TabControl(_) => 1,
            ControlKind::Textbox(_) => 2,
        }
    }

    /// Whether arbitrary children can be attached.
    pub fn is_container(&self) -> bool {
        matches!(self, ControlKind::Root(_) | ControlKind::Panel(_))
    }

    /// One-time hook run when the control is attached to the tree.
    pub(crate) fn on_loaded(&mut self, content: &ContentLibrary) {
        match self {
            ControlKind::Root(_) => {}
            ControlKind::Button(button) => button.on_loaded(content),
            ControlKind::Panel(panel) => panel.on_loaded(content),
            ControlKind::TabControl(tabs) => tabs.on_loaded(content),
            ControlKind::Textbox(_) => {}
        }
    }
}

impl fmt::Debug for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Control {
    pub name: String,
    /// Opaque value for the host. Tab headers carry their page index here.
    pub tag: Option<usize>,
    pub(crate) position: IVec2,
    pub(crate) size: IVec2,
    pub(crate) kind: ControlKind,
}

impl Control {
    pub fn new(kind: impl Into<ControlKind>) -> Self {
        Self {
            name: String::new(),
            tag: None,
            position: IVec2::ZERO,
            // Matches the smallest size a freshly constructed widget had.
            size: IVec2::splat(2),
            kind: kind.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Position relative to the parent's client origin.
    pub fn with_position(mut self, position: IVec2) -> Self {
        self.position = position;
        self
    }

    /// Client-area size; the border is added around it.
    pub fn with_size(mut self, size: IVec2) -> Self {
        self.size = size;
        self
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// The kind is fixed at construction. Swapping it on an attached control
    /// would bypass the tree's bookkeeping for the root and for keyboard
    /// capture, so hosts only get typed access to the widget inside.
    ///
    /// ```compile_fail
    /// use bloxel_gui::{Control, ControlKind, Panel, RootControl};
    ///
    /// let mut control = Control::new(Panel::new());
    /// *control.kind_mut() = ControlKind::Root(RootControl::default());
    /// ```
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    pub fn border_width(&self) -> i32 {
        self.kind.border_width()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, ControlKind::Root(_))
    }

    pub fn set_position(&mut self, position: IVec2) -> GuiResult<()> {
        if self.is_root() {
            return Err(GuiError::RootImmutable {
                property: "position",
            });
        }
        self.position = position;
        Ok(())
    }

    pub fn set_size(&mut self, size: IVec2) -> GuiResult<()> {
        if self.is_root() {
            return Err(GuiError::RootImmutable { property: "size" });
        }
        self.size = size;
        Ok(())
    }

    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            ControlKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            ControlKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match &self.kind {
            ControlKind::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut Panel> {
        match &mut self.kind {
            ControlKind::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn as_tab_control(&self) -> Option<&TabControl> {
        match &self.kind {
            ControlKind::TabControl(tabs) => Some(tabs),
            _ => None,
        }
    }

    /// Crate-only: replacing the whole value would orphan its pages.
    pub(crate) fn as_tab_control_mut(&mut self) -> Option<&mut TabControl> {
        match &mut self.kind {
            ControlKind::TabControl(tabs) => Some(tabs),
            _ => None,
        }
    }

    pub fn as_textbox(&self) -> Option<&Textbox> {
        match &self.kind {
            ControlKind::Textbox(textbox) => Some(textbox),
            _ => None,
        }
    }

    pub fn as_textbox_mut(&mut self) -> Option<&mut Textbox> {
        match &mut self.kind {
            ControlKind::Textbox(textbox) => Some(textbox),
            _ => None,
        }
    }

    pub fn as_root(&self) -> Option<&RootControl> {
        match &self.kind {
            ControlKind::Root(root) => Some(root),
            _ => None,
        }
    }

    pub fn as_root_mut(&mut self) -> Option<&mut RootControl> {
        match &mut self.kind {
            ControlKind::Root(root) => Some(root),
            _ => None,
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("size", &self.size)
            .finish()
    }
}

macro_rules! impl_from_widget {
    ($($widget:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$widget> for ControlKind {
                fn from(widget: $widget) -> Self {
                    ControlKind::$variant(widget)
                }
            }

            impl From<$widget> for Control {
                fn from(widget: $widget) -> Self {
                    Control::new(widget)
                }
            }
        )*
    };
}

impl_from_widget! {
    Button => Button,
    Panel => Panel,
    TabControl => TabControl,
    Textbox => Textbox,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloxel_core::math::ivec2;

    #[test]
    fn test_border_widths() {
        assert_eq!(Control::new(Button::new("ok")).border_width(), 1);
        assert_eq!(Control::new(Panel::new()).border_width(), 1);
        assert_eq!(Control::new(TabControl::new()).border_width(), 1);
        assert_eq!(Control::new(Textbox::new()).border_width(), 2);
    }

    #[test]
    fn test_builder() {
        let control = Control::new(Panel::new())
            .with_name("inventory")
            .with_tag(3)
            .with_position(ivec2(10, 20))
            .with_size(ivec2(100, 50));

        assert_eq!(control.name, "inventory");
        assert_eq!(control.tag, Some(3));
        assert_eq!(control.position(), ivec2(10, 20));
        assert_eq!(control.size(), ivec2(100, 50));
        assert!(control.as_panel().is_some());
        assert!(control.as_button().is_none());
    }

    #[test]
    fn test_non_root_geometry_is_mutable() {
        let mut control = Control::new(Textbox::new());
        assert!(control.set_position(ivec2(1, 2)).is_ok());
        assert!(control.set_size(ivec2(30, 20)).is_ok());
        assert_eq!(control.position(), ivec2(1, 2));
    }
}
