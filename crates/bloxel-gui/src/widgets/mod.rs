//! The built-in controls.
//!
//! Each widget module holds the widget's own state type plus two free
//! functions the tree dispatches to once per frame:
//!
//! - `update(tree, id, ctx)` reads input, adjusts focus below the widget and
//!   records what the draw pass needs.
//! - `draw(tree, id, widget, shapes)` paints it, reading the tree only.
//!
//! Containers (the root and [`Panel`]) route focus among their children
//! through [`crate::focus`]. [`TabControl`] owns its header buttons and page
//! panels directly and routes focus among them itself.

pub mod button;
pub mod panel;
pub mod root;
pub mod tab_control;
pub mod textbox;

pub use button::{Button, ButtonCallback};
pub use panel::Panel;
pub use root::RootControl;
pub use tab_control::{TabControl, TabPage};
pub use textbox::{TextChangeCallback, Textbox};
