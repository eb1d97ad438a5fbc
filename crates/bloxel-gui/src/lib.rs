//! Bloxel GUI - retained-mode widget core for the Bloxel voxel engine
//!
//! This crate provides the control hierarchy used for in-game menus:
//! - An arena-backed control tree with derived absolute geometry
//! - Mouse-driven focus routing, one focused child per container
//! - Buttons, panels, tab controls and single-line text boxes
//! - A renderer-agnostic draw pass through the [`Renderer`] trait
//! - Queued [`ControlEvent`] notifications instead of callbacks-only wiring
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use bloxel_gui::*;
//! # fn host(renderer: Box<dyn Renderer>, content: ContentLibrary) -> GuiResult<()> {
//! let mut gui = GuiManager::new(GuiConfig::default(), content, renderer)?;
//!
//! let tabs = gui.add_control(
//!     Control::new(TabControl::new())
//!         .with_position(ivec2(100, 100))
//!         .with_size(ivec2(300, 200)),
//! )?;
//! let general = gui.add_tab_page(tabs, "General", Panel::new())?;
//! gui.add_child(
//!     general.panel,
//!     Control::new(Textbox::new().with_text("Player"))
//!         .with_position(ivec2(10, 10))
//!         .with_size(ivec2(120, 20)),
//! )?;
//!
//! // In the game loop:
//! // gui.input_mut().handle_window_event(&event);
//! // gui.update(clock.tick())?;
//! // gui.draw()?;
//! // for event in gui.pop_events() { ... }
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod content;
pub mod context;
pub mod control;
pub mod error;
pub mod event;
pub mod focus;
pub mod manager;
pub mod render;
pub mod time;
pub mod tree;
pub mod widgets;

pub use color::Color;
pub use config::GuiConfig;
pub use content::{ContentHandles, ContentLibrary, FontId, FontSize, TextureId};
pub use context::UpdateContext;
pub use control::{Control, ControlId, ControlKind};
pub use error::{GuiError, GuiResult};
pub use event::{ControlEvent, EventQueue};
pub use manager::GuiManager;
pub use render::{Renderer, ShapeRenderer};
pub use time::{FrameClock, FrameTime};
pub use tree::ControlTree;
pub use widgets::{Button, Panel, RootControl, TabControl, TabPage, Textbox};

// Re-export common types
pub use bloxel_core::geometry::IRect;
pub use bloxel_core::math::{IVec2, Vec2, ivec2, vec2};
pub use bloxel_input::{Input, KeyboardBuffer, Mouse, MouseButton};
