//! Test utilities for the Bloxel GUI.
//!
//! The GUI core draws through the [`Renderer`](bloxel_gui::Renderer) trait
//! and reads input from plain values, so tests need neither a window nor a
//! GPU:
//!
//! - [`MockRenderer`] records every draw call and answers text metrics with
//!   a fixed-width font.
//! - [`GuiHarness`] wraps a [`GuiManager`](bloxel_gui::GuiManager) and
//!   scripts mouse and keyboard input one frame at a time.
//!
//! # Example
//!
//! ```rust
//! use bloxel_gui::{Button, Control, ControlEvent, ivec2};
//! use bloxel_test_utils::GuiHarness;
//!
//! let mut harness = GuiHarness::new();
//! let ok = harness
//!     .gui
//!     .add_control(
//!         Control::new(Button::new("OK"))
//!             .with_position(ivec2(10, 10))
//!             .with_size(ivec2(40, 20)),
//!     )
//!     .unwrap();
//!
//! let events = harness.click_at(ivec2(20, 20));
//! assert!(events.contains(&ControlEvent::Click(ok)));
//! ```

pub mod harness;
pub mod mock_render;

pub use harness::GuiHarness;
pub use mock_render::{DrawCall, GLYPH_WIDTH, LINE_HEIGHT, MockRenderer, mock_content};
