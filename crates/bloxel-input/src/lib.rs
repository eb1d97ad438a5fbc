//! Bloxel input handling.
//!
//! Two collaborators feed the GUI core:
//! - [`Mouse`], polled once per frame, answers position and edge-triggered
//!   button queries.
//! - [`KeyboardBuffer`] collects typed text and one-shot editing keys while a
//!   control holds keyboard capture.
//!
//! [`Input`] bundles both. With the `winit` feature it can be fed directly
//! from `winit::event::WindowEvent`s.

pub mod error;
pub mod keyboard;
pub mod mouse;
#[cfg(feature = "winit")]
mod window_events;

pub use error::{InputError, InputResult};
pub use keyboard::{EditKeys, KeyboardBuffer};
pub use mouse::{Mouse, MouseButton, MouseSnapshot};

/// Mouse and keyboard state owned by the composition root.
#[derive(Debug, Default)]
pub struct Input {
    pub mouse: Mouse,
    pub keyboard: KeyboardBuffer,
    #[cfg(feature = "winit")]
    modifiers: ::winit::keyboard::ModifiersState,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch live mouse state for the coming frame.
    pub fn poll(&mut self) {
        self.mouse.update();
    }
}
