//! Notifications produced while updating the control tree.
//!
//! Controls append to an [`EventQueue`] during [`GuiManager::update`]; the
//! host drains it afterwards with [`GuiManager::pop_events`].
//!
//! [`GuiManager::update`]: crate::GuiManager::update
//! [`GuiManager::pop_events`]: crate::GuiManager::pop_events

use crate::control::ControlId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// Left button released over a focused button.
    Click(ControlId),
    /// Left button held on a focused button. Fires every frame it is held.
    MousePress(ControlId),
    FocusGained(ControlId),
    FocusLost(ControlId),
    TabChanged {
        tab_control: ControlId,
        index: usize,
    },
    /// The textbox content changed this frame.
    TextChanged(ControlId),
    /// Enter pressed in a focused textbox.
    TextSubmitted(ControlId),
    /// Escape pressed in a focused textbox.
    EditCancelled(ControlId),
}

impl ControlEvent {
    /// The control the event is about.
    pub fn control(&self) -> ControlId {
        match *self {
            ControlEvent::Click(id)
            | ControlEvent::MousePress(id)
            | ControlEvent::FocusGained(id)
            | ControlEvent::FocusLost(id)
            | ControlEvent::TextChanged(id)
            | ControlEvent::TextSubmitted(id)
            | ControlEvent::EditCancelled(id) => id,
            ControlEvent::TabChanged { tab_control, .. } => tab_control,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<ControlEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.pending.push(event);
    }

    /// Take every queued event, oldest first.
    pub fn pop_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn peek(&self) -> &[ControlEvent] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
