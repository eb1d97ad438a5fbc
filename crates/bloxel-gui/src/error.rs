//! Error types for the GUI core.

use std::fmt;

use bloxel_input::InputError;

use crate::control::ControlId;

/// Errors that can occur while building or driving the control tree.
///
/// Everything here is a programming error in the host: the per-frame paths
/// clamp indices and bounds rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Tried to move or resize the root control.
    RootImmutable {
        /// The property that was being changed.
        property: &'static str,
    },

    /// The root control cannot be removed.
    CannotRemoveRoot,

    /// A tree has exactly one root; another one cannot be attached.
    DuplicateRoot,

    /// The id does not name a live control (never issued, or removed).
    UnknownControl(ControlId),

    /// Children can only be attached to the root or a panel.
    NotAContainer(ControlId),

    /// Tab pages can only be added to a tab control.
    NotATabControl(ControlId),

    /// A tab page body must be a panel.
    NotAPanel {
        found: &'static str,
    },

    /// The control exists but is not of the kind the accessor expects.
    WrongKind {
        id: ControlId,
        expected: &'static str,
        found: &'static str,
    },

    /// A custom asset id was looked up but never stored.
    AssetNotFound(String),

    /// A custom asset exists but has a different type.
    AssetTypeMismatch {
        id: String,
        expected: &'static str,
    },

    /// A custom asset id was stored twice.
    DuplicateAsset(String),

    /// Keyboard capture misuse.
    Input(InputError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuiError::RootImmutable { property } => {
                write!(f, "Modifying the {} of the root control is not supported", property)
            }
            GuiError::CannotRemoveRoot => write!(f, "The root control cannot be removed"),
            GuiError::DuplicateRoot => write!(f, "A root control cannot be attached to a tree"),
            GuiError::UnknownControl(id) => write!(f, "Unknown control: {}", id),
            GuiError::WrongKind {
                id,
                expected,
                found,
            } => write!(f, "Control {} is a {}, expected a {}", id, found, expected),
            GuiError::NotAContainer(id) => write!(f, "Control {} cannot hold children", id),
            GuiError::NotATabControl(id) => write!(f, "Control {} is not a tab control", id),
            GuiError::NotAPanel { found } => {
                write!(f, "Tab pages must be panels, got a {}", found)
            }
            GuiError::AssetNotFound(id) => write!(f, "Custom asset not found: {}", id),
            GuiError::AssetTypeMismatch { id, expected } => {
                write!(f, "Custom asset '{}' is not a {}", id, expected)
            }
            GuiError::DuplicateAsset(id) => write!(f, "Custom asset already stored: {}", id),
            GuiError::Input(err) => write!(f, "Input error: {}", err),
        }
    }
}

impl std::error::Error for GuiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuiError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for GuiError {
    fn from(err: InputError) -> Self {
        GuiError::Input(err)
    }
}

/// Result type for GUI operations.
pub type GuiResult<T> = Result<T, GuiError>;
