use std::fmt;

/// Errors raised by the input collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Keyboard capture was enabled while it was already enabled.
    ///
    /// Capture has a single owner at a time; a second `enable` means two
    /// controls believe they hold keyboard focus.
    CaptureAlreadyEnabled,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::CaptureAlreadyEnabled => {
                write!(f, "Keyboard capture is already enabled")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;
