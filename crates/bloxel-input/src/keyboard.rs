//! Keyboard text capture.
//!
//! [`KeyboardBuffer`] accumulates typed characters and a handful of editing
//! keys while capture is enabled. It is an ordinary owned value: the GUI
//! manager holds one and lends it to whichever control currently wants text.
//! Capture has a single owner at a time, so enabling it twice is an error.

use bitflags::bitflags;

use crate::error::{InputError, InputResult};

bitflags! {
    /// One-shot editing keys. Each is cleared when read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EditKeys: u8 {
        const BACKSPACE = 1 << 0;
        const ENTER = 1 << 1;
        const ESCAPE = 1 << 2;
        const SELECT_ALL = 1 << 3;
        const LEFT = 1 << 4;
        const RIGHT = 1 << 5;
    }
}

const CHAR_SELECT_ALL: char = '\u{1}';
const CHAR_BACKSPACE: char = '\u{8}';
const CHAR_ENTER: char = '\r';
const CHAR_ESCAPE: char = '\u{1b}';

#[derive(Debug, Default)]
pub struct KeyboardBuffer {
    enabled: bool,
    buffer: String,
    keys: EditKeys,
}

impl KeyboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start capturing. Clears anything left over from a previous owner.
    pub fn enable(&mut self) -> InputResult<()> {
        if self.enabled {
            return Err(InputError::CaptureAlreadyEnabled);
        }
        self.enabled = true;
        self.buffer.clear();
        self.keys = EditKeys::empty();
        tracing::trace!("keyboard capture enabled");
        Ok(())
    }

    /// Stop capturing. Disabling an idle buffer is fine.
    pub fn disable(&mut self) {
        if self.enabled {
            tracing::trace!("keyboard capture disabled");
        }
        self.enabled = false;
        self.buffer.clear();
        self.keys = EditKeys::empty();
    }

    /// Feed one translated character.
    ///
    /// Control characters map to edit keys (0x08 backspace, CR enter, 0x1B
    /// escape, 0x01 select-all); other characters below 0x20 are dropped.
    /// Nothing is recorded while capture is disabled.
    pub fn push_char(&mut self, c: char) {
        if !self.enabled {
            return;
        }
        match c {
            CHAR_BACKSPACE => self.keys |= EditKeys::BACKSPACE,
            CHAR_ENTER => self.keys |= EditKeys::ENTER,
            CHAR_ESCAPE => self.keys |= EditKeys::ESCAPE,
            CHAR_SELECT_ALL => self.keys |= EditKeys::SELECT_ALL,
            c if (c as u32) < 0x20 => {}
            c => self.buffer.push(c),
        }
    }

    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push_char(c);
        }
    }

    /// Record editing keys that do not arrive as characters (arrows).
    pub fn press(&mut self, keys: EditKeys) {
        if self.enabled {
            self.keys |= keys;
        }
    }

    /// Drain the text typed since the last call.
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Drain the text, discarding it entirely if it contains a space.
    pub fn take_text_no_spaces(&mut self) -> String {
        let text = self.take_text();
        if text.contains(' ') { String::new() } else { text }
    }

    /// Drain the text, discarding it unless it parses as an `i32`.
    pub fn take_text_integers_only(&mut self) -> String {
        let text = self.take_text();
        if text.parse::<i32>().is_ok() { text } else { String::new() }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Read and clear one or more edit keys. True if any of them was set.
    pub fn take(&mut self, keys: EditKeys) -> bool {
        let hit = self.keys.intersects(keys);
        self.keys.remove(keys);
        hit
    }

    pub fn backspace(&mut self) -> bool {
        self.take(EditKeys::BACKSPACE)
    }

    pub fn enter(&mut self) -> bool {
        self.take(EditKeys::ENTER)
    }

    pub fn escape(&mut self) -> bool {
        self.take(EditKeys::ESCAPE)
    }

    pub fn select_all(&mut self) -> bool {
        self.take(EditKeys::SELECT_ALL)
    }

    pub fn left(&mut self) -> bool {
        self.take(EditKeys::LEFT)
    }

    pub fn right(&mut self) -> bool {
        self.take(EditKeys::RIGHT)
    }
}
