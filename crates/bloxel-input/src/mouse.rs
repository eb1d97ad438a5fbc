//! Polled mouse state with edge detection.
//!
//! The host writes live values as window events arrive. Once per frame
//! [`Mouse::update`] latches them into the current snapshot and keeps the
//! previous one, so "just pressed" and "just released" queries are stable for
//! the whole frame no matter how many controls ask.

use bloxel_core::math::IVec2;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseSnapshot {
    pub position: IVec2,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseSnapshot {
    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    fn set(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Right => self.right = down,
            MouseButton::Middle => self.middle = down,
        }
    }
}

#[derive(Debug, Default)]
pub struct Mouse {
    live: MouseSnapshot,
    current: MouseSnapshot,
    previous: MouseSnapshot,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the live state for a new frame.
    pub fn update(&mut self) {
        self.previous = self.current;
        self.current = self.live;
    }

    pub fn set_position(&mut self, position: IVec2) {
        self.live.position = position;
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.live.set(button, down);
    }

    pub fn position(&self) -> IVec2 {
        self.current.position
    }

    pub fn x(&self) -> i32 {
        self.current.position.x
    }

    pub fn y(&self) -> i32 {
        self.current.position.y
    }

    pub fn current(&self) -> MouseSnapshot {
        self.current
    }

    pub fn previous(&self) -> MouseSnapshot {
        self.previous
    }

    /// Whether `button` is held this frame.
    ///
    /// With `edge_only` the query is true only on the frame the button went
    /// from released to pressed.
    pub fn is_button_down(&self, button: MouseButton, edge_only: bool) -> bool {
        let down = self.current.is_down(button);
        if edge_only {
            down && !self.previous.is_down(button)
        } else {
            down
        }
    }

    /// True only on the frame `button` went from pressed to released.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        !self.current.is_down(button) && self.previous.is_down(button)
    }

    pub fn is_left_down(&self, edge_only: bool) -> bool {
        self.is_button_down(MouseButton::Left, edge_only)
    }

    pub fn is_right_down(&self, edge_only: bool) -> bool {
        self.is_button_down(MouseButton::Right, edge_only)
    }

    pub fn is_left_released(&self) -> bool {
        self.is_button_released(MouseButton::Left)
    }

    /// Left or right button went down this frame.
    pub fn any_pressed_edge(&self) -> bool {
        self.is_left_down(true) || self.is_right_down(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_lasts_one_frame() {
        let mut mouse = Mouse::new();
        mouse.set_button(MouseButton::Left, true);

        mouse.update();
        assert!(mouse.is_left_down(true));
        assert!(mouse.is_left_down(false));

        mouse.update();
        assert!(!mouse.is_left_down(true));
        assert!(mouse.is_left_down(false));
    }

    #[test]
    fn test_release_edge() {
        let mut mouse = Mouse::new();
        mouse.set_button(MouseButton::Left, true);
        mouse.update();
        assert!(!mouse.is_left_released());

        mouse.set_button(MouseButton::Left, false);
        mouse.update();
        assert!(mouse.is_left_released());

        mouse.update();
        assert!(!mouse.is_left_released());
    }

    #[test]
    fn test_live_changes_are_invisible_until_update() {
        let mut mouse = Mouse::new();
        mouse.set_position(IVec2::new(7, 7));
        mouse.set_button(MouseButton::Right, true);
        assert_eq!(mouse.position(), IVec2::ZERO);
        assert!(!mouse.any_pressed_edge());

        mouse.update();
        assert_eq!(mouse.position(), IVec2::new(7, 7));
        assert!(mouse.any_pressed_edge());
        assert!(mouse.is_right_down(true));
    }

    #[test]
    fn test_tap_within_one_frame_is_not_seen() {
        let mut mouse = Mouse::new();
        mouse.set_button(MouseButton::Left, true);
        mouse.set_button(MouseButton::Left, false);
        mouse.update();
        assert!(!mouse.is_left_down(false));
        assert!(!mouse.is_left_released());
    }
}
