//! UI input snapshot
//!
//! Hosts poll their windowing library and write the mouse state here once
//! per frame; widgets read it during `update`.

use bitflags::bitflags;

use crate::foundation::math::Vec2;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

bitflags! {
    /// Set of mouse buttons currently held down
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left mouse button
        const LEFT = 1 << 0;
        /// Right mouse button
        const RIGHT = 1 << 1;
        /// Middle mouse button
        const MIDDLE = 1 << 2;
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

/// Mouse state for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Cursor position in screen pixels
    pub mouse_position: Vec2,
    /// Buttons held down
    pub buttons: MouseButtons,
}

impl InputState {
    /// Snapshot with the cursor at `(x, y)` and no buttons held
    pub fn at(x: f32, y: f32) -> Self {
        Self { mouse_position: Vec2::new(x, y), buttons: MouseButtons::empty() }
    }

    /// Builder: hold `button`
    #[must_use]
    pub fn pressing(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button.into());
        self
    }

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button.into(), pressed);
    }

    /// Whether `button` is held
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_tracking() {
        let mut input = InputState::at(10.0, 20.0);
        assert!(!input.is_pressed(MouseButton::Left));

        input.update_mouse_button(MouseButton::Left, true);
        input.update_mouse_button(MouseButton::Right, true);
        assert!(input.is_pressed(MouseButton::Left));
        assert!(input.is_pressed(MouseButton::Right));

        input.update_mouse_button(MouseButton::Left, false);
        assert!(!input.is_pressed(MouseButton::Left));
        assert_eq!(input.buttons, MouseButtons::RIGHT);
    }

    #[test]
    fn test_pressing_builder() {
        let input = InputState::at(1.0, 2.0).pressing(MouseButton::Middle);
        assert!(input.is_pressed(MouseButton::Middle));
        assert_eq!(input.mouse_position, Vec2::new(1.0, 2.0));
    }
}
