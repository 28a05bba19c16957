//! Button Manager
//!
//! Flat store of the buttons on screen. The scene manager fills it when a
//! scene is entered and clears it on the way out; buttons are updated and
//! drawn in creation order.

use crate::foundation::collections::{ButtonId, SlotMap};
use crate::ui::input::InputState;
use crate::ui::rendering::DrawList;

use super::widgets::Button;

/// Central button store
#[derive(Debug, Default)]
pub struct ButtonManager {
    buttons: SlotMap<ButtonId, Button>,

    /// Creation order; slot maps reuse freed slots
    order: Vec<ButtonId>,
}

impl ButtonManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default button and return its handle
    pub fn create_button(&mut self) -> ButtonId {
        let id = self.buttons.insert(Button::new());
        self.order.push(id);
        id
    }

    /// Get button reference
    pub fn get(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id)
    }

    /// Get button mutable reference
    pub fn get_mut(&mut self, id: ButtonId) -> Option<&mut Button> {
        self.buttons.get_mut(id)
    }

    /// Remove every button; previously issued handles become stale
    pub fn clear_buttons(&mut self) {
        log::debug!("Clearing {} buttons", self.buttons.len());
        self.buttons.clear();
        self.order.clear();
    }

    /// Number of buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether there are no buttons
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Buttons in creation order
    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &Button)> {
        self.order.iter().filter_map(|&id| self.buttons.get(id).map(|button| (id, button)))
    }

    /// Advance button graphics by `dt` and update click state
    pub fn update(&mut self, dt: f32, input: &InputState) {
        for &id in &self.order {
            if let Some(button) = self.buttons.get_mut(id) {
                button.animate(dt);
                button.update(input);
            }
        }
    }

    /// Draw every button in creation order
    pub fn draw(&self, draw_list: &mut DrawList) {
        for (_, button) in self.iter() {
            button.draw(draw_list);
        }
    }

    /// Buttons whose click completed during the last update
    pub fn released_buttons(&self) -> Vec<ButtonId> {
        self.iter()
            .filter(|(_, button)| button.clicked_and_released)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::MouseButton;
    use crate::ui::rendering::DrawCommand;

    fn manager_with_two() -> (ButtonManager, ButtonId, ButtonId) {
        let mut manager = ButtonManager::new();
        let first = manager.create_button();
        let second = manager.create_button();
        manager.get_mut(first).unwrap().set_rect((0, 0, 100, 50));
        manager.get_mut(second).unwrap().set_rect((0, 100, 100, 50));
        (manager, first, second)
    }

    #[test]
    fn test_released_buttons() {
        let (mut manager, first, _) = manager_with_two();
        let over_first = InputState::at(10.0, 10.0);

        manager.update(0.016, &over_first.pressing(MouseButton::Left));
        assert!(manager.released_buttons().is_empty());
        manager.update(0.016, &over_first);
        assert_eq!(manager.released_buttons(), [first]);
        manager.update(0.016, &over_first);
        assert!(manager.released_buttons().is_empty());
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let (mut manager, first, _) = manager_with_two();
        assert_eq!(manager.len(), 2);
        manager.clear_buttons();
        assert!(manager.is_empty());
        assert!(manager.get(first).is_none());

        let fresh = manager.create_button();
        assert!(manager.get(fresh).is_some());
        assert_eq!(manager.iter().count(), 1);
    }

    #[test]
    fn test_draw_in_creation_order() {
        let (mut manager, first, second) = manager_with_two();
        manager.get_mut(first).unwrap().set_text("one");
        manager.get_mut(second).unwrap().set_text("two");

        let mut list = DrawList::new();
        manager.draw(&mut list);
        let labels: Vec<_> = list
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["one", "two"]);
    }
}
