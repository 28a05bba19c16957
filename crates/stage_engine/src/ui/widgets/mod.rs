//! UI widgets module
//!
//! Buttons, generic layout elements and the primitives they share.

pub mod button;
pub mod core;
pub mod element;

// Re-export core types
pub use self::core::{Align, ButtonState, ParseAlignError};

// Re-export widget types
pub use button::Button;
pub use element::UIElement;
