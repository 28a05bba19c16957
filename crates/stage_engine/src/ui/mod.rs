//! UI System Module
//!
//! Widgets describe themselves as draw commands and read mouse state from
//! an input snapshot, so nothing here depends on a windowing library.
//!
//! Architecture:
//! - ButtonManager: flat store of the current scene's buttons
//! - widgets/: Button, UIElement and shared primitives
//! - rendering/: draw lists and the backend seam
//! - input/: per-frame input snapshot

pub mod input;
pub mod manager;
pub mod rendering;
pub mod widgets;

pub use manager::ButtonManager;

// Re-export widgets
pub use widgets::{Align, Button, ButtonState, UIElement};

// Re-export rendering types
pub use rendering::{DrawCommand, DrawList, RenderBackend};

// Re-export input types
pub use input::{InputState, MouseButton, MouseButtons};
