//! UI input handling module

pub mod state;

// Re-export commonly used types
pub use state::{InputState, MouseButton, MouseButtons};
