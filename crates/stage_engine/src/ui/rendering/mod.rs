//! UI rendering module
//!
//! Backend-agnostic draw lists and the backend seam.

pub mod backend;
pub mod commands;

pub use backend::RenderBackend;
pub use commands::{DrawCommand, DrawList};
