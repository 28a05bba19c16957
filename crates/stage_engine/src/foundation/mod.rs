//! Foundation module - Core utilities and types
//!
//! - Math types (vectors, colors, rectangles)
//! - Handle collections for widget storage
//! - Frame timing
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
