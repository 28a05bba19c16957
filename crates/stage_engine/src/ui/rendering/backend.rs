//! Render Backend Trait
//!
//! The interface between the stage and whatever 2D library the host draws
//! with. Keeps scenes and widgets independent of any graphics API.

use super::DrawList;

/// Host-implemented renderer for draw lists
pub trait RenderBackend {
    /// Begin a frame
    fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Draw every command of the list, in order
    fn submit(&mut self, draw_list: &DrawList) -> Result<(), Box<dyn std::error::Error>>;

    /// Present the frame
    fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
