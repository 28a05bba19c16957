//! Backend-agnostic draw commands
//!
//! Widgets and scenes describe a frame as an ordered list of commands; the
//! host's renderer consumes the list without knowing about widgets.

use std::path::PathBuf;

use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::ui::widgets::Align;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle with an optional border
    Rect {
        /// Area in screen pixels
        rect: Rect,
        /// Fill color (RGBA)
        color: Vec4,
        /// Border color, drawn when `border_width > 0`
        border_color: Vec4,
        /// Border width in pixels
        border_width: u32,
    },
    /// Image file blitted into a rectangle
    Image {
        /// Resolved image path
        path: PathBuf,
        /// Destination area
        rect: Rect,
    },
    /// Text run anchored at a point
    Text {
        /// Content
        text: String,
        /// Font file, `None` for the backend's default font
        font: Option<PathBuf>,
        /// Point size
        size: u32,
        /// Text color (RGBA)
        color: Vec4,
        /// Anchor point in screen pixels
        position: Vec2,
        /// Which point of the text box sits on the anchor
        align: Align,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Append a filled rectangle
    pub fn push_rect(&mut self, rect: Rect, color: Vec4, border_color: Vec4, border_width: u32) {
        self.push(DrawCommand::Rect { rect, color, border_color, border_width });
    }

    /// Append an image
    pub fn push_image(&mut self, path: impl Into<PathBuf>, rect: Rect) {
        self.push(DrawCommand::Image { path: path.into(), rect });
    }

    /// Append a text run
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: Option<PathBuf>,
        size: u32,
        color: Vec4,
        position: Vec2,
        align: Align,
    ) {
        self.push(DrawCommand::Text { text: text.into(), font, size, color, position, align });
    }

    /// Commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate commands in submission order
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Remove all commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
