//! Render backend that logs draw lists instead of drawing them

use stage_engine::prelude::*;

/// Logs every submitted command at trace level and a per-frame summary at debug level
#[derive(Debug, Default)]
pub struct LogBackend {
    frame: u64,
    rects: usize,
    images: usize,
    texts: usize,
}

impl LogBackend {
    /// Create a backend with no frames drawn
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub const fn frames(&self) -> u64 {
        self.frame
    }
}

impl RenderBackend for LogBackend {
    fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.frame += 1;
        self.rects = 0;
        self.images = 0;
        self.texts = 0;
        Ok(())
    }

    fn submit(&mut self, draw_list: &DrawList) -> Result<(), Box<dyn std::error::Error>> {
        for command in draw_list {
            log::trace!("frame {}: {:?}", self.frame, command);
            match command {
                DrawCommand::Rect { .. } => self.rects += 1,
                DrawCommand::Image { .. } => self.images += 1,
                DrawCommand::Text { .. } => self.texts += 1,
            }
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!(
            "frame {}: {} rects, {} images, {} texts",
            self.frame,
            self.rects,
            self.images,
            self.texts
        );
        Ok(())
    }
}
