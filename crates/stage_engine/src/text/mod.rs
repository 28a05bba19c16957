//! Text Manager
//!
//! Font models come from the `texts` dictionary. A text instance starts
//! from its model's size, color and alignment; scenes and layouts override
//! them per label. Rasterization is left to the host backend, which
//! receives the font file path with each draw command.

use std::path::{Path, PathBuf};

use crate::foundation::math::{Color, Vec2};
use crate::resources::{FontDef, ResourceError};
use crate::template::{Template, TemplateManager};
use crate::ui::rendering::DrawList;
use crate::ui::widgets::Align;

/// Template over the `texts` dictionary
pub struct FontTemplate;

/// Manager for font models
pub type TextManager = TemplateManager<FontTemplate>;

/// A resolved font model
#[derive(Debug, Clone, PartialEq)]
pub struct FontModel {
    /// Model name
    pub name: String,
    /// Resolved font file
    pub path: PathBuf,
    /// Default point size
    pub size: u32,
    /// Default color
    pub color: Color,
    /// Default alignment
    pub alignment: Align,
}

impl Template for FontTemplate {
    type Definition = FontDef;
    type Instance = FontModel;
    const KIND: &'static str = "font";
    const RESOURCE_TYPES: &'static [&'static str] = &["font"];

    fn instantiate(name: &str, definition: &FontDef, assets_dir: &Path) -> Result<FontModel, ResourceError> {
        Ok(FontModel {
            name: name.to_string(),
            path: assets_dir.join(&definition.filename),
            size: definition.size,
            color: definition.color,
            alignment: definition.alignment,
        })
    }
}

impl TemplateManager<FontTemplate> {
    /// Create a text instance seeded from the named font model
    pub fn create_text_instance(&self, model: &str) -> Result<TextInstance, ResourceError> {
        let font = self.create_resource_instance(model)?;
        Ok(TextInstance::from_model(font))
    }
}

/// A label drawn with a font model
#[derive(Debug, Clone, PartialEq)]
pub struct TextInstance {
    model: String,
    font: PathBuf,
    position: (i32, i32),
    text: String,
    color: Color,
    size: u32,
    align: Align,
    visible: bool,
}

impl TextInstance {
    fn from_model(font: FontModel) -> Self {
        Self {
            model: font.name,
            font: font.path,
            position: (0, 0),
            text: String::new(),
            color: font.color,
            size: font.size,
            align: font.alignment,
            visible: true,
        }
    }

    /// Font model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Swap to another model's font file, keeping overrides
    pub fn set_model(&mut self, model: &FontModel) {
        self.model.clone_from(&model.name);
        self.font.clone_from(&model.path);
    }

    /// Anchor position
    pub const fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Move the anchor
    pub fn set_position(&mut self, position: (i32, i32)) {
        self.position = position;
    }

    /// Content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Override the color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Point size
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Override the point size
    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    /// Alignment of the text box on its anchor
    pub const fn align(&self) -> Align {
        self.align
    }

    /// Override the alignment
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Show or hide
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Emit a text command; hidden or empty labels draw nothing
    pub fn draw(&self, draw_list: &mut DrawList) {
        if !self.visible || self.text.is_empty() {
            return;
        }
        draw_list.push_text(
            self.text.clone(),
            Some(self.font.clone()),
            self.size,
            self.color.to_vec4(),
            Vec2::new(self.position.0 as f32, self.position.1 as f32),
            self.align,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceCatalog;
    use crate::ui::rendering::DrawCommand;

    fn manager() -> TextManager {
        let mut texts = TextManager::new("resources");
        texts.load_resources(&ResourceCatalog::builtin().texts);
        texts
    }

    #[test]
    fn test_instance_uses_model_defaults() {
        let text = manager().create_text_instance("liberation_serif").unwrap();
        assert_eq!(text.model(), "liberation_serif");
        assert_eq!(text.size(), 24);
        assert_eq!(text.color(), Color::WHITE);
        assert_eq!(text.align(), Align::Center);
    }

    #[test]
    fn test_overrides_and_draw() {
        let mut text = manager().create_text_instance("liberation_serif").unwrap();
        text.set_text("Hello World 2!");
        text.set_position((600, 360));
        text.set_color(Color::BLACK);
        text.set_align(Align::TopLeft);

        let mut list = DrawList::new();
        text.draw(&mut list);
        match &list.commands()[0] {
            DrawCommand::Text { text, font, size, position, align, .. } => {
                assert_eq!(text, "Hello World 2!");
                assert_eq!(font.as_deref(), Some(Path::new("resources/LiberationSerif-Regular.ttf")));
                assert_eq!(*size, 24);
                assert_eq!(*position, Vec2::new(600.0, 360.0));
                assert_eq!(*align, Align::TopLeft);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_or_hidden_text_draws_nothing() {
        let mut text = manager().create_text_instance("liberation_serif").unwrap();
        let mut list = DrawList::new();
        text.draw(&mut list);
        text.set_text("x");
        text.set_visible(false);
        text.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_unknown_model() {
        assert!(matches!(
            manager().create_text_instance("comic_sans"),
            Err(ResourceError::NotFound { kind: "font", .. })
        ));
    }
}
