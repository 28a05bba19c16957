//! Resource dictionaries
//!
//! Declarative descriptions of every asset a game uses, grouped the way the
//! managers consume them:
//!
//! - **audio**: music tracks and sound effects
//! - **graphics**: images, image sequences, interface panels, button skins
//! - **scenes**: per-scene widget layouts (buttons, texts, elements)
//! - **texts**: font models
//!
//! A catalog is either the builtin one ([`ResourceCatalog::builtin`]) or a
//! RON file. Layout lists are ordered; widgets are created in the order they
//! are declared.

mod builtin;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::{Color, Rect};
use crate::ui::widgets::Align;

/// Resource loading and lookup errors
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No definition with this name for the given resource kind
    #[error("{kind} resource '{name}' not found")]
    NotFound {
        /// Resource kind (graphic, font, audio, scene)
        kind: &'static str,
        /// Requested name
        name: String,
    },

    /// Definition exists but has a different type than requested
    #[error("resource '{name}' is a {found}, expected {expected}")]
    WrongKind {
        /// Requested name
        name: String,
        /// Type the caller needed
        expected: &'static str,
        /// Type actually defined
        found: &'static str,
    },

    /// Image header could not be read
    #[error("failed to read image {path}: {source}")]
    Image {
        /// Resolved image path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// A scene refers to a resource that is not defined
    #[error("scene '{scene}' references unknown {kind} '{name}'")]
    MissingReference {
        /// Scene containing the reference
        scene: String,
        /// Kind of the referenced resource
        kind: &'static str,
        /// Referenced name
        name: String,
    },

    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog text could not be parsed
    #[error("catalog parse error: {0}")]
    Parse(String),
}

/// Definitions that carry a type name used to route them to a manager
pub trait ResourceDef {
    /// Type name as written in dictionaries (`image`, `music`, `font`, ...)
    fn type_name(&self) -> &'static str;
}

/// Kind of an audio definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioKind {
    /// Streamed background track
    Music,
    /// Short effect
    Sound,
}

/// Audio asset definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioDef {
    /// Music or sound
    pub kind: AudioKind,
    /// File name relative to the assets directory
    pub filename: String,
}

impl ResourceDef for AudioDef {
    fn type_name(&self) -> &'static str {
        match self.kind {
            AudioKind::Music => "music",
            AudioKind::Sound => "sound",
        }
    }
}

/// One frame of an image sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDef {
    /// File name relative to the assets directory
    pub filename: String,
}

/// Colors of an interface panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelColors {
    /// Fill color
    pub default: Color,
    /// Border color
    pub border: Color,
}

/// Colors of a button skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonColors {
    /// Fill while hovered
    pub active: Color,
    /// Fill otherwise
    pub inactive: Color,
    /// Border color
    pub border: Color,
}

/// Graphic asset definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphicDef {
    /// A single image file
    Image {
        /// File name relative to the assets directory
        filename: String,
    },
    /// Frames shown in turn
    ImageSequence {
        /// Frames in display order
        files: Vec<FrameDef>,
        /// Seconds each frame stays on screen
        frame_duration: f32,
    },
    /// A bordered rectangle with its own hit area
    Interface {
        /// Fill and border colors
        color: PanelColors,
        /// Drawn area
        rect: Rect,
        /// Hit-test area, centered on `rect`
        hit_rect: Rect,
        /// Border width in pixels
        border_size: u32,
    },
    /// Skin for buttons; drawn into the owning button's rect
    Button {
        /// Active, inactive and border colors
        color: ButtonColors,
        /// Border width in pixels
        border_size: u32,
    },
}

impl ResourceDef for GraphicDef {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::ImageSequence { .. } => "image_sequence",
            Self::Interface { .. } => "interface",
            Self::Button { .. } => "button",
        }
    }
}

/// Font model definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDef {
    /// Font file relative to the assets directory
    pub filename: String,
    /// Default point size
    pub size: u32,
    /// Default text color
    pub color: Color,
    /// Default alignment
    #[serde(default)]
    pub alignment: Align,
}

impl ResourceDef for FontDef {
    fn type_name(&self) -> &'static str {
        "font"
    }
}

/// A button declared by a scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDef {
    /// Name the scene looks the button up by
    pub name: String,
    /// Graphic used as the button skin
    pub graphic: String,
    /// `(x, y, width, height)`
    pub rect: (i32, i32, i32, i32),
    /// Label
    #[serde(default)]
    pub text: Option<String>,
    /// Label alignment inside the rect
    #[serde(default)]
    pub align: Option<Align>,
    /// Hit area size; centered on the rect
    #[serde(default)]
    pub hit_rect: Option<(i32, i32, i32, i32)>,
    /// Action run when the button is clicked and released
    #[serde(default)]
    pub action: Option<String>,
}

/// A text label declared by a scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDef {
    /// Name the scene looks the text up by
    pub name: String,
    /// Font model
    pub model: String,
    /// Content
    pub text: String,
    /// Anchor position
    pub position: (i32, i32),
    /// Overrides the font color
    #[serde(default)]
    pub color: Option<Color>,
    /// Overrides the font size
    #[serde(default)]
    pub size: Option<u32>,
    /// Overrides the font alignment
    #[serde(default)]
    pub align: Option<Align>,
}

/// A generic UI element declared by a scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    /// Element identifier
    pub id: String,
    /// Free-form element type (`button`, `image`, `label`, ...)
    pub kind: String,
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width (ignored when an image is given)
    pub width: i32,
    /// Height (ignored when an image is given)
    pub height: i32,
    /// Label drawn when the element has no image
    #[serde(default)]
    pub label: Option<String>,
    /// Font model for the label
    #[serde(default)]
    pub font: Option<String>,
    /// Fill color when the element has no image
    #[serde(default)]
    pub color: Option<Color>,
    /// Image file relative to the assets directory
    #[serde(default)]
    pub image: Option<String>,
    /// Action run on click
    #[serde(default)]
    pub action: Option<String>,
}

/// Widget layout of one scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDef {
    /// Buttons, in creation order
    pub buttons: Vec<ButtonDef>,
    /// Text labels, in creation order
    pub texts: Vec<TextDef>,
    /// Generic elements, in creation order
    pub elements: Vec<ElementDef>,
}

impl ResourceDef for SceneDef {
    fn type_name(&self) -> &'static str {
        "scene"
    }
}

/// The complete set of resource dictionaries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCatalog {
    /// Audio definitions by name
    pub audio: BTreeMap<String, AudioDef>,
    /// Graphic definitions by name
    pub graphics: BTreeMap<String, GraphicDef>,
    /// Scene layouts by scene name
    pub scenes: BTreeMap<String, SceneDef>,
    /// Font models by name
    pub texts: BTreeMap<String, FontDef>,
}

impl ResourceCatalog {
    /// The stock dictionaries shipped with the engine
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parse a catalog from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ResourceError> {
        ron::from_str(text).map_err(|e| ResourceError::Parse(e.to_string()))
    }

    /// Load a catalog from a RON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_ron_str(&text)?;
        log::info!(
            "Loaded catalog {}: {} audio, {} graphics, {} scenes, {} fonts",
            path.display(),
            catalog.audio.len(),
            catalog.graphics.len(),
            catalog.scenes.len(),
            catalog.texts.len()
        );
        Ok(catalog)
    }

    /// Check that every name a scene layout refers to is defined
    pub fn validate(&self) -> Result<(), ResourceError> {
        for (scene, layout) in &self.scenes {
            let missing = |kind: &'static str, name: &str| ResourceError::MissingReference {
                scene: scene.clone(),
                kind,
                name: name.to_string(),
            };

            for button in &layout.buttons {
                if !self.graphics.contains_key(&button.graphic) {
                    return Err(missing("graphic", &button.graphic));
                }
            }
            for text in &layout.texts {
                if !self.texts.contains_key(&text.model) {
                    return Err(missing("font", &text.model));
                }
            }
            for element in &layout.elements {
                if let Some(font) = &element.font {
                    if !self.texts.contains_key(font) {
                        return Err(missing("font", font));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r##"#![enable(implicit_some)]
(
    audio: {
        "theme": (kind: music, filename: "theme.ogg"),
    },
    graphics: {
        "skin": Button(
            color: (active: (0, 255, 0), inactive: (255, 0, 0), border: (0, 0, 255)),
            border_size: 3,
        ),
        "frame": Interface(
            color: (default: (0, 0, 0), border: (255, 255, 255)),
            rect: (x: 10, y: 10, width: 100, height: 50),
            hit_rect: (x: 0, y: 0, width: 80, height: 30),
            border_size: 2,
        ),
    },
    scenes: {
        "Menu": (
            buttons: [
                (name: "play", graphic: "skin", rect: (10, 20, 100, 40), text: "Play",
                 action: "scene_manager.set_scene('Game')"),
                (name: "quit", graphic: "skin", rect: (10, 80, 100, 40), align: "nw"),
            ],
            texts: [
                (name: "title", model: "serif", text: "Hello", position: (300, 40)),
            ],
        ),
    },
    texts: {
        "serif": (filename: "serif.ttf", size: 24, color: (255, 255, 255), alignment: "center"),
    },
)
"##;

    #[test]
    fn test_parse_ron_catalog() {
        let catalog = ResourceCatalog::from_ron_str(CATALOG).unwrap();
        assert_eq!(catalog.audio["theme"].type_name(), "music");
        assert_eq!(catalog.graphics["skin"].type_name(), "button");
        assert_eq!(catalog.graphics["frame"].type_name(), "interface");

        let menu = &catalog.scenes["Menu"];
        let names: Vec<_> = menu.buttons.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["play", "quit"]);
        assert_eq!(menu.buttons[0].text.as_deref(), Some("Play"));
        assert_eq!(menu.buttons[1].align, Some(Align::TopLeft));
        assert!(menu.elements.is_empty());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_graphic() {
        let mut catalog = ResourceCatalog::from_ron_str(CATALOG).unwrap();
        catalog.graphics.remove("skin");
        match catalog.validate() {
            Err(ResourceError::MissingReference { scene, kind, name }) => {
                assert_eq!(scene, "Menu");
                assert_eq!(kind, "graphic");
                assert_eq!(name, "skin");
            }
            other => panic!("expected missing reference, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            ResourceCatalog::from_ron_str("(graphics: {\"x\": Sprite()})"),
            Err(ResourceError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");
        std::fs::write(&path, CATALOG).unwrap();
        let catalog = ResourceCatalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.scenes.len(), 1);
    }

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = ResourceCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.scenes["MainMenuScene"].buttons.len(), 6);
        assert_eq!(catalog.scenes["GameScene"].buttons.len(), 2);
        assert_eq!(catalog.scenes["SettingsScene"].buttons.len(), 4);
        assert_eq!(catalog.scenes["MainMenuScene"].texts.len(), 2);
    }
}
