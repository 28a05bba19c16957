//! Graphic Manager
//!
//! Instantiates graphics from the `graphics` dictionary:
//!
//! - `image`: a single image, sized from its file header
//! - `image_sequence`: frames advanced by elapsed time
//! - `interface`: a bordered panel with a centered hit area
//! - `button`: a skin drawn into the owning button's rect
//!
//! Pixels are never decoded here; only image headers are read so widgets
//! can be sized. The host's backend loads and blits the files.

use std::path::{Path, PathBuf};

use crate::foundation::math::{Color, Rect, Vec2};
use crate::resources::{GraphicDef, ResourceError};
use crate::template::{Template, TemplateManager};
use crate::ui::rendering::DrawList;

/// Template over the `graphics` dictionary
pub struct GraphicTemplate;

/// Manager for graphic definitions
pub type GraphicManager = TemplateManager<GraphicTemplate>;

impl Template for GraphicTemplate {
    type Definition = GraphicDef;
    type Instance = Graphic;
    const KIND: &'static str = "graphic";
    const RESOURCE_TYPES: &'static [&'static str] = &["image", "image_sequence", "interface", "button"];

    fn instantiate(name: &str, definition: &GraphicDef, assets_dir: &Path) -> Result<Graphic, ResourceError> {
        log::debug!("Instantiating graphic '{}'", name);
        let graphic = match definition {
            GraphicDef::Image { filename } => Graphic::Image(ImageGraphic::load(assets_dir.join(filename))?),
            GraphicDef::ImageSequence { files, frame_duration } => {
                let frames = files
                    .iter()
                    .map(|frame| ImageGraphic::load(assets_dir.join(&frame.filename)))
                    .collect::<Result<Vec<_>, _>>()?;
                Graphic::Sequence(ImageSequence::new(frames, *frame_duration))
            }
            GraphicDef::Interface { color, rect, hit_rect, border_size } => Graphic::Interface(InterfacePanel {
                color: color.default,
                border_color: color.border,
                rect: *rect,
                hit_rect: hit_rect.with_center(rect.center()),
                border_size: *border_size,
            }),
            GraphicDef::Button { color, border_size } => Graphic::Button(ButtonSkin {
                color_active: color.active,
                color_inactive: color.inactive,
                border_color: color.border,
                border_size: *border_size,
                highlighted: false,
            }),
        };
        Ok(graphic)
    }
}

/// A single image placed at a position
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGraphic {
    /// Resolved file path
    pub path: PathBuf,
    /// Pixel size read from the file header
    pub size: (u32, u32),
    /// Top-left corner
    pub position: (i32, i32),
}

impl ImageGraphic {
    /// Read the image header to learn its size
    pub fn load(path: PathBuf) -> Result<Self, ResourceError> {
        let size = image::image_dimensions(&path).map_err(|source| ResourceError::Image {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, size, position: (0, 0) })
    }

    /// Area covered at the current position
    pub fn rect(&self) -> Rect {
        let (width, height) = self.size;
        Rect::new(
            self.position.0,
            self.position.1,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }
}

/// Frames shown one after another
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSequence {
    frames: Vec<ImageGraphic>,
    frame_duration: f32,
    elapsed: f32,
    current: usize,
    position: (i32, i32),
}

impl ImageSequence {
    /// Create a sequence starting at the first frame
    pub fn new(frames: Vec<ImageGraphic>, frame_duration: f32) -> Self {
        Self { frames, frame_duration, elapsed: 0.0, current: 0, position: (0, 0) }
    }

    /// Advance by `dt` seconds, wrapping after the last frame
    pub fn update(&mut self, dt: f32) {
        if self.frames.len() < 2 || self.frame_duration <= 0.0 {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.frame_duration {
            self.elapsed -= self.frame_duration;
            self.current = (self.current + 1) % self.frames.len();
        }
    }

    /// Index of the frame on screen
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Frame on screen
    pub fn current_frame(&self) -> Option<&ImageGraphic> {
        self.frames.get(self.current)
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Bordered rectangle with its own hit area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfacePanel {
    /// Fill color
    pub color: Color,
    /// Border color
    pub border_color: Color,
    /// Drawn area
    pub rect: Rect,
    /// Hit-test area
    pub hit_rect: Rect,
    /// Border width in pixels
    pub border_size: u32,
}

impl InterfacePanel {
    /// Whether the point lies within the hit area
    pub fn contains(&self, point: Vec2) -> bool {
        self.hit_rect.collide_point(point)
    }
}

/// Colors used to draw a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSkin {
    /// Fill while hovered
    pub color_active: Color,
    /// Fill otherwise
    pub color_inactive: Color,
    /// Border color
    pub border_color: Color,
    /// Border width in pixels
    pub border_size: u32,
    highlighted: bool,
}

impl ButtonSkin {
    /// Switch between the active and inactive fill
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Whether the active fill is in use
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Fill color for the current state
    pub const fn current_color(&self) -> Color {
        if self.highlighted {
            self.color_active
        } else {
            self.color_inactive
        }
    }
}

/// A live graphic instance
#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    /// Single image
    Image(ImageGraphic),
    /// Animated frames
    Sequence(ImageSequence),
    /// Bordered panel
    Interface(InterfacePanel),
    /// Button skin
    Button(ButtonSkin),
}

impl Graphic {
    /// Dictionary type name of this graphic
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Sequence(_) => "image_sequence",
            Self::Interface(_) => "interface",
            Self::Button(_) => "button",
        }
    }

    /// Advance animations
    pub fn update(&mut self, dt: f32) {
        if let Self::Sequence(sequence) = self {
            sequence.update(dt);
        }
    }

    /// Move images and panels so their top-left corner is at `position`
    pub fn set_position(&mut self, position: (i32, i32)) {
        match self {
            Self::Image(image) => image.position = position,
            Self::Sequence(sequence) => sequence.position = position,
            Self::Interface(panel) => {
                let hit_center = panel.hit_rect.center();
                let offset = (position.0 - panel.rect.x, position.1 - panel.rect.y);
                panel.rect.x = position.0;
                panel.rect.y = position.1;
                panel.hit_rect = panel.hit_rect.with_center((hit_center.0 + offset.0, hit_center.1 + offset.1));
            }
            Self::Button(_) => {}
        }
    }

    /// Button skin, when this graphic is one
    pub fn as_button_skin_mut(&mut self) -> Option<&mut ButtonSkin> {
        match self {
            Self::Button(skin) => Some(skin),
            _ => None,
        }
    }

    /// Emit draw commands
    ///
    /// `bounds` overrides the graphic's own placement. Button skins have no
    /// placement of their own and draw nothing without it.
    pub fn draw(&self, draw_list: &mut DrawList, bounds: Option<Rect>) {
        match self {
            Self::Image(image) => draw_list.push_image(image.path.clone(), bounds.unwrap_or_else(|| image.rect())),
            Self::Sequence(sequence) => {
                if let Some(frame) = sequence.current_frame() {
                    let rect = bounds.unwrap_or_else(|| ImageGraphic { position: sequence.position, ..frame.clone() }.rect());
                    draw_list.push_image(frame.path.clone(), rect);
                }
            }
            Self::Interface(panel) => draw_list.push_rect(
                bounds.unwrap_or(panel.rect),
                panel.color.to_vec4(),
                panel.border_color.to_vec4(),
                panel.border_size,
            ),
            Self::Button(skin) => match bounds {
                Some(rect) => draw_list.push_rect(
                    rect,
                    skin.current_color().to_vec4(),
                    skin.border_color.to_vec4(),
                    skin.border_size,
                ),
                None => log::debug!("Button skin drawn without bounds; skipped"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceCatalog;
    use crate::ui::rendering::DrawCommand;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        image::RgbaImage::new(width, height).save(dir.join(name)).unwrap();
    }

    fn builtin_manager(assets_dir: &Path) -> GraphicManager {
        let mut manager = GraphicManager::new(assets_dir);
        manager.load_resources(&ResourceCatalog::builtin().graphics);
        manager
    }

    #[test]
    fn test_button_skin_highlight() {
        let manager = builtin_manager(Path::new("resources"));
        let mut graphic = manager.create_resource_instance("default_button").unwrap();
        let skin = graphic.as_button_skin_mut().unwrap();
        assert_eq!(skin.current_color(), Color::new(255, 0, 0));
        skin.set_highlighted(true);
        assert_eq!(skin.current_color(), Color::new(0, 255, 0));

        let mut list = DrawList::new();
        graphic.draw(&mut list, None);
        assert!(list.is_empty());
        graphic.draw(&mut list, Some(Rect::new(1, 2, 3, 4)));
        assert!(matches!(list.commands()[0], DrawCommand::Rect { border_width: 5, .. }));
    }

    #[test]
    fn test_interface_hit_rect_is_centered() {
        let mut catalog = ResourceCatalog::builtin();
        catalog.graphics.insert(
            "small_hit".to_string(),
            GraphicDef::Interface {
                color: crate::resources::PanelColors { default: Color::BLACK, border: Color::WHITE },
                rect: Rect::new(0, 0, 100, 100),
                hit_rect: Rect::new(0, 0, 20, 20),
                border_size: 1,
            },
        );
        let mut manager = GraphicManager::new("resources");
        manager.load_resources(&catalog.graphics);

        let mut graphic = manager.create_resource_instance("small_hit").unwrap();
        let Graphic::Interface(panel) = &graphic else { panic!("expected interface") };
        assert_eq!(panel.hit_rect, Rect::new(40, 40, 20, 20));
        assert!(panel.contains(Vec2::new(50.0, 50.0)));
        assert!(!panel.contains(Vec2::new(10.0, 10.0)));

        graphic.set_position((100, 0));
        let Graphic::Interface(panel) = &graphic else { panic!("expected interface") };
        assert_eq!(panel.hit_rect, Rect::new(140, 40, 20, 20));
    }

    #[test]
    fn test_image_size_from_header() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "debug_graphic_manager_single.png", 32, 16);
        let manager = builtin_manager(dir.path());

        let mut graphic = manager.create_resource_instance("default_single").unwrap();
        graphic.set_position((5, 6));
        let mut list = DrawList::new();
        graphic.draw(&mut list, None);
        match &list.commands()[0] {
            DrawCommand::Image { rect, path } => {
                assert_eq!(*rect, Rect::new(5, 6, 32, 16));
                assert!(path.ends_with("debug_graphic_manager_single.png"));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = builtin_manager(dir.path());
        assert!(matches!(
            manager.create_resource_instance("default_single"),
            Err(ResourceError::Image { .. })
        ));
    }

    #[test]
    fn test_sequence_advances_and_wraps() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "debug_graphic_manager_sequence_1.png", 8, 8);
        write_png(dir.path(), "debug_graphic_manager_sequence_2.png", 8, 8);
        let manager = builtin_manager(dir.path());

        let mut graphic = manager.create_resource_instance("default_sequence").unwrap();
        let index = |g: &Graphic| match g {
            Graphic::Sequence(s) => s.current_index(),
            _ => unreachable!(),
        };
        assert_eq!(index(&graphic), 0);
        graphic.update(0.1);
        assert_eq!(index(&graphic), 0);
        graphic.update(0.15);
        assert_eq!(index(&graphic), 1);
        graphic.update(0.2);
        assert_eq!(index(&graphic), 0);
    }

    #[test]
    fn test_sequence_with_zero_duration_holds() {
        let frames = vec![
            ImageGraphic { path: "a.png".into(), size: (1, 1), position: (0, 0) },
            ImageGraphic { path: "b.png".into(), size: (1, 1), position: (0, 0) },
        ];
        let mut sequence = ImageSequence::new(frames, 0.0);
        sequence.update(10.0);
        assert_eq!(sequence.current_index(), 0);
    }
}
