//! Generic config-driven UI element
//!
//! Elements are declared in a scene's `elements` list. One with an image
//! draws the image at its position and takes the image's size; otherwise it
//! draws a filled rectangle with an optional centred label.

use std::path::PathBuf;

use crate::action::{ActionContext, ActionRegistry, ResolvedAction};
use crate::foundation::math::{Color, Rect, Vec2};
use crate::graphics::ImageGraphic;
use crate::resources::{ElementDef, ResourceError};
use crate::text::TextManager;
use crate::ui::input::{InputState, MouseButton};
use crate::ui::rendering::DrawList;

use super::core::{Align, ButtonState};

/// Label font resolved from a font model
#[derive(Debug, Clone, PartialEq)]
struct LabelFont {
    path: PathBuf,
    size: u32,
}

/// A clickable element built from an [`ElementDef`]
#[derive(Debug, Clone, PartialEq)]
pub struct UIElement {
    element_id: String,
    element_type: String,
    rect: Rect,
    label: String,
    font: Option<LabelFont>,
    color: Color,
    image: Option<PathBuf>,
    action: ResolvedAction,
    state: ButtonState,

    /// Left button held on the previous update; starts held so a press
    /// carried over from another scene is not taken as a new one
    left_was_held: bool,
}

impl UIElement {
    /// Build from a definition; images give their size from the file header
    pub fn from_def(
        def: &ElementDef,
        texts: &TextManager,
        actions: &ActionRegistry,
    ) -> Result<Self, ResourceError> {
        let (rect, image) = match &def.image {
            Some(filename) => {
                let mut image = ImageGraphic::load(texts.assets_dir().join(filename))?;
                image.position = (def.x, def.y);
                (image.rect(), Some(image.path))
            }
            None => (Rect::new(def.x, def.y, def.width, def.height), None),
        };

        let font = match &def.font {
            Some(model) => {
                let model = texts.create_resource_instance(model)?;
                Some(LabelFont { path: model.path, size: model.size })
            }
            None => None,
        };

        Ok(Self {
            element_id: def.id.clone(),
            element_type: def.kind.clone(),
            rect,
            label: def.label.clone().unwrap_or_default(),
            font,
            color: def.color.unwrap_or(Color::BLACK),
            image,
            action: actions.resolve_optional(def.action.as_deref()),
            state: ButtonState::Normal,
            left_was_held: true,
        })
    }

    /// Identifier from the layout
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Free-form type from the layout
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Occupied area
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Resolved click action
    pub const fn action(&self) -> &ResolvedAction {
        &self.action
    }

    /// Pointer state after the last update
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether `position` lies on the element
    pub fn is_hovered(&self, position: Vec2) -> bool {
        self.rect.collide_point(position)
    }

    /// Track pointer state; returns true on the frame the left button goes down over the element
    pub fn update(&mut self, input: &InputState) -> bool {
        let held = input.is_pressed(MouseButton::Left);
        let pressed = held && !self.left_was_held;
        self.left_was_held = held;

        let hovered = self.is_hovered(input.mouse_position);
        self.state = match (hovered, held) {
            (false, _) => ButtonState::Normal,
            (true, false) => ButtonState::Hovered,
            (true, true) => ButtonState::Pressed,
        };
        hovered && pressed
    }

    /// Run the element's action; failures are logged
    pub fn click(&self, actions: &ActionRegistry, ctx: &mut ActionContext<'_>) {
        actions.run(&self.action, ctx, &self.element_id);
    }

    /// Emit the image, or the filled rect and label
    pub fn draw(&self, draw_list: &mut DrawList) {
        if let Some(path) = &self.image {
            draw_list.push_image(path.clone(), self.rect);
            return;
        }

        draw_list.push_rect(self.rect, self.color.to_vec4(), self.color.to_vec4(), 0);
        if let Some(font) = &self.font {
            if !self.label.is_empty() {
                let (cx, cy) = self.rect.center();
                draw_list.push_text(
                    self.label.clone(),
                    Some(font.path.clone()),
                    font.size,
                    Color::WHITE.to_vec4(),
                    Vec2::new(cx as f32, cy as f32),
                    Align::Center,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::StageConfig;
    use crate::resources::ResourceCatalog;
    use crate::scene::SceneCommand;
    use crate::stage::Managers;
    use crate::ui::rendering::DrawCommand;

    fn def(id: &str) -> ElementDef {
        ElementDef {
            id: id.to_string(),
            kind: "button".to_string(),
            x: 10,
            y: 20,
            width: 100,
            height: 40,
            label: Some("Play".to_string()),
            font: Some("liberation_serif".to_string()),
            color: Some(Color::new(40, 40, 40)),
            image: None,
            action: Some("scene_manager.set_scene('GameScene')".to_string()),
        }
    }

    fn texts(assets_dir: &Path) -> TextManager {
        let mut texts = TextManager::new(assets_dir);
        texts.load_resources(&ResourceCatalog::builtin().texts);
        texts
    }

    #[test]
    fn test_click_on_press_edge() {
        let actions = ActionRegistry::with_builtins();
        let mut element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        assert_eq!(element.element_type(), "button");
        assert!(element.action().is_bound());

        let over = InputState::at(50.0, 30.0);
        assert!(!element.update(&over));
        assert!(element.update(&over.pressing(MouseButton::Left)));
        assert!(!element.update(&over.pressing(MouseButton::Left)));
        assert!(!element.update(&over));
        assert_eq!(element.state(), ButtonState::Hovered);
    }

    #[test]
    fn test_press_dragged_in_is_ignored() {
        let actions = ActionRegistry::new();
        let mut element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        assert!(!element.update(&InputState::at(500.0, 500.0).pressing(MouseButton::Left)));
        assert!(!element.update(&InputState::at(50.0, 30.0).pressing(MouseButton::Left)));
        assert!(!element.update(&InputState::at(0.0, 0.0)));
    }

    #[test]
    fn test_press_arriving_with_move() {
        let actions = ActionRegistry::new();
        let mut element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        assert!(!element.update(&InputState::at(0.0, 0.0)));
        assert!(element.update(&InputState::at(50.0, 30.0).pressing(MouseButton::Left)));
        assert_eq!(element.state(), ButtonState::Pressed);
        assert!(!element.update(&InputState::at(50.0, 30.0)));
    }

    #[test]
    fn test_held_press_from_before_creation_is_ignored() {
        let actions = ActionRegistry::new();
        let mut element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        let over = InputState::at(50.0, 30.0);
        assert!(!element.update(&over.pressing(MouseButton::Left)));
        assert!(!element.update(&over));
        assert!(element.update(&over.pressing(MouseButton::Left)));
    }

    #[test]
    fn test_click_runs_action() {
        let actions = ActionRegistry::with_builtins();
        let element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        let mut managers = Managers::from_catalog(&StageConfig::default(), &ResourceCatalog::builtin());
        let mut commands = Vec::new();
        element.click(&actions, &mut ActionContext { managers: &mut managers, commands: &mut commands });
        assert_eq!(commands, [SceneCommand::SwitchTo("GameScene".to_string())]);
    }

    #[test]
    fn test_draw_rect_and_white_label() {
        let actions = ActionRegistry::new();
        let element = UIElement::from_def(&def("play"), &texts(Path::new("resources")), &actions).unwrap();
        let mut list = DrawList::new();
        element.draw(&mut list);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { rect, .. } if rect == Rect::new(10, 20, 100, 40)));
        match &list.commands()[1] {
            DrawCommand::Text { text, color, position, size, .. } => {
                assert_eq!(text, "Play");
                assert_eq!(*color, Color::WHITE.to_vec4());
                assert_eq!(*position, Vec2::new(60.0, 40.0));
                assert_eq!(*size, 24);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_image_sets_size() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(64, 32).save(dir.path().join("logo.png")).unwrap();

        let mut def = def("logo");
        def.image = Some("logo.png".to_string());
        let element = UIElement::from_def(&def, &texts(dir.path()), &ActionRegistry::new()).unwrap();
        assert_eq!(element.rect(), Rect::new(10, 20, 64, 32));

        let mut list = DrawList::new();
        element.draw(&mut list);
        assert_eq!(list.len(), 1);
        assert!(matches!(&list.commands()[0], DrawCommand::Image { path, .. } if path.ends_with("logo.png")));
    }

    #[test]
    fn test_unknown_font_model() {
        let mut def = def("broken");
        def.font = Some("comic_sans".to_string());
        assert!(UIElement::from_def(&def, &texts(Path::new("resources")), &ActionRegistry::new()).is_err());
    }
}
