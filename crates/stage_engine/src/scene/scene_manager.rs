//! Scene Manager
//!
//! Owns the scenes, tracks the current one and builds its widgets from the
//! scene layouts. Buttons live in the shared [`ButtonManager`]
//! (`Managers::buttons`); texts and elements are owned here.
//!
//! [`ButtonManager`]: crate::ui::ButtonManager

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::action::{ActionRegistry, ResolvedAction};
use crate::foundation::collections::{ButtonId, ElementId, SlotMap, TextId};
use crate::resources::{ResourceError, SceneDef};
use crate::stage::Managers;
use crate::template::{Template, TemplateManager};
use crate::text::TextInstance;
use crate::ui::input::InputState;
use crate::ui::rendering::DrawList;
use crate::ui::widgets::{Button, UIElement};

use super::{LayoutScene, Scene, SceneCommand, SceneRegistry};

/// Scene management errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// No scene registered under this name
    #[error("scene '{0}' not found")]
    UnknownScene(String),
}

/// Template over the `scenes` dictionary; instances are the layouts themselves
pub struct SceneTemplate;

impl Template for SceneTemplate {
    type Definition = SceneDef;
    type Instance = SceneDef;
    const KIND: &'static str = "scene";
    const RESOURCE_TYPES: &'static [&'static str] = &["scene"];

    fn instantiate(_name: &str, definition: &SceneDef, _assets_dir: &Path) -> Result<SceneDef, ResourceError> {
        Ok(definition.clone())
    }
}

/// Widgets built for the current scene
#[derive(Debug, Default)]
pub struct SceneWidgets {
    buttons: Vec<(String, ButtonId)>,
    texts: SlotMap<TextId, TextInstance>,
    text_names: Vec<(String, TextId)>,
    elements: SlotMap<ElementId, UIElement>,
    element_order: Vec<ElementId>,
}

impl SceneWidgets {
    /// Handle of the named button
    pub fn button_id(&self, name: &str) -> Option<ButtonId> {
        self.buttons.iter().find(|(n, _)| n == name).map(|(_, id)| *id)
    }

    /// Layout name of a button
    pub fn button_name(&self, id: ButtonId) -> Option<&str> {
        self.buttons.iter().find(|(_, b)| *b == id).map(|(n, _)| n.as_str())
    }

    /// Button names in creation order
    pub fn button_names(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|(name, _)| name.as_str())
    }

    /// Named text
    pub fn text(&self, name: &str) -> Option<&TextInstance> {
        self.text_id(name).and_then(|id| self.texts.get(id))
    }

    /// Named text, mutable
    pub fn text_mut(&mut self, name: &str) -> Option<&mut TextInstance> {
        self.text_id(name).and_then(|id| self.texts.get_mut(id))
    }

    fn text_id(&self, name: &str) -> Option<TextId> {
        self.text_names.iter().find(|(n, _)| n == name).map(|(_, id)| *id)
    }

    /// Texts in creation order
    pub fn texts(&self) -> impl Iterator<Item = (&str, &TextInstance)> {
        self.text_names
            .iter()
            .filter_map(|(name, id)| self.texts.get(*id).map(|text| (name.as_str(), text)))
    }

    /// Element by handle
    pub fn element(&self, id: ElementId) -> Option<&UIElement> {
        self.elements.get(id)
    }

    /// Element by layout id
    pub fn element_by_id(&self, element_id: &str) -> Option<&UIElement> {
        self.elements().find(|element| element.element_id() == element_id)
    }

    /// Elements in creation order
    pub fn elements(&self) -> impl Iterator<Item = &UIElement> {
        self.element_order.iter().filter_map(|id| self.elements.get(*id))
    }

    fn clear(&mut self) {
        self.buttons.clear();
        self.texts.clear();
        self.text_names.clear();
        self.elements.clear();
        self.element_order.clear();
    }
}

/// What scenes may touch in `enter`, `exit` and `update`
pub struct SceneContext<'a> {
    /// Resource and widget managers
    pub managers: &'a mut Managers,
    /// The current scene's widgets
    pub widgets: &'a mut SceneWidgets,
}

impl SceneContext<'_> {
    /// Named button of the current scene
    pub fn button(&self, name: &str) -> Option<&Button> {
        self.widgets.button_id(name).and_then(|id| self.managers.buttons.get(id))
    }

    /// Named button of the current scene, mutable
    pub fn button_mut(&mut self, name: &str) -> Option<&mut Button> {
        self.widgets.button_id(name).and_then(|id| self.managers.buttons.get_mut(id))
    }

    /// Whether the named button completed a click this frame
    pub fn was_clicked(&self, name: &str) -> bool {
        self.button(name).is_some_and(|button| button.clicked_and_released)
    }

    /// Named text of the current scene, mutable
    pub fn text_mut(&mut self, name: &str) -> Option<&mut TextInstance> {
        self.widgets.text_mut(name)
    }
}

/// Read-only view handed to [`Scene::draw`]
pub struct SceneView<'a> {
    /// Resource and widget managers
    pub managers: &'a Managers,
    /// The current scene's widgets
    pub widgets: &'a SceneWidgets,
}

impl SceneView<'_> {
    /// Named button of the current scene
    pub fn button(&self, name: &str) -> Option<&Button> {
        self.widgets.button_id(name).and_then(|id| self.managers.buttons.get(id))
    }

    /// Named text of the current scene
    pub fn text(&self, name: &str) -> Option<&TextInstance> {
        self.widgets.text(name)
    }
}

/// Which kind of widget produced an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// A button click completed
    Button,
    /// An element was pressed
    Element,
}

/// An action to run on behalf of a widget
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    /// Button name or element id
    pub owner: String,
    /// Widget kind
    pub kind: TriggerKind,
    /// Action to run
    pub action: ResolvedAction,
}

/// Result of one scene manager update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneUpdate {
    /// Widget actions triggered this frame, buttons first
    pub actions: Vec<PendingAction>,
    /// Command returned by the current scene
    pub command: SceneCommand,
}

/// Owner of scenes and the current scene's widgets
pub struct SceneManager {
    layouts: TemplateManager<SceneTemplate>,
    scenes: BTreeMap<String, Box<dyn Scene>>,
    current: Option<String>,
    widgets: SceneWidgets,
}

impl SceneManager {
    /// Create a manager over the scene layouts of a catalog
    pub fn new(scene_defs: &BTreeMap<String, SceneDef>) -> Self {
        let mut layouts = TemplateManager::new(Path::new(""));
        layouts.load_resources(scene_defs);
        Self {
            layouts,
            scenes: BTreeMap::new(),
            current: None,
            widgets: SceneWidgets::default(),
        }
    }

    /// Instantiate every registered scene
    ///
    /// Layouts without a registered scene get a [`LayoutScene`]; registered
    /// scenes without a layout simply have no widgets. Returns the number of
    /// scenes available.
    pub fn load_scenes(&mut self, registry: &SceneRegistry) -> usize {
        for (name, scene) in registry.build_all() {
            if scene.name() != name {
                log::warn!("Scene registered as '{}' calls itself '{}'", name, scene.name());
            }
            if !self.layouts.contains(name) {
                log::debug!("Scene '{}' has no layout", name);
            }
            self.scenes.insert(name.to_string(), scene);
        }

        for name in self.layouts.names() {
            if !self.scenes.contains_key(name) {
                log::debug!("Scene '{}' is layout-only", name);
                self.scenes.insert(name.to_string(), Box::new(LayoutScene::new(name)));
            }
        }

        log::info!("Loaded {} scenes", self.scenes.len());
        self.scenes.len()
    }

    /// Whether a scene with this name is loaded
    pub fn contains_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Loaded scene names, sorted
    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    /// Name of the current scene
    pub fn current_scene_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Widgets of the current scene
    pub const fn widgets(&self) -> &SceneWidgets {
        &self.widgets
    }

    /// Make `name` the current scene
    ///
    /// The old scene is exited and its widgets destroyed, then the new scene
    /// is entered and its widgets built. An unknown name changes nothing.
    pub fn set_scene(
        &mut self,
        name: &str,
        managers: &mut Managers,
        actions: &ActionRegistry,
    ) -> Result<(), SceneError> {
        if !self.scenes.contains_key(name) {
            log::warn!("Scene '{}' not found.", name);
            return Err(SceneError::UnknownScene(name.to_string()));
        }

        if let Some(old) = self.current.take() {
            log::info!("Exiting scene '{}'", old);
            if let Some(scene) = self.scenes.get_mut(&old) {
                scene.exit(&mut SceneContext { managers: &mut *managers, widgets: &mut self.widgets });
            }
        }
        managers.buttons.clear_buttons();
        self.widgets.clear();

        log::info!("Entering scene '{}'", name);
        self.current = Some(name.to_string());
        if let Some(scene) = self.scenes.get_mut(name) {
            scene.enter(&mut SceneContext { managers: &mut *managers, widgets: &mut self.widgets });
        }

        let buttons = self.create_buttons_from_dict(name, managers, actions);
        let texts = self.create_texts_from_dict(name, managers);
        let elements = self.create_elements_from_dict(name, managers, actions);
        log::debug!("Scene '{}' built {} buttons, {} texts, {} elements", name, buttons, texts, elements);
        Ok(())
    }

    /// Create the buttons of a scene layout; returns how many were created
    ///
    /// A button whose graphic cannot be instantiated is skipped.
    pub fn create_buttons_from_dict(
        &mut self,
        scene: &str,
        managers: &mut Managers,
        actions: &ActionRegistry,
    ) -> usize {
        let Some(layout) = self.layouts.definition(scene) else {
            return 0;
        };

        let mut created = 0;
        for def in &layout.buttons {
            let graphic = match managers.graphics.create_resource_instance(&def.graphic) {
                Ok(graphic) => graphic,
                Err(e) => {
                    log::warn!("Skipping button '{}' in scene '{}': {}", def.name, scene, e);
                    continue;
                }
            };

            let id = managers.buttons.create_button();
            if let Some(button) = managers.buttons.get_mut(id) {
                button.set_graphic(graphic);
                button.set_rect(def.rect);
                if let Some(text) = &def.text {
                    button.set_text(text.clone());
                }
                if let Some(align) = def.align {
                    button.set_align(align);
                }
                if let Some(hit_rect) = def.hit_rect {
                    button.set_hit_rect(hit_rect);
                }
                button.set_action(actions.resolve_optional(def.action.as_deref()));
            }
            self.widgets.buttons.push((def.name.clone(), id));
            created += 1;
        }
        created
    }

    /// Create the texts of a scene layout; returns how many were created
    pub fn create_texts_from_dict(&mut self, scene: &str, managers: &Managers) -> usize {
        let Some(layout) = self.layouts.definition(scene) else {
            return 0;
        };

        let mut created = 0;
        for def in &layout.texts {
            let mut text = match managers.texts.create_text_instance(&def.model) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Skipping text '{}' in scene '{}': {}", def.name, scene, e);
                    continue;
                }
            };
            text.set_text(def.text.clone());
            text.set_position(def.position);
            if let Some(color) = def.color {
                text.set_color(color);
            }
            if let Some(size) = def.size {
                text.set_size(size);
            }
            if let Some(align) = def.align {
                text.set_align(align);
            }

            let id = self.widgets.texts.insert(text);
            self.widgets.text_names.push((def.name.clone(), id));
            created += 1;
        }
        created
    }

    /// Create the generic elements of a scene layout; returns how many were created
    pub fn create_elements_from_dict(
        &mut self,
        scene: &str,
        managers: &Managers,
        actions: &ActionRegistry,
    ) -> usize {
        let Some(layout) = self.layouts.definition(scene) else {
            return 0;
        };

        let mut created = 0;
        for def in &layout.elements {
            match UIElement::from_def(def, &managers.texts, actions) {
                Ok(element) => {
                    let id = self.widgets.elements.insert(element);
                    self.widgets.element_order.push(id);
                    created += 1;
                }
                Err(e) => log::warn!("Skipping element '{}' in scene '{}': {}", def.id, scene, e),
            }
        }
        created
    }

    /// Feed input to the widgets, then update the current scene
    pub fn update(&mut self, dt: f32, input: &InputState, managers: &mut Managers) -> SceneUpdate {
        let mut update = SceneUpdate::default();
        let Some(current) = self.current.as_deref() else {
            return update;
        };

        managers.buttons.update(dt, input);
        for id in managers.buttons.released_buttons() {
            let (Some(name), Some(button)) = (self.widgets.button_name(id), managers.buttons.get(id)) else {
                continue;
            };
            update.actions.push(PendingAction {
                owner: name.to_string(),
                kind: TriggerKind::Button,
                action: button.action.clone(),
            });
        }

        for id in &self.widgets.element_order {
            if let Some(element) = self.widgets.elements.get_mut(*id) {
                if element.update(input) {
                    update.actions.push(PendingAction {
                        owner: element.element_id().to_string(),
                        kind: TriggerKind::Element,
                        action: element.action().clone(),
                    });
                }
            }
        }

        if let Some(scene) = self.scenes.get_mut(current) {
            update.command = scene.update(dt, &mut SceneContext { managers, widgets: &mut self.widgets });
        }
        update
    }

    /// Draw the current scene, then its buttons, texts and elements
    pub fn draw(&self, managers: &Managers, draw_list: &mut DrawList) {
        let Some(current) = self.current.as_deref() else {
            return;
        };

        if let Some(scene) = self.scenes.get(current) {
            scene.draw(&SceneView { managers, widgets: &self.widgets }, draw_list);
        }
        managers.buttons.draw(draw_list);
        for (_, text) in self.widgets.texts() {
            text.draw(draw_list);
        }
        for element in self.widgets.elements() {
            element.draw(draw_list);
        }
    }
}

impl std::fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneManager")
            .field("scenes", &self.scenes.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("widgets", &self.widgets)
            .finish_non_exhaustive()
    }
}
