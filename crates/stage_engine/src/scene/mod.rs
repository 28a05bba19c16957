//! Scene management system
//!
//! A game is a set of mutually exclusive screens. Each screen is a [`Scene`]
//! registered by name in a [`SceneRegistry`]; the [`SceneManager`] keeps one
//! of them current and builds its widgets from the scene's layout in the
//! resource catalog every time it is entered.
//!
//! ```text
//! SceneRegistry (factories)     ResourceCatalog.scenes (layouts)
//!            \                      /
//!             SceneManager (current scene + widgets)
//!                       |
//!                  DrawList / SceneCommand
//! ```

mod scene_manager;

use std::collections::BTreeMap;
use std::fmt;

use crate::ui::rendering::DrawList;

pub use scene_manager::{
    PendingAction, SceneContext, SceneError, SceneManager, SceneTemplate, SceneUpdate, SceneView,
    SceneWidgets, TriggerKind,
};

/// What the stage should do after a scene update or an action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SceneCommand {
    /// Keep going
    #[default]
    None,
    /// Switch to the named scene
    SwitchTo(String),
    /// Stop the stage
    Quit,
}

/// One game screen
///
/// Widgets declared in the scene's layout are created before
/// [`enter`](Scene::enter) returns control to the frame loop and destroyed
/// after [`exit`](Scene::exit).
pub trait Scene {
    /// Registered scene name
    fn name(&self) -> &str;

    /// Called when the scene becomes current, before its widgets are built
    fn enter(&mut self, _ctx: &mut SceneContext<'_>) {}

    /// Called when another scene replaces this one
    fn exit(&mut self, _ctx: &mut SceneContext<'_>) {}

    /// Per-frame logic, after the widgets have seen this frame's input
    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext<'_>) -> SceneCommand {
        SceneCommand::None
    }

    /// Draw anything that is not a widget; runs before widgets are drawn
    fn draw(&self, _view: &SceneView<'_>, _draw_list: &mut DrawList) {}
}

/// Builds a fresh scene
pub type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

/// Scene factories by name
#[derive(Default)]
pub struct SceneRegistry {
    factories: BTreeMap<String, SceneFactory>,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; an existing one under the same name is replaced
    pub fn register<F, S>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> S + 'static,
        S: Scene + 'static,
    {
        let name = name.into();
        log::debug!("Registering scene '{}'", name);
        self.factories.insert(name, Box::new(move || Box::new(factory()) as Box<dyn Scene>));
    }

    /// Builder form of [`register`](Self::register)
    #[must_use]
    pub fn with<F, S>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> S + 'static,
        S: Scene + 'static,
    {
        self.register(name, factory);
        self
    }

    /// Whether a factory exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered scenes
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub(crate) fn build_all(&self) -> impl Iterator<Item = (&str, Box<dyn Scene>)> + '_ {
        self.factories.iter().map(|(name, factory)| (name.as_str(), factory()))
    }
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneRegistry").field("scenes", &self.factories.keys().collect::<Vec<_>>()).finish()
    }
}

/// Scene with no behavior of its own; used for layouts nobody registered
#[derive(Debug, Clone)]
pub struct LayoutScene {
    name: String,
}

impl LayoutScene {
    /// Create a layout-only scene
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Scene for LayoutScene {
    fn name(&self) -> &str {
        &self.name
    }
}
