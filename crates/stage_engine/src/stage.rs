//! Core stage implementation

use std::path::Path;

use thiserror::Error;

use crate::action::{ActionContext, ActionRegistry};
use crate::audio::AudioManager;
use crate::core::{AssetConfig, ConfigError, StageConfig};
use crate::events::{Event, EventSystem, StageEvent};
use crate::graphics::GraphicManager;
use crate::resources::{ResourceCatalog, ResourceError};
use crate::scene::{SceneCommand, SceneError, SceneManager, SceneRegistry, TriggerKind};
use crate::text::TextManager;
use crate::ui::input::InputState;
use crate::ui::rendering::{DrawList, RenderBackend};
use crate::ui::ButtonManager;

/// Stage errors
#[derive(Debug, Error)]
pub enum StageError {
    /// Configuration was rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or is inconsistent
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Scene switch failed
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Host render backend failed
    #[error("render error: {0}")]
    Render(String),
}

/// The resource and widget managers shared by scenes and actions
#[derive(Debug)]
pub struct Managers {
    /// Graphic definitions
    pub graphics: GraphicManager,
    /// Font models
    pub texts: TextManager,
    /// Audio definitions and playback state
    pub audio: AudioManager,
    /// Buttons of the current scene
    pub buttons: ButtonManager,
}

impl Managers {
    /// Create managers and load the catalog's definitions into them
    pub fn from_catalog(config: &StageConfig, catalog: &ResourceCatalog) -> Self {
        let assets_dir = Path::new(&config.assets.assets_dir);

        let mut graphics = GraphicManager::new(assets_dir);
        graphics.load_resources(&catalog.graphics);

        let mut texts = TextManager::new(assets_dir);
        texts.load_resources(&catalog.texts);

        let mut audio = AudioManager::new(assets_dir, config.engine.volume_step);
        audio.clips_mut().load_resources(&catalog.audio);

        Self {
            graphics,
            texts,
            audio,
            buttons: ButtonManager::new(),
        }
    }
}

/// Load the configured catalog file, or the builtin catalog when none is set
pub fn load_catalog(assets: &AssetConfig) -> Result<ResourceCatalog, ResourceError> {
    match &assets.catalog_path {
        Some(path) => ResourceCatalog::load_from_file(path),
        None => {
            log::info!("No catalog configured, using builtin dictionaries");
            Ok(ResourceCatalog::builtin())
        }
    }
}

/// Main stage struct
///
/// Owns the managers, the scene manager, the action registry and the event
/// system, and drives them one frame at a time. The host supplies input
/// snapshots and a render backend.
pub struct Stage {
    managers: Managers,
    scenes: SceneManager,
    actions: ActionRegistry,
    events: EventSystem,
    config: StageConfig,
    elapsed: f64,
    running: bool,
}

impl Stage {
    /// Create a stage from a configuration, a catalog and the game's scenes
    pub fn new(config: StageConfig, catalog: &ResourceCatalog, registry: &SceneRegistry) -> Result<Self, StageError> {
        log::info!("Initializing stage...");
        config.validate()?;
        catalog.validate()?;

        let managers = Managers::from_catalog(&config, catalog);
        let mut scenes = SceneManager::new(&catalog.scenes);
        scenes.load_scenes(registry);

        Ok(Self {
            managers,
            scenes,
            actions: ActionRegistry::with_builtins(),
            events: EventSystem::new(),
            config,
            elapsed: 0.0,
            running: true,
        })
    }

    /// Create a stage, loading the catalog named by the configuration
    pub fn from_config(config: StageConfig, registry: &SceneRegistry) -> Result<Self, StageError> {
        let catalog = load_catalog(&config.assets)?;
        Self::new(config, &catalog, registry)
    }

    /// Enter the configured start scene
    pub fn start(&mut self) -> Result<(), StageError> {
        let start = self.config.engine.start_scene.clone();
        log::info!("Starting stage at '{}'", start);
        self.switch_scene(&start)
    }

    /// Make `name` the current scene and announce the transition
    pub fn switch_scene(&mut self, name: &str) -> Result<(), StageError> {
        let previous = self.scenes.current_scene_name().map(str::to_string);
        self.scenes.set_scene(name, &mut self.managers, &self.actions)?;

        if let Some(previous) = previous {
            self.events.send(Event::new(StageEvent::SceneExited(previous), self.elapsed));
        }
        self.events.send(Event::new(StageEvent::SceneEntered(name.to_string()), self.elapsed));
        Ok(())
    }

    /// Advance one frame
    ///
    /// Widgets read `input`, triggered actions run, scene commands are
    /// applied and queued events are dispatched.
    pub fn frame(&mut self, dt: f32, input: &InputState) {
        if !self.running {
            return;
        }
        self.elapsed += f64::from(dt);

        let update = self.scenes.update(dt, input, &mut self.managers);
        let mut commands = Vec::new();
        for pending in &update.actions {
            let position = input.mouse_position;
            let event = match pending.kind {
                TriggerKind::Button => StageEvent::ButtonClicked { button: pending.owner.clone(), position },
                TriggerKind::Element => StageEvent::ElementClicked { element: pending.owner.clone(), position },
            };
            self.events.send(Event::new(event, self.elapsed));

            let mut ctx = ActionContext { managers: &mut self.managers, commands: &mut commands };
            self.actions.run(&pending.action, &mut ctx, &pending.owner);
        }
        commands.push(update.command);

        for command in commands {
            self.apply(command);
        }
        self.events.dispatch();
    }

    fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::None => {}
            SceneCommand::SwitchTo(name) => {
                if let Err(e) = self.switch_scene(&name) {
                    log::error!("Failed to switch scene: {}", e);
                }
            }
            SceneCommand::Quit => self.quit(),
        }
    }

    /// Build this frame's draw list
    pub fn draw_list(&self) -> DrawList {
        let mut draw_list = DrawList::new();
        self.scenes.draw(&self.managers, &mut draw_list);
        draw_list
    }

    /// Draw the current scene through the host's backend
    pub fn render(&self, backend: &mut dyn RenderBackend) -> Result<(), StageError> {
        let draw_list = self.draw_list();
        backend.begin_frame().map_err(|e| StageError::Render(e.to_string()))?;
        backend.submit(&draw_list).map_err(|e| StageError::Render(e.to_string()))?;
        backend.end_frame().map_err(|e| StageError::Render(e.to_string()))
    }

    /// Whether the stage should keep running
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the stage; later frames do nothing
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Stage shutting down");
        }
        self.running = false;
    }

    /// Name of the current scene
    pub fn current_scene_name(&self) -> Option<&str> {
        self.scenes.current_scene_name()
    }

    /// Seconds of stage time so far
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Stage configuration
    pub const fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Get managers reference
    pub const fn managers(&self) -> &Managers {
        &self.managers
    }

    /// Get managers mutable reference
    pub fn managers_mut(&mut self) -> &mut Managers {
        &mut self.managers
    }

    /// Get scene manager reference
    pub const fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// Action registry, for registering game actions
    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    /// Get event system mutable reference
    pub fn events_mut(&mut self) -> &mut EventSystem {
        &mut self.events
    }
}
