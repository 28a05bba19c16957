//! # Stage Engine
//!
//! Scene, resource and widget lifecycle management for small 2D games.
//!
//! ## Features
//!
//! - **Resource Dictionaries**: audio, graphics, scene layouts and fonts
//!   described declaratively, builtin or loaded from RON
//! - **Template Managers**: typed managers that instantiate resources by name
//! - **Scenes**: mutually exclusive screens with widgets rebuilt on entry
//! - **Widgets**: buttons and generic elements with click tracking
//! - **Actions**: widget actions such as `scene_manager.set_scene('GameScene')`
//!   bound to registered handlers
//! - **Backend Agnostic**: frames come out as draw lists and audio commands
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stage_engine::prelude::*;
//!
//! struct MainMenu;
//!
//! impl Scene for MainMenu {
//!     fn name(&self) -> &str {
//!         "MainMenuScene"
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scenes = SceneRegistry::new().with("MainMenuScene", || MainMenu);
//!     let mut stage = Stage::new(StageConfig::default(), &ResourceCatalog::builtin(), &scenes)?;
//!     stage.start()?;
//!
//!     let input = InputState::at(310.0, 260.0);
//!     stage.frame(0.016, &input);
//!     for command in stage.draw_list().iter() {
//!         println!("{command:?}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]
#![allow(clippy::cast_precision_loss)]

// Shared configuration
pub mod core;

pub mod foundation;
pub mod config;
pub mod resources;
pub mod template;
pub mod graphics;
pub mod text;
pub mod audio;
pub mod ui;
pub mod action;
pub mod scene;
pub mod events;

mod stage;

pub use stage::{load_catalog, Managers, Stage, StageError};

/// Common imports for stage users
pub mod prelude {
    pub use crate::{
        Managers, Stage, StageError,
        action::{ActionArg, ActionContext, ActionError, ActionRegistry, ResolvedAction},
        audio::{AudioCommand, AudioManager},
        config::Config,
        core::{AssetConfig, EngineConfig, StageConfig, WindowConfig},
        events::{Event, EventHandler, EventSystem, EventType, StageEvent},
        foundation::{
            math::{Color, Rect, Vec2},
            time::Timer,
        },
        resources::{ResourceCatalog, ResourceError},
        scene::{Scene, SceneCommand, SceneContext, SceneError, SceneRegistry, SceneView},
        ui::{Align, Button, ButtonManager, DrawCommand, DrawList, InputState, MouseButton, RenderBackend, UIElement},
    };
}
