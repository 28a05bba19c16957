//! Action registry
//!
//! Widgets carry an action string; the registry turns it into a handler
//! call. Handlers are registered explicitly under their dotted key
//! (`scene_manager.set_scene`), so resolution is a map lookup.
//!
//! Resolution never fails hard. An action that cannot be parsed or that
//! names no registered handler resolves to [`ResolvedAction::Fallback`],
//! which only logs when invoked. Handler errors are logged by
//! [`ActionRegistry::run`] and do not reach the frame loop.

pub mod parser;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

pub use parser::{parse_arguments, ActionArg, ActionSpec};

use crate::resources::ResourceError;
use crate::scene::SceneCommand;
use crate::stage::Managers;

/// Action parsing and execution errors
#[derive(Debug, Error)]
pub enum ActionError {
    /// Action text is malformed
    #[error("cannot parse action '{source_text}': {reason}")]
    Parse {
        /// Offending text
        source_text: String,
        /// What was wrong
        reason: String,
    },

    /// No handler registered under this key
    #[error("action '{0}' is not registered")]
    UnknownAction(String),

    /// Handler rejected its arguments
    #[error("bad arguments for '{action}': {reason}")]
    BadArguments {
        /// Action key
        action: String,
        /// What was wrong
        reason: String,
    },

    /// Handler failed on a resource lookup
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// What a handler may touch while it runs
pub struct ActionContext<'a> {
    /// Resource and widget managers
    pub managers: &'a mut Managers,
    /// Scene-level requests, applied by the stage after the frame's actions
    pub commands: &'a mut Vec<SceneCommand>,
}

/// Registered action handler
pub type ActionHandler = Box<dyn Fn(&mut ActionContext<'_>, &[ActionArg]) -> Result<(), ActionError>>;

/// Result of resolving a widget's action string
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAction {
    /// The widget has no action
    None,
    /// A registered handler with its arguments
    Bound {
        /// Registry key
        key: String,
        /// Parsed arguments
        args: Vec<ActionArg>,
    },
    /// Unresolvable action; invoking it logs a warning
    Fallback {
        /// Action text as written
        text: String,
    },
}

impl ResolvedAction {
    /// Whether invoking this does anything besides logging
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

/// Handlers keyed by dotted action path
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the scene, stage and audio actions
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("scene_manager.set_scene", |ctx, args| {
            let scene = str_arg("scene_manager.set_scene", args)?;
            ctx.commands.push(SceneCommand::SwitchTo(scene.to_string()));
            Ok(())
        });
        registry.register("stage.quit", |ctx, args| {
            no_args("stage.quit", args)?;
            ctx.commands.push(SceneCommand::Quit);
            Ok(())
        });
        registry.register("audio_manager.play_music", |ctx, args| {
            let name = str_arg("audio_manager.play_music", args)?;
            Ok(ctx.managers.audio.play_music(name)?)
        });
        registry.register("audio_manager.play_sound", |ctx, args| {
            let name = str_arg("audio_manager.play_sound", args)?;
            Ok(ctx.managers.audio.play_sound(name)?)
        });
        registry.register("audio_manager.pause_music", |ctx, args| {
            no_args("audio_manager.pause_music", args)?;
            ctx.managers.audio.pause_music();
            Ok(())
        });
        registry.register("audio_manager.toggle_music", |ctx, args| {
            no_args("audio_manager.toggle_music", args)?;
            ctx.managers.audio.toggle_music();
            Ok(())
        });
        registry.register("audio_manager.volume_up", |ctx, args| {
            no_args("audio_manager.volume_up", args)?;
            ctx.managers.audio.volume_up();
            Ok(())
        });
        registry.register("audio_manager.volume_down", |ctx, args| {
            no_args("audio_manager.volume_down", args)?;
            ctx.managers.audio.volume_down();
            Ok(())
        });
        registry
    }

    /// Register a handler; an existing handler under the same key is replaced
    pub fn register<F>(&mut self, key: impl Into<String>, handler: F)
    where
        F: Fn(&mut ActionContext<'_>, &[ActionArg]) -> Result<(), ActionError> + 'static,
    {
        let key = key.into();
        if self.handlers.insert(key.clone(), Box::new(handler)).is_some() {
            log::debug!("Action '{}' re-registered", key);
        }
    }

    /// Whether a handler exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn has_target(&self, target: &str) -> bool {
        let prefix = format!("{target}.");
        self.handlers.keys().any(|key| key.starts_with(&prefix))
    }

    /// Resolve an action string; empty text means no action
    pub fn resolve(&self, text: &str) -> ResolvedAction {
        if text.trim().is_empty() {
            return ResolvedAction::None;
        }

        let spec = match ActionSpec::parse(text) {
            Ok(spec) => spec,
            Err(e) => {
                log::error!("Error resolving action '{}': {}", text, e);
                return ResolvedAction::Fallback { text: text.to_string() };
            }
        };

        let key = spec.key();
        if self.handlers.contains_key(&key) {
            return ResolvedAction::Bound { key, args: spec.args };
        }

        if spec.target.is_empty() {
            log::warn!("Action '{}' is not registered.", spec.method);
        } else if self.has_target(&spec.target_path()) {
            log::warn!("Method '{}' not found in manager '{}'.", spec.method, spec.target_path());
        } else {
            log::warn!("Manager or method '{}' not found.", spec.target_path());
        }
        ResolvedAction::Fallback { text: text.to_string() }
    }

    /// Resolve an optional action string
    pub fn resolve_optional(&self, text: Option<&str>) -> ResolvedAction {
        text.map_or(ResolvedAction::None, |text| self.resolve(text))
    }

    /// Run a resolved action on behalf of `owner`
    pub fn invoke(
        &self,
        action: &ResolvedAction,
        ctx: &mut ActionContext<'_>,
        owner: &str,
    ) -> Result<(), ActionError> {
        match action {
            ResolvedAction::None => Ok(()),
            ResolvedAction::Fallback { .. } => {
                log::warn!("Action for element '{}' is not defined.", owner);
                Ok(())
            }
            ResolvedAction::Bound { key, args } => {
                let handler = self
                    .handlers
                    .get(key)
                    .ok_or_else(|| ActionError::UnknownAction(key.clone()))?;
                log::debug!("'{}' runs {}({})", owner, key, DisplayArgs(args));
                handler(ctx, args)
            }
        }
    }

    /// Like [`invoke`](Self::invoke), logging instead of returning errors
    pub fn run(&self, action: &ResolvedAction, ctx: &mut ActionContext<'_>, owner: &str) {
        if let Err(e) = self.invoke(action, ctx, owner) {
            log::error!("Error executing action for element '{}': {}", owner, e);
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort();
        f.debug_struct("ActionRegistry").field("handlers", &keys).finish()
    }
}

struct DisplayArgs<'a>(&'a [ActionArg]);

impl fmt::Display for DisplayArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

fn str_arg<'a>(action: &str, args: &'a [ActionArg]) -> Result<&'a str, ActionError> {
    match args {
        [arg] => arg.as_str().ok_or_else(|| ActionError::BadArguments {
            action: action.to_string(),
            reason: format!("expected a string, got {arg}"),
        }),
        _ => Err(ActionError::BadArguments {
            action: action.to_string(),
            reason: format!("expected 1 argument, got {}", args.len()),
        }),
    }
}

fn no_args(action: &str, args: &[ActionArg]) -> Result<(), ActionError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ActionError::BadArguments {
            action: action.to_string(),
            reason: format!("expected no arguments, got {}", args.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageConfig;
    use crate::resources::ResourceCatalog;

    fn managers() -> Managers {
        Managers::from_catalog(&StageConfig::default(), &ResourceCatalog::builtin())
    }

    #[test]
    fn test_resolve_bound_and_run() {
        let registry = ActionRegistry::with_builtins();
        let action = registry.resolve("scene_manager.set_scene('GameScene')");
        assert_eq!(
            action,
            ResolvedAction::Bound {
                key: "scene_manager.set_scene".to_string(),
                args: vec![ActionArg::Str("GameScene".to_string())],
            }
        );

        let mut managers = managers();
        let mut commands = Vec::new();
        let mut ctx = ActionContext { managers: &mut managers, commands: &mut commands };
        registry.invoke(&action, &mut ctx, "start").unwrap();
        assert_eq!(commands, [SceneCommand::SwitchTo("GameScene".to_string())]);
    }

    #[test]
    fn test_resolve_fallbacks() {
        let registry = ActionRegistry::with_builtins();
        assert_eq!(registry.resolve(""), ResolvedAction::None);
        assert_eq!(registry.resolve_optional(None), ResolvedAction::None);
        assert!(matches!(registry.resolve("window.toggle_zoom()"), ResolvedAction::Fallback { .. }));
        assert!(matches!(registry.resolve("audio_manager.rewind()"), ResolvedAction::Fallback { .. }));
        assert!(matches!(registry.resolve("audio_manager.play_music('x'"), ResolvedAction::Fallback { .. }));
        assert!(!registry.resolve("nothing").is_bound());
    }

    #[test]
    fn test_fallback_invocation_is_harmless() {
        let registry = ActionRegistry::with_builtins();
        let mut managers = managers();
        let mut commands = Vec::new();
        let mut ctx = ActionContext { managers: &mut managers, commands: &mut commands };
        let action = registry.resolve("nope.nothing()");
        assert!(registry.invoke(&action, &mut ctx, "button").is_ok());
        assert!(commands.is_empty());
    }

    #[test]
    fn test_bad_arguments_are_reported() {
        let registry = ActionRegistry::with_builtins();
        let mut managers = managers();
        let mut commands = Vec::new();
        let mut ctx = ActionContext { managers: &mut managers, commands: &mut commands };

        let action = registry.resolve("scene_manager.set_scene(3)");
        assert!(matches!(
            registry.invoke(&action, &mut ctx, "start"),
            Err(ActionError::BadArguments { .. })
        ));
        let action = registry.resolve("audio_manager.volume_up(1)");
        assert!(registry.invoke(&action, &mut ctx, "louder").is_err());
        let action = registry.resolve("audio_manager.play_music('missing')");
        assert!(matches!(registry.invoke(&action, &mut ctx, "m"), Err(ActionError::Resource(_))));

        // run swallows the error
        registry.run(&action, &mut ctx, "m");
        assert!(commands.is_empty());
    }

    #[test]
    fn test_audio_actions_reach_manager() {
        let registry = ActionRegistry::with_builtins();
        let mut managers = managers();
        let mut commands = Vec::new();
        let mut ctx = ActionContext { managers: &mut managers, commands: &mut commands };

        registry.run(&registry.resolve("audio_manager.play_music('debug_music')"), &mut ctx, "a");
        registry.run(&registry.resolve("audio_manager.pause_music()"), &mut ctx, "b");
        registry.run(&registry.resolve("audio_manager.volume_down()"), &mut ctx, "c");
        assert_eq!(managers.audio.current_music(), Some("debug_music"));
        assert!(managers.audio.is_paused());
        assert!(managers.audio.volume() < 1.0);
    }

    #[test]
    fn test_custom_handler() {
        let mut registry = ActionRegistry::new();
        registry.register("stage.quit", |ctx, _| {
            ctx.commands.push(SceneCommand::Quit);
            Ok(())
        });
        assert!(registry.contains("stage.quit"));
        assert_eq!(registry.len(), 1);
        assert!(registry.resolve("stage.quit").is_bound());
    }
}
