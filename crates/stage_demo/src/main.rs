//! Stage demo application
//!
//! Runs the builtin menu, game and settings scenes headless. A scripted
//! sequence of mouse clicks stands in for a window's event loop; draw lists
//! go to a logging backend and audio commands are logged.
//!
//! Usage: `stage_demo [config.toml|config.ron]`

mod backend;
mod scenes;

use std::path::{Path, PathBuf};

use stage_engine::foundation::logging;
use stage_engine::prelude::*;
use thiserror::Error;

use backend::LogBackend;

const TARGET_FPS: u32 = 60;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] stage_engine::core::ConfigError),

    #[error(transparent)]
    Stage(#[from] StageError),
}

/// One step of the scripted input
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Move the cursor without pressing
    Hover(f32, f32),
    /// Press and release the left button
    Click(f32, f32),
}

/// Menu tour: zoom, audio, settings round trip, a short game, mute
const SCRIPT: &[Step] = &[
    Step::Hover(0.0, 0.0),
    Step::Click(310.0, 610.0), // toggle_zoom
    Step::Click(310.0, 400.0), // debug_audio
    Step::Click(310.0, 470.0), // pause_music
    Step::Click(310.0, 330.0), // settings
    Step::Click(310.0, 400.0), // volume_down
    Step::Click(310.0, 330.0), // volume_up
    Step::Click(310.0, 470.0), // fullscreen
    Step::Click(310.0, 260.0), // back
    Step::Click(310.0, 260.0), // start
    Step::Click(410.0, 410.0), // click_me
    Step::Click(410.0, 410.0),
    Step::Click(410.0, 410.0),
    Step::Click(410.0, 310.0), // game_over
    Step::Hover(0.0, 0.0),
    Step::Click(310.0, 540.0), // toggle_music
];

fn load_config(path: Option<&Path>) -> Result<StageConfig, DemoError> {
    let Some(path) = path else {
        return Ok(StageConfig::default());
    };

    let mut config = StageConfig::load_or_default(path)?;
    // catalog paths in a config file are relative to that file
    if let (Some(catalog), Some(dir)) = (&config.assets.catalog_path, path.parent()) {
        if Path::new(catalog).is_relative() {
            let resolved = dir.join(catalog).to_string_lossy().into_owned();
            config.assets = config.assets.with_catalog(resolved);
        }
    }
    Ok(config)
}

fn run_frame(stage: &mut Stage, timer: &mut Timer, backend: &mut LogBackend, input: &InputState) -> Result<(), DemoError> {
    let dt = timer.tick();
    stage.frame(dt, input);
    stage.render(backend)?;
    for command in stage.managers_mut().audio.drain_commands() {
        log::info!("audio: {:?}", command);
    }
    timer.limit_to(TARGET_FPS);
    Ok(())
}

fn run(config_path: Option<PathBuf>) -> Result<(), DemoError> {
    let config = load_config(config_path.as_deref())?;
    logging::init_with_level(&config.engine.log_level);
    log::info!("{} ({}x{})", config.window.title, config.window.width, config.window.height);

    let mut stage = Stage::from_config(config, &scenes::registry())?;
    stage.events_mut().register_handler(
        EventType::ButtonClicked,
        Box::new(|event: &Event| {
            log::info!("button '{}' clicked", event.name());
            false
        }),
    );
    stage.events_mut().register_handler(
        EventType::SceneEntered,
        Box::new(|event: &Event| {
            log::info!("now showing '{}'", event.name());
            false
        }),
    );
    stage.start()?;

    let mut timer = Timer::new();
    let mut backend = LogBackend::new();
    let mut input = InputState::default();

    for step in SCRIPT {
        if !stage.is_running() {
            break;
        }
        match *step {
            Step::Hover(x, y) => {
                input.update_mouse_position(x, y);
                run_frame(&mut stage, &mut timer, &mut backend, &input)?;
            }
            Step::Click(x, y) => {
                input.update_mouse_position(x, y);
                input.update_mouse_button(MouseButton::Left, true);
                run_frame(&mut stage, &mut timer, &mut backend, &input)?;
                input.update_mouse_button(MouseButton::Left, false);
                run_frame(&mut stage, &mut timer, &mut backend, &input)?;
            }
        }
    }

    log::info!(
        "Script finished in '{}' after {} frames",
        stage.current_scene_name().unwrap_or("-"),
        backend.frames()
    );
    stage.quit();
    Ok(())
}

fn main() {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    if let Err(e) = run(config_path) {
        eprintln!("stage_demo: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_catalog_matches_builtin() {
        let catalog = ResourceCatalog::from_ron_str(include_str!("../data/catalog.ron")).unwrap();
        assert_eq!(catalog, ResourceCatalog::builtin());
    }

    #[test]
    fn test_config_catalog_is_relative_to_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/stage.toml");
        let config = load_config(Some(&path)).unwrap();
        let catalog = config.assets.catalog_path.unwrap();
        assert!(Path::new(&catalog).ends_with("data/catalog.ron"));
        assert!(Path::new(&catalog).is_absolute());
    }

    #[test]
    fn test_script_ends_in_main_menu() {
        let mut stage = Stage::new(StageConfig::default(), &ResourceCatalog::builtin(), &scenes::registry()).unwrap();
        stage.start().unwrap();
        let mut input = InputState::default();
        for step in SCRIPT {
            let (Step::Hover(x, y) | Step::Click(x, y)) = *step;
            input.update_mouse_position(x, y);
            if matches!(step, Step::Click(..)) {
                input.update_mouse_button(MouseButton::Left, true);
                stage.frame(0.016, &input);
                input.update_mouse_button(MouseButton::Left, false);
            }
            stage.frame(0.016, &input);
        }

        assert_eq!(stage.current_scene_name(), Some("MainMenuScene"));
        let audio = &stage.managers().audio;
        assert!(audio.is_muted());
        assert!(audio.is_paused());
        assert!((audio.volume() - 1.0).abs() < 1e-6);
    }
}
