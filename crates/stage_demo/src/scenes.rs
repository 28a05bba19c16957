//! Demo scenes
//!
//! Button actions declared in the catalog (scene switches, audio) run
//! without any code here; these scenes only handle the buttons whose
//! behavior is game-specific.

use stage_engine::prelude::*;

/// Title screen
#[derive(Debug, Default)]
pub struct MainMenuScene {
    zoomed: bool,
}

impl Scene for MainMenuScene {
    fn name(&self) -> &str {
        "MainMenuScene"
    }

    fn enter(&mut self, ctx: &mut SceneContext<'_>) {
        if ctx.managers.audio.current_music().is_none() {
            if let Err(e) = ctx.managers.audio.play_music("debug_music") {
                log::warn!("No menu music: {}", e);
            }
        }
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext<'_>) -> SceneCommand {
        if ctx.was_clicked("toggle_zoom") {
            self.zoomed = !self.zoomed;
            log::info!("Zoom {}", if self.zoomed { "on" } else { "off" });
        }
        let size = if self.zoomed { 48 } else { 24 };
        if let Some(title) = ctx.text_mut("hello_world_1") {
            title.set_size(size);
        }
        SceneCommand::None
    }
}

/// In-game screen
#[derive(Debug, Default)]
pub struct GameScene {
    clicks: u32,
}

impl Scene for GameScene {
    fn name(&self) -> &str {
        "GameScene"
    }

    fn enter(&mut self, _ctx: &mut SceneContext<'_>) {
        self.clicks = 0;
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext<'_>) -> SceneCommand {
        if ctx.was_clicked("click_me") {
            self.clicks += 1;
            log::info!("Clicked {} times", self.clicks);
            if let Some(button) = ctx.button_mut("click_me") {
                button.set_text(format!("Clicked {}x", self.clicks));
            }
        }
        SceneCommand::None
    }

    fn draw(&self, _view: &SceneView<'_>, draw_list: &mut DrawList) {
        draw_list.push_text(
            format!("Clicks: {}", self.clicks),
            None,
            24,
            Color::WHITE.to_vec4(),
            Vec2::new(500.0, 200.0),
            Align::Center,
        );
    }
}

/// Settings screen
#[derive(Debug, Default)]
pub struct SettingsScene {
    fullscreen: bool,
}

impl Scene for SettingsScene {
    fn name(&self) -> &str {
        "SettingsScene"
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext<'_>) -> SceneCommand {
        if ctx.was_clicked("fullscreen") {
            self.fullscreen = !self.fullscreen;
            log::info!("Fullscreen {}", if self.fullscreen { "on" } else { "off" });
        }
        let label = if self.fullscreen { "Windowed" } else { "Fullscreen" };
        if let Some(button) = ctx.button_mut("fullscreen") {
            button.set_text(label);
        }
        SceneCommand::None
    }

    fn draw(&self, view: &SceneView<'_>, draw_list: &mut DrawList) {
        let volume = view.managers.audio.effective_volume();
        draw_list.push_text(
            format!("Volume: {:.0}%", volume * 100.0),
            None,
            24,
            Color::WHITE.to_vec4(),
            Vec2::new(450.0, 200.0),
            Align::Center,
        );
    }
}

/// Every scene of the demo
pub fn registry() -> SceneRegistry {
    SceneRegistry::new()
        .with("MainMenuScene", MainMenuScene::default)
        .with("GameScene", GameScene::default)
        .with("SettingsScene", SettingsScene::default)
}
