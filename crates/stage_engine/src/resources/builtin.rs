//! Stock dictionaries used when no catalog file is configured

use std::collections::BTreeMap;

use super::{
    AudioDef, AudioKind, ButtonColors, ButtonDef, FontDef, FrameDef, GraphicDef, PanelColors,
    ResourceCatalog, SceneDef, TextDef,
};
use crate::foundation::math::{Color, Rect};
use crate::ui::widgets::Align;

const DEFAULT_BUTTON: &str = "default_button";

pub(super) fn catalog() -> ResourceCatalog {
    ResourceCatalog {
        audio: audio(),
        graphics: graphics(),
        scenes: scenes(),
        texts: texts(),
    }
}

fn audio() -> BTreeMap<String, AudioDef> {
    BTreeMap::from([
        (
            "debug_music".to_string(),
            AudioDef { kind: AudioKind::Music, filename: "debug_audio_music.mp3".to_string() },
        ),
        (
            "debug_sound".to_string(),
            AudioDef { kind: AudioKind::Sound, filename: "debug_audio_sound.wav".to_string() },
        ),
    ])
}

fn graphics() -> BTreeMap<String, GraphicDef> {
    BTreeMap::from([
        (
            "default_single".to_string(),
            GraphicDef::Image { filename: "debug_graphic_manager_single.png".to_string() },
        ),
        (
            "default_sequence".to_string(),
            GraphicDef::ImageSequence {
                files: vec![
                    FrameDef { filename: "debug_graphic_manager_sequence_1.png".to_string() },
                    FrameDef { filename: "debug_graphic_manager_sequence_2.png".to_string() },
                ],
                frame_duration: 0.2,
            },
        ),
        (
            "default_interface".to_string(),
            GraphicDef::Interface {
                color: PanelColors { default: Color::BLACK, border: Color::WHITE },
                rect: Rect::new(50, 50, 400, 300),
                hit_rect: Rect::new(50, 50, 400, 300),
                border_size: 2,
            },
        ),
        (
            DEFAULT_BUTTON.to_string(),
            GraphicDef::Button {
                color: ButtonColors {
                    active: Color::new(0, 255, 0),
                    inactive: Color::new(255, 0, 0),
                    border: Color::new(0, 0, 255),
                },
                border_size: 5,
            },
        ),
    ])
}

fn button(name: &str, text: &str, rect: (i32, i32, i32, i32), action: Option<&str>) -> ButtonDef {
    ButtonDef {
        name: name.to_string(),
        graphic: DEFAULT_BUTTON.to_string(),
        rect,
        text: Some(text.to_string()),
        align: None,
        hit_rect: None,
        action: action.map(str::to_string),
    }
}

fn scenes() -> BTreeMap<String, SceneDef> {
    let main_menu = SceneDef {
        buttons: vec![
            button("start", "Start", (300, 250, 300, 60), Some("scene_manager.set_scene('GameScene')")),
            button("settings", "Settings", (300, 320, 300, 60), Some("scene_manager.set_scene('SettingsScene')")),
            button("debug_audio", "Debug Audio", (300, 390, 300, 60), Some("audio_manager.play_sound('debug_sound')")),
            button("pause_music", "Pause Music", (300, 460, 300, 60), Some("audio_manager.pause_music()")),
            button("toggle_music", "Toggle Music", (300, 530, 300, 60), Some("audio_manager.toggle_music()")),
            button("toggle_zoom", "Toggle Zoom", (300, 600, 300, 60), None),
        ],
        texts: vec![
            TextDef {
                name: "hello_world_1".to_string(),
                model: "liberation_serif".to_string(),
                text: "Hello World!".to_string(),
                position: (600, 300),
                color: None,
                size: None,
                align: None,
            },
            TextDef {
                name: "hello_world_2".to_string(),
                model: "liberation_serif".to_string(),
                text: "Hello World 2!".to_string(),
                position: (600, 360),
                color: Some(Color::BLACK),
                size: None,
                align: Some(Align::TopLeft),
            },
        ],
        elements: Vec::new(),
    };

    let game = SceneDef {
        buttons: vec![
            button("game_over", "Game Over", (400, 300, 200, 60), Some("scene_manager.set_scene('MainMenuScene')")),
            button("click_me", "Click Me!", (400, 400, 200, 60), None),
        ],
        ..SceneDef::default()
    };

    let settings = SceneDef {
        buttons: vec![
            button("back", "Back", (300, 250, 300, 60), Some("scene_manager.set_scene('MainMenuScene')")),
            button("volume_up", "Volume Up", (300, 320, 300, 60), Some("audio_manager.volume_up()")),
            button("volume_down", "Volume Down", (300, 390, 300, 60), Some("audio_manager.volume_down()")),
            button("fullscreen", "Fullscreen", (300, 460, 300, 60), None),
        ],
        ..SceneDef::default()
    };

    BTreeMap::from([
        ("MainMenuScene".to_string(), main_menu),
        ("GameScene".to_string(), game),
        ("SettingsScene".to_string(), settings),
    ])
}

fn texts() -> BTreeMap<String, FontDef> {
    BTreeMap::from([(
        "liberation_serif".to_string(),
        FontDef {
            filename: "LiberationSerif-Regular.ttf".to_string(),
            size: 24,
            color: Color::WHITE,
            alignment: Align::Center,
        },
    )])
}
