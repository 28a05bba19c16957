//! Audio Manager
//!
//! Tracks what should be playing; it never decodes or outputs sound. Every
//! state change is queued as an [`AudioCommand`] which the host drains each
//! frame and forwards to its audio library.

use std::path::{Path, PathBuf};

use crate::resources::{AudioDef, AudioKind, ResourceError};
use crate::template::{Template, TemplateManager};

/// Template over the `audio` dictionary
pub struct AudioTemplate;

/// A resolved audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Dictionary name
    pub name: String,
    /// Music or sound
    pub kind: AudioKind,
    /// Resolved file path
    pub path: PathBuf,
}

impl Template for AudioTemplate {
    type Definition = AudioDef;
    type Instance = AudioClip;
    const KIND: &'static str = "audio";
    const RESOURCE_TYPES: &'static [&'static str] = &["music", "sound"];

    fn instantiate(name: &str, definition: &AudioDef, assets_dir: &Path) -> Result<AudioClip, ResourceError> {
        Ok(AudioClip {
            name: name.to_string(),
            kind: definition.kind,
            path: assets_dir.join(&definition.filename),
        })
    }
}

/// Request for the host's audio backend
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    /// Start looping a music track, replacing the current one
    PlayMusic(AudioClip),
    /// Pause the music track
    PauseMusic,
    /// Resume the paused music track
    ResumeMusic,
    /// Play a one-shot sound
    PlaySound(AudioClip),
    /// Apply a new effective volume (0.0 - 1.0)
    SetVolume(f32),
}

/// Music and sound state
#[derive(Debug)]
pub struct AudioManager {
    clips: TemplateManager<AudioTemplate>,
    current_music: Option<String>,
    paused: bool,
    muted: bool,
    volume: f32,
    step: f32,
    commands: Vec<AudioCommand>,
}

impl AudioManager {
    /// Create a manager with full volume
    pub fn new(assets_dir: impl Into<PathBuf>, step: f32) -> Self {
        Self {
            clips: TemplateManager::new(assets_dir),
            current_music: None,
            paused: false,
            muted: false,
            volume: 1.0,
            step,
            commands: Vec::new(),
        }
    }

    /// Clip definitions
    pub const fn clips(&self) -> &TemplateManager<AudioTemplate> {
        &self.clips
    }

    /// Mutable clip definitions, for loading
    pub fn clips_mut(&mut self) -> &mut TemplateManager<AudioTemplate> {
        &mut self.clips
    }

    fn clip(&self, name: &str, expected: AudioKind) -> Result<AudioClip, ResourceError> {
        let clip = self.clips.create_resource_instance(name)?;
        if clip.kind != expected {
            let kind_name = |kind: AudioKind| match kind {
                AudioKind::Music => "music",
                AudioKind::Sound => "sound",
            };
            return Err(ResourceError::WrongKind {
                name: name.to_string(),
                expected: kind_name(expected),
                found: kind_name(clip.kind),
            });
        }
        Ok(clip)
    }

    /// Start a music track
    pub fn play_music(&mut self, name: &str) -> Result<(), ResourceError> {
        let clip = self.clip(name, AudioKind::Music)?;
        log::info!("Playing music '{}'", name);
        self.current_music = Some(name.to_string());
        self.paused = false;
        self.commands.push(AudioCommand::PlayMusic(clip));
        Ok(())
    }

    /// Play a sound effect
    pub fn play_sound(&mut self, name: &str) -> Result<(), ResourceError> {
        let clip = self.clip(name, AudioKind::Sound)?;
        log::debug!("Playing sound '{}'", name);
        self.commands.push(AudioCommand::PlaySound(clip));
        Ok(())
    }

    /// Pause the music, or resume it when already paused
    pub fn pause_music(&mut self) {
        if self.current_music.is_none() {
            log::debug!("pause_music with no music playing");
            return;
        }
        self.paused = !self.paused;
        self.commands.push(if self.paused {
            AudioCommand::PauseMusic
        } else {
            AudioCommand::ResumeMusic
        });
    }

    /// Mute or unmute everything
    pub fn toggle_music(&mut self) {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        self.commands.push(AudioCommand::SetVolume(self.effective_volume()));
    }

    /// Raise the volume by one step
    pub fn volume_up(&mut self) {
        self.set_volume(self.volume + self.step);
    }

    /// Lower the volume by one step
    pub fn volume_down(&mut self) {
        self.set_volume(self.volume - self.step);
    }

    /// Set the volume, clamped to 0.0 - 1.0
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        log::debug!("Volume set to {:.2}", self.volume);
        self.commands.push(AudioCommand::SetVolume(self.effective_volume()));
    }

    /// Configured volume, ignoring mute
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    /// Volume the backend should apply
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Name of the current music track
    pub fn current_music(&self) -> Option<&str> {
        self.current_music.as_deref()
    }

    /// Whether the music is paused
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether audio is muted
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Take all queued commands
    pub fn drain_commands(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceCatalog;
    use approx::assert_relative_eq;

    fn manager() -> AudioManager {
        let mut audio = AudioManager::new("resources", 0.25);
        audio.clips_mut().load_resources(&ResourceCatalog::builtin().audio);
        audio
    }

    #[test]
    fn test_play_and_pause_music() {
        let mut audio = manager();
        audio.play_music("debug_music").unwrap();
        assert_eq!(audio.current_music(), Some("debug_music"));

        audio.pause_music();
        assert!(audio.is_paused());
        audio.pause_music();
        assert!(!audio.is_paused());

        let commands = audio.drain_commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(&commands[0], AudioCommand::PlayMusic(clip) if clip.path.ends_with("debug_audio_music.mp3")));
        assert_eq!(commands[1], AudioCommand::PauseMusic);
        assert_eq!(commands[2], AudioCommand::ResumeMusic);
        assert!(audio.drain_commands().is_empty());
    }

    #[test]
    fn test_pause_without_music_is_ignored() {
        let mut audio = manager();
        audio.pause_music();
        assert!(!audio.is_paused());
        assert!(audio.drain_commands().is_empty());
    }

    #[test]
    fn test_wrong_kind() {
        let mut audio = manager();
        assert!(matches!(
            audio.play_music("debug_sound"),
            Err(ResourceError::WrongKind { expected: "music", found: "sound", .. })
        ));
        assert!(audio.play_sound("debug_sound").is_ok());
        assert!(matches!(audio.play_sound("nope"), Err(ResourceError::NotFound { .. })));
    }

    #[test]
    fn test_volume_clamps_and_mute() {
        let mut audio = manager();
        audio.volume_up();
        assert_relative_eq!(audio.volume(), 1.0);
        for _ in 0..3 {
            audio.volume_down();
        }
        assert_relative_eq!(audio.volume(), 0.25);
        for _ in 0..3 {
            audio.volume_down();
        }
        assert_relative_eq!(audio.volume(), 0.0);

        audio.set_volume(0.5);
        audio.toggle_music();
        assert!(audio.is_muted());
        assert_relative_eq!(audio.effective_volume(), 0.0);
        audio.toggle_music();
        assert_relative_eq!(audio.effective_volume(), 0.5);
    }
}
