//! # Core Engine Module
//!
//! Shared configuration used by every subsystem and by hosts.

pub mod config;

pub use config::{AssetConfig, Config, ConfigError, EngineConfig, StageConfig, WindowConfig};
