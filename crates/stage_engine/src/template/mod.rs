//! Template Manager
//!
//! Generic manager for one family of resources. A manager is told which
//! dictionary type names it accepts (`resource_types_to_load`), keeps the
//! matching definitions, and instantiates them by name through its
//! [`Template`].
//!
//! ```
//! use stage_engine::graphics::GraphicManager;
//! use stage_engine::resources::ResourceCatalog;
//!
//! let catalog = ResourceCatalog::builtin();
//! let mut graphics = GraphicManager::new("resources");
//! graphics.load_resources(&catalog.graphics);
//! assert!(graphics.create_resource_instance("default_button").is_ok());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::resources::{ResourceDef, ResourceError};

/// A resource family a [`TemplateManager`] can instantiate
pub trait Template {
    /// Dictionary entry type
    type Definition: ResourceDef + Clone + fmt::Debug;

    /// Live object produced from a definition
    type Instance;

    /// Family name used in errors and logs
    const KIND: &'static str;

    /// Type names accepted by default
    const RESOURCE_TYPES: &'static [&'static str];

    /// Build an instance from a definition
    fn instantiate(
        name: &str,
        definition: &Self::Definition,
        assets_dir: &Path,
    ) -> Result<Self::Instance, ResourceError>;
}

/// Definition store plus factory for one resource family
pub struct TemplateManager<T: Template> {
    resources: BTreeMap<String, T::Definition>,
    resource_types_to_load: Vec<&'static str>,
    assets_dir: PathBuf,
}

impl<T: Template> TemplateManager<T> {
    /// Create an empty manager resolving asset files against `assets_dir`
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources: BTreeMap::new(),
            resource_types_to_load: T::RESOURCE_TYPES.to_vec(),
            assets_dir: assets_dir.into(),
        }
    }

    /// Restrict the accepted type names
    pub fn with_resource_types(mut self, types: &[&'static str]) -> Self {
        self.resource_types_to_load = types.to_vec();
        self
    }

    /// Type names this manager accepts
    pub fn resource_types_to_load(&self) -> &[&'static str] {
        &self.resource_types_to_load
    }

    /// Directory asset filenames are resolved against
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Store every definition whose type this manager accepts
    ///
    /// Returns how many were stored; others are skipped. A name that is
    /// already present is replaced.
    pub fn load_resources<'a, I>(&mut self, definitions: I) -> usize
    where
        I: IntoIterator<Item = (&'a String, &'a T::Definition)>,
        T::Definition: 'a,
    {
        let mut loaded = 0;
        for (name, definition) in definitions {
            let type_name = definition.type_name();
            if !self.resource_types_to_load.contains(&type_name) {
                log::trace!("{} manager skipping '{}' of type {}", T::KIND, name, type_name);
                continue;
            }
            if self.resources.insert(name.clone(), definition.clone()).is_some() {
                log::debug!("{} '{}' redefined", T::KIND, name);
            }
            loaded += 1;
        }
        log::debug!("{} manager loaded {} definitions", T::KIND, loaded);
        loaded
    }

    /// Look up a definition
    pub fn definition(&self, name: &str) -> Option<&T::Definition> {
        self.resources.get(name)
    }

    /// Look up a definition, failing with [`ResourceError::NotFound`]
    pub fn require(&self, name: &str) -> Result<&T::Definition, ResourceError> {
        self.resources.get(name).ok_or_else(|| ResourceError::NotFound {
            kind: T::KIND,
            name: name.to_string(),
        })
    }

    /// Whether a definition exists
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Defined names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no definitions are loaded
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Instantiate the named definition
    pub fn create_resource_instance(&self, name: &str) -> Result<T::Instance, ResourceError> {
        let definition = self.require(name)?;
        T::instantiate(name, definition, &self.assets_dir)
    }
}

impl<T: Template> fmt::Debug for TemplateManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateManager")
            .field("kind", &T::KIND)
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("resource_types_to_load", &self.resource_types_to_load)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{AudioDef, AudioKind};

    struct Tracks;

    impl Template for Tracks {
        type Definition = AudioDef;
        type Instance = PathBuf;
        const KIND: &'static str = "track";
        const RESOURCE_TYPES: &'static [&'static str] = &["music"];

        fn instantiate(_name: &str, definition: &AudioDef, assets_dir: &Path) -> Result<PathBuf, ResourceError> {
            Ok(assets_dir.join(&definition.filename))
        }
    }

    fn defs() -> BTreeMap<String, AudioDef> {
        BTreeMap::from([
            ("theme".to_string(), AudioDef { kind: AudioKind::Music, filename: "theme.ogg".to_string() }),
            ("blip".to_string(), AudioDef { kind: AudioKind::Sound, filename: "blip.wav".to_string() }),
        ])
    }

    #[test]
    fn test_load_filters_by_type() {
        let mut manager = TemplateManager::<Tracks>::new("assets");
        assert_eq!(manager.load_resources(&defs()), 1);
        assert!(manager.contains("theme"));
        assert!(!manager.contains("blip"));
        assert_eq!(manager.names().collect::<Vec<_>>(), ["theme"]);
    }

    #[test]
    fn test_widened_resource_types() {
        let mut manager = TemplateManager::<Tracks>::new("assets").with_resource_types(&["music", "sound"]);
        assert_eq!(manager.load_resources(&defs()), 2);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_create_instance_and_not_found() {
        let mut manager = TemplateManager::<Tracks>::new("assets");
        manager.load_resources(&defs());
        assert_eq!(manager.create_resource_instance("theme").unwrap(), Path::new("assets/theme.ogg"));
        match manager.create_resource_instance("missing") {
            Err(ResourceError::NotFound { kind, name }) => {
                assert_eq!(kind, "track");
                assert_eq!(name, "missing");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
