//! Name-to-scheme lookup handed to renderers by the caller.
use std::collections::HashMap;

use tracing::warn;

use super::ColorScheme;
use crate::error::{Error, Result};

/// Registry of color schemes keyed by name.
///
/// Nothing in the crate holds a global registry; build one (for example from a palette
/// provider) and pass it where lookups by name are needed.
#[derive(Clone, Debug, Default)]
pub struct PaletteRegistry {
    schemes: HashMap<String, ColorScheme>,
}

impl PaletteRegistry {
    /// Creates a new, empty [`PaletteRegistry`].
    pub fn new() -> Self {
        Self {
            schemes: HashMap::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            schemes: HashMap::with_capacity(n),
        }
    }

    /// Returns the number of registered schemes.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns `true` if there are no registered schemes.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Registers `scheme` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, scheme: ColorScheme) {
        self.schemes.insert(name.into(), scheme);
    }

    /// Builder form of [`PaletteRegistry::register`].
    pub fn with(mut self, name: impl Into<String>, scheme: ColorScheme) -> Self {
        self.register(name, scheme);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// Like [`PaletteRegistry::get`], but a miss is an [`Error::UnknownPalette`].
    pub fn require(&self, name: &str) -> Result<&ColorScheme> {
        self.schemes.get(name).ok_or_else(|| {
            warn!("Unknown palette '{}'.", name);
            Error::UnknownPalette {
                name: name.to_owned(),
            }
        })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorScheme)> {
        self.schemes.iter().map(|(k, v)| (k.as_str(), v))
    }
}
