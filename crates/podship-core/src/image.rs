use std::fmt;

use crate::config::ImageConfig;

/// A container image as built locally and as pushed to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub registry: String,
    pub name: String,
    pub tag: String,
}

impl ImageRef {
    pub fn new(
        registry: impl Into<String>,
        name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// Reference of the freshly built image in the local store: `name:tag`.
    pub fn local(&self) -> String {
        format!("{}:{}", self.name, self.tag)
    }

    /// Fully-qualified registry path: `registry/name:tag`.
    pub fn qualified(&self) -> String {
        format!("{}/{}", self.registry.trim_end_matches('/'), self.local())
    }
}

impl From<&ImageConfig> for ImageRef {
    fn from(config: &ImageConfig) -> Self {
        Self::new(&config.registry, &config.name, &config.tag)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}
