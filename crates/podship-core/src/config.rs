use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::image::ImageRef;

/// Name of the configuration file looked up in the project directory.
pub const CONFIG_FILE: &str = "podship.toml";

/// podship.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodshipConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image name
    #[serde(default = "default_image_name")]
    pub name: String,
    /// Image tag
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Registry host (and optional port) the image is pushed to
    #[serde(default = "default_registry")]
    pub registry: String,
    /// Target platform passed to `build --platform`
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Build context directory
    #[serde(default = "default_context")]
    pub context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Container engine CLI
    #[serde(default = "default_engine_program")]
    pub program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// The only branch deploys are allowed from
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: default_image_name(),
            tag: default_tag(),
            registry: default_registry(),
            platform: default_platform(),
            context: default_context(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_engine_program(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
        }
    }
}

impl PodshipConfig {
    /// Load from podship.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        let config: Self = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path.clone(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce a malformed engine invocation.
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("image.name", &self.image.name),
            ("image.tag", &self.image.tag),
            ("image.registry", &self.image.registry),
            ("image.platform", &self.image.platform),
            ("image.context", &self.image.context),
            ("engine.program", &self.engine.program),
            ("git.branch", &self.git.branch),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(crate::Error::ConfigInvalid {
                    field,
                    value: value.clone(),
                    reason: "must not be empty",
                });
            }
            if field != "image.context" && value.chars().any(char::is_whitespace) {
                return Err(crate::Error::ConfigInvalid {
                    field,
                    value: value.clone(),
                    reason: "must not contain whitespace",
                });
            }
        }

        if self.image.tag.contains(['/', ':']) {
            return Err(crate::Error::ConfigInvalid {
                field: "image.tag",
                value: self.image.tag.clone(),
                reason: "must not contain '/' or ':'",
            });
        }

        Ok(())
    }

    pub fn image_ref(&self) -> ImageRef {
        ImageRef::from(&self.image)
    }
}

fn default_image_name() -> String {
    "oci-usage-cost".to_owned()
}

fn default_tag() -> String {
    "latest".to_owned()
}

fn default_registry() -> String {
    "registry.internal:5000".to_owned()
}

fn default_platform() -> String {
    "linux/arm64".to_owned()
}

fn default_context() -> String {
    ".".to_owned()
}

fn default_engine_program() -> String {
    "podman".to_owned()
}

fn default_branch() -> String {
    "main".to_owned()
}
