//! Layered CLI configuration using Figment
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `formsmith.toml`, `formsmith.yaml`, `formsmith.json` in the working directory
//! 3. `FORMSMITH_` environment variables (`FORMSMITH_FORM_NAME__MIN=2`)

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use formsmith_forms::FormShapeRules;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length bounds for form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBounds {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsmithConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Pretty-print JSON written by the CLI
    pub pretty: bool,
    pub form_name: NameBounds,
    pub description_max: usize,
}

impl Default for FormsmithConfig {
    fn default() -> Self {
        let rules = FormShapeRules::default();
        Self {
            log_level: "warn".to_string(),
            pretty: true,
            form_name: NameBounds {
                min: rules.name_min,
                max: rules.name_max,
            },
            description_max: rules.description_max,
        }
    }
}

impl FormsmithConfig {
    /// Load from the current working directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load with config files looked up in `dir`.
    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let config: Self = Self::figment(dir).extract()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn figment(dir: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join("formsmith.toml")))
            .merge(Yaml::file(dir.join("formsmith.yaml")))
            .merge(Json::file(dir.join("formsmith.json")))
            .merge(Env::prefixed("FORMSMITH_").split("__"))
    }

    pub fn shape_rules(&self) -> FormShapeRules {
        FormShapeRules {
            name_min: self.form_name.min,
            name_max: self.form_name.max,
            description_max: self.description_max,
        }
    }
}
