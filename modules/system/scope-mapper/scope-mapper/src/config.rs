//! Configuration for the scope mapper.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use scope_mapper_sdk::{MapperType, ScopeMapperError};
use serde::{Deserialize, Serialize};

/// Section of the configuration file holding [`ScopeMapperConfig`].
pub const CONFIG_SECTION: &str = "scope_mapper";

/// Prefix of environment overrides, e.g. `APP__SCOPE_MAPPER__MAPPER_TYPE`.
pub const ENV_PREFIX: &str = "APP__";

/// Scope mapper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeMapperConfig {
    /// Application identifier prefixing the scopes issued for this application.
    /// Numeric values (e.g. `12345` from YAML or the environment) are kept as text.
    #[serde(deserialize_with = "deserialize_app_id")]
    pub app_id: String,

    /// Mapping strategy.
    pub mapper_type: MapperType,

    /// JSON mapping table; required for `FILE_BASED`.
    /// Relative paths resolve against the working directory.
    pub mapper_file_path: Option<PathBuf>,
}

fn deserialize_app_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AppId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match AppId::deserialize(deserializer)? {
        AppId::Text(s) => s,
        AppId::Unsigned(n) => n.to_string(),
        AppId::Signed(n) => n.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Sections {
    scope_mapper: ScopeMapperConfig,
}

impl ScopeMapperConfig {
    /// Load the configuration from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::InvalidConfig`] if the file does not exist,
    /// cannot be parsed, or any value (including `mapper_type`) is invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ScopeMapperError> {
        let figment = Self::figment(config_path)?;
        Self::from_figment(&figment)
    }

    /// Layered configuration sources, lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::InvalidConfig`] if `config_path` is given
    /// but is not an existing file.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment, ScopeMapperError> {
        let mut figment = Figment::new();
        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(ScopeMapperError::invalid_config(format!(
                    "config file does not exist: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract the `scope_mapper` section from an already assembled figment.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::InvalidConfig`] if extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ScopeMapperError> {
        figment
            .extract::<Sections>()
            .map(|sections| sections.scope_mapper)
            .map_err(|e| ScopeMapperError::invalid_config(e.to_string()))
    }

    /// Check that the settings required by the selected strategy are present.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::MissingAppId`] or
    /// [`ScopeMapperError::MissingMappingFilePath`].
    pub fn validate(&self) -> Result<(), ScopeMapperError> {
        if self.mapper_type == MapperType::None {
            return Ok(());
        }
        if self.app_id.trim().is_empty() {
            return Err(ScopeMapperError::MissingAppId {
                mapper_type: self.mapper_type,
            });
        }
        if self.mapper_type == MapperType::FileBased && self.mapper_file_path.is_none() {
            return Err(ScopeMapperError::MissingMappingFilePath {
                mapper_type: self.mapper_type,
            });
        }
        Ok(())
    }
}
