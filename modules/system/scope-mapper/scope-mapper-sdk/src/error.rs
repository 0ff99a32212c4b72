//! Error types for the scope mapper module.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::MapperType;

/// Errors raised while building a scope mapper.
///
/// These are configuration failures only and are meant to abort startup.
/// Mapping itself never fails: a scope that does not translate into a policy
/// is simply absent from the result.
#[derive(Debug, Error)]
pub enum ScopeMapperError {
    /// `mapper_type` holds a value that is not one of the known strategies.
    #[error("invalid mapper type (mapper_type): {value} (allowed: NONE, DEFAULT, FILE_BASED)")]
    InvalidMapperType { value: String },

    /// The selected strategy needs a mapping file but none was configured.
    #[error("for mapper type {mapper_type}, a valid file path must be provided as mapper_file_path")]
    MissingMappingFilePath { mapper_type: MapperType },

    /// The selected strategy needs the application identifier but it is empty.
    #[error("for mapper type {mapper_type}, a non-empty app_id must be configured")]
    MissingAppId { mapper_type: MapperType },

    #[error("failed to read policy mapping file '{}': {source}", .path.display())]
    MappingFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed policy mapping file '{}': {source}", .path.display())]
    MappingFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The same scope appears more than once in the mapping table.
    #[error("scope '{scope}' is mapped more than once")]
    DuplicateScopeMapping { scope: String },

    /// The configuration sources could not be read or extracted.
    #[error("invalid scope mapper configuration: {0}")]
    InvalidConfig(String),
}

impl ScopeMapperError {
    #[must_use]
    pub fn invalid_mapper_type(value: impl Into<String>) -> Self {
        Self::InvalidMapperType {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn duplicate_scope_mapping(scope: impl Into<String>) -> Self {
        Self::DuplicateScopeMapping {
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
