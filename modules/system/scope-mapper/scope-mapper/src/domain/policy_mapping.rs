//! Lookup table from local scope names to policy names.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use scope_mapper_sdk::{PolicyMappingEntry, ScopeMapperError};
use tracing::{info, warn};

/// Read-only scope → policy table used by the `FILE_BASED` strategy.
#[derive(Debug, Clone, Default)]
pub struct PolicyMapping {
    policies: HashMap<String, String>,
}

impl PolicyMapping {
    /// Build a table from mapping records.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::DuplicateScopeMapping`] if a scope occurs twice.
    pub fn from_entries(
        entries: impl IntoIterator<Item = PolicyMappingEntry>,
    ) -> Result<Self, ScopeMapperError> {
        let mut policies = HashMap::new();
        for PolicyMappingEntry { scope, policy } in entries {
            match policies.entry(scope) {
                Entry::Occupied(existing) => {
                    return Err(ScopeMapperError::duplicate_scope_mapping(
                        existing.key().as_str(),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(policy);
                }
            }
        }
        Ok(Self { policies })
    }

    /// Load a JSON array of `{"scope": ..., "policy": ...}` records.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeMapperError::MappingFileRead`] if the file cannot be read,
    /// [`ScopeMapperError::MappingFileParse`] if it is not a valid record array, and
    /// [`ScopeMapperError::DuplicateScopeMapping`] if a scope occurs twice.
    pub fn from_file(path: &Path) -> Result<Self, ScopeMapperError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ScopeMapperError::MappingFileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let entries: Vec<PolicyMappingEntry> =
            serde_json::from_str(&content).map_err(|source| {
                ScopeMapperError::MappingFileParse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        if entries.is_empty() {
            warn!(path = %path.display(), "Policy mapping file has no entries; no scope will be mapped");
        }

        let mapping = Self::from_entries(entries)?;
        info!(path = %path.display(), entries = mapping.len(), "Loaded policy mapping");
        Ok(mapping)
    }

    /// Policy mapped to the local scope name, if any.
    #[must_use]
    pub fn policy_for(&self, scope: &str) -> Option<&str> {
        self.policies.get(scope).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
