//! Domain models for the scope mapper module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::PrincipalAttributesSink;
use crate::error::ScopeMapperError;

/// Strategy used to derive policies from token scopes.
///
/// Parsed from the exact strings `NONE`, `DEFAULT` and `FILE_BASED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MapperType {
    /// No mapping; the principal is left as the authentication layer built it.
    #[default]
    None,
    /// `{app_id}.AMS_POLICY.<policy>` scopes carry the policy name verbatim.
    Default,
    /// `{app_id}.<scope>` scopes are translated through a JSON lookup table.
    FileBased,
}

impl MapperType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Default => "DEFAULT",
            Self::FileBased => "FILE_BASED",
        }
    }
}

impl fmt::Display for MapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapperType {
    type Err = ScopeMapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "DEFAULT" => Ok(Self::Default),
            "FILE_BASED" => Ok(Self::FileBased),
            other => Err(ScopeMapperError::invalid_mapper_type(other)),
        }
    }
}

impl TryFrom<String> for MapperType {
    type Error = ScopeMapperError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MapperType> for String {
    fn from(value: MapperType) -> Self {
        value.as_str().to_owned()
    }
}

/// One record of a policy mapping file: `{"scope": "...", "policy": "..."}`.
///
/// `scope` is the local scope name, i.e. without the `{app_id}.` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyMappingEntry {
    pub scope: String,
    pub policy: String,
}

impl PolicyMappingEntry {
    #[must_use]
    pub fn new(scope: impl Into<String>, policy: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            policy: policy.into(),
        }
    }
}

/// Attributes of an authenticated principal as seen by policy evaluation.
///
/// `policies` stays `None` until a mapper writes to it, so callers can tell
/// "no mapping ran" apart from "mapping produced no policies".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policies: Option<Vec<String>>,
}

impl PrincipalAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Policies written by the last mapping, if any ran.
    #[must_use]
    pub fn policies(&self) -> Option<&[String]> {
        self.policies.as_deref()
    }

    /// Consume the attributes and return the policies (empty when none were set).
    #[must_use]
    pub fn into_policies(self) -> Vec<String> {
        self.policies.unwrap_or_default()
    }
}

impl PrincipalAttributesSink for PrincipalAttributes {
    fn set_policies(&mut self, policies: Vec<String>) {
        self.policies = Some(policies);
    }
}
