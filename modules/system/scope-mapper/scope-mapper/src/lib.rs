#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Scope Mapper
//!
//! Derives authorization policies from the scopes of a decoded token, for
//! applications moving from scope checks to policy-based authorization.
//!
//! ## Mapper types
//!
//! - `NONE` (default) - no mapping, principals are left untouched
//! - `DEFAULT` - `{app_id}.AMS_POLICY.<policy>` scopes yield `<policy>`
//! - `FILE_BASED` - `{app_id}.<scope>` scopes are looked up in a JSON table
//!   of `[{"scope": "...", "policy": "..."}]` records
//!
//! Unmatched scopes are dropped. Configuration problems fail construction.
//!
//! ## Configuration
//!
//! ```yaml
//! scope_mapper:
//!   app_id: "myapp"
//!   mapper_type: FILE_BASED
//!   mapper_file_path: "config/scope-policy-mapping.json"
//! ```
//!
//! Every key can be overridden from the environment, e.g.
//! `APP__SCOPE_MAPPER__MAPPER_TYPE=DEFAULT`.

pub mod config;
pub mod domain;

pub use config::ScopeMapperConfig;
pub use domain::{
    DefaultScopeMapper, FileBasedScopeMapper, NoneMapper, PolicyMapping,
    ScopesAttributesProcessor, build_mapper,
};
