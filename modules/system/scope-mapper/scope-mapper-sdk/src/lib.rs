#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Scope Mapper SDK
//!
//! This crate provides the public API for the `scope_mapper` module:
//!
//! - [`ScopePolicyMapper`] - Contract shared by the mapping strategies
//! - [`PrincipalAttributesSink`], [`PrincipalAttributes`] - Where derived policies land
//! - [`MapperType`], [`PolicyMappingEntry`] - Configuration models
//! - [`ScopeMapperError`] - Construction-time errors
//! - [`claims`] - Scope extraction from decoded token claims
//!
//! ## Usage
//!
//! ```ignore
//! use scope_mapper_sdk::{PrincipalAttributes, ScopePolicyMapper};
//!
//! // Built once at startup, shared by every request
//! let mapper: Arc<dyn ScopePolicyMapper> = scope_mapper::build_mapper(&cfg)?;
//!
//! let mut attrs = PrincipalAttributes::new();
//! mapper.apply(&scopes, &mut attrs);
//! ```

pub mod api;
pub mod claims;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{PrincipalAttributesSink, ScopePolicyMapper};
pub use claims::token_scopes;
pub use error::ScopeMapperError;
pub use models::{MapperType, PolicyMappingEntry, PrincipalAttributes};
