//! Domain layer for the scope mapper.

pub mod mappers;
pub mod policy_mapping;
pub mod service;

pub use mappers::{DefaultScopeMapper, FileBasedScopeMapper, NoneMapper};
pub use policy_mapping::PolicyMapping;
pub use service::{ScopesAttributesProcessor, build_mapper};
