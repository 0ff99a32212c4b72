//! Mapping strategies, one per [`MapperType`](scope_mapper_sdk::MapperType).

mod default;
mod file_based;
mod none;

pub use default::{AMS_POLICY_SEGMENT, DefaultScopeMapper};
pub use file_based::FileBasedScopeMapper;
pub use none::NoneMapper;
