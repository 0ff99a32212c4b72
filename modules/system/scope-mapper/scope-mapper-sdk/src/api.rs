//! Public API traits for the scope mapper module.

use std::fmt::Debug;

use crate::models::MapperType;

/// Receives the policies derived for a principal.
///
/// Implemented by whatever structure the policy-evaluation layer reads its
/// granted policies from.
pub trait PrincipalAttributesSink {
    /// Replace the principal's policies.
    fn set_policies(&mut self, policies: Vec<String>);
}

/// Translates token scopes into policy identifiers.
///
/// Implementations are built once from configuration and then shared across
/// concurrent requests, so `map` must not mutate any state.
pub trait ScopePolicyMapper: Debug + Send + Sync {
    /// Strategy this mapper implements.
    fn mapper_type(&self) -> MapperType;

    /// Derive policies from `scopes`, preserving their order.
    ///
    /// Scopes that do not translate into a policy are left out.
    fn map(&self, scopes: &[String]) -> Vec<String>;

    /// Write the policies derived from `scopes` into `sink`.
    fn apply(&self, scopes: &[String], sink: &mut dyn PrincipalAttributesSink) {
        sink.set_policies(self.map(scopes));
    }
}
