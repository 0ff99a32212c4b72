use scope_mapper_sdk::{MapperType, ScopePolicyMapper};
use tracing::debug;

use crate::domain::policy_mapping::PolicyMapping;

/// `FILE_BASED` strategy: `{app_id}.<scope>` becomes the policy mapped to `<scope>`.
#[derive(Debug, Clone)]
pub struct FileBasedScopeMapper {
    prefix: String,
    mapping: PolicyMapping,
}

impl FileBasedScopeMapper {
    #[must_use]
    pub fn new(app_id: &str, mapping: PolicyMapping) -> Self {
        Self {
            prefix: format!("{app_id}."),
            mapping,
        }
    }
}

impl ScopePolicyMapper for FileBasedScopeMapper {
    fn mapper_type(&self) -> MapperType {
        MapperType::FileBased
    }

    fn map(&self, scopes: &[String]) -> Vec<String> {
        scopes
            .iter()
            .filter_map(|scope| scope.strip_prefix(self.prefix.as_str()))
            .filter_map(|local_scope| {
                let policy = self.mapping.policy_for(local_scope)?;
                debug!(scope = local_scope, policy, "Mapping scope into policy");
                Some(policy.to_owned())
            })
            .collect()
    }
}
