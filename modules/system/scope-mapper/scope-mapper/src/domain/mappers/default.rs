use scope_mapper_sdk::{MapperType, ScopePolicyMapper};
use tracing::debug;

/// Scope segment marking a scope that carries a policy name.
pub const AMS_POLICY_SEGMENT: &str = "AMS_POLICY";

/// `DEFAULT` strategy: `{app_id}.AMS_POLICY.<policy>` becomes `<policy>`.
#[derive(Debug, Clone)]
pub struct DefaultScopeMapper {
    prefix: String,
}

impl DefaultScopeMapper {
    #[must_use]
    pub fn new(app_id: &str) -> Self {
        Self {
            prefix: format!("{app_id}.{AMS_POLICY_SEGMENT}."),
        }
    }

    /// Scope prefix stripped from matching scopes.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl ScopePolicyMapper for DefaultScopeMapper {
    fn mapper_type(&self) -> MapperType {
        MapperType::Default
    }

    fn map(&self, scopes: &[String]) -> Vec<String> {
        scopes
            .iter()
            .filter_map(|scope| {
                let policy = scope.strip_prefix(self.prefix.as_str())?;
                debug!(scope = %scope, policy, "Mapping scope into policy");
                Some(policy.to_owned())
            })
            .collect()
    }
}
