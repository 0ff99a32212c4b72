use scope_mapper_sdk::{MapperType, PrincipalAttributesSink, ScopePolicyMapper};

/// `NONE` strategy: derives nothing and leaves principals untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneMapper;

impl ScopePolicyMapper for NoneMapper {
    fn mapper_type(&self) -> MapperType {
        MapperType::None
    }

    fn map(&self, _scopes: &[String]) -> Vec<String> {
        Vec::new()
    }

    fn apply(&self, _scopes: &[String], _sink: &mut dyn PrincipalAttributesSink) {}
}
