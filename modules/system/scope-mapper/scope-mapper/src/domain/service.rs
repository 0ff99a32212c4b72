//! Strategy selection and the attributes processor built on top of it.

use std::sync::Arc;

use scope_mapper_sdk::{
    MapperType, PrincipalAttributesSink, ScopeMapperError, ScopePolicyMapper, token_scopes,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ScopeMapperConfig;
use crate::domain::mappers::{DefaultScopeMapper, FileBasedScopeMapper, NoneMapper};
use crate::domain::policy_mapping::PolicyMapping;

/// Build the mapper selected by `cfg.mapper_type`.
///
/// The `FILE_BASED` table is read here, once; the returned mapper does no I/O.
///
/// # Errors
///
/// Returns a [`ScopeMapperError`] if the configuration is incomplete or the
/// mapping file cannot be loaded.
pub fn build_mapper(cfg: &ScopeMapperConfig) -> Result<Arc<dyn ScopePolicyMapper>, ScopeMapperError> {
    cfg.validate()?;

    let mapper: Arc<dyn ScopePolicyMapper> = match cfg.mapper_type {
        MapperType::None => Arc::new(NoneMapper),
        MapperType::Default => Arc::new(DefaultScopeMapper::new(&cfg.app_id)),
        MapperType::FileBased => {
            let path = cfg.mapper_file_path.as_deref().ok_or(
                ScopeMapperError::MissingMappingFilePath {
                    mapper_type: cfg.mapper_type,
                },
            )?;
            let mapping = PolicyMapping::from_file(path)?;
            Arc::new(FileBasedScopeMapper::new(&cfg.app_id, mapping))
        }
    };

    info!(
        mapper_type = %cfg.mapper_type,
        app_id = %cfg.app_id,
        "Scope mapper initialized"
    );
    Ok(mapper)
}

/// Populates principal attributes with the policies derived from a token's scopes.
///
/// Holds one mapper for its whole lifetime, so every request sees the
/// strategy chosen at startup.
#[derive(Debug, Clone)]
pub struct ScopesAttributesProcessor {
    mapper: Arc<dyn ScopePolicyMapper>,
}

impl ScopesAttributesProcessor {
    #[must_use]
    pub fn new(mapper: Arc<dyn ScopePolicyMapper>) -> Self {
        Self { mapper }
    }

    /// Create a processor from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ScopeMapperError`] if the mapper cannot be built.
    pub fn from_config(cfg: &ScopeMapperConfig) -> Result<Self, ScopeMapperError> {
        Ok(Self::new(build_mapper(cfg)?))
    }

    #[must_use]
    pub fn mapper_type(&self) -> MapperType {
        self.mapper.mapper_type()
    }

    /// Derive policies from the token's scope claim and write them into `sink`.
    ///
    /// Tokens without a scope claim leave `sink` untouched.
    pub fn process_attributes(&self, claims: &Value, sink: &mut dyn PrincipalAttributesSink) {
        let Some(scopes) = token_scopes(claims) else {
            debug!("Token carries no scope claim; skipping scope mapping");
            return;
        };
        self.mapper.apply(&scopes, sink);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::path::PathBuf;

    use scope_mapper_sdk::PrincipalAttributes;
    use serde_json::json;

    use super::*;

    fn config(mapper_type: MapperType) -> ScopeMapperConfig {
        ScopeMapperConfig {
            app_id: "myapp".to_owned(),
            mapper_type,
            mapper_file_path: None,
        }
    }

    #[test]
    fn selects_strategy_from_config() {
        assert_eq!(
            build_mapper(&config(MapperType::None)).unwrap().mapper_type(),
            MapperType::None
        );
        assert_eq!(
            build_mapper(&config(MapperType::Default))
                .unwrap()
                .mapper_type(),
            MapperType::Default
        );
    }

    #[test]
    fn built_mapper_is_debug_printable() {
        let mapper = build_mapper(&config(MapperType::Default)).unwrap();
        assert!(format!("{mapper:?}").contains("myapp.AMS_POLICY."));

        let res = build_mapper(&config(MapperType::FileBased));
        assert!(matches!(
            res,
            Err(ScopeMapperError::MissingMappingFilePath { .. })
        ));
    }

    #[test]
    fn file_based_without_path_fails_construction() {
        let err = build_mapper(&config(MapperType::FileBased)).unwrap_err();
        assert!(matches!(
            err,
            ScopeMapperError::MissingMappingFilePath { .. }
        ));
    }

    #[test]
    fn file_based_with_missing_file_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ScopeMapperConfig {
            mapper_file_path: Some(dir.path().join("absent.json")),
            ..config(MapperType::FileBased)
        };
        assert!(matches!(
            build_mapper(&cfg).unwrap_err(),
            ScopeMapperError::MappingFileRead { .. }
        ));
    }

    #[test]
    fn processor_writes_default_policies() {
        let processor = ScopesAttributesProcessor::from_config(&config(MapperType::Default)).unwrap();
        let claims = json!({
            "scope": ["myapp.AMS_POLICY.sales.read", "other.scope", "openid"]
        });

        let mut attrs = PrincipalAttributes::new();
        processor.process_attributes(&claims, &mut attrs);
        assert_eq!(attrs.policies(), Some(&["sales.read".to_owned()][..]));
    }

    #[test]
    fn processor_skips_tokens_without_scopes() {
        let processor = ScopesAttributesProcessor::from_config(&config(MapperType::Default)).unwrap();

        let mut attrs = PrincipalAttributes::new();
        processor.process_attributes(&json!({ "sub": "client-1" }), &mut attrs);
        assert!(attrs.policies().is_none());
    }

    #[test]
    fn processor_with_none_mapper_leaves_principal_untouched() {
        let processor = ScopesAttributesProcessor::from_config(&config(MapperType::None)).unwrap();

        let mut attrs = PrincipalAttributes::new();
        processor.process_attributes(
            &json!({ "scope": ["myapp.AMS_POLICY.sales.read"] }),
            &mut attrs,
        );
        assert!(attrs.policies().is_none());
    }

    #[test]
    fn debug_output_names_the_strategy() {
        let processor = ScopesAttributesProcessor::new(Arc::new(NoneMapper));
        let rendered = format!("{processor:?}");
        assert!(rendered.contains("None"));
        assert_eq!(processor.mapper_type(), MapperType::None);
    }

    #[test]
    fn relative_file_path_is_kept_as_configured() {
        let cfg = ScopeMapperConfig {
            mapper_file_path: Some(PathBuf::from("does/not/exist.json")),
            ..config(MapperType::FileBased)
        };
        let err = build_mapper(&cfg).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
