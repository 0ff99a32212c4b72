#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use scope_mapper::{ScopeMapperConfig, ScopesAttributesProcessor, build_mapper};
use scope_mapper_sdk::{MapperType, PrincipalAttributes, ScopeMapperError};
use serde_json::json;

fn mapping_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn file_based_config(path: PathBuf) -> ScopeMapperConfig {
    ScopeMapperConfig {
        app_id: "myapp".to_owned(),
        mapper_type: MapperType::FileBased,
        mapper_file_path: Some(path),
    }
}

fn scopes(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn maps_scopes_through_file_table() {
    let file = mapping_file(r#"[{"scope": "readScope", "policy": "sales.read"}]"#);
    let mapper = build_mapper(&file_based_config(file.path().to_path_buf())).unwrap();

    assert_eq!(mapper.mapper_type(), MapperType::FileBased);
    assert_eq!(mapper.map(&scopes(&["myapp.readScope"])), vec!["sales.read"]);
}

#[test]
fn returns_table_values_in_input_order_excluding_unmapped() {
    let file = mapping_file(
        r#"[
            {"scope": "readScope", "policy": "sales.read"},
            {"scope": "writeScope", "policy": "sales.write"},
            {"scope": "auditScope", "policy": "audit.view"}
        ]"#,
    );
    let mapper = build_mapper(&file_based_config(file.path().to_path_buf())).unwrap();

    let result = mapper.map(&scopes(&[
        "myapp.auditScope",
        "myapp.deleteScope",
        "otherapp.readScope",
        "myapp.readScope",
        "uaa.user",
    ]));
    assert_eq!(result, vec!["audit.view", "sales.read"]);
}

#[test]
fn table_is_read_once_at_construction() {
    let file = mapping_file(r#"[{"scope": "readScope", "policy": "sales.read"}]"#);
    let path = file.path().to_path_buf();
    let mapper = build_mapper(&file_based_config(path)).unwrap();

    // Removing the file after startup does not affect mapping.
    drop(file);
    assert_eq!(mapper.map(&scopes(&["myapp.readScope"])), vec!["sales.read"]);
}

#[test]
fn malformed_file_fails_construction() {
    let file = mapping_file(r#"[{"scope": "readScope", "policy": "#);
    let err = build_mapper(&file_based_config(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, ScopeMapperError::MappingFileParse { .. }));
}

#[test]
fn duplicate_scope_fails_construction() {
    let file = mapping_file(
        r#"[
            {"scope": "readScope", "policy": "sales.read"},
            {"scope": "readScope", "policy": "sales.readAll"}
        ]"#,
    );
    let err = build_mapper(&file_based_config(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, ScopeMapperError::DuplicateScopeMapping { .. }));
}

#[test]
fn processor_writes_file_based_policies_into_principal() {
    let file = mapping_file(r#"[{"scope": "readScope", "policy": "sales.read"}]"#);
    let processor =
        ScopesAttributesProcessor::from_config(&file_based_config(file.path().to_path_buf()))
            .unwrap();

    let mut attrs = PrincipalAttributes::new();
    processor.process_attributes(
        &json!({ "scope": "openid myapp.readScope myapp.writeScope" }),
        &mut attrs,
    );
    assert_eq!(attrs.into_policies(), vec!["sales.read"]);
}

#[test]
fn shared_mapper_agrees_across_threads() {
    let file = mapping_file(
        r#"[
            {"scope": "readScope", "policy": "sales.read"},
            {"scope": "writeScope", "policy": "sales.write"}
        ]"#,
    );
    let mapper = build_mapper(&file_based_config(file.path().to_path_buf())).unwrap();
    let input = Arc::new(scopes(&["myapp.writeScope", "myapp.other", "myapp.readScope"]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let mapper = Arc::clone(&mapper);
            let input = Arc::clone(&input);
            thread::spawn(move || mapper.map(&input))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["sales.write", "sales.read"]);
    }
}
