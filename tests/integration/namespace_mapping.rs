//! Integration tests for namespace mapping

use super::test_utils::{make_dir, write_file};
use dirdump::cli::format_namespace_text;
use dirdump::namespace::NamespaceMapper;
use dirdump::tree::walker::WalkerConfig;
use tempfile::TempDir;

/// Root P with P/dto (UserDto, OrderDto) and P/service (UserService, README.md)
#[test]
fn test_dto_service_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("P");
    write_file(&root, "dto/UserDto.java", "");
    write_file(&root, "dto/OrderDto.java", "");
    write_file(&root, "service/UserService.java", "");
    write_file(&root, "service/README.md", "");

    let mapping = NamespaceMapper::new(root).map().unwrap();

    assert_eq!(mapping.len(), 2);
    let mut dto = mapping.get("dto").unwrap().to_vec();
    dto.sort();
    assert_eq!(dto, vec!["OrderDto", "UserDto"]);
    assert_eq!(mapping.get("service").unwrap(), ["UserService"]);
    assert!(mapping
        .iter()
        .all(|(_, names)| names.iter().all(|n| !n.starts_with("README"))));
}

#[test]
fn test_directories_without_matches_are_absent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    make_dir(&root, "com/example/empty");
    write_file(&root, "com/example/docs/notes.md", "");
    write_file(&root, "com/example/model/Patient.java", "");

    let mapping = NamespaceMapper::new(root).map().unwrap();

    assert_eq!(mapping.namespaces().collect::<Vec<_>>(), vec!["com.example.model"]);
    assert!(mapping.get("com").is_none());
    assert!(mapping.get("com.example").is_none());
    assert!(mapping.get("com.example.empty").is_none());
}

#[test]
fn test_insertion_order_follows_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    write_file(&root, "b/B.java", "");
    write_file(&root, "a/deep/D.java", "");
    write_file(&root, "a/A.java", "");

    let config = WalkerConfig {
        sort_entries: true,
        ..WalkerConfig::default()
    };
    let mapping = NamespaceMapper::new(root)
        .with_walker_config(config)
        .map()
        .unwrap();

    assert_eq!(
        mapping.namespaces().collect::<Vec<_>>(),
        vec!["a", "a.deep", "b"]
    );
    assert_eq!(
        format_namespace_text(&mapping),
        "Package: a\n  - A\n\nPackage: a.deep\n  - D\n\nPackage: b\n  - B\n\n"
    );
}

#[test]
fn test_suffix_match_is_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    write_file(&root, "x/Upper.JAVA", "");
    write_file(&root, "x/lower.java", "");
    write_file(&root, "x/javafile.txt", "");

    let mapping = NamespaceMapper::new(root).map().unwrap();

    assert_eq!(mapping.get("x").unwrap(), ["lower"]);
}

#[test]
fn test_ignored_directories_are_pruned() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    write_file(&root, "src/Main.java", "");
    write_file(&root, "build/generated/Gen.java", "");

    let config = WalkerConfig {
        ignore_patterns: vec!["build".to_string()],
        ..WalkerConfig::default()
    };
    let mapping = NamespaceMapper::new(root)
        .with_walker_config(config)
        .map()
        .unwrap();

    assert_eq!(mapping.namespaces().collect::<Vec<_>>(), vec!["src"]);
}
