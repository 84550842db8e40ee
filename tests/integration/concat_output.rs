//! Integration tests for the concatenator's output artifact

use super::test_utils::{file_block, make_dir, section, write_file};
use dirdump::concat::{ConcatSummary, Concatenator};
use dirdump::error::DumpError;
use dirdump::tree::walker::WalkerConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sorted() -> WalkerConfig {
    WalkerConfig {
        sort_entries: true,
        ..WalkerConfig::default()
    }
}

fn dump(root: &Path, output: &Path) -> (String, ConcatSummary) {
    let summary = Concatenator::new(root.to_path_buf())
        .with_walker_config(sorted())
        .dump_to_file(output)
        .unwrap();
    (fs::read_to_string(output).unwrap(), summary)
}

/// Root Q contains Q/a with x.txt = "hello"
#[test]
fn test_single_directory_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Q");
    write_file(&root, "a/x.txt", "hello");
    let output = temp_dir.path().join("out.txt");

    let (content, _) = dump(&root, &output);

    assert_eq!(content, format!("{}{}", section("a"), file_block("x.txt", "hello")));
}

#[test]
fn test_sections_follow_pre_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    write_file(&root, "root.txt", "skipped");
    write_file(&root, "dto/UserDto.java", "class UserDto {}");
    write_file(&root, "dto/nested/Inner.java", "class Inner {}");
    write_file(&root, "service/UserService.java", "class UserService {}");
    let output = temp_dir.path().join("out.txt");

    let (content, summary) = dump(&root, &output);

    let expected = [
        section("dto"),
        file_block("UserDto.java", "class UserDto {}"),
        section("nested"),
        file_block("Inner.java", "class Inner {}"),
        section("service"),
        file_block("UserService.java", "class UserService {}"),
    ]
    .concat();
    assert_eq!(content, expected);
    assert!(!content.contains("root.txt"));
    assert_eq!(
        summary,
        ConcatSummary {
            directories: 3,
            files: 3,
            unreadable: 0
        }
    );
}

#[test]
fn test_directories_without_files_get_empty_sections() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    make_dir(&root, "only_dirs/leaf");
    write_file(&root, "only_dirs/leaf/a.txt", "A");
    make_dir(&root, "zz_empty");
    let output = temp_dir.path().join("out.txt");

    let (content, summary) = dump(&root, &output);

    let expected = [
        section("only_dirs"),
        section("leaf"),
        file_block("a.txt", "A"),
        section("zz_empty"),
    ]
    .concat();
    assert_eq!(content, expected);
    assert_eq!(content.matches("DIRECTORY: ").count(), 3);
    assert_eq!(content.matches("--- FILE: a.txt ---").count(), 1);
    assert_eq!(summary.directories, 3);
}

#[test]
fn test_every_file_gets_exactly_one_block() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    write_file(&root, "mixed/good.txt", "ok");
    make_dir(&root, "mixed");
    fs::write(root.join("mixed").join("bad.bin"), [0xc3, 0x28, 0xa0]).unwrap();
    let output = temp_dir.path().join("out.txt");

    let (content, summary) = dump(&root, &output);

    assert_eq!(content.matches("--- FILE: good.txt ---").count(), 1);
    assert_eq!(content.matches("[Error reading bad.bin: ").count(), 1);
    assert!(!content.contains("--- FILE: bad.bin ---"));
    assert_eq!(summary.files + summary.unreadable, 2);
}

#[test]
fn test_rerun_overwrites_identically() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    write_file(&root, "a/one.txt", "1");
    write_file(&root, "b/two.txt", "2");
    let output = temp_dir.path().join("out.txt");

    let (first, _) = dump(&root, &output);
    let (second, _) = dump(&root, &output);

    assert_eq!(first, second);
    assert_eq!(second.matches("DIRECTORY: a").count(), 1);
}

#[test]
fn test_contents_written_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    let body = "line one\r\nline two\n\n  indented\u{00e9}";
    write_file(&root, "text/body.txt", body);
    let output = temp_dir.path().join("out.txt");

    let (content, _) = dump(&root, &output);

    assert!(content.contains(&file_block("body.txt", body)));
}

#[test]
fn test_missing_base_path_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let result = Concatenator::new(temp_dir.path().join("absent")).dump_to_file(&output);

    assert!(matches!(result, Err(DumpError::Walk { .. })));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_abort() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    write_file(&root, "secure/locked.txt", "secret");
    write_file(&root, "secure/open.txt", "public");
    let locked = root.join("secure").join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; only assert on what permissions actually enforce.
    let enforced = fs::read(&locked).is_err();
    let output = temp_dir.path().join("out.txt");
    let (content, summary) = dump(&root, &output);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(content.contains(&file_block("open.txt", "public")));
    if enforced {
        assert!(content.contains("[Error reading locked.txt: "));
        assert_eq!(summary.unreadable, 1);
    }
}
