// tests/backup_test.rs
use numbump::backup::{create_backup, next_backup_path};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_first_backup_uses_plain_suffix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meta.json");
    fs::write(&path, "{\"version\": 1}\n").unwrap();

    let (bytes, backup) = create_backup(&path, "backup").unwrap();

    assert_eq!(backup, dir.path().join("meta.json.backup"));
    assert_eq!(bytes, 15);
    assert_eq!(fs::read_to_string(&backup).unwrap(), "{\"version\": 1}\n");
}

#[test]
fn test_existing_backup_is_not_clobbered() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meta.json");
    fs::write(&path, "new").unwrap();
    fs::write(dir.path().join("meta.json.backup"), "old").unwrap();

    let (_, backup) = create_backup(&path, "backup").unwrap();

    assert_eq!(backup, dir.path().join("meta.json.backup.1"));
    assert_eq!(
        fs::read_to_string(dir.path().join("meta.json.backup")).unwrap(),
        "old"
    );
    assert_eq!(fs::read_to_string(&backup).unwrap(), "new");
}

#[test]
fn test_backups_keep_counting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meta.json");
    fs::write(&path, "{}").unwrap();

    let names: Vec<_> = (0..3)
        .map(|_| create_backup(&path, "bak").unwrap().1)
        .collect();

    assert_eq!(
        names,
        vec![
            dir.path().join("meta.json.bak"),
            dir.path().join("meta.json.bak.1"),
            dir.path().join("meta.json.bak.2"),
        ]
    );
}

#[test]
fn test_missing_source_fails() {
    let dir = TempDir::new().unwrap();
    assert!(create_backup(&dir.path().join("absent.json"), "backup").is_err());
    assert!(!dir.path().join("absent.json.backup").exists());
}

#[test]
fn test_next_backup_path_skips_existing_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meta.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(
        next_backup_path(&path, "backup"),
        dir.path().join("meta.json.backup")
    );

    fs::write(dir.path().join("meta.json.backup"), "old").unwrap();
    fs::write(dir.path().join("meta.json.backup.1"), "older").unwrap();
    assert_eq!(
        next_backup_path(&path, "backup"),
        dir.path().join("meta.json.backup.2")
    );

    // Looking up a name does not create it
    assert!(!dir.path().join("meta.json.backup.2").exists());
    let (_, backup) = create_backup(&path, "backup").unwrap();
    assert_eq!(backup, dir.path().join("meta.json.backup.2"));
}
