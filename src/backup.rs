//! Backup copies taken before a file is overwritten

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The `index`-th backup name for `path`.
///
/// Index 0 is `<path>.<suffix>`, later ones are `<path>.<suffix>.<index>`.
pub fn backup_path(path: &Path, suffix: &str, index: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    if index > 0 {
        name.push(format!(".{}", index));
    }
    PathBuf::from(name)
}

/// The first backup name for `path` that does not exist yet.
pub fn next_backup_path(path: &Path, suffix: &str) -> PathBuf {
    backup_path(path, suffix, next_free_index(path, suffix))
}

fn next_free_index(path: &Path, suffix: &str) -> u32 {
    let mut index = 0;
    while backup_path(path, suffix, index).exists() {
        index += 1;
    }
    index
}

/// Copy `path` to the first free backup name.
///
/// Each candidate is created exclusively, so an existing backup is never
/// overwritten even if another process creates one concurrently.
///
/// # Returns
/// * `Ok((bytes, backup))` - Number of bytes copied and the backup path
/// * `Err` - If the source cannot be read or the backup cannot be written
pub fn create_backup(path: &Path, suffix: &str) -> Result<(u64, PathBuf)> {
    let data = fs::read(path)?;

    let mut index = next_free_index(path, suffix);
    loop {
        let candidate = backup_path(path, suffix, index);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(mut file) => {
                file.write_all(&data)?;
                return Ok((data.len() as u64, candidate));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => index += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
