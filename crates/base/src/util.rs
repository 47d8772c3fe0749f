// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::Path as StdPath;

use tempfile::NamedTempFile;

fn not_a_file_err(file_path: &StdPath) -> io::Error {
    io::Error::other(format!(
        "Should be a file, but is not: '{}' - possible solution: delete it",
        file_path.display()
    ))
}

/// Checks whether the given path exists and is a file.
/// A missing file is not an error, but reported as `false`.
///
/// # Errors
///
/// - If the path exists but is not a file.
/// - If there is a permission problem.
/// - If there is an IO error.
pub fn look_for_file(file_path: &StdPath) -> io::Result<bool> {
    let path_exists = StdPath::try_exists(file_path)?;
    if path_exists && !fs::metadata(file_path)?.is_file() {
        return Err(not_a_file_err(file_path));
    }
    Ok(path_exists)
}

/// Ensures the provided dir exists.
/// Returns whether it was created.
///
/// # Errors
///
/// - if Checking if the directory exists fails.
/// - if the path exists but is not a directory.
/// - if Creating the directory fails.
pub fn ensure_dir_exists(dir_path: &StdPath) -> io::Result<bool> {
    let dir_path_exists = StdPath::try_exists(dir_path)?;
    if dir_path_exists {
        if !fs::metadata(dir_path)?.is_dir() {
            return Err(io::Error::other(format!(
                "Should be an output directory, but is not a directory: '{}' - possible solution: delete it",
                dir_path.display()
            )));
        }
    } else {
        fs::create_dir_all(dir_path)?;
    }
    Ok(!dir_path_exists)
}

/// Writes `content` to `file_path` through a uniquely named
/// sibling temporary file, so readers never see a half written file.
/// The temporary file is removed if anything fails.
///
/// # Errors
///
/// If writing the temporary file or renaming it fails.
pub fn write_atomically(file_path: &StdPath, content: &[u8]) -> io::Result<()> {
    let dir = file_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| StdPath::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(file_path).map_err(|err| err.error)?;
    Ok(())
}

pub fn extract_file_ext(file: &StdPath) -> Option<&str> {
    file.extension().and_then(OsStr::to_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!look_for_file(&dir.path().join("nothing.json")).unwrap());
    }

    #[test]
    fn dir_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(look_for_file(dir.path()).is_err());
    }

    #[test]
    fn ensure_dir_reports_creation() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("a").join("b");
        assert!(ensure_dir_exists(&sub).unwrap());
        assert!(!ensure_dir_exists(&sub).unwrap());
        let file = dir.path().join("file.rs");
        fs::write(&file, "").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
    }

    #[test]
    fn atomic_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dict.json");
        write_atomically(&file, b"one").unwrap();
        write_atomically(&file, b"two").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "two");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(extract_file_ext(&file), Some("json"));
    }

    #[test]
    fn failed_atomic_write_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        // renaming a file onto a non-empty directory fails
        let target = dir.path().join("dict.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();
        assert!(write_atomically(&target, b"lost").is_err());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["dict.json"]);
    }

    #[test]
    fn concurrent_atomic_writes_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dict.json");
        let writers: Vec<_> = (0..8)
            .map(|idx| {
                let file = file.clone();
                std::thread::spawn(move || write_atomically(&file, format!("{idx}").as_bytes()))
            })
            .collect();
        for writer in writers {
            writer.join().unwrap().unwrap();
        }
        let content = fs::read_to_string(&file).unwrap();
        assert!(content.parse::<u8>().is_ok_and(|idx| idx < 8));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
