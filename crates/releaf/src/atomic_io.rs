//! Atomic export writes.
//!
//! Every export file is written to a hidden sibling first and synced. Only
//! once the whole set is staged are the siblings renamed over their targets,
//! so a failed export leaves the previous files in place rather than a mix
//! of old and new tables.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces each `(file_name, contents)` pair inside `dir` as one set.
///
/// Each `file_name` must be a single path component.
///
/// # Errors
///
/// Returns [`ExportError::WriteError`] naming the offending file if a name
/// is not a plain file name or any step of the write fails. Staged files
/// are removed on failure, and no target is touched unless every file was
/// staged.
pub(crate) fn write_all_atomic(
    dir: &Dir,
    files: &[(&Utf8Path, &[u8])],
) -> Result<(), ExportError> {
    let mut targets = Vec::with_capacity(files.len());
    for (file_name, contents) in files {
        targets.push((*file_name, bare_name(file_name)?, *contents));
    }

    let mut staged: Vec<(&Utf8Path, &str, String)> = Vec::with_capacity(targets.len());
    for (file_name, name, contents) in targets {
        let tmp_name = temp_name(name);
        if let Err(err) = stage(dir, &tmp_name, contents) {
            discard(dir, staged.iter().map(|(_, _, tmp)| tmp.as_str()));
            discard(dir, [tmp_name.as_str()]);
            return Err(write_error(file_name, &err));
        }
        staged.push((file_name, name, tmp_name));
    }

    for (index, (file_name, name, tmp_name)) in staged.iter().enumerate() {
        if let Err(err) = replace(dir, tmp_name, name) {
            let pending = staged.iter().skip(index).map(|(_, _, tmp)| tmp.as_str());
            discard(dir, pending);
            return Err(write_error(file_name, &err));
        }
    }

    sync_directory(dir);
    Ok(())
}

fn bare_name(file_name: &Utf8Path) -> Result<&str, ExportError> {
    let mut components = file_name.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(ExportError::WriteError {
            path: file_name.to_path_buf(),
            message: "export target must be a bare file name".to_owned(),
        }),
    }
}

fn write_error(file_name: &Utf8Path, err: &io::Error) -> ExportError {
    ExportError::WriteError {
        path: file_name.to_path_buf(),
        message: err.to_string(),
    }
}

fn discard<'a>(dir: &Dir, tmp_names: impl IntoIterator<Item = &'a str>) {
    for tmp_name in tmp_names {
        if dir.remove_file(tmp_name).is_err() {
            // Already gone or never created.
        }
    }
}

fn temp_name(target: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn stage(dir: &Dir, tmp_name: &str, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    // Rename does not overwrite on Windows.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Best effort.
    }
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;

    use super::*;

    fn scratch_dir(label: &str) -> (std::path::PathBuf, Dir) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let path = std::env::temp_dir().join(format!("releaf-atomic-{label}-{nanos}"));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        let dir = Dir::open_ambient_dir(&path, ambient_authority()).expect("open scratch dir");
        (path, dir)
    }

    #[test]
    fn replaces_existing_files_without_leftovers() {
        let (path, dir) = scratch_dir("replace");
        let users = Utf8Path::new("users.csv");
        let locations = Utf8Path::new("locations.csv");

        let first = [(users, b"first".as_slice()), (locations, b"first".as_slice())];
        write_all_atomic(&dir, &first).expect("first write");
        let second = [(users, b"second".as_slice()), (locations, b"second".as_slice())];
        write_all_atomic(&dir, &second).expect("second write");

        assert_eq!(dir.read_to_string(users).expect("read back"), "second");
        assert_eq!(dir.read_to_string(locations).expect("read back"), "second");
        let entries = dir.entries().expect("list dir").count();
        assert_eq!(entries, 2);
        std::fs::remove_dir_all(path).expect("clean up");
    }

    #[test]
    fn rejects_nested_paths() {
        let (path, dir) = scratch_dir("nested");

        let nested = [(Utf8Path::new("nested/users.csv"), b"data".as_slice())];
        let result = write_all_atomic(&dir, &nested);

        assert!(matches!(result, Err(ExportError::WriteError { .. })));
        std::fs::remove_dir_all(path).expect("clean up");
    }

    #[test]
    fn failed_set_leaves_earlier_files_untouched() {
        let (path, dir) = scratch_dir("partial");
        let users = Utf8Path::new("users.csv");
        write_all_atomic(&dir, &[(users, b"old users".as_slice())]).expect("seed write");

        let result = write_all_atomic(
            &dir,
            &[
                (users, b"new users".as_slice()),
                (Utf8Path::new("../locations.csv"), b"new locations".as_slice()),
            ],
        );

        assert!(matches!(
            result,
            Err(ExportError::WriteError { ref path, .. }) if path.as_str() == "../locations.csv"
        ));
        assert_eq!(dir.read_to_string(users).expect("read back"), "old users");
        let entries = dir.entries().expect("list dir").count();
        assert_eq!(entries, 1);
        std::fs::remove_dir_all(path).expect("clean up");
    }
}
