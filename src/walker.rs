//! Directory enumeration and deterministic ordering.
//!
//! Lists the immediate regular files of a directory and sorts them by a key
//! derived from the filename. Filesystem enumeration order is platform
//! dependent and must never leak into the result, so callers always receive
//! the sorted list.

use crate::error::ProvenanceError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file slated for hashing, with its derived sort key.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Filename with the final extension stripped; ordering key only.
    pub sort_key: String,
    pub path: PathBuf,
}

/// Derive the sort key for a filename: everything before the last `.`.
///
/// A name with no `.` is its own key. Only the final extension is removed, so
/// `archive.tar.gz` keys as `archive.tar` and `.gitignore` keys as the empty
/// string.
pub fn sort_key(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem.to_string(),
        None => file_name.to_string(),
    }
}

/// List the immediate regular files of `dir`, sorted by derived key.
///
/// Non-recursive: subdirectories and their contents are skipped, as is
/// anything the platform does not report as a regular file. The file check
/// follows symlinks, so a link to a regular file is listed while a link to a
/// directory (or a broken link) is not. The sort is stable, so files whose
/// keys collide keep the order the filesystem enumerated them in; that
/// tie-break is implementation-defined.
pub fn list_sorted_files(dir: &Path) -> Result<Vec<FileEntry>, ProvenanceError> {
    if !dir.is_dir() {
        return Err(ProvenanceError::InvalidDirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| ProvenanceError::WalkError {
            path: dir.to_path_buf(),
            source: e,
        })?;

        // Resolves symlinks before the file-type check; a broken link simply
        // reports not-a-file.
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(FileEntry {
            sort_key: sort_key(&name),
            path: entry.into_path(),
        });
    }

    entries.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    Ok(entries)
}
