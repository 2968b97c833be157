//! Directory helpers shared by the generator and the site renderer.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocsError, IoResultExt, Result};

/// A regular file found under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TreeFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

/// Every regular file under `root`, in file-name order.
///
/// A missing root yields no files.
pub(crate) fn tree_files(root: &Path) -> Result<Vec<TreeFile>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        files.push(TreeFile { path, relative });
    }
    Ok(files)
}

/// Recursively copy the contents of `src` into `dst`.
///
/// A missing `src` means there is nothing to copy. Returns the number of
/// files copied.
pub(crate) fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    let files = tree_files(src)?;
    for file in &files {
        let target = dst.join(&file.relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::copy(&file.path, &target).with_path(&file.path)?;
    }
    Ok(files.len())
}

/// Remove `dir` and everything in it; a missing directory is not an error.
pub(crate) fn remove_dir_if_exists(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DocsError::io(dir, e)),
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> DocsError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DocsError::io(path, err.into())
}
