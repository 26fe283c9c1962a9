// file: src/links/create.rs
// version: 1.3.0
// guid: f2a3b4c5-d6e7-8901-2345-678901fabcde

//! Creating links: single symlinks and hardlinks, and whole link trees

use crate::{Result, SlinkyError};
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Create a hard link at `origin` pointing to `target`. Directories
/// cannot be hard linked.
pub fn hard_link(target: &Path, origin: &Path) -> Result<()> {
    if target.is_dir() {
        return Err(SlinkyError::HardLinkDirectory);
    }
    fs::hard_link(target, origin)?;
    Ok(())
}

/// Mirror `target` at `origin` as a tree of real directories and hard
/// links to each file. A plain file target becomes a single hard link.
pub fn hard_link_tree(target: &Path, origin: &Path) -> Result<()> {
    if !target.is_dir() {
        fs::hard_link(target, origin)?;
        return Ok(());
    }

    fs::create_dir_all(origin)?;
    for entry in WalkDir::new(target) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(target)?;
        if rel.as_os_str().is_empty() {
            continue;
        }
        let dest = origin.join(rel);
        if entry.path().is_dir() {
            fs::create_dir_all(dest)?;
        } else {
            debug!("hardlink {} -> {}", dest.display(), entry.path().display());
            fs::hard_link(entry.path(), dest)?;
        }
    }
    Ok(())
}

/// Mirror `target` at `origin` as a tree of real directories and
/// absolute symlinks to each file.
pub fn symlink_tree(target: &Path, origin: &Path) -> Result<()> {
    if !target.is_dir() {
        let abs_target = fs::canonicalize(target)?;
        symlink(abs_target, origin)?;
        return Ok(());
    }

    fs::create_dir_all(origin)?;
    for entry in WalkDir::new(target) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(target)?;
        if rel.as_os_str().is_empty() {
            continue;
        }
        let dest = origin.join(rel);
        if entry.path().is_dir() {
            fs::create_dir_all(dest)?;
        } else {
            let abs_target = fs::canonicalize(entry.path())?;
            debug!("symlink {} -> {}", dest.display(), abs_target.display());
            symlink(abs_target, dest)?;
        }
    }
    Ok(())
}

/// Follow a chain of symlinks to its end. Prefers `canonicalize`; when
/// that fails (dangling chain) the links are walked manually, joining
/// relative hops onto each link's directory.
pub fn dereference(path: &Path) -> PathBuf {
    if !path.is_symlink() {
        return path.to_path_buf();
    }
    match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => {
            let mut current = path.to_path_buf();
            while current.is_symlink() {
                let next = match fs::read_link(&current) {
                    Ok(next) => next,
                    Err(_) => break,
                };
                if next.is_absolute() {
                    current = next;
                } else if let Some(parent) = current.parent() {
                    current = parent.join(next);
                } else {
                    current = next;
                }
            }
            current
        }
    }
}

/// Where the new link should live. If `origin` names a directory, the
/// link is created inside it under the target's basename.
pub fn resolve_origin(target: &Path, origin: Option<&str>) -> Result<PathBuf> {
    let origin_input = origin.map(Path::new).unwrap_or_else(|| Path::new("."));
    if !origin_input.is_dir() {
        return Ok(origin_input.to_path_buf());
    }

    let resolved_target = if target.exists() {
        fs::canonicalize(target)?
    } else {
        target.to_path_buf()
    };
    let file_name = resolved_target.file_name().ok_or(SlinkyError::NoBasename)?;
    Ok(origin_input.join(file_name))
}
