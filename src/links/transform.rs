// file: src/links/transform.rs
// version: 1.4.0
// guid: e1f2a3b4-c5d6-7890-1234-567890efabcd

//! Per-link rewrite operations
//!
//! Every rewrite goes through [`relink`]: the symlink itself is removed
//! and recreated with new text. The target is never modified here, with
//! the single exception of [`replace_with_target`], which renames it.

use crate::links::scan::LinkEntry;
use crate::{Result, SlinkyError};
use regex::Regex;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Component, Path, PathBuf};

/// Replace the symlink at `origin` with one pointing at `new_target`.
pub fn relink(origin: &Path, new_target: impl AsRef<Path>) -> Result<()> {
    fs::remove_file(origin)?;
    symlink(new_target.as_ref(), origin)?;
    Ok(())
}

/// Lexically normalize a target path: drop `.` components and fold
/// `name/..` pairs. Leading `..` components of relative paths are
/// preserved, and `..` directly under the root is a no-op.
pub fn tidy_target(target: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut components = target.components().peekable();

    if let Some(c @ Component::Prefix(..)) = components.peek() {
        cleaned.push(c);
        components.next();
    }
    if let Some(c @ Component::RootDir) = components.peek() {
        cleaned.push(c);
        components.next();
    }

    for component in components {
        match component {
            Component::Normal(c) => cleaned.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(..)) = cleaned.components().next_back() {
                    cleaned.pop();
                } else if cleaned.as_os_str().is_empty()
                    || cleaned.components().next_back() == Some(Component::ParentDir)
                {
                    // Keep leading .. in relative paths, or stack onto an existing ..
                    cleaned.push(component);
                }
                // At the root, .. is a no-op
            }
            _ => {}
        }
    }

    cleaned
}

/// Rewrite the target string by regex replacement (first match, or all
/// matches when `replace_all`).
pub fn edited_target(re: &Regex, target: &str, replace: &str, replace_all: bool) -> String {
    if replace_all {
        re.replace_all(target, replace).into_owned()
    } else {
        re.replace(target, replace).into_owned()
    }
}

/// The canonical absolute path of the link's resolved target.
pub fn absolute_target(entry: &LinkEntry) -> Result<PathBuf> {
    fs::canonicalize(&entry.resolved)
        .map_err(|e| SlinkyError::canonicalize(entry.origin.display().to_string(), e))
}

/// The path from the link's directory to its canonicalized target.
pub fn relative_target(entry: &LinkEntry) -> Result<PathBuf> {
    let abs_target = fs::canonicalize(&entry.resolved)?;
    let abs_link_dir = fs::canonicalize(entry.link_dir())?;
    pathdiff::diff_paths(&abs_target, &abs_link_dir).ok_or(SlinkyError::RelativePath)
}

/// Replace the symlink with a hard link to its resolved target.
pub fn to_hardlink(entry: &LinkEntry) -> Result<()> {
    fs::remove_file(&entry.origin)?;
    fs::hard_link(&entry.resolved, &entry.origin).map_err(SlinkyError::HardLinkFailed)?;
    Ok(())
}

/// Move the resolved target into the link's place.
pub fn replace_with_target(entry: &LinkEntry) -> Result<()> {
    let actual_target = fs::canonicalize(&entry.resolved)?;
    fs::remove_file(&entry.origin)?;
    fs::rename(actual_target, &entry.origin)?;
    Ok(())
}
