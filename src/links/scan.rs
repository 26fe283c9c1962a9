// file: src/links/scan.rs
// version: 1.3.0
// guid: d0e1f2a3-b4c5-6789-0123-456789defabc

//! Walking a directory tree and describing the symlinks in it

use crate::{Result, SlinkyError};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A symlink found during a scan, with everything the per-link
/// operations need to know about it.
#[derive(Debug, Clone)]
pub struct LinkEntry {
    /// Path of the symlink itself.
    pub origin: PathBuf,
    /// The raw link text, exactly as stored.
    pub target: PathBuf,
    /// The target joined onto the link's directory when relative.
    pub resolved: PathBuf,
    /// The resolved target does not exist.
    pub dangling: bool,
    /// The raw link text is an absolute path.
    pub absolute: bool,
}

impl LinkEntry {
    /// Read the symlink at `origin` and derive its metadata.
    pub fn read(origin: &Path) -> Result<Self> {
        let target = fs::read_link(origin)?;
        let resolved = if target.is_absolute() {
            target.clone()
        } else {
            origin
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(&target)
        };

        Ok(Self {
            dangling: !resolved.exists(),
            absolute: target.is_absolute(),
            origin: origin.to_path_buf(),
            target,
            resolved,
        })
    }

    /// The directory containing the link.
    pub fn link_dir(&self) -> &Path {
        self.origin.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn origin_str(&self) -> String {
        self.origin.to_string_lossy().into_owned()
    }

    pub fn target_str(&self) -> String {
        self.target.to_string_lossy().into_owned()
    }
}

/// Predicates a link must satisfy to be acted on. All active filters
/// must match.
#[derive(Debug, Default)]
pub struct LinkFilters {
    pub only_dangling: bool,
    pub only_attached: bool,
    pub only_absolute: bool,
    pub only_relative: bool,
    pub origin_pattern: Option<Regex>,
    pub target_pattern: Option<Regex>,
}

impl LinkFilters {
    pub fn matches(&self, entry: &LinkEntry) -> bool {
        if self.only_dangling && !entry.dangling {
            return false;
        }
        if self.only_attached && entry.dangling {
            return false;
        }
        if self.only_absolute && !entry.absolute {
            return false;
        }
        if self.only_relative && entry.absolute {
            return false;
        }
        if let Some(re) = &self.origin_pattern {
            if !re.is_match(&entry.origin.to_string_lossy()) {
                return false;
            }
        }
        if let Some(re) = &self.target_pattern {
            if !re.is_match(&entry.target.to_string_lossy()) {
                return false;
            }
        }
        true
    }
}

/// Walks a tree without following symlinks and yields every link that
/// passes the filters.
pub struct LinkScanner {
    root: PathBuf,
    max_depth: Option<usize>,
    filters: LinkFilters,
}

impl LinkScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            filters: LinkFilters::default(),
        }
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_filters(mut self, filters: LinkFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Start the walk. A missing root is a hard error; unreadable
    /// entries below it are skipped.
    pub fn scan(self) -> Result<impl Iterator<Item = LinkEntry>> {
        if !self.root.exists() && !self.root.is_symlink() {
            return Err(SlinkyError::PathNotFound(
                self.root.display().to_string(),
            ));
        }

        let mut walker = WalkDir::new(&self.root).follow_links(false);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let filters = self.filters;
        Ok(walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_symlink())
            .filter_map(move |e| {
                let entry = match LinkEntry::read(e.path()) {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!("skipping unreadable link {}: {}", e.path().display(), err);
                        return None;
                    }
                };
                if filters.matches(&entry) {
                    Some(entry)
                } else {
                    debug!("filtered out {}", entry.origin.display());
                    None
                }
            }))
    }
}
