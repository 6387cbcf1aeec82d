use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::sheet::{Projection, SheetLayout};

/// Identity of an uploaded sheet as seen on disk.
///
/// A replaced file changes length or modification time, so stale
/// projections are never returned for new content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
    pub layout: SheetLayout,
}

impl FileIdentity {
    pub fn for_path(path: &Path, layout: SheetLayout) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to stat sheet file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            len: metadata.len(),
            modified: metadata.modified().ok(),
            layout,
        })
    }
}

/// In-memory cache of processed sheet rows keyed by file identity
pub struct SheetCache<T> {
    entries: HashMap<FileIdentity, Projection<T>>,
}

impl<T: Clone> SheetCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, identity: &FileIdentity) -> Option<&Projection<T>> {
        self.entries.get(identity)
    }

    /// Return the cached projection or build and store it
    pub fn get_or_try_insert<F>(&mut self, identity: FileIdentity, build: F) -> Result<Projection<T>>
    where
        F: FnOnce() -> Result<Projection<T>>,
    {
        if let Some(hit) = self.entries.get(&identity) {
            debug!("Sheet cache hit: {}", identity.path.display());
            return Ok(hit.clone());
        }

        let projection = build()?;
        // Older versions of the same file and layout can never be hit again
        self.entries
            .retain(|cached, _| cached.path != identity.path || cached.layout != identity.layout);
        self.entries.insert(identity, projection.clone());
        Ok(projection)
    }

    /// Drop every entry for `path`, whatever its layout or version
    pub fn invalidate(&mut self, path: &Path) -> usize {
        let before = self.entries.len();
        self.entries.retain(|identity, _| identity.path != path);
        let removed = before - self.entries.len();
        if removed > 0 {
            info!("Invalidated {} cached sheet(s) for {}", removed, path.display());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for SheetCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
