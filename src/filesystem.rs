//! Filesystem access for initializers
//!
//! Initializers write through the `Vfs` trait so the same code serves the
//! real project and home roots, unit tests, and `--dry-run` staging. Every
//! implementation takes scope-relative artifact paths, normalizes them and
//! rejects paths that would climb out of its root.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path;

/// Filesystem seam used by all initializers.
pub trait Vfs {
    /// Read a file as UTF-8. Returns `Ok(None)` when it does not exist.
    fn read_to_string(&self, artifact: &str) -> Result<Option<String>>;

    /// Write a file, creating missing parent directories.
    fn write(&mut self, artifact: &str, content: &str) -> Result<()>;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&mut self, artifact: &str) -> Result<()>;

    /// Check whether a file or directory exists.
    fn exists(&self, artifact: &str) -> bool;

    /// Check whether the path is a directory.
    fn is_dir(&self, artifact: &str) -> bool;
}

fn checked(artifact: &str) -> Result<String> {
    if artifact.is_empty() {
        return Err(Error::Path {
            message: "empty artifact path".to_string(),
        });
    }
    if path::escapes_root(artifact) {
        return Err(Error::PathEscape {
            path: artifact.to_string(),
        });
    }
    let normalized = path::normalize(artifact);
    if normalized.is_empty() {
        return Err(Error::Path {
            message: format!("artifact path resolves to the root itself: {}", artifact),
        });
    }
    Ok(normalized)
}

/// Real filesystem rooted at a scope directory.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    /// Create a filesystem rooted at `root`. The root itself is not created
    /// until the first write needs it.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this filesystem is confined to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, artifact: &str) -> Result<PathBuf> {
        Ok(self.root.join(checked(artifact)?))
    }
}

impl Vfs for DiskFs {
    fn read_to_string(&self, artifact: &str) -> Result<Option<String>> {
        let full = self.resolve(artifact)?;
        match fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write(&mut self, artifact: &str, content: &str) -> Result<()> {
        let full = self.resolve(artifact)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content)?;
        Ok(())
    }

    fn create_dir_all(&mut self, artifact: &str) -> Result<()> {
        let full = self.resolve(artifact)?;
        fs::create_dir_all(&full)?;
        Ok(())
    }

    fn exists(&self, artifact: &str) -> bool {
        self.resolve(artifact).map(|p| p.exists()).unwrap_or(false)
    }

    fn is_dir(&self, artifact: &str) -> bool {
        self.resolve(artifact).map(|p| p.is_dir()).unwrap_or(false)
    }
}

/// In-memory filesystem for tests and write staging.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl MemoryFs {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without going through the `Vfs` checks.
    pub fn add_file(&mut self, artifact: &str, content: &str) {
        let normalized = path::normalize(artifact);
        self.record_ancestors(&normalized);
        self.files.insert(normalized, content.to_string());
    }

    /// Get a file's content by path.
    pub fn contents(&self, artifact: &str) -> Option<&str> {
        self.files.get(&path::normalize(artifact)).map(|s| s.as_str())
    }

    /// List all file paths in sorted order.
    pub fn list_files(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the filesystem holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn record_ancestors(&mut self, normalized: &str) {
        for (i, _) in normalized.match_indices('/') {
            self.dirs.insert(normalized[..i].to_string());
        }
    }
}

impl Vfs for MemoryFs {
    fn read_to_string(&self, artifact: &str) -> Result<Option<String>> {
        let normalized = checked(artifact)?;
        Ok(self.files.get(&normalized).cloned())
    }

    fn write(&mut self, artifact: &str, content: &str) -> Result<()> {
        let normalized = checked(artifact)?;
        self.record_ancestors(&normalized);
        self.files.insert(normalized, content.to_string());
        Ok(())
    }

    fn create_dir_all(&mut self, artifact: &str) -> Result<()> {
        let normalized = checked(artifact)?;
        self.record_ancestors(&normalized);
        self.dirs.insert(normalized);
        Ok(())
    }

    fn exists(&self, artifact: &str) -> bool {
        let normalized = path::normalize(artifact);
        self.files.contains_key(&normalized) || self.dirs.contains(&normalized)
    }

    fn is_dir(&self, artifact: &str) -> bool {
        self.dirs.contains(&path::normalize(artifact))
    }
}

/// Write-staging view over another filesystem.
///
/// Reads fall through to the inner filesystem unless the path was written
/// through the overlay; writes never reach the inner filesystem. This is
/// what `--dry-run` executes against.
pub struct OverlayFs<'a> {
    inner: &'a dyn Vfs,
    staged: MemoryFs,
}

impl<'a> OverlayFs<'a> {
    /// Stage writes on top of `inner`.
    pub fn new(inner: &'a dyn Vfs) -> Self {
        Self {
            inner,
            staged: MemoryFs::new(),
        }
    }

    /// Everything that would have been written.
    pub fn staged(&self) -> &MemoryFs {
        &self.staged
    }
}

impl Vfs for OverlayFs<'_> {
    fn read_to_string(&self, artifact: &str) -> Result<Option<String>> {
        if let Some(content) = self.staged.read_to_string(artifact)? {
            return Ok(Some(content));
        }
        self.inner.read_to_string(artifact)
    }

    fn write(&mut self, artifact: &str, content: &str) -> Result<()> {
        self.staged.write(artifact, content)
    }

    fn create_dir_all(&mut self, artifact: &str) -> Result<()> {
        self.staged.create_dir_all(artifact)
    }

    fn exists(&self, artifact: &str) -> bool {
        self.staged.exists(artifact) || self.inner.exists(artifact)
    }

    fn is_dir(&self, artifact: &str) -> bool {
        self.staged.is_dir(artifact) || self.inner.is_dir(artifact)
    }
}
