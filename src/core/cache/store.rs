use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::maven::ArtifactRef;

/// On-disk memo of every artifact ever downloaded, laid out like the remote
/// repository: `<root>/<org>/<artifact>/<version>/<artifact>-<version>.jar`.
///
/// Entries are only ever added. Presence is the sole validity check.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cache_file(&self, artifact: &ArtifactRef) -> PathBuf {
        self.root.join(artifact.relative_path())
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Write `bytes` to `path` through a sibling temp file.
    pub fn store(&self, bytes: &[u8], path: &Path) -> LauncherResult<()> {
        write_atomically(bytes, path)
    }

    /// Move a finished download into the cache slot for `artifact`.
    pub fn insert(&self, artifact: &ArtifactRef, source: &Path) -> LauncherResult<PathBuf> {
        let dest = self.cache_file(artifact);
        move_into_place(source, &dest)?;
        debug!("Cached {} at {:?}", artifact, dest);
        Ok(dest)
    }
}

fn parent_of(dest: &Path) -> LauncherResult<&Path> {
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| LauncherError::io(parent, e))?;
    Ok(parent)
}

fn persist(tmp: NamedTempFile, dest: &Path) -> LauncherResult<()> {
    tmp.persist(dest)
        .map_err(|e| LauncherError::io(dest, e.error))?;
    Ok(())
}

/// Create `dest` with `bytes` so that it either does not exist or is complete.
pub fn write_atomically(bytes: &[u8], dest: &Path) -> LauncherResult<()> {
    let parent = parent_of(dest)?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| LauncherError::io(parent, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| LauncherError::io(tmp.path(), e))?;
    persist(tmp, dest)
}

/// Copy `source` to `dest` via a temp file next to `dest`.
pub fn copy_atomically(source: &Path, dest: &Path) -> LauncherResult<()> {
    let parent = parent_of(dest)?;
    let tmp = NamedTempFile::new_in(parent).map_err(|e| LauncherError::io(parent, e))?;
    fs::copy(source, tmp.path()).map_err(|e| LauncherError::io(source, e))?;
    persist(tmp, dest)
}

/// Rename `source` onto `dest`, falling back to an atomic copy when the two
/// live on different filesystems.
pub fn move_into_place(source: &Path, dest: &Path) -> LauncherResult<()> {
    parent_of(dest)?;
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }
    copy_atomically(source, dest)?;
    fs::remove_file(source).map_err(|e| LauncherError::io(source, e))
}
