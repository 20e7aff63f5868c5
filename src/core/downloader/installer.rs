// ─── Dependency Installer ───
// Fills an install target from the resource cache, falling back to the network.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::client::Fetcher;
use crate::core::cache::{copy_atomically, write_atomically, CacheStore};
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::maven::ArtifactRef;

/// How each artifact of one `install` call was satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub already_present: usize,
    pub from_cache: usize,
    pub downloaded: usize,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.already_present + self.from_cache + self.downloaded
    }
}

pub struct DependencyInstaller<'a> {
    cache: &'a CacheStore,
    fetcher: &'a dyn Fetcher,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(cache: &'a CacheStore, fetcher: &'a dyn Fetcher) -> Self {
        Self { cache, fetcher }
    }

    /// Make sure `target_dir` holds `<basename>` for every artifact.
    ///
    /// Artifacts are handled strictly in order and the first failure aborts
    /// the call. A file already in the target is trusted as-is.
    pub async fn install(
        &self,
        artifacts: &[ArtifactRef],
        target_dir: &Path,
    ) -> LauncherResult<InstallReport> {
        let mut report = InstallReport::default();
        let scratch =
            tempfile::tempdir().map_err(|e| LauncherError::io(std::env::temp_dir(), e))?;

        for artifact in artifacts {
            let lib_file = target_dir.join(artifact.basename());
            if lib_file.is_file() {
                debug!("Present: {:?}", lib_file);
                report.already_present += 1;
                continue;
            }

            let cache_file = self.cache.cache_file(artifact);
            if self.cache.exists(&cache_file) {
                debug!("From cache: {} -> {:?}", artifact, lib_file);
                copy_atomically(&cache_file, &lib_file)?;
                report.from_cache += 1;
                continue;
            }

            let temp_file = self.download_to(artifact, scratch.path()).await?;
            copy_atomically(&temp_file, &lib_file)?;
            self.cache.insert(artifact, &temp_file)?;
            report.downloaded += 1;
        }

        Ok(report)
    }

    async fn download_to(&self, artifact: &ArtifactRef, dir: &Path) -> LauncherResult<PathBuf> {
        let bytes = self.fetcher.fetch(artifact).await?;
        let temp_file = dir.join(artifact.basename());
        write_atomically(&bytes, &temp_file)?;
        Ok(temp_file)
    }
}

/// Install several groups one after another, stopping at the first error.
pub async fn install_all<'g, I>(
    installer: &DependencyInstaller<'_>,
    groups: I,
) -> LauncherResult<InstallReport>
where
    I: IntoIterator<Item = (&'g str, Vec<ArtifactRef>, &'g Path)>,
{
    let mut total = InstallReport::default();
    for (label, artifacts, target_dir) in groups {
        let report = installer.install(&artifacts, target_dir).await?;
        info!(
            "{}: {} present, {} from cache, {} downloaded",
            label, report.already_present, report.from_cache, report.downloaded
        );
        total.already_present += report.already_present;
        total.from_cache += report.from_cache;
        total.downloaded += report.downloaded;
    }
    Ok(total)
}
