use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::env::Environment;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::maven::{DependencyGroup, MAKER_SCALA_VERSION, MAKER_VERSION};

const MAKER_DIR_NAME: &str = ".maker";

/// Modules whose compiled output replaces the binaries in developer mode.
const DEVELOPER_MODULES: &[&str] = &["maker"];

/// Every on-disk location the launcher reads or writes.
#[derive(Debug, Clone)]
pub struct MakerPaths {
    scala_libs_dir: PathBuf,
    dependencies_dir: PathBuf,
    binaries_dir: PathBuf,
    resource_cache: PathBuf,
    maker_root: PathBuf,
}

impl MakerPaths {
    pub fn new(env: &Environment) -> Self {
        let base = env.home_dir.join(MAKER_DIR_NAME);
        Self {
            scala_libs_dir: base.join("scala-libs").join(MAKER_SCALA_VERSION),
            dependencies_dir: base.join("maker-dependencies").join(MAKER_VERSION),
            binaries_dir: base.join("maker-binaries").join(MAKER_VERSION),
            resource_cache: base.join("resource-cache"),
            maker_root: env.maker_root.clone(),
        }
    }

    pub fn scala_libs_dir(&self) -> &Path {
        &self.scala_libs_dir
    }

    pub fn dependencies_dir(&self) -> &Path {
        &self.dependencies_dir
    }

    pub fn binaries_dir(&self) -> &Path {
        &self.binaries_dir
    }

    pub fn resource_cache(&self) -> &Path {
        &self.resource_cache
    }

    pub fn install_dir(&self, group: DependencyGroup) -> &Path {
        match group {
            DependencyGroup::ScalaLibraries => &self.scala_libs_dir,
            DependencyGroup::MakerDependencies => &self.dependencies_dir,
            DependencyGroup::MakerBinaries => &self.binaries_dir,
        }
    }

    /// Bundled defaults, last among the structured classpath entries.
    pub fn reference_config_dir(&self) -> PathBuf {
        self.maker_root.join("config")
    }

    pub fn bundled_logback_file(&self) -> PathBuf {
        self.maker_root.join("logback-config").join("logback.xml")
    }

    pub fn class_dirs(&self) -> Vec<PathBuf> {
        self.module_output_dirs("classes")
    }

    pub fn test_class_dirs(&self) -> Vec<PathBuf> {
        self.module_output_dirs("test-classes")
    }

    fn module_output_dirs(&self, kind: &str) -> Vec<PathBuf> {
        DEVELOPER_MODULES
            .iter()
            .map(|module| {
                self.maker_root
                    .join(module)
                    .join("target-maker")
                    .join(MAKER_SCALA_VERSION)
                    .join(kind)
            })
            .collect()
    }

    /// Create the three install targets. With `refresh`, the targets and the
    /// resource cache are deleted first so every jar is fetched again.
    pub fn prepare(&self, refresh: bool) -> LauncherResult<()> {
        let install_dirs = DependencyGroup::ALL.map(|group| self.install_dir(group));

        if refresh {
            info!("Refreshing: removing installed jars and the resource cache");
            for dir in install_dirs.iter().copied().chain([self.resource_cache()]) {
                remove_dir_if_present(dir)?;
            }
        }

        for dir in install_dirs {
            std::fs::create_dir_all(dir).map_err(|e| LauncherError::io(dir, e))?;
        }
        Ok(())
    }
}

fn remove_dir_if_present(dir: &Path) -> LauncherResult<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LauncherError::io(dir, e)),
    }
}
