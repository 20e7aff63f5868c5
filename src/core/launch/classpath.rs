// ─── Classpath Builder ───
// Orders the jars and directories handed to the Scala REPL.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::LaunchConfig;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::MakerPaths;

/// Platform-specific Java classpath separator.
pub fn get_classpath_separator() -> &'static str {
    if cfg!(target_os = "windows") {
        ";"
    } else {
        ":"
    }
}

/// Jars installed in `dir`, by file name.
pub fn installed_jars(dir: &Path) -> LauncherResult<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LauncherError::io(dir, e)),
    };

    let mut jars: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "jar"))
        .collect();
    jars.sort();
    Ok(jars)
}

/// Builds the REPL classpath. Earlier entries shadow later ones:
///
/// 1. Scala libraries
/// 2. Maker dependencies
/// 3. Application config directory, if any
/// 4. Maker binaries, or the local class directories in developer mode
/// 5. Reference config directory
/// 6. Extra classpath entries
///
/// Duplicates are kept.
pub fn build_classpath(config: &LaunchConfig, paths: &MakerPaths) -> LauncherResult<Vec<PathBuf>> {
    let mut entries = installed_jars(paths.scala_libs_dir())?;
    entries.extend(installed_jars(paths.dependencies_dir())?);

    if let Some(dir) = &config.application_config_dir {
        entries.push(dir.clone());
    }

    if config.developer_mode {
        entries.extend(paths.class_dirs());
        entries.extend(paths.test_class_dirs());
    } else {
        entries.extend(installed_jars(paths.binaries_dir())?);
    }

    entries.push(paths.reference_config_dir());
    entries.extend(config.extra_classpath.iter().cloned());

    debug!("Classpath has {} entries", entries.len());
    Ok(entries)
}

pub fn join_classpath(entries: &[PathBuf]) -> String {
    entries
        .iter()
        .map(|entry| entry.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(get_classpath_separator())
}
