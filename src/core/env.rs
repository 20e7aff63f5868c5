use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

/// Everything the launcher reads from the surrounding process, gathered once.
///
/// Tests build one by hand instead of touching real environment variables.
#[derive(Debug, Clone)]
pub struct Environment {
    pub home_dir: PathBuf,
    pub java_home: Option<PathBuf>,
    pub maker_root: PathBuf,
    pub working_dir: PathBuf,
}

impl Environment {
    /// Read `HOME`, `JAVA_HOME` and the working directory.
    ///
    /// `maker_root` is where the bundled `config/` and `logback-config/`
    /// directories live; without an explicit value it is the directory of the
    /// running executable.
    pub fn from_process(maker_root: Option<PathBuf>) -> LauncherResult<Self> {
        let home_dir = non_empty_var("HOME")
            .or_else(dirs::home_dir)
            .ok_or(LauncherError::HomeDirNotFound)?;
        let java_home = non_empty_var("JAVA_HOME");
        let working_dir =
            std::env::current_dir().map_err(|e| LauncherError::io(PathBuf::from("."), e))?;

        let maker_root = match maker_root {
            Some(root) => root,
            None => executable_dir()?,
        };
        let maker_root = absolute(&working_dir, &maker_root);

        debug!(
            "Environment: home={:?} java_home={:?} maker_root={:?}",
            home_dir, java_home, maker_root
        );

        Ok(Self {
            home_dir,
            java_home,
            maker_root,
            working_dir,
        })
    }

    /// Resolve `path` against the working directory.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        absolute(&self.working_dir, path)
    }
}

fn non_empty_var(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn executable_dir() -> LauncherResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| LauncherError::io(PathBuf::from("maker"), e))?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
