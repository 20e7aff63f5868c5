// ─── Fallback Resolution ───
// Ordered candidate lists for files the user may or may not name explicitly.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::env::Environment;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths::MakerPaths;

/// One place a file might come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Named on the command line; taken without checking it exists.
    Explicit(Option<PathBuf>),
    /// A fixed file name inside a directory, if that file exists.
    FileIn { dir: PathBuf, name: String },
    /// The single file with `extension` in `dir`. More than one is an error.
    SoleMatchIn { dir: PathBuf, extension: String },
}

impl Candidate {
    pub fn resolve(&self) -> LauncherResult<Option<PathBuf>> {
        match self {
            Candidate::Explicit(path) => Ok(path.clone()),
            Candidate::FileIn { dir, name } => {
                let path = dir.join(name);
                Ok(path.is_file().then_some(path))
            }
            Candidate::SoleMatchIn { dir, extension } => sole_match(dir, extension),
        }
    }
}

/// Try each candidate in order; the first one that yields a path wins.
pub fn first_found(candidates: &[Candidate]) -> LauncherResult<Option<(&Candidate, PathBuf)>> {
    for candidate in candidates {
        if let Some(path) = candidate.resolve()? {
            return Ok(Some((candidate, path)));
        }
    }
    Ok(None)
}

fn sole_match(dir: &Path, extension: &str) -> LauncherResult<Option<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| LauncherError::io(dir, e))?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    matches.sort();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(LauncherError::AmbiguousProjectFile {
            candidates: matches,
        }),
    }
}

/// Places a user-supplied logback file may come from. Maker's bundled file is
/// the default when none of them yields one.
pub fn logback_candidates(explicit: Option<&Path>, env: &Environment) -> Vec<Candidate> {
    vec![
        Candidate::Explicit(explicit.map(|p| env.absolute(p))),
        Candidate::FileIn {
            dir: env.working_dir.clone(),
            name: "logback.xml".into(),
        },
    ]
}

pub fn project_file_candidates(explicit: Option<&Path>, env: &Environment) -> Vec<Candidate> {
    vec![
        Candidate::Explicit(explicit.map(Path::to_path_buf)),
        Candidate::SoleMatchIn {
            dir: env.working_dir.clone(),
            extension: "scala".into(),
        },
    ]
}

/// Logback configuration handed to the launched JVM.
pub fn logback_file(
    explicit: Option<&Path>,
    env: &Environment,
    paths: &MakerPaths,
) -> LauncherResult<PathBuf> {
    let candidates = logback_candidates(explicit, env);
    match first_found(&candidates)? {
        Some((Candidate::Explicit(_), path)) => Ok(path),
        Some((_, path)) => {
            info!("No logback file provided, using {}", path.display());
            Ok(path)
        }
        None => {
            let path = paths.bundled_logback_file();
            info!("No logback provided or found in PWD - using Maker's {}", path.display());
            Ok(path)
        }
    }
}

/// Project definition preloaded into the REPL.
pub fn project_definition_file(explicit: Option<&Path>, env: &Environment) -> LauncherResult<PathBuf> {
    let candidates = project_file_candidates(explicit, env);
    match first_found(&candidates)? {
        Some((Candidate::Explicit(_), path)) => Ok(path),
        Some((_, path)) => {
            info!("Using {} as project file", path.display());
            Ok(path)
        }
        None => Err(LauncherError::ProjectFileNotFound {
            dir: env.working_dir.clone(),
        }),
    }
}
