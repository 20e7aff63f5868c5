use std::path::PathBuf;

/// Default location of the JRebel agent jar.
pub const DEFAULT_JREBEL_JAR: &str = "/usr/local/jrebel/jrebel.jar";

/// Everything one run needs, resolved up front and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub refresh: bool,
    pub project_definition_file: PathBuf,
    pub logback_file: PathBuf,
    pub application_config_dir: Option<PathBuf>,
    pub developer_mode: bool,
    /// `Some(agent jar)` when class reloading through JRebel is requested.
    pub jrebel_agent: Option<PathBuf>,
    pub jvm_args: Vec<String>,
    pub extra_classpath: Vec<PathBuf>,
    pub execute_command: Option<String>,
}

impl LaunchConfig {
    /// Tokens passed after `-e` when running a one-shot command.
    pub fn execute_tokens(&self) -> Option<Vec<String>> {
        self.execute_command
            .as_deref()
            .map(|command| command.split_whitespace().map(str::to_string).collect())
    }
}

/// Split a separator-delimited path list; empty segments are dropped.
pub fn split_classpath(raw: &str) -> Vec<PathBuf> {
    std::env::split_paths(raw)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}
