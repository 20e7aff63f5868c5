//! Command-line arguments using clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::core::config::{split_classpath, LaunchConfig, DEFAULT_JREBEL_JAR};
use crate::core::env::Environment;
use crate::core::error::LauncherResult;
use crate::core::paths::MakerPaths;
use crate::core::resolve;

const PASSTHROUGH_FLAGS: [&str; 2] = ["-J", "--JVM-ARGS"];

// `about` comes from the package description in Cargo.toml.
#[derive(Parser, Debug)]
#[command(name = "maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wipe installed jars and the resource cache, then download everything again
    #[arg(short, long)]
    pub refresh: bool,

    /// Project file to preload (defaults to the only *.scala file in the current directory)
    #[arg(short = 'p', long)]
    pub project_definition_file: Option<PathBuf>,

    /// Logback configuration for the REPL (defaults to ./logback.xml, then Maker's own)
    #[arg(short = 'l', long = "logback-config")]
    pub logback_config: Option<PathBuf>,

    /// Extra configuration directory placed ahead of the Maker binaries
    #[arg(short = 'c', long)]
    pub application_config_directory: Option<PathBuf>,

    /// Launcher log level: debug, info, warn, error, critical or 10..50
    #[arg(short = 'L', long, default_value = "INFO", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    /// Use Maker's locally compiled classes instead of the released binaries
    #[arg(short = 'z', long = "maker-developer-mode")]
    pub developer_mode: bool,

    /// Run the JVM with the JRebel agent
    #[arg(short = 'j', long)]
    pub use_jrebel: bool,

    /// JRebel agent jar used with --use-jrebel
    #[arg(long, default_value = DEFAULT_JREBEL_JAR)]
    pub jrebel_jar: PathBuf,

    /// Everything after this flag is passed to the JVM unchanged
    #[arg(short = 'J', long = "JVM-ARGS", value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    pub jvm_args: Vec<String>,

    /// Colon separated list of directories/jars appended to the classpath
    #[arg(short = 'e', long)]
    pub extra_classpath: Option<String>,

    /// Maker command to run (and then exit)
    #[arg(short = 'E', long)]
    pub execute_command: Option<String>,

    /// Maker installation holding config/ and logback-config/
    #[arg(long, env = "MAKER_ROOT")]
    pub maker_root: Option<PathBuf>,

    /// Install dependencies and print the launch command as JSON instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse `args`, treating everything after `-J`/`--JVM-ARGS` as raw JVM
    /// arguments even when they look like launcher flags.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let marker = args
            .iter()
            .skip(1)
            .position(|arg| PASSTHROUGH_FLAGS.iter().any(|flag| arg == flag))
            .map(|idx| idx + 1);

        let Some(marker) = marker else {
            return Cli::try_parse_from(args);
        };

        let mut cli = Cli::try_parse_from(&args[..marker])?;
        cli.jvm_args = args[marker + 1..]
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Ok(cli)
    }

    /// Resolve fallbacks and freeze the run configuration.
    pub fn into_config(self, env: &Environment, paths: &MakerPaths) -> LauncherResult<LaunchConfig> {
        let project_definition_file =
            resolve::project_definition_file(self.project_definition_file.as_deref(), env)?;
        let logback_file = resolve::logback_file(self.logback_config.as_deref(), env, paths)?;

        Ok(LaunchConfig {
            refresh: self.refresh,
            project_definition_file,
            logback_file,
            application_config_dir: self.application_config_directory,
            developer_mode: self.developer_mode,
            jrebel_agent: self.use_jrebel.then_some(self.jrebel_jar),
            jvm_args: self.jvm_args,
            extra_classpath: self
                .extra_classpath
                .as_deref()
                .map(split_classpath)
                .unwrap_or_default(),
            execute_command: self.execute_command,
        })
    }
}

/// Accepts level names as well as Python-style numeric levels.
fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    let level = match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" | "10" => LevelFilter::DEBUG,
        "info" | "20" => LevelFilter::INFO,
        "warn" | "warning" | "30" => LevelFilter::WARN,
        "error" | "critical" | "40" | "50" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        other => return Err(format!("unknown log level `{other}`")),
    };
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_args(["maker"]).unwrap();
        assert!(!cli.refresh);
        assert!(!cli.developer_mode);
        assert_eq!(cli.log_level, LevelFilter::INFO);
        assert_eq!(cli.jrebel_jar, PathBuf::from(DEFAULT_JREBEL_JAR));
        assert!(cli.jvm_args.is_empty());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_args([
            "maker", "-r", "-z", "-j", "-p", "P.scala", "-c", "conf", "-e", "a.jar:b", "-E",
            "test", "-L", "10",
        ])
        .unwrap();
        assert!(cli.refresh && cli.developer_mode && cli.use_jrebel);
        assert_eq!(cli.project_definition_file, Some(PathBuf::from("P.scala")));
        assert_eq!(cli.application_config_directory, Some(PathBuf::from("conf")));
        assert_eq!(cli.extra_classpath.as_deref(), Some("a.jar:b"));
        assert_eq!(cli.execute_command.as_deref(), Some("test"));
        assert_eq!(cli.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn jvm_args_take_the_remainder_verbatim() {
        let cli = Cli::parse_args(["maker", "-z", "-J", "-Xmx2g", "-r", "--dry-run"]).unwrap();
        assert!(cli.developer_mode);
        assert!(!cli.refresh);
        assert!(!cli.dry_run);
        assert_eq!(cli.jvm_args, vec!["-Xmx2g", "-r", "--dry-run"]);
    }

    #[test]
    fn log_level_names_and_numbers() {
        assert_eq!(parse_log_level("WARNING"), Ok(LevelFilter::WARN));
        assert_eq!(parse_log_level("critical"), Ok(LevelFilter::ERROR));
        assert_eq!(parse_log_level("50"), Ok(LevelFilter::ERROR));
        assert!(parse_log_level("loud").is_err());
    }
}
