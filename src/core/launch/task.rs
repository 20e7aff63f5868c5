// ─── Launch Task ───
// Runs the Scala REPL under the JVM and hands back its exit status.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use serde::Serialize;
use tracing::{debug, info};

use super::classpath::join_classpath;
use crate::core::config::LaunchConfig;
use crate::core::error::{LauncherError, LauncherResult};

pub const REPL_MAIN_CLASS: &str = "scala.tools.nsc.MainGenericRunner";

const FIXED_JVM_FLAGS: [&str; 3] = [
    "-Dsbt.log.format=false",
    "-Drebel.log=true",
    "-Dscala.usejavacp=true",
];
const EXEC_MODE_FLAG: &str = "-Dmaker.exec-mode=true";

/// Fully resolved command line for one REPL session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: PathBuf,
    pub jvm_args: Vec<String>,
    pub main_class: String,
    pub classpath: Vec<PathBuf>,
    pub repl_args: Vec<String>,
}

impl LaunchSpec {
    /// Arguments after the program, in the order the JVM receives them.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.jvm_args.clone();
        args.push(self.main_class.clone());
        args.push("-cp".into());
        args.push(join_classpath(&self.classpath));
        args.extend(self.repl_args.iter().cloned());
        args
    }
}

/// Assemble the command line.
///
/// The JVM itself only gets the Scala libraries (`-classpath`) so it can boot
/// the interpreter; the full classpath goes to the REPL through `-cp`.
pub fn build_launch_spec(
    config: &LaunchConfig,
    java: &Path,
    scala_libraries: &[PathBuf],
    classpath: Vec<PathBuf>,
) -> LaunchSpec {
    let mut jvm_args = vec!["-classpath".to_string(), join_classpath(scala_libraries)];
    jvm_args.extend(FIXED_JVM_FLAGS.iter().map(|flag| flag.to_string()));

    if let Some(agent) = &config.jrebel_agent {
        jvm_args.push(format!("-javaagent:{}", agent.display()));
    }
    if config.execute_command.is_some() {
        jvm_args.push(EXEC_MODE_FLAG.into());
    }
    jvm_args.extend(config.jvm_args.iter().cloned());
    jvm_args.push(format!(
        "-Dlogback.configurationFile={}",
        config.logback_file.display()
    ));

    let mut repl_args = vec![
        "-Yrepl-sync".to_string(),
        "-nc".to_string(),
        "-i".to_string(),
        config.project_definition_file.to_string_lossy().into_owned(),
    ];
    if let Some(tokens) = config.execute_tokens() {
        repl_args.push("-e".into());
        repl_args.extend(tokens);
    }

    LaunchSpec {
        program: java.to_path_buf(),
        jvm_args,
        main_class: REPL_MAIN_CLASS.into(),
        classpath,
        repl_args,
    }
}

/// Run the REPL with inherited stdio and wait for it to exit.
pub async fn launch(spec: &LaunchSpec) -> LauncherResult<i32> {
    let args = spec.args();
    let mut cmd = tokio::process::Command::new(&spec.program);
    cmd.args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!("Launching repl");
    debug!("Command (copy/paste): {}", format_command_for_logs(&spec.program, &args));

    let status = cmd
        .status()
        .await
        .map_err(|e| LauncherError::JavaExecution(format!("{}: {}", spec.program.display(), e)))?;

    let code = exit_code(status);
    debug!("REPL exited with {}", code);
    Ok(code)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

fn format_command_for_logs(program: &Path, args: &[String]) -> String {
    std::iter::once(program.to_string_lossy().into_owned())
        .chain(args.iter().cloned())
        .map(|part| {
            if part.contains(' ') {
                format!("\"{}\"", part)
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::launch::classpath::get_classpath_separator;

    fn config() -> LaunchConfig {
        LaunchConfig {
            refresh: false,
            project_definition_file: "Project.scala".into(),
            logback_file: "/work/logback.xml".into(),
            application_config_dir: None,
            developer_mode: false,
            jrebel_agent: None,
            jvm_args: vec![],
            extra_classpath: vec![],
            execute_command: None,
        }
    }

    fn spec_for(config: &LaunchConfig) -> LaunchSpec {
        build_launch_spec(
            config,
            Path::new("/jdk/bin/java"),
            &[PathBuf::from("/libs/scala-library.jar"), PathBuf::from("/libs/jline.jar")],
            vec![PathBuf::from("/libs/scala-library.jar"), PathBuf::from("/deps/guava.jar")],
        )
    }

    #[test]
    fn interactive_command_line() {
        let spec = spec_for(&config());
        let sep = get_classpath_separator();

        assert_eq!(spec.program, PathBuf::from("/jdk/bin/java"));
        assert_eq!(
            spec.args(),
            vec![
                "-classpath".to_string(),
                format!("/libs/scala-library.jar{sep}/libs/jline.jar"),
                "-Dsbt.log.format=false".into(),
                "-Drebel.log=true".into(),
                "-Dscala.usejavacp=true".into(),
                "-Dlogback.configurationFile=/work/logback.xml".into(),
                "scala.tools.nsc.MainGenericRunner".into(),
                "-cp".into(),
                format!("/libs/scala-library.jar{sep}/deps/guava.jar"),
                "-Yrepl-sync".into(),
                "-nc".into(),
                "-i".into(),
                "Project.scala".into(),
            ]
        );
    }

    #[test]
    fn optional_flags_sit_before_passthrough_args() {
        let mut config = config();
        config.jrebel_agent = Some("/usr/local/jrebel/jrebel.jar".into());
        config.execute_command = Some("test  maker".into());
        config.jvm_args = vec!["-Xmx2g".into(), "-Dfoo=bar".into()];

        let spec = spec_for(&config);

        assert_eq!(
            &spec.jvm_args[5..],
            &[
                "-javaagent:/usr/local/jrebel/jrebel.jar".to_string(),
                "-Dmaker.exec-mode=true".into(),
                "-Xmx2g".into(),
                "-Dfoo=bar".into(),
                "-Dlogback.configurationFile=/work/logback.xml".into(),
            ]
        );
        assert_eq!(
            spec.repl_args,
            vec!["-Yrepl-sync", "-nc", "-i", "Project.scala", "-e", "test", "maker"]
        );
    }

    #[test]
    fn log_format_quotes_arguments_with_spaces() {
        let line = format_command_for_logs(
            Path::new("/jdk/bin/java"),
            &["-Dx=a b".to_string(), "-nc".to_string()],
        );
        assert_eq!(line, "/jdk/bin/java \"-Dx=a b\" -nc");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn launch_propagates_the_child_exit_status() {
        let spec = LaunchSpec {
            program: PathBuf::from("/bin/sh"),
            jvm_args: vec!["-c".into(), "exit 3".into()],
            main_class: "sh".into(),
            classpath: vec![],
            repl_args: vec![],
        };
        assert_eq!(launch(&spec).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn unknown_program_is_a_java_execution_error() {
        let spec = LaunchSpec {
            program: PathBuf::from("/definitely/not/a/java"),
            jvm_args: vec![],
            main_class: REPL_MAIN_CLASS.into(),
            classpath: vec![],
            repl_args: vec![],
        };
        assert!(matches!(
            launch(&spec).await,
            Err(LauncherError::JavaExecution(_))
        ));
    }
}
