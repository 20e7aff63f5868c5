//! Integration tests for the `maker` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use maker_launcher::core::env::Environment;
use maker_launcher::core::maven::DependencyGroup;
use maker_launcher::core::paths::MakerPaths;
use predicates::prelude::*;
use tempfile::TempDir;

fn maker(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("maker").unwrap();
    cmd.current_dir(root.join("project"))
        .env("HOME", root.join("home"))
        .env("MAKER_ROOT", root.join("maker"))
        .env("JAVA_HOME", "/jdk")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("project")).unwrap();
    temp
}

/// Lay down every jar so no download is needed.
fn preinstall(root: &Path) {
    let env = Environment {
        home_dir: root.join("home"),
        java_home: None,
        maker_root: root.join("maker"),
        working_dir: root.join("project"),
    };
    let paths = MakerPaths::new(&env);
    paths.prepare(false).unwrap();
    for group in DependencyGroup::ALL {
        for artifact in group.artifacts() {
            fs::write(paths.install_dir(group).join(artifact.basename()), b"jar").unwrap();
        }
    }
}

#[test]
fn help_displays() {
    let temp = workspace();
    maker(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bootstrap launcher for the Maker build tool",
        ))
        .stdout(predicate::str::contains("--JVM-ARGS"));
}

#[test]
fn missing_project_file_exits_with_one() {
    let temp = workspace();
    maker(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a project file"));
    assert!(!temp.path().join("home/.maker").exists());
}

#[test]
fn ambiguous_project_file_exits_with_one() {
    let temp = workspace();
    fs::write(temp.path().join("project/A.scala"), "").unwrap();
    fs::write(temp.path().join("project/B.scala"), "").unwrap();

    maker(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("single project file"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let temp = workspace();
    maker(temp.path())
        .args(["--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}

#[test]
fn dry_run_prints_the_launch_command() {
    let temp = workspace();
    preinstall(temp.path());
    fs::write(temp.path().join("project/Project.scala"), "").unwrap();

    maker(temp.path())
        .args(["--dry-run", "-E", "test  all", "-J", "-Xmx1g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"program\": \"/jdk/bin/java\""))
        .stdout(predicate::str::contains("scala.tools.nsc.MainGenericRunner"))
        .stdout(predicate::str::contains("-Dmaker.exec-mode=true"))
        .stdout(predicate::str::contains("-Xmx1g"))
        .stdout(predicate::str::contains("Project.scala"))
        .stdout(predicate::str::contains("maker_2.10-0.15.jar"));
}
