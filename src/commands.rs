// ─── Launcher Flow ───
// Configure → prepare directories → install groups → classpath → launch.

use tracing::info;

use crate::cli::Cli;
use crate::core::cache::CacheStore;
use crate::core::config::LaunchConfig;
use crate::core::downloader::{install_all, DependencyInstaller, Fetcher, HttpFetcher, InstallReport};
use crate::core::env::Environment;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::java;
use crate::core::launch::{self, LaunchSpec};
use crate::core::maven::DependencyGroup;
use crate::core::paths::MakerPaths;

/// What to do once everything is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Launch,
    /// Print the launch command as JSON and exit 0.
    DryRun,
}

/// Entry point used by the binary. Returns the exit status for the process.
pub async fn run(cli: Cli) -> LauncherResult<i32> {
    let env = Environment::from_process(cli.maker_root.clone())?;
    let paths = MakerPaths::new(&env);
    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Launch
    };
    let config = cli.into_config(&env, &paths)?;
    let fetcher = HttpFetcher::new()?;

    run_with(&config, mode, &env, &fetcher).await
}

/// Same as [`run`] with every collaborator supplied by the caller.
pub async fn run_with(
    config: &LaunchConfig,
    mode: RunMode,
    env: &Environment,
    fetcher: &dyn Fetcher,
) -> LauncherResult<i32> {
    let paths = MakerPaths::new(env);
    paths.prepare(config.refresh)?;

    info!("Checking for missing resources");
    install_dependencies(&paths, fetcher).await?;

    let spec = prepare_launch(config, env, &paths)?;
    match mode {
        RunMode::DryRun => {
            println!("{}", serde_json::to_string_pretty(&spec)?);
            Ok(0)
        }
        RunMode::Launch => {
            let project_state = env.working_dir.join(".maker");
            std::fs::create_dir_all(&project_state)
                .map_err(|e| LauncherError::io(&project_state, e))?;
            launch::launch(&spec).await
        }
    }
}

/// Install the three dependency groups in order, sharing one resource cache.
pub async fn install_dependencies(
    paths: &MakerPaths,
    fetcher: &dyn Fetcher,
) -> LauncherResult<InstallReport> {
    let cache = CacheStore::new(paths.resource_cache());
    let installer = DependencyInstaller::new(&cache, fetcher);
    let groups = DependencyGroup::ALL
        .into_iter()
        .map(|group| (group.label(), group.artifacts(), paths.install_dir(group)));

    let report = install_all(&installer, groups).await?;
    info!("{} artifacts ready", report.total());
    Ok(report)
}

fn prepare_launch(
    config: &LaunchConfig,
    env: &Environment,
    paths: &MakerPaths,
) -> LauncherResult<LaunchSpec> {
    let scala_libraries = launch::installed_jars(paths.scala_libs_dir())?;
    let classpath = launch::build_classpath(config, paths)?;
    Ok(launch::build_launch_spec(
        config,
        &java::java_binary(env),
        &scala_libraries,
        classpath,
    ))
}
