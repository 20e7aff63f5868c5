// ─── Maker Launcher Core ───
//
// Architecture:
//   core/
//     maven/      — ArtifactRef + the built-in dependency manifest
//     cache/      — Resource cache and atomic file placement
//     downloader/ — HTTP fetcher + dependency installer
//     launch/     — Classpath builder + REPL process
//     java/       — Java executable lookup
//     env, paths  — Process environment and the ~/.maker layout
//     resolve     — Fallback chains for logback and project files
//     config      — Immutable per-run configuration

pub mod cache;
pub mod config;
pub mod downloader;
pub mod env;
pub mod error;
pub mod http;
pub mod java;
pub mod launch;
pub mod maven;
pub mod paths;
pub mod resolve;
