mod client;
mod installer;

pub use client::{Fetcher, HttpFetcher};
pub use installer::{install_all, DependencyInstaller, InstallReport};
