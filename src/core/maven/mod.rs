mod artifact;
pub mod manifest;

pub use artifact::ArtifactRef;
pub use manifest::{DependencyGroup, MAKER_SCALA_VERSION, MAKER_VERSION};

/// Repositories the Maker artifacts are published to.
pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2/";
pub const SONATYPE_RELEASES: &str = "https://oss.sonatype.org/content/repositories/releases/";
