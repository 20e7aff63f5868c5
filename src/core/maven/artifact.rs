use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One downloadable jar in a Maven-layout repository.
///
/// The organization may be written dot-separated (`org.scala-lang`) or
/// slash-separated (`org/scalatest`); both map onto the same layout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    pub repository: String,
    pub organization: String,
    pub artifact: String,
    pub version: String,
}

impl ArtifactRef {
    pub fn new(
        repository: impl Into<String>,
        organization: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            organization: organization.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// `artifact-version.jar`
    pub fn basename(&self) -> String {
        format!("{}-{}.jar", self.artifact, self.version)
    }

    fn organization_segments(&self) -> impl Iterator<Item = &str> {
        self.organization
            .split(|c: char| c == '.' || c == '/')
            .filter(|segment| !segment.is_empty())
    }

    /// Path relative to a repository root or the resource cache:
    /// `<org segments>/<artifact>/<version>/<basename>`
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.organization_segments().collect();
        path.push(&self.artifact);
        path.push(&self.version);
        path.push(self.basename());
        path
    }

    /// Same as [`relative_path`](Self::relative_path) but always `/`-separated.
    pub fn relative_url(&self) -> String {
        let mut parts: Vec<&str> = self.organization_segments().collect();
        parts.push(&self.artifact);
        parts.push(&self.version);
        let mut url = parts.join("/");
        url.push('/');
        url.push_str(&self.basename());
        url
    }

    /// Full download URL under this artifact's repository.
    pub fn url(&self) -> String {
        let base = self.repository.trim_end_matches('/');
        format!("{}/{}", base, self.relative_url())
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.organization, self.artifact, self.version)
    }
}
