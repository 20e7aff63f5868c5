// ─── Dependency Manifest ───
// The three jar groups Maker needs on disk before the REPL can start.

use super::{ArtifactRef, MAVEN_CENTRAL, SONATYPE_RELEASES};

pub const MAKER_VERSION: &str = "0.15";
pub const MAKER_SCALA_VERSION: &str = "2.10.4";

/// Which install target a group of artifacts lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyGroup {
    ScalaLibraries,
    MakerDependencies,
    MakerBinaries,
}

impl DependencyGroup {
    /// Install order.
    pub const ALL: [DependencyGroup; 3] = [
        DependencyGroup::ScalaLibraries,
        DependencyGroup::MakerDependencies,
        DependencyGroup::MakerBinaries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DependencyGroup::ScalaLibraries => "scala libraries",
            DependencyGroup::MakerDependencies => "maker dependencies",
            DependencyGroup::MakerBinaries => "maker binaries",
        }
    }

    pub fn artifacts(self) -> Vec<ArtifactRef> {
        match self {
            DependencyGroup::ScalaLibraries => scala_libraries(),
            DependencyGroup::MakerDependencies => maker_dependencies(),
            DependencyGroup::MakerBinaries => maker_binaries(),
        }
    }
}

pub fn scala_libraries() -> Vec<ArtifactRef> {
    ["scala-library", "jline", "scala-compiler", "scala-reflect"]
        .into_iter()
        .map(|artifact| {
            ArtifactRef::new(MAVEN_CENTRAL, "org.scala-lang", artifact, MAKER_SCALA_VERSION)
        })
        .collect()
}

pub fn maker_binaries() -> Vec<ArtifactRef> {
    ["maker_2.10", "maker-test-reporter_2.10"]
        .into_iter()
        .map(|artifact| {
            ArtifactRef::new(SONATYPE_RELEASES, "com.github.cage433", artifact, MAKER_VERSION)
        })
        .collect()
}

// Direct dependencies of the Maker binaries, as published for this release.
const MAKER_DEPENDENCIES: &[(&str, &str, &str)] = &[
    ("org/scalatest", "scalatest_2.10", "2.2.0"),
    ("org/scala-lang", "scala-library", "2.10.4"),
    ("org/scala-lang", "scala-reflect", "2.10.4"),
    ("ch/qos/logback", "logback-classic", "1.0.6"),
    ("ch/qos/logback", "logback-core", "1.0.6"),
    ("org/slf4j", "slf4j-api", "1.6.5"),
    ("org/slf4j", "jcl-over-slf4j", "1.6.1"),
    ("commons-io", "commons-io", "2.1"),
    ("com/typesafe/zinc", "zinc", "0.3.7"),
    ("com/typesafe/sbt", "incremental-compiler", "0.13.7"),
    ("org/scala-lang", "scala-compiler", "2.10.4"),
    ("com/typesafe/sbt", "sbt-interface", "0.13.7"),
    ("org/apache/httpcomponents", "httpclient", "4.3"),
    ("org/apache/httpcomponents", "httpcore", "4.3"),
    ("commons-logging", "commons-logging", "1.1.3"),
    ("commons-codec", "commons-codec", "1.6"),
    ("org/apache/ivy", "ivy", "2.3.0-rc2"),
    ("org/scalaz", "scalaz-core_2.10", "7.0.1"),
    ("com/google/guava", "guava", "11.0.2"),
    ("com/google/code/findbugs", "jsr305", "1.3.9"),
    ("com/typesafe", "config", "1.2.1"),
    ("io/spray", "spray-json_2.10", "1.3.1"),
    ("javax/inject", "javax.inject", "1"),
    ("org/apache/commons", "commons-exec", "1.3"),
    ("org/apache/maven", "maven-aether-provider", "3.2.5"),
    ("org/apache/maven", "maven-model", "3.2.5"),
    ("org/apache/maven", "maven-model-builder", "3.2.5"),
    ("org/codehaus/plexus", "plexus-interpolation", "1.21"),
    ("org/apache/maven", "maven-repository-metadata", "3.2.5"),
    ("org/eclipse/aether", "aether-api", "1.0.0.v20140518"),
    ("org/eclipse/aether", "aether-spi", "1.0.0.v20140518"),
    ("org/eclipse/aether", "aether-util", "1.0.0.v20140518"),
    ("org.eclipse.aether", "aether-test-util", "1.0.0.v20140518"),
    ("org/codehaus/plexus", "plexus-component-annotations", "1.5.5"),
    ("org/codehaus/plexus", "plexus-utils", "3.0.20"),
    ("org/eclipse/aether", "aether-connector-basic", "1.0.0.v20140518"),
    ("org/eclipse/aether", "aether-impl", "1.0.0.v20140518"),
    ("org/eclipse/aether", "aether-transport-file", "1.0.0.v20140518"),
    ("org/eclipse/aether", "aether-transport-http", "1.0.0.v20140518"),
    ("org/mortbay/jetty", "jetty", "6.1.26"),
    ("org/mortbay/jetty", "jetty-util", "6.1.26"),
    ("org/mortbay/jetty", "servlet-api", "2.5-20081211"),
];

pub fn maker_dependencies() -> Vec<ArtifactRef> {
    MAKER_DEPENDENCIES
        .iter()
        .map(|(org, artifact, version)| ArtifactRef::new(MAVEN_CENTRAL, *org, *artifact, *version))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn groups_install_in_fixed_order() {
        assert_eq!(
            DependencyGroup::ALL,
            [
                DependencyGroup::ScalaLibraries,
                DependencyGroup::MakerDependencies,
                DependencyGroup::MakerBinaries,
            ]
        );
    }

    #[test]
    fn scala_libraries_track_the_scala_version() {
        let libs = scala_libraries();
        assert_eq!(libs.len(), 4);
        assert!(libs.iter().all(|a| a.version == MAKER_SCALA_VERSION));
        assert_eq!(libs[0].basename(), "scala-library-2.10.4.jar");
    }

    #[test]
    fn basenames_are_unique_within_each_group() {
        for group in DependencyGroup::ALL {
            let artifacts = group.artifacts();
            let names: HashSet<String> = artifacts.iter().map(|a| a.basename()).collect();
            assert_eq!(names.len(), artifacts.len(), "{}", group.label());
        }
    }

    #[test]
    fn maker_binaries_come_from_sonatype() {
        let url = maker_binaries()[0].url();
        assert_eq!(
            url,
            "https://oss.sonatype.org/content/repositories/releases/com/github/cage433/maker_2.10/0.15/maker_2.10-0.15.jar"
        );
    }
}
