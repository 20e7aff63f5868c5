use std::path::PathBuf;

use tracing::warn;

use crate::core::env::Environment;

fn java_exe() -> &'static str {
    if cfg!(target_os = "windows") {
        "java.exe"
    } else {
        "java"
    }
}

/// `$JAVA_HOME/bin/java`, or plain `java` resolved through `PATH`.
pub fn java_binary(env: &Environment) -> PathBuf {
    match &env.java_home {
        Some(java_home) => java_home.join("bin").join(java_exe()),
        None => {
            warn!("JAVA_HOME is not set, relying on `{}` from PATH", java_exe());
            PathBuf::from(java_exe())
        }
    }
}
