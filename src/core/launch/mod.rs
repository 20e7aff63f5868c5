pub mod classpath;
pub mod task;

pub use classpath::{build_classpath, installed_jars, join_classpath};
pub use task::{build_launch_spec, launch, LaunchSpec};
