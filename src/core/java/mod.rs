pub mod runtime;

pub use runtime::java_binary;
