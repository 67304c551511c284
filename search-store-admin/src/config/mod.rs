//! Configuration and dependency wiring for the admin tool.

mod dependencies;

pub use dependencies::Dependencies;
