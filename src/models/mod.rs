//! Core data models for swiftlint-annotate

pub mod platform;
pub mod results;
pub mod tools;

pub use platform::*;
pub use results::*;
pub use tools::*;
