//! swiftlint-annotate - SwiftLint findings as inline CI annotations
//!
//! Fetches the SwiftLint release for the runner platform (reusing the tool
//! cache for pinned versions), runs it with the JSON reporter and turns every
//! finding into a GitHub Actions warning or error annotation.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod output;
pub mod runner;
pub mod tools;
pub mod utils;
