//! Configuration module for the expense manager
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::Settings;
