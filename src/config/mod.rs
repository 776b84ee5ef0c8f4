//! Configuration module for SpendWise
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{OverspendPolicy, Settings, StorageBackend};
