//! Service layer for SpendWise
//!
//! The tracker owns the in-memory state, validates raw user input, persists
//! through the storage layer and drives the view.

pub mod state;
pub mod tracker;

pub use state::TrackerState;
pub use tracker::Tracker;
