//! SpendWise - periodic budget and expense tracker
//!
//! This library holds the core of the SpendWise tracker: a single budget
//! with a period label, the expenses recorded against it, and the summary
//! derived from both (remaining amount, remaining percentage, urgency band).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, budget, expense and summary types
//! - `storage`: Key-value stores and the typed repository over them
//! - `services`: The tracker that validates, mutates, persists and renders
//! - `view`: The view contract plus terminal and recording views
//! - `display`: Text formatting for the terminal view
//! - `audit`: Append-only audit log of mutations
//! - `config`: Paths and user settings
//! - `cli`: Command handlers for the `spendwise` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use spendwise::config::Settings;
//! use spendwise::models::Period;
//! use spendwise::services::Tracker;
//! use spendwise::storage::{BudgetRepository, MemoryStore};
//! use spendwise::view::RecordingView;
//!
//! let repo = BudgetRepository::new(MemoryStore::new());
//! let mut tracker = Tracker::open(repo, RecordingView::new(), &Settings::default());
//!
//! tracker.set_budget("1000", Period::Monthly).unwrap();
//! tracker.add_or_update_expense("Coffee", "5").unwrap();
//! assert_eq!(tracker.summary().percentage, 99.5);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod view;

pub use error::TrackerError;
