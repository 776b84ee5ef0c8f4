//! View contract for SpendWise
//!
//! The tracker never draws anything itself. After each operation it calls
//! into a `View`: `render` with a fresh snapshot, `notify` for transient
//! banners, and `confirm` before destructive actions.

pub mod notification;
pub mod recording;
pub mod snapshot;
pub mod terminal;

pub use notification::{Notification, NotificationType, DEFAULT_NOTIFICATION_SECS};
pub use recording::RecordingView;
pub use snapshot::{BudgetForm, ExpenseForm, FormMode, Screen, Snapshot};
pub use terminal::{RenderMode, TerminalView};

/// Presentation collaborator driven by the tracker
pub trait View {
    /// Redraw from the given state
    fn render(&mut self, snapshot: &Snapshot);

    /// Show a transient banner
    fn notify(&mut self, notification: &Notification);

    /// Ask the user to confirm a destructive action
    fn confirm(&mut self, prompt: &str) -> bool;
}
