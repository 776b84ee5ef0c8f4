//! Headless view that records what it was asked to show
//!
//! Useful for embedding the tracker without a UI and for driving it from
//! tests.

use super::notification::Notification;
use super::snapshot::Snapshot;
use super::View;

#[derive(Debug, Clone)]
pub struct RecordingView {
    pub renders: Vec<Snapshot>,
    pub notifications: Vec<Notification>,
    pub prompts: Vec<String>,
    /// Answer given to every confirmation prompt
    pub confirm_answer: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            renders: Vec::new(),
            notifications: Vec::new(),
            prompts: Vec::new(),
            confirm_answer: true,
        }
    }

    /// A view that declines every confirmation
    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::new()
        }
    }

    pub fn last_render(&self) -> Option<&Snapshot> {
        self.renders.last()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RecordingView {
    fn render(&mut self, snapshot: &Snapshot) {
        self.renders.push(snapshot.clone());
    }

    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answer
    }
}
