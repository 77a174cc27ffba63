//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in xword-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

/// Warning shown before a reset wipes saved progress
pub const RESET_WARNING: &str = "Are you sure you want to delete any saved progress on this puzzle?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// `(label, message)` pairs; the first option is the confirming one
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Confirmation shown before resetting the active puzzle
    pub fn reset_confirmation(puzzle_label: &str) -> Self {
        Self::new(
            format!("Reset {}?", puzzle_label),
            RESET_WARNING,
            vec![
                ("Reset", Message::ConfirmReset),
                ("Cancel", Message::CancelReset),
            ],
        )
    }

    /// Message sent when the user accepts
    pub fn confirm_message(&self) -> Option<&Message> {
        self.options.first().map(|(_, msg)| msg)
    }

    /// Message sent when the user declines
    pub fn cancel_message(&self) -> Option<&Message> {
        self.options.get(1).map(|(_, msg)| msg)
    }
}
