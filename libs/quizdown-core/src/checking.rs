//! Answer checking for assembled multiple-choice records.
//!
//! Read-only consumer of the assembler's output: an interactive front end
//! feeds the selected option label back and gets a verdict plus the label to
//! reveal. Free-response questions have no checkable state; their answer is
//! simply shown.

use crate::types::{option_label, Choice};
use serde::{Deserialize, Serialize};

/// Result of checking a selected option against a question record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResult {
    /// Whether the selected option is the one flagged correct.
    pub is_correct: bool,
    /// Label a UI reveals after a wrong answer.
    pub correct_label: char,
    /// Whether the selected label addressed an option at all.
    pub in_range: bool,
}

/// Check a selected option label against a multiple-choice record.
pub fn check_choice(options: &[Choice], correct_label: char, selected: char) -> ChoiceResult {
    let in_range = (0..options.len()).any(|index| option_label(index) == selected);
    ChoiceResult {
        is_correct: in_range && selected == correct_label,
        correct_label,
        in_range,
    }
}
