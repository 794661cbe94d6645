//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the friend list
pub mod friend_list {
    use super::*;

    /// Friend owes the user
    pub const OWES_YOU: Color = Color::Green;
    /// User owes the friend
    pub const YOU_OWE: Color = Color::Red;
    /// Settled
    pub const EVEN: Color = Color::DarkGray;
    /// Split target marker and name
    pub const SPLIT_TARGET: Color = Color::Yellow;
    /// Cursor row background
    pub const CURSOR_BG: Color = Color::DarkGray;
    /// Title
    pub const TITLE: Color = Color::Cyan;
}

/// Colors for the add-friend and split-bill forms
pub mod form {
    use super::*;

    /// Title / border of an open form
    pub const BORDER: Color = Color::Yellow;
    /// Label of the focused field
    pub const FOCUSED_LABEL: Color = Color::Cyan;
    /// Label of other fields
    pub const LABEL: Color = Color::Gray;
    /// Read-only values
    pub const READ_ONLY: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_colors_distinct() {
        assert_ne!(friend_list::OWES_YOU, friend_list::YOU_OWE);
        assert_ne!(friend_list::OWES_YOU, friend_list::EVEN);
    }
}
