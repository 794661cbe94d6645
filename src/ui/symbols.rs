//! UI symbols (markers, labels)

/// Suffix appended to amounts
pub const CURRENCY: &str = "€";

/// Friend list markers
pub mod markers {
    /// Friend currently selected for a split (▶)
    pub const SPLIT_TARGET: char = '▶';
    /// Cursor row marker (›)
    pub const CURSOR: char = '›';
}

/// Form field markers
pub mod fields {
    /// Text cursor shown at the end of the focused field
    pub const CARET: char = '▏';
    /// Payer option chosen (●)
    pub const CHOSEN: char = '●';
    /// Payer option not chosen (○)
    pub const NOT_CHOSEN: char = '○';
}

/// Empty state text
pub mod empty {
    pub const NO_FRIENDS: &str = "No friends yet.";
    pub const NO_FRIENDS_HINT: &str = "Press 'a' to add one";
    pub const NO_SELECTION: &str = "Select a friend to split a bill.";
    pub const NO_SELECTION_HINT: &str = "Move with j/k, press Enter";
}
