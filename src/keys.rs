//! Keybinding definitions for splitbill
//!
//! All keybindings are defined here so views and help text stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::ledger::Mode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+s (split with the friend at the cursor from the
/// add-friend form, where plain letters are text)
pub fn is_split_from_form(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+↑/↓ (move the friend list cursor from the add-friend form)
pub fn is_list_move_from_form(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Down)
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (friend list) or leave help
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Close form / leave help
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Friend list keys
// =============================================================================

/// Select friend for splitting (toggle)
pub const SELECT: KeyCode = KeyCode::Enter;

/// Select friend for splitting (toggle, alternative)
pub const SELECT_ALT: KeyCode = KeyCode::Char(' ');

/// Open/close the add-friend panel
pub const ADD_FRIEND: KeyCode = KeyCode::Char('a');

// =============================================================================
// Form keys
// =============================================================================

/// Submit form
pub const SUBMIT: KeyCode = KeyCode::Enter;

/// Next field
pub const NEXT_FIELD: KeyCode = KeyCode::Tab;

/// Previous field
pub const PREV_FIELD: KeyCode = KeyCode::BackTab;

/// Check if key moves to the next form field (Tab or ↓)
pub fn is_next_field(code: KeyCode) -> bool {
    matches!(code, NEXT_FIELD | MOVE_DOWN_ARROW)
}

/// Check if key moves to the previous form field (Shift+Tab or ↑)
pub fn is_prev_field(code: KeyCode) -> bool {
    matches!(code, PREV_FIELD | MOVE_UP_ARROW)
}

/// Friend list keys that still work while the split form is open
///
/// The split form only takes digits, `.` and non-letter keys, so the list's
/// letter keys pass through. Space also selects unless the payer is focused.
pub fn is_list_key_in_split(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_DOWN | GO_TOP | GO_BOTTOM | ADD_FRIEND)
}

/// Check if key toggles the payer (Space, ← or →)
pub fn is_toggle_payer(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right)
}

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit from anywhere",
    },
];

/// Friend list key bindings for help display
pub const FRIEND_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Split a bill with friend (again to close)",
    },
    KeyBindEntry {
        key: "a",
        description: "Add friend (again to close)",
    },
];

/// Form key bindings for help display (add friend, split bill)
pub const FORM_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Tab/↓",
        description: "Next field",
    },
    KeyBindEntry {
        key: "S-Tab/↑",
        description: "Previous field",
    },
    KeyBindEntry {
        key: "Space/←/→",
        description: "Switch who pays the bill",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Submit",
    },
    KeyBindEntry {
        key: "j/k Space",
        description: "Split with another friend (split form)",
    },
    KeyBindEntry {
        key: "a",
        description: "Add friend instead (split form)",
    },
    KeyBindEntry {
        key: "C-↑/C-↓ C-s",
        description: "Pick a friend and split (add-friend form)",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Close form",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A single key hint in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Hints while browsing the friend list
pub const IDLE_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Split bill",
        color: Color::Green,
    },
    KeyHint {
        key: "a",
        label: "Add friend",
        color: Color::Yellow,
    },
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

/// Hints while the add-friend panel is open
pub const ADD_FRIEND_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Tab",
        label: "Next field",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Add",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Close",
        color: Color::Red,
    },
    KeyHint {
        key: "C-s",
        label: "Split instead",
        color: Color::Magenta,
    },
];

/// Hints while the split-bill form is open
pub const SPLIT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Tab",
        label: "Next field",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Space",
        label: "Who pays",
        color: Color::Magenta,
    },
    KeyHint {
        key: "Enter",
        label: "Split bill",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Close",
        color: Color::Red,
    },
    KeyHint {
        key: "j/k Space",
        label: "Other friend",
        color: Color::Yellow,
    },
    KeyHint {
        key: "a",
        label: "Add friend",
        color: Color::Yellow,
    },
];

/// Hints for the current ledger mode
pub fn current_hints(mode: &Mode) -> &'static [KeyHint] {
    match mode {
        Mode::Idle => IDLE_HINTS,
        Mode::AddingFriend => ADD_FRIEND_HINTS,
        Mode::Splitting(_) => SPLIT_HINTS,
    }
}
