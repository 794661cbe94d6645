//! Friends View - the list of friends and their balances
//!
//! The main view of splitbill. The cursor is a pure UI concern; the split
//! target lives in the [`Ledger`](crate::ledger::Ledger).

mod input;
mod render;

use crate::model::FriendId;

/// Actions that FriendsView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendsAction {
    /// No action needed
    None,
    /// Toggle the split form for this friend
    Select(FriendId),
    /// Open or close the add-friend panel
    ToggleAddFriend,
}

/// Friends View state
#[derive(Debug, Default)]
pub struct FriendsView {
    /// Cursor position in the friend list
    pub cursor: usize,
}

impl FriendsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// Keep the cursor inside a list of `len` friends
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Scroll offset that keeps the cursor within `visible` rows
    pub(crate) fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        self.cursor.saturating_sub(visible - 1)
    }
}
