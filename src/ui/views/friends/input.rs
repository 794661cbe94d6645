//! Input handling for FriendsView

use crossterm::event::KeyEvent;

use crate::keys;
use crate::model::Friend;

use super::{FriendsAction, FriendsView};

impl FriendsView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent, friends: &[Friend]) -> FriendsAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down(friends.len());
                FriendsAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                FriendsAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                FriendsAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom(friends.len());
                FriendsAction::None
            }
            k if k == keys::SELECT || k == keys::SELECT_ALT => friends
                .get(self.cursor)
                .map(|friend| FriendsAction::Select(friend.id.clone()))
                .unwrap_or(FriendsAction::None),
            k if k == keys::ADD_FRIEND => FriendsAction::ToggleAddFriend,
            _ => FriendsAction::None,
        }
    }
}
