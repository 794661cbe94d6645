//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ledger::Mode;
use crate::ui::views::{FriendsAction, SplitField};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_force_quit(&key) {
            self.quit();
            return;
        }

        if self.current_view == View::Help {
            if matches!(key.code, keys::QUIT | keys::ESC | keys::HELP) {
                self.go_to_view(View::Ledger);
            }
            return;
        }

        match self.ledger.mode() {
            // Letters are text here, so the list is reached with Ctrl
            Mode::AddingFriend => {
                if keys::is_list_move_from_form(&key) {
                    self.friends_view.handle_key(key, self.ledger.friends());
                } else if keys::is_split_from_form(&key) {
                    self.select_friend_at_cursor();
                } else if let Some(view) = self.add_friend_view.as_mut() {
                    let action = view.handle_key(key);
                    self.handle_add_friend_action(action);
                }
            }
            Mode::Splitting(_) => {
                let payer_focused = self
                    .split_view
                    .as_ref()
                    .is_some_and(|view| view.field == SplitField::Payer);
                if keys::is_list_key_in_split(key.code)
                    || (key.code == keys::SELECT_ALT && !payer_focused)
                {
                    let action = self.friends_view.handle_key(key, self.ledger.friends());
                    self.handle_friends_action(action);
                } else if let Some(view) = self.split_view.as_mut() {
                    let action = view.handle_key(key);
                    self.handle_split_action(action);
                }
            }
            Mode::Idle => {
                if !self.handle_global_key(key) {
                    let action = self.friends_view.handle_key(key, self.ledger.friends());
                    self.handle_friends_action(action);
                }
            }
        }
    }

    fn select_friend_at_cursor(&mut self) {
        let Some(id) = self
            .ledger
            .friends()
            .get(self.friends_view.cursor)
            .map(|friend| friend.id.clone())
        else {
            return;
        };
        self.handle_friends_action(FriendsAction::Select(id));
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.quit();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            _ => false,
        }
    }
}
