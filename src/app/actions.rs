//! Ledger updates requested by views
//!
//! Rejected operations leave the ledger and the open form untouched; they
//! are only logged.

use super::state::App;
use crate::model::Notification;
use crate::ui::views::{AddFriendAction, FriendsAction, SplitAction};

impl App {
    pub(crate) fn handle_friends_action(&mut self, action: FriendsAction) {
        match action {
            FriendsAction::None => {}
            FriendsAction::Select(id) => {
                if let Err(e) = self.ledger.select_friend_for_split(&id) {
                    tracing::debug!(error = %e, "selection rejected");
                }
                self.sync_forms();
            }
            FriendsAction::ToggleAddFriend => {
                self.ledger.toggle_add_friend_panel();
                self.sync_forms();
            }
        }
    }

    pub(crate) fn handle_add_friend_action(&mut self, action: AddFriendAction) {
        match action {
            AddFriendAction::None => {}
            AddFriendAction::Submit { name, image } => {
                match self.ledger.add_friend(&name, &image) {
                    Ok(id) => {
                        self.notification = self
                            .ledger
                            .friend(&id)
                            .map(|friend| Notification::friend_added(&friend.name));
                        // Put the cursor on the new friend
                        self.friends_view
                            .move_to_bottom(self.ledger.friends().len());
                    }
                    Err(e) => tracing::debug!(error = %e, "add friend rejected"),
                }
                self.sync_forms();
            }
            AddFriendAction::Close => {
                self.ledger.toggle_add_friend_panel();
                self.sync_forms();
            }
        }
    }

    pub(crate) fn handle_split_action(&mut self, action: SplitAction) {
        let Some(friend_id) = self.split_view.as_ref().map(|v| v.friend_id.clone()) else {
            return;
        };

        match action {
            SplitAction::None => {}
            SplitAction::Submit(delta) => {
                match self.ledger.apply_split(delta) {
                    Ok(()) => {
                        self.notification = self
                            .ledger
                            .friend(&friend_id)
                            .map(|friend| Notification::split_applied(friend, delta));
                    }
                    Err(e) => tracing::debug!(error = %e, "split rejected"),
                }
                self.sync_forms();
            }
            SplitAction::Close => {
                // Selecting the current target again deselects it
                if let Err(e) = self.ledger.select_friend_for_split(&friend_id) {
                    tracing::debug!(error = %e, "deselect rejected");
                }
                self.sync_forms();
            }
        }
    }
}
