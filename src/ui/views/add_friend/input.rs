//! Input handling for AddFriendView

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keys;

use super::{AddFriendAction, AddFriendView};

impl AddFriendView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> AddFriendAction {
        match key.code {
            k if k == keys::ESC => AddFriendAction::Close,
            k if k == keys::SUBMIT => AddFriendAction::Submit {
                name: self.name.clone(),
                image: self.image.clone(),
            },
            // Two fields: next and previous are the same move
            k if keys::is_next_field(k) || keys::is_prev_field(k) => {
                self.field = self.field.next();
                AddFriendAction::None
            }
            KeyCode::Backspace => {
                self.focused_buffer().pop();
                AddFriendAction::None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.focused_buffer().push(c);
                AddFriendAction::None
            }
            _ => AddFriendAction::None,
        }
    }
}
