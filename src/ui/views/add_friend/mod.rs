//! Add Friend View - the add-friend panel under the friend list

mod input;
mod render;

/// Focusable fields of the add-friend form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    fn next(self) -> Self {
        match self {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        }
    }
}

/// Actions that AddFriendView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFriendAction {
    /// No action needed
    None,
    /// Add a friend with the entered values
    Submit { name: String, image: String },
    /// Close the panel
    Close,
}

/// Add-friend form state
///
/// Created when the panel opens and dropped when it closes, so every
/// opening starts from a blank name and the default avatar URL.
#[derive(Debug, Clone)]
pub struct AddFriendView {
    pub name: String,
    pub image: String,
    pub field: AddFriendField,
}

impl AddFriendView {
    /// Rows needed to render the form (borders included)
    pub const HEIGHT: u16 = 4;

    pub fn new(default_image: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            image: default_image.into(),
            field: AddFriendField::Name,
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.field {
            AddFriendField::Name => &mut self.name,
            AddFriendField::Image => &mut self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::keys;

    fn press_key(view: &mut AddFriendView, key: KeyCode) -> AddFriendAction {
        view.handle_key(KeyEvent::from(key))
    }

    fn type_text(view: &mut AddFriendView, text: &str) {
        for c in text.chars() {
            press_key(view, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let view = AddFriendView::new("https://i.pravatar.cc/48");
        assert_eq!(view.name, "");
        assert_eq!(view.image, "https://i.pravatar.cc/48");
        assert_eq!(view.field, AddFriendField::Name);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut view = AddFriendView::new("");
        type_text(&mut view, "Dana");
        assert_eq!(view.name, "Dana");

        press_key(&mut view, keys::NEXT_FIELD);
        type_text(&mut view, "http://x");
        assert_eq!(view.image, "http://x");
        assert_eq!(view.name, "Dana");
    }

    #[test]
    fn test_letters_used_as_navigation_elsewhere_are_text_here() {
        let mut view = AddFriendView::new("");
        type_text(&mut view, "jkgGqa? ");
        assert_eq!(view.name, "jkgGqa? ");
    }

    #[test]
    fn test_backspace() {
        let mut view = AddFriendView::new("");
        type_text(&mut view, "Danaa");
        press_key(&mut view, KeyCode::Backspace);
        assert_eq!(view.name, "Dana");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut view = AddFriendView::new("");
        press_key(&mut view, keys::PREV_FIELD);
        assert_eq!(view.field, AddFriendField::Image);
        press_key(&mut view, keys::MOVE_DOWN_ARROW);
        assert_eq!(view.field, AddFriendField::Name);
    }

    #[test]
    fn test_submit_returns_values() {
        let mut view = AddFriendView::new("https://i.pravatar.cc/48");
        type_text(&mut view, "Dana");
        assert_eq!(
            press_key(&mut view, keys::SUBMIT),
            AddFriendAction::Submit {
                name: "Dana".to_string(),
                image: "https://i.pravatar.cc/48".to_string(),
            }
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut view = AddFriendView::new("");
        assert_eq!(press_key(&mut view, keys::ESC), AddFriendAction::Close);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut view = AddFriendView::new("");
        view.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(view.name, "");
    }
}
