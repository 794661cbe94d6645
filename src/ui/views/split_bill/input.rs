//! Input handling for SplitBillView

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keys;

use super::{SplitAction, SplitBillView, SplitField};

impl SplitBillView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> SplitAction {
        match key.code {
            k if k == keys::ESC => SplitAction::Close,
            k if k == keys::SUBMIT => match self.split.balance_delta() {
                Ok(delta) => SplitAction::Submit(delta),
                Err(e) => {
                    tracing::debug!(error = %e, "split not submitted");
                    SplitAction::None
                }
            },
            k if keys::is_next_field(k) => {
                self.field = self.field.next();
                SplitAction::None
            }
            k if keys::is_prev_field(k) => {
                self.field = self.field.prev();
                SplitAction::None
            }
            k if self.field == SplitField::Payer && keys::is_toggle_payer(k) => {
                self.split.toggle_payer();
                SplitAction::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|text| {
                    text.pop();
                });
                SplitAction::None
            }
            KeyCode::Char(c)
                if (c.is_ascii_digit() || c == '.')
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.edit_focused(|text| text.push(c));
                SplitAction::None
            }
            _ => SplitAction::None,
        }
    }

    /// Apply an edit to a copy of the focused numeric field
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.field {
            SplitField::Bill => {
                let mut text = self.bill_input.clone();
                edit(&mut text);
                self.set_bill_text(text);
            }
            SplitField::UserExpense => {
                let mut text = self.expense_input.clone();
                edit(&mut text);
                self.set_expense_text(text);
            }
            SplitField::Payer => {}
        }
    }
}
