//! Split Bill View - the split-bill form for the selected friend
//!
//! Numeric fields keep the raw text the user typed. A keystroke is only
//! accepted when the resulting text is a valid amount that the
//! [`SplitBill`] model accepts; otherwise the previous text stays.

mod input;
mod render;

use rust_decimal::Decimal;

use crate::model::{Friend, FriendId, SplitBill};

/// Focusable fields of the split-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    UserExpense,
    Payer,
}

impl SplitField {
    fn next(self) -> Self {
        match self {
            SplitField::Bill => SplitField::UserExpense,
            SplitField::UserExpense => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }

    fn prev(self) -> Self {
        match self {
            SplitField::Bill => SplitField::Payer,
            SplitField::UserExpense => SplitField::Bill,
            SplitField::Payer => SplitField::UserExpense,
        }
    }
}

/// Actions that SplitBillView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitAction {
    /// No action needed
    None,
    /// Apply this balance change to the friend
    Submit(Decimal),
    /// Close the form (deselect the friend)
    Close,
}

/// Split-bill form state for one friend
#[derive(Debug, Clone)]
pub struct SplitBillView {
    pub friend_id: FriendId,
    pub friend_name: String,
    pub split: SplitBill,
    pub bill_input: String,
    pub expense_input: String,
    pub field: SplitField,
}

impl SplitBillView {
    pub fn new(friend: &Friend) -> Self {
        Self {
            friend_id: friend.id.clone(),
            friend_name: friend.name.clone(),
            split: SplitBill::new(),
            bill_input: String::new(),
            expense_input: String::new(),
            field: SplitField::Bill,
        }
    }

    /// Replace the bill text if it is a valid amount
    ///
    /// Returns false (text unchanged) when rejected.
    pub fn set_bill_text(&mut self, text: String) -> bool {
        let Some(amount) = parse_amount(&text) else {
            return false;
        };
        if self.split.set_bill(amount).is_err() {
            return false;
        }

        self.bill_input = text;
        // A lower bill may have cleared the expense
        if self.split.user_expense().is_none() {
            self.expense_input.clear();
        }
        true
    }

    /// Replace the user-expense text if it is a valid amount within the bill
    ///
    /// Returns false (text unchanged) when rejected.
    pub fn set_expense_text(&mut self, text: String) -> bool {
        let Some(amount) = parse_amount(&text) else {
            return false;
        };
        if let Err(e) = self.split.set_user_expense(amount) {
            tracing::debug!(error = %e, "rejected expense input");
            return false;
        }

        self.expense_input = text;
        true
    }
}

/// Parse the text of a numeric field
///
/// Returns `None` when the text is not an amount, `Some(None)` when it is
/// empty (or just a decimal point), and `Some(Some(value))` otherwise. A
/// trailing or leading point is allowed while typing ("12.", ".5").
pub fn parse_amount(text: &str) -> Option<Option<Decimal>> {
    if text.chars().filter(|&c| c == '.').count() > 1
        || !text.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }

    let digits = text.trim_end_matches('.');
    if digits.is_empty() {
        return Some(None);
    }

    let normalized = if digits.starts_with('.') {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    normalized.parse::<Decimal>().ok().map(Some)
}
