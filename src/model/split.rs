//! Split-bill model
//!
//! Holds the numbers entered in the split form and derives the balance
//! change to apply to the selected friend.

use rust_decimal::Decimal;
use thiserror::Error;

/// Who paid the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    /// The user paid; the friend now owes their share
    #[default]
    User,
    /// The friend paid; the user owes their own share
    Friend,
}

impl Payer {
    pub fn toggled(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// Reasons a split value or submission is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("amount cannot be negative")]
    NegativeAmount,

    #[error("your expense ({expense}) exceeds the bill ({bill})")]
    ExpenseExceedsBill { expense: Decimal, bill: Decimal },

    #[error("bill amount is missing")]
    MissingBill,

    #[error("your expense is missing")]
    MissingExpense,
}

/// Split-bill form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitBill {
    bill: Option<Decimal>,
    user_expense: Option<Decimal>,
    payer: Payer,
}

impl SplitBill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<Decimal> {
        self.bill
    }

    pub fn user_expense(&self) -> Option<Decimal> {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Set the bill amount
    ///
    /// Lowering the bill below the current user expense clears the expense,
    /// so the expense never exceeds the bill.
    pub fn set_bill(&mut self, bill: Option<Decimal>) -> Result<(), SplitError> {
        if bill.is_some_and(|b| b.is_sign_negative() && !b.is_zero()) {
            return Err(SplitError::NegativeAmount);
        }

        self.bill = bill;
        if let Some(expense) = self.user_expense
            && expense > self.bill.unwrap_or_default()
        {
            self.user_expense = None;
        }
        Ok(())
    }

    /// Set the user's share of the bill
    ///
    /// A value above the current bill (unset bill counts as zero) is rejected
    /// and the previous value is kept.
    pub fn set_user_expense(&mut self, expense: Option<Decimal>) -> Result<(), SplitError> {
        if let Some(expense) = expense {
            if expense.is_sign_negative() && !expense.is_zero() {
                return Err(SplitError::NegativeAmount);
            }
            let bill = self.bill.unwrap_or_default();
            if expense > bill {
                return Err(SplitError::ExpenseExceedsBill { expense, bill });
            }
        }

        self.user_expense = expense;
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggled();
    }

    /// The friend's share: bill minus the user's expense (None while the bill is unset)
    pub fn friend_expense(&self) -> Option<Decimal> {
        self.bill.map(|bill| bill - self.user_expense.unwrap_or_default())
    }

    /// Balance change for the selected friend
    ///
    /// Positive when the user paid (the friend owes their share), negative
    /// when the friend paid (the user owes their own share).
    pub fn balance_delta(&self) -> Result<Decimal, SplitError> {
        let bill = self
            .bill
            .filter(|b| !b.is_zero())
            .ok_or(SplitError::MissingBill)?;
        let user_expense = self.user_expense.ok_or(SplitError::MissingExpense)?;

        Ok(match self.payer {
            Payer::User => bill - user_expense,
            Payer::Friend => -user_expense,
        })
    }
}
