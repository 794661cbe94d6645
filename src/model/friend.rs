//! Friend model
//!
//! A friend and the running balance between them and the user.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Opaque friend identifier
///
/// Seed friends use their numeric ids as strings; friends added at runtime
/// get generated ids (see [`crate::ledger::IdGenerator`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for FriendId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A friend in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL (cosmetic)
    pub image: String,
    /// Positive: friend owes the user. Negative: user owes the friend.
    #[serde(default)]
    pub balance: Decimal,
}

impl Friend {
    pub fn new(
        id: impl Into<FriendId>,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// Classify the balance for display
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }
}

/// Who owes whom, with the absolute amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Friend owes the user
    FriendOwesYou(Decimal),
    /// User owes the friend
    YouOweFriend(Decimal),
    /// Settled
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: Decimal) -> Self {
        if balance.is_zero() {
            BalanceStatus::Even
        } else if balance.is_sign_negative() {
            BalanceStatus::YouOweFriend(balance.abs())
        } else {
            BalanceStatus::FriendOwesYou(balance)
        }
    }

    /// Human readable description, e.g. "You owe Clark 7€"
    pub fn describe(&self, name: &str) -> String {
        use crate::ui::symbols::CURRENCY;

        match self {
            BalanceStatus::FriendOwesYou(amount) => {
                format!("{} owes you {}{}", name, format_amount(*amount), CURRENCY)
            }
            BalanceStatus::YouOweFriend(amount) => {
                format!("You owe {} {}{}", name, format_amount(*amount), CURRENCY)
            }
            BalanceStatus::Even => format!("You and {} are even", name),
        }
    }
}

/// Format an amount without trailing zeros ("15.50" -> "15.5", "20.00" -> "20")
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
