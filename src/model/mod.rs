//! Data models for splitbill
//!
//! UI-independent data structures: friends, balances, the split-bill
//! form values and notifications.

mod friend;
mod notification;
mod split;

pub use friend::{BalanceStatus, Friend, FriendId, format_amount};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use split::{Payer, SplitBill, SplitError};
