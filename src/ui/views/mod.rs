//! View components
//!
//! The friend list is always on screen; the add-friend and split-bill forms
//! appear next to it depending on the ledger mode.

mod add_friend;
mod friends;
mod split_bill;

pub use add_friend::{AddFriendAction, AddFriendField, AddFriendView};
pub use friends::{FriendsAction, FriendsView};
pub use split_bill::{SplitAction, SplitBillView, SplitField, parse_amount};
