//! Initial friends loaded at startup

use rust_decimal::Decimal;

use crate::model::Friend;

/// Default avatar service; `?u=<id>` picks a stable picture per friend
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// The three friends every session starts with (unless configured otherwise)
pub fn default_friends() -> Vec<Friend> {
    [(118836_u64, "Clark", -7), (933372, "Sarah", 20), (499476, "Anthony", 0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(
                id,
                name,
                format!("{}?u={}", DEFAULT_AVATAR_URL, id),
                Decimal::from(balance),
            )
        })
        .collect()
}
