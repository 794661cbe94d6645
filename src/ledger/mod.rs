//! Ledger state
//!
//! Owns the friend list and the current interaction mode, and is the only
//! place balances change. The add-friend panel and the split selection are
//! two projections of a single [`Mode`], so they can never be active at the
//! same time.

mod id;
mod seed;

pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use seed::{DEFAULT_AVATAR_URL, default_friends};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{Friend, FriendId};

/// Reasons a ledger operation is rejected (state is left unchanged)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("friend name is empty")]
    EmptyName,

    #[error("image URL is empty")]
    EmptyImage,

    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),

    #[error("no friend selected for splitting")]
    NoSelection,

    #[error("duplicate friend id {0}")]
    DuplicateId(FriendId),

    #[error("balance of friend {0} would overflow")]
    Overflow(FriendId),
}

/// What the user is currently doing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Panel closed, nothing selected
    #[default]
    Idle,
    /// Add-friend panel open
    AddingFriend,
    /// Split-bill form open for a friend
    Splitting(FriendId),
}

/// Friends, balances and selection
#[derive(Debug)]
pub struct Ledger {
    friends: Vec<Friend>,
    mode: Mode,
    ids: Box<dyn IdGenerator>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Ledger with the default seed friends and random ids
    pub fn new() -> Self {
        Self {
            friends: default_friends(),
            mode: Mode::Idle,
            ids: Box::new(RandomIds),
        }
    }

    /// Ledger with a custom seed list
    ///
    /// Fails if two seed friends share an id.
    pub fn with_friends(
        friends: Vec<Friend>,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self, LedgerError> {
        for (i, friend) in friends.iter().enumerate() {
            if friends[..i].iter().any(|f| f.id == friend.id) {
                return Err(LedgerError::DuplicateId(friend.id.clone()));
            }
        }

        Ok(Self {
            friends,
            mode: Mode::Idle,
            ids: Box::new(ids),
        })
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_panel_open(&self) -> bool {
        self.mode == Mode::AddingFriend
    }

    pub fn selected_friend_id(&self) -> Option<&FriendId> {
        match &self.mode {
            Mode::Splitting(id) => Some(id),
            Mode::Idle | Mode::AddingFriend => None,
        }
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected_friend_id().and_then(|id| self.friend(id))
    }

    /// Open or close the add-friend panel; always clears the selection
    pub fn toggle_add_friend_panel(&mut self) {
        self.mode = match self.mode {
            Mode::AddingFriend => Mode::Idle,
            Mode::Idle | Mode::Splitting(_) => Mode::AddingFriend,
        };
        tracing::debug!(mode = ?self.mode, "toggled add-friend panel");
    }

    /// Append a new friend with a zero balance and close the panel
    ///
    /// The new id is appended to `image_url` as a cache-busting query
    /// parameter. Returns the id of the new friend.
    pub fn add_friend(&mut self, name: &str, image_url: &str) -> Result<FriendId, LedgerError> {
        let name = name.trim();
        let image_url = image_url.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if image_url.is_empty() {
            return Err(LedgerError::EmptyImage);
        }

        let id = self.fresh_id();
        let friend = Friend::new(
            id.clone(),
            name,
            with_cache_buster(image_url, &id),
            Decimal::ZERO,
        );
        tracing::info!(id = %id, name, "added friend");

        self.friends.push(friend);
        self.mode = Mode::Idle;
        Ok(id)
    }

    /// Select a friend as split target, or deselect if already selected
    ///
    /// Closes the add-friend panel. Unknown ids are rejected.
    pub fn select_friend_for_split(&mut self, id: &FriendId) -> Result<(), LedgerError> {
        if self.friend(id).is_none() {
            return Err(LedgerError::UnknownFriend(id.clone()));
        }

        self.mode = match &self.mode {
            Mode::Splitting(current) if current == id => Mode::Idle,
            _ => Mode::Splitting(id.clone()),
        };
        tracing::debug!(mode = ?self.mode, "changed split selection");
        Ok(())
    }

    /// Add `delta` to the selected friend's balance and clear the selection
///
/// A sum outside the `Decimal` range is rejected and nothing changes.
    pub fn apply_split(&mut self, delta: Decimal) -> Result<(), LedgerError> {
        let Mode::Splitting(id) = &self.mode else {
            return Err(LedgerError::NoSelection);
        };

        let friend = self
            .friends
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| LedgerError::UnknownFriend(id.clone()))?;
        friend.balance = friend
            .balance
            .checked_add(delta)
            .ok_or_else(|| LedgerError::Overflow(id.clone()))?;
        tracing::info!(id = %friend.id, %delta, balance = %friend.balance, "applied split");

        self.mode = Mode::Idle;
        Ok(())
    }

    fn fresh_id(&mut self) -> FriendId {
        loop {
            let id = self.ids.next_id();
            if self.friend(&id).is_none() {
                return id;
            }
        }
    }
}

/// Append `u=<id>` to an image URL as a query parameter
fn with_cache_buster(image_url: &str, id: &FriendId) -> String {
    let separator = if image_url.contains('?') { '&' } else { '?' };
    format!("{}{}u={}", image_url, separator, id)
}
