//! Friend id generation

use std::fmt;

use uuid::Uuid;

use crate::model::FriendId;

/// Source of fresh friend ids
///
/// Ids only need to be unique within a running session; the ledger redraws
/// when a generated id collides with an existing friend.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> FriendId;
}

/// Random UUID v4 ids (used at runtime)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonically increasing numeric ids (deterministic, for tests and demos)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = FriendId::from(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_differ() {
        let mut ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_random_id_is_uuid() {
        let id = RandomIds.next_id();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(7);
        assert_eq!(ids.next_id().as_str(), "7");
        assert_eq!(ids.next_id().as_str(), "8");
    }
}
