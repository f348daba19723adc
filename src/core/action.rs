//! Accepted-input history.
//!
//! Every input event the engine accepts is appended to a history of
//! `ActionRecord`s. Replaying the same records against a fresh game with
//! the same seed reproduces the same state, which is how the replay
//! tests pin down determinism.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::engine::UpgradeKind;

/// One accepted input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Draw the front card of the pile.
    Draw,
    /// Commit a hand card to the battle line.
    Play(CardId),
    /// Buy one pending shop upgrade.
    Purchase(UpgradeKind),
    /// Apply pending upgrades and start the next round.
    ConfirmShop,
}

/// A recorded input with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The input taken.
    pub kind: ActionKind,

    /// Rounds completed when the input was accepted.
    pub round: u32,

    /// Global sequence number (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(kind: ActionKind, round: u32, sequence: u32) -> Self {
        Self {
            kind,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(ActionKind::Play(CardId::new(4)), 2, 7);

        assert_eq!(record.kind, ActionKind::Play(CardId::new(4)));
        assert_eq!(record.round, 2);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_action_equality() {
        let a1 = ActionKind::Play(CardId::new(1));
        let a2 = ActionKind::Play(CardId::new(1));
        let a3 = ActionKind::Play(CardId::new(2));

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_ne!(a1, ActionKind::Draw);
    }

    #[test]
    fn test_action_serialization() {
        let record = ActionRecord::new(ActionKind::Draw, 0, 0);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
