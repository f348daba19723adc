//! The enemy battle line.
//!
//! Spawn order is attack order, and the player always strikes the front
//! card. Waves are small (three cards), so the list lives inline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Enemy cards currently in play, in spawn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyRoster {
    /// In-play card ids. Index 0 is the front card.
    pub in_play: SmallVec<[CardId; 4]>,
}

impl EnemyRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The front card: the player's attack target.
    #[must_use]
    pub fn front(&self) -> Option<CardId> {
        self.in_play.first().copied()
    }

    /// Remove a defeated card from the line.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove(&mut self, id: CardId) -> bool {
        if let Some(index) = self.in_play.iter().position(|&c| c == id) {
            self.in_play.remove(index);
            true
        } else {
            false
        }
    }

    /// Is the wave cleared?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_play.is_empty()
    }

    /// Number of enemies in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.in_play.len()
    }
}
