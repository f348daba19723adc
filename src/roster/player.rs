//! Player-side state: health, currency, and the two card collections.
//!
//! The draw pile is ordered (front = next drawn). The hand list holds
//! cards in both `Hand` and `InPlay` positions, in the order they were
//! drawn; a card keeps its slot when played and leaves the list only
//! when defeated or recycled.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// The player: hit points, coins, draw bonus, and card collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current hit points. The game ends in defeat at zero or below.
    pub hp: i32,

    /// Currency earned from defeated enemies, spent in the shop.
    pub coins: u32,

    /// Silent draws performed at the start of every round. Only ever
    /// increases.
    pub extra_draw: u32,

    /// The draw pile, front = next drawn.
    pub deck: VecDeque<CardId>,

    /// Hand-roster cards (positions `Hand` and `InPlay`) in draw order.
    pub hand: Vec<CardId>,
}

impl PlayerState {
    /// Create a player with the given starting hit points.
    #[must_use]
    pub fn new(starting_hp: i32) -> Self {
        Self {
            hp: starting_hp,
            coins: 0,
            extra_draw: 0,
            deck: VecDeque::new(),
            hand: Vec::new(),
        }
    }

    /// Remove a card from the hand list.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, id: CardId) -> bool {
        if let Some(index) = self.hand.iter().position(|&c| c == id) {
            self.hand.remove(index);
            true
        } else {
            false
        }
    }

    /// Is a card currently in the hand list?
    #[must_use]
    pub fn hand_contains(&self, id: CardId) -> bool {
        self.hand.contains(&id)
    }
}
