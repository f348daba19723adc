//! Game configuration.
//!
//! Two rule sets share one engine. `GameConfig::standard()` is the full
//! loop: endless scaling waves with a shop interlude between rounds.
//! `GameConfig::skirmish()` is the stripped variant: one fixed wave, no
//! shop, no recycling, explicit victory when the wave is cleared.

use serde::{Deserialize, Serialize};

/// Engine configuration fixed at game creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player starting hit points.
    pub starting_hp: i32,

    /// Number of cards in the starting deck.
    pub deck_size: usize,

    /// Cards drawn into the hand before the first wave.
    pub opening_hand: usize,

    /// Open the shop when a wave is cleared.
    pub shop_enabled: bool,

    /// End the game in victory when the first wave is cleared instead of
    /// spawning further rounds.
    pub single_fixed_wave: bool,

    /// On a draw against an empty pile, shuffle hand cards that are not
    /// in play back into the pile before drawing.
    pub recycle_on_empty_deck: bool,
}

impl GameConfig {
    /// The full loop: shop, scaling waves, recycling.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            starting_hp: 14,
            deck_size: 10,
            opening_hand: 3,
            shop_enabled: true,
            single_fixed_wave: false,
            recycle_on_empty_deck: true,
        }
    }

    /// One fixed wave, win or lose. No shop, no recycling.
    #[must_use]
    pub fn skirmish() -> Self {
        Self {
            starting_hp: 10,
            deck_size: 6,
            opening_hand: 3,
            shop_enabled: false,
            single_fixed_wave: true,
            recycle_on_empty_deck: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
