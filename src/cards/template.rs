//! Static stat templates and core-owned constants.
//!
//! The starting deck and the enemy wave compositions are engine
//! constants, not external configuration. Templates carry base stats;
//! the round controller applies hp scaling when a wave is spawned.

use serde::Serialize;

/// Base stats for a card to be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardTemplate {
    /// Display name.
    pub name: &'static str,
    /// Base hit points (pre-scaling for enemies).
    pub hp: i32,
    /// Attack value. Never scaled.
    pub attack: i32,
}

/// Name table for the player's starting deck, weakest first.
const RECRUITS: [&str; 10] = [
    "Squire",
    "Archer",
    "Footman",
    "Herbalist",
    "Lancer",
    "Warhound",
    "Duelist",
    "Pikeman",
    "Vanguard",
    "Champion",
];

/// The scaling three-card wave for the standard loop.
///
/// Spawned hp is `floor(base * (1 + 0.2 * rounds_completed))`.
pub const SCALING_WAVE: [CardTemplate; 3] = [
    CardTemplate {
        name: "Marauder",
        hp: 2,
        attack: 2,
    },
    CardTemplate {
        name: "Bulwark",
        hp: 3,
        attack: 1,
    },
    CardTemplate {
        name: "Gremlin",
        hp: 1,
        attack: 1,
    },
];

/// The single fixed wave for the skirmish variant. Never scaled.
pub const SKIRMISH_WAVE: [CardTemplate; 3] = [
    CardTemplate {
        name: "Marauder",
        hp: 2,
        attack: 2,
    },
    CardTemplate {
        name: "Bulwark",
        hp: 4,
        attack: 2,
    },
    CardTemplate {
        name: "Gremlin",
        hp: 3,
        attack: 1,
    },
];

/// Templates for the player's starting deck: card `i` has `hp = 2 + i`
/// and `attack = 1 + i`, in draw order (weakest drawn first).
#[must_use]
pub fn starting_deck(count: usize) -> Vec<CardTemplate> {
    (0..count)
        .map(|i| CardTemplate {
            name: RECRUITS[i % RECRUITS.len()],
            hp: 2 + i as i32,
            attack: 1 + i as i32,
        })
        .collect()
}
