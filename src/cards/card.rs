//! The card value entity.
//!
//! A `Card` is identity plus stats plus lifecycle position. Cards live
//! in the game state's card store; roster lists hold `CardId`s, and a
//! card's `Position` determines which single list holds its id:
//!
//! - `Deck` → the draw pile
//! - `Hand` / `InPlay` → the hand list
//! - `Removed` → no list (a defeated player card, permanently lost)
//!
//! `hp <= 0` is transient: the resolver removes a card in the same pass
//! that dropped it, so no card is ever observable at non-positive hp.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which side a card fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Lifecycle position of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Waiting in the draw pile.
    Deck,
    /// In the hand, playable.
    Hand,
    /// Committed to the battle line: attacks and can be targeted.
    InPlay,
    /// Defeated and permanently lost.
    Removed,
}

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID within this game.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Current attack value.
    pub attack: i32,

    /// Ceiling for `attack`. Upgrades raise both; nothing currently
    /// lowers `attack` below it.
    pub max_attack: i32,

    /// Current hit points. Non-positive only transiently, mid-resolution.
    pub hp: i32,

    /// Which side the card fights for.
    pub owner: Owner,

    /// Lifecycle position.
    pub position: Position,

    /// Damaged during the most recent resolution pass. Render-facing;
    /// cleared at the start of each pass.
    pub recently_damaged: bool,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, hp: i32, attack: i32, owner: Owner) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            max_attack: attack,
            hp,
            owner,
            position: Position::Deck,
            recently_damaged: false,
        }
    }

    /// Apply incoming damage and flag the card as recently hit.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
        self.recently_damaged = true;
    }

    /// Has this card been reduced to non-positive hp?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Apply a permanent stat upgrade.
    pub fn upgrade(&mut self, attack_delta: i32, hp_delta: i32) {
        self.attack += attack_delta;
        self.max_attack += attack_delta;
        self.hp += hp_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        Card::new(CardId::new(7), "Squire", 2, 1, Owner::Player)
    }

    #[test]
    fn test_card_new() {
        let card = sample();

        assert_eq!(card.id, CardId::new(7));
        assert_eq!(card.name, "Squire");
        assert_eq!(card.hp, 2);
        assert_eq!(card.attack, 1);
        assert_eq!(card.max_attack, 1);
        assert_eq!(card.owner, Owner::Player);
        assert_eq!(card.position, Position::Deck);
        assert!(!card.recently_damaged);
    }

    #[test]
    fn test_take_damage() {
        let mut card = sample();

        card.take_damage(1);
        assert_eq!(card.hp, 1);
        assert!(card.recently_damaged);
        assert!(!card.is_defeated());

        card.take_damage(3);
        assert_eq!(card.hp, -2);
        assert!(card.is_defeated());
    }

    #[test]
    fn test_upgrade_moves_attack_and_ceiling_together() {
        let mut card = sample();

        card.upgrade(2, 3);
        assert_eq!(card.attack, 3);
        assert_eq!(card.max_attack, 3);
        assert_eq!(card.hp, 5);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId::new(3).to_string(), "Card(3)");
    }

    #[test]
    fn test_card_serialization() {
        let card = sample();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
