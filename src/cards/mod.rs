//! Card system: the card value entity and static stat templates.
//!
//! ## Key Types
//!
//! - `CardId`: Per-game card identifier
//! - `Owner`: Which side a card fights for
//! - `Position`: Lifecycle position (deck, hand, in play, removed)
//! - `Card`: Runtime card state
//! - `CardTemplate`: Base stats for cards to be created

pub mod card;
pub mod template;

pub use card::{Card, CardId, Owner, Position};
pub use template::{starting_deck, CardTemplate, SCALING_WAVE, SKIRMISH_WAVE};
