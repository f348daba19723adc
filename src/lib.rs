//! # deckwave
//!
//! A single-player wave-battler: the game-state and turn-resolution
//! engine for a turn-based card battler. The player plays cards from a
//! hand against a wave of enemy cards, damage resolves automatically
//! after every action, defeated enemies pay out coins, and coins buy
//! permanent deck upgrades in an inter-round shop before the next,
//! harder wave spawns.
//!
//! ## Design Principles
//!
//! 1. **One explicit aggregate**: All mutable state lives in
//!    [`GameState`]; operations take and mutate it explicitly. No
//!    ambient globals.
//!
//! 2. **Synchronous resolution**: Every accepted input runs to
//!    completion (combat exchange, shop transition, round start) before
//!    control returns. Rendering and input polling live outside this
//!    crate and only see settled states.
//!
//! 3. **Deterministic by seed**: Battle randomness and flavor text draw
//!    from independent ChaCha8 streams derived from one seed, so combat
//!    outcomes are reproducible and testable.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy, configuration, action history
//! - `cards`: the card value entity and static stat templates
//! - `roster`: player collections and the enemy battle line
//! - `engine`: state aggregate, combat resolver, economy, rounds, views
//! - `flavor`: cosmetic overlord taunts

pub mod cards;
pub mod core;
pub mod engine;
pub mod flavor;
pub mod roster;

// Re-export commonly used types
pub use crate::core::{ActionKind, ActionRecord, GameConfig, GameError, GameRng};

pub use crate::cards::{Card, CardId, CardTemplate, Owner, Position};

pub use crate::engine::{
    CardView, GameMode, GameOutcome, GameState, GameView, PurchaseOutcome, ShopPending,
    UpgradeKind,
};

pub use crate::flavor::Overlord;

pub use crate::roster::{EnemyRoster, PlayerState};
