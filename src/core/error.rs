//! Error taxonomy for rejected input events.
//!
//! Every variant is non-fatal: the triggering action has no effect and
//! the engine stays consistent. The terminal game-over state is a normal
//! game mode, not an error. An unaffordable shop purchase is also not an
//! error; see [`PurchaseOutcome`](crate::engine::PurchaseOutcome).

use thiserror::Error;

/// A rejected input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Draw requested with an empty pile and no hand cards eligible for
    /// recycling.
    #[error("deck is empty and no hand cards can be recycled")]
    DeckExhausted,

    /// Play requested on a card that is not sitting in the hand:
    /// already in play, already removed, enemy-owned, or unknown.
    #[error("card cannot be played from its current state")]
    InvalidCardState,

    /// Input arrived in a mode that does not accept it, including the
    /// terminal game-over state.
    #[error("action is not available in the current game mode")]
    ModeMismatch,
}
