//! Core engine types: RNG, errors, configuration, action history.
//!
//! These are the building blocks the rest of the engine sits on; none of
//! them encode battle rules themselves.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{ActionKind, ActionRecord};
pub use config::GameConfig;
pub use error::GameError;
pub use rng::GameRng;
