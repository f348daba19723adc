//! The overlord: cosmetic taunt lines.
//!
//! Picks a random line on every player draw or play. Purely display
//! state; it never gates resolution and it draws from its own RNG
//! stream so combat stays deterministic no matter how often it speaks.

use serde::Serialize;

use crate::core::GameRng;

const GREETING: &str = "Your defeat is already queued.";

const TAUNTS: [&str; 9] = [
    "Back for another thrashing?",
    "A bold move. Boldly mediocre.",
    "I have simulated this game. You lose.",
    "Take your time. I am literally ageless.",
    "That card? Really?",
    "My wave barely noticed.",
    "You shuffle like a damp glove.",
    "Inspiring. For my side.",
    "Coins will not save you.",
];

/// The taunting adversary voice shown above the battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Overlord {
    current: &'static str,
}

impl Overlord {
    /// Create an overlord showing the opening greeting.
    #[must_use]
    pub fn new() -> Self {
        Self { current: GREETING }
    }

    /// Pick a new random taunt.
    pub fn taunt(&mut self, rng: &mut GameRng) {
        if let Some(line) = rng.choose(&TAUNTS) {
            self.current = line;
        }
    }

    /// The line currently on display.
    #[must_use]
    pub fn current_line(&self) -> &'static str {
        self.current
    }
}

impl Default for Overlord {
    fn default() -> Self {
        Self::new()
    }
}
