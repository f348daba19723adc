//! Economy: reward ledger, shop pending selection, purchases.
//!
//! Rewards accumulate in a transient ledger as enemies fall and are
//! summed into the player's coins exactly once, at shop entry. Purchases
//! move coins into a pending selection; confirm applies the pending
//! attack/health deltas to every card in deck ∪ hand and the pending
//! draw count to the per-round draw bonus.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::{GameMode, GameState};

/// A purchasable permanent upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// +1 attack on every deck and hand card.
    Attack,
    /// +1 hp on every deck and hand card.
    Health,
    /// +1 silent draw at the start of every round.
    Draw,
}

impl UpgradeKind {
    /// Coin cost of one purchase.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            UpgradeKind::Attack | UpgradeKind::Health => 2,
            UpgradeKind::Draw => 3,
        }
    }
}

/// Outcome of a purchase attempt. Unaffordable is a defined no-op, not
/// an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOutcome {
    /// Coins were deducted and the pending counter bumped.
    Purchased,
    /// Too few coins; nothing changed.
    InsufficientCoins,
}

/// Upgrades chosen but not yet applied. Reset on shop entry, consumed
/// on confirm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopPending {
    /// Pending +attack purchases.
    pub attack: u32,
    /// Pending +hp purchases.
    pub health: u32,
    /// Pending +draw purchases.
    pub draw: u32,
}

impl ShopPending {
    /// Nothing selected?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attack == 0 && self.health == 0 && self.draw == 0
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One coin reward from a defeated enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Coins granted: `max(1, defeated enemy's attack)`.
    pub coins: u32,
}

/// Transient record of rewards earned during the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardLedger {
    entries: SmallVec<[Reward; 4]>,
}

impl RewardLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reward for a defeated enemy.
    pub fn record(&mut self, coins: u32) {
        self.entries.push(Reward { coins });
    }

    /// Total coins recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|r| r.coins).sum()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Any entries recorded?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Enter shop mode: bank the ledger, reset the pending selection.
pub(crate) fn open_shop(state: &mut GameState) {
    let earned = state.ledger.total();
    state.player.coins += earned;
    state.ledger.clear();
    state.pending.reset();
    state.mode = GameMode::Shop;
    info!(
        "wave cleared, entering shop with {} coins ({} earned this round)",
        state.player.coins, earned
    );
}

/// Attempt one purchase. Unaffordable leaves everything untouched.
pub(crate) fn purchase(state: &mut GameState, kind: UpgradeKind) -> PurchaseOutcome {
    let cost = kind.cost();
    if state.player.coins < cost {
        debug!(
            "purchase {:?} refused: {} coins on hand, {} needed",
            kind, state.player.coins, cost
        );
        return PurchaseOutcome::InsufficientCoins;
    }

    state.player.coins -= cost;
    match kind {
        UpgradeKind::Attack => state.pending.attack += 1,
        UpgradeKind::Health => state.pending.health += 1,
        UpgradeKind::Draw => state.pending.draw += 1,
    }
    debug!(
        "purchased {:?}, {} coins remaining",
        kind, state.player.coins
    );
    PurchaseOutcome::Purchased
}

/// Apply the pending selection: stat deltas to every card in deck ∪
/// hand, draw bonus to the player. Clears the selection.
pub(crate) fn confirm(state: &mut GameState) {
    let pending = state.pending;
    state.player.extra_draw += pending.draw;

    let attack_delta = pending.attack as i32;
    let hp_delta = pending.health as i32;
    if attack_delta != 0 || hp_delta != 0 {
        let owned: Vec<_> = state
            .player
            .deck
            .iter()
            .chain(state.player.hand.iter())
            .copied()
            .collect();
        for id in owned {
            if let Some(card) = state.cards.get_mut(&id) {
                card.upgrade(attack_delta, hp_delta);
            }
        }
    }

    state.pending.reset();
    info!(
        "shop confirmed: +{} attack, +{} hp, +{} draw",
        pending.attack, pending.health, pending.draw
    );
}
