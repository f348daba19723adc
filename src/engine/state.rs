//! The game-state aggregate and event API.
//!
//! `GameState` owns every piece of mutable state: the card store, both
//! rosters, the reward ledger, the pending shop selection, the round
//! counter, the two RNG streams, the overlord, and the accepted-input
//! history. There are no ambient globals; every operation takes the
//! aggregate explicitly.
//!
//! ## Input events
//!
//! The rendering collaborator drives the engine through four calls:
//! [`request_draw`](GameState::request_draw),
//! [`play_card`](GameState::play_card),
//! [`purchase_upgrade`](GameState::purchase_upgrade) and
//! [`confirm_shop`](GameState::confirm_shop). Each accepted event runs
//! synchronously to completion (combat exchange, shop transition, round
//! start) before control returns; input is only polled between resolved
//! actions, so no interleaving is possible.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{starting_deck, Card, CardId, Owner, Position};
use crate::core::{ActionKind, ActionRecord, GameConfig, GameError, GameRng};
use crate::flavor::Overlord;
use crate::roster::{EnemyRoster, PlayerState};

use super::combat;
use super::economy::{self, PurchaseOutcome, RewardLedger, ShopPending, UpgradeKind};
use super::round;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Player hit points reached zero.
    Defeat,
    /// The single fixed wave was cleared (skirmish rules only).
    Victory,
}

/// The engine's current mode. Terminal `GameOver` accepts no input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Waves on the field; draw and play are accepted.
    Battle,
    /// Between rounds; purchases and confirm are accepted.
    Shop,
    /// Terminal.
    GameOver(GameOutcome),
}

/// Complete game state.
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) mode: GameMode,
    pub(crate) player: PlayerState,
    pub(crate) enemies: EnemyRoster,
    pub(crate) cards: FxHashMap<CardId, Card>,
    pub(crate) ledger: RewardLedger,
    pub(crate) pending: ShopPending,
    pub(crate) rounds_completed: u32,
    pub(crate) overlord: Overlord,

    /// Battle stream: enemy targeting and recycle shuffles.
    pub(crate) rng: GameRng,
    /// Flavor stream, independent of the battle stream.
    flavor_rng: GameRng,

    history: Vector<ActionRecord>,
    sequence: u32,
    next_card_id: u32,
}

impl GameState {
    /// Start a new game: build the starting deck, draw the opening
    /// hand, spawn the first wave.
    #[must_use]
    pub fn new_game(config: GameConfig, seed: u64) -> Self {
        let root = GameRng::new(seed);
        let mut state = Self {
            config,
            mode: GameMode::Battle,
            player: PlayerState::new(config.starting_hp),
            enemies: EnemyRoster::new(),
            cards: FxHashMap::default(),
            ledger: RewardLedger::new(),
            pending: ShopPending::default(),
            rounds_completed: 0,
            overlord: Overlord::new(),
            rng: root.for_context("battle"),
            flavor_rng: root.for_context("flavor"),
            history: Vector::new(),
            sequence: 0,
            next_card_id: 0,
        };

        for template in starting_deck(config.deck_size) {
            let id = state.alloc_card_id();
            let card = Card::new(id, template.name, template.hp, template.attack, Owner::Player);
            state.cards.insert(id, card);
            state.player.deck.push_back(id);
        }

        for _ in 0..config.opening_hand {
            // The freshly built pile cannot be exhausted here.
            let _ = state.draw_to_hand();
        }

        round::spawn_wave(&mut state);
        info!(
            "new game: {} hp, {} cards, {} enemies",
            state.player.hp,
            state.cards.len() - state.enemies.len(),
            state.enemies.len()
        );
        state
    }

    // === Input events ===

    /// Draw the front card of the pile, then resolve a full combat
    /// exchange.
    ///
    /// Battle mode only. Fails with `DeckExhausted` (and no other
    /// effect) when the pile is empty and nothing can be recycled.
    pub fn request_draw(&mut self) -> Result<(), GameError> {
        self.require_battle()?;
        let round = self.rounds_completed;

        self.draw_to_hand()?;
        self.overlord.taunt(&mut self.flavor_rng);
        combat::resolve_exchange(self);
        self.settle_after_combat();
        self.record(ActionKind::Draw, round);
        Ok(())
    }

    /// Commit a hand card to the battle line, then resolve a full
    /// combat exchange.
    ///
    /// Battle mode only. Fails with `InvalidCardState` unless the card
    /// is a player card sitting in the hand.
    pub fn play_card(&mut self, id: CardId) -> Result<(), GameError> {
        self.require_battle()?;
        let round = self.rounds_completed;

        let playable = self.player.hand_contains(id)
            && self
                .cards
                .get(&id)
                .map_or(false, |c| c.owner == Owner::Player && c.position == Position::Hand);
        if !playable {
            return Err(GameError::InvalidCardState);
        }

        if let Some(card) = self.cards.get_mut(&id) {
            card.position = Position::InPlay;
            debug!("{} committed to the line", card.name);
        }
        self.overlord.taunt(&mut self.flavor_rng);
        combat::resolve_exchange(self);
        self.settle_after_combat();
        self.record(ActionKind::Play(id), round);
        Ok(())
    }

    /// Buy one pending upgrade. Shop mode only.
    ///
    /// Unaffordable purchases are a defined no-op, not an error.
    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> Result<PurchaseOutcome, GameError> {
        if self.mode != GameMode::Shop {
            return Err(GameError::ModeMismatch);
        }
        let round = self.rounds_completed;

        let outcome = economy::purchase(self, kind);
        if outcome == PurchaseOutcome::Purchased {
            self.record(ActionKind::Purchase(kind), round);
        }
        Ok(outcome)
    }

    /// Apply pending upgrades and start the next round. Shop mode only.
    pub fn confirm_shop(&mut self) -> Result<(), GameError> {
        if self.mode != GameMode::Shop {
            return Err(GameError::ModeMismatch);
        }
        let round = self.rounds_completed;

        economy::confirm(self);
        round::start_next_round(self);
        self.record(ActionKind::ConfirmShop, round);
        Ok(())
    }

    // === Read-only accessors ===

    /// Current game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Player hit points.
    #[must_use]
    pub fn player_hp(&self) -> i32 {
        self.player.hp
    }

    /// Player coins on hand.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.player.coins
    }

    /// Silent draws granted at each round start.
    #[must_use]
    pub fn extra_draw(&self) -> u32 {
        self.player.extra_draw
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.player.deck.len()
    }

    /// Hand-roster card ids in order (positions `Hand` and `InPlay`).
    #[must_use]
    pub fn hand_ids(&self) -> Vec<CardId> {
        self.player.hand.clone()
    }

    /// Enemy in-play card ids in spawn order.
    #[must_use]
    pub fn enemy_ids(&self) -> Vec<CardId> {
        self.enemies.in_play.to_vec()
    }

    /// Look up a card. Defeated player cards remain visible with
    /// `Position::Removed`; destroyed enemies do not.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Number of player cards permanently lost.
    #[must_use]
    pub fn cards_lost(&self) -> usize {
        self.cards
            .values()
            .filter(|c| c.owner == Owner::Player && c.position == Position::Removed)
            .count()
    }

    /// Coins recorded in the reward ledger, not yet banked.
    #[must_use]
    pub fn ledger_total(&self) -> u32 {
        self.ledger.total()
    }

    /// Pending shop selection.
    #[must_use]
    pub fn pending(&self) -> ShopPending {
        self.pending
    }

    /// The overlord's current line.
    #[must_use]
    pub fn flavor_line(&self) -> &str {
        self.overlord.current_line()
    }

    /// Accepted-input history.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    // === Internal lifecycle helpers ===

    pub(crate) fn alloc_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        id
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Player cards currently on the battle line, in hand order.
    pub(crate) fn player_in_play_ids(&self) -> Vec<CardId> {
        self.player
            .hand
            .iter()
            .copied()
            .filter(|id| {
                self.cards
                    .get(id)
                    .map_or(false, |c| c.position == Position::InPlay)
            })
            .collect()
    }

    /// Permanently remove a defeated player card from the hand.
    pub(crate) fn remove_player_card(&mut self, id: CardId) {
        self.player.remove_from_hand(id);
        if let Some(card) = self.cards.get_mut(&id) {
            card.position = Position::Removed;
        }
    }

    /// Destroy a defeated enemy card outright.
    pub(crate) fn destroy_enemy(&mut self, id: CardId) {
        self.enemies.remove(id);
        self.cards.remove(&id);
    }

    pub(crate) fn clear_damage_flags(&mut self) {
        for card in self.cards.values_mut() {
            card.recently_damaged = false;
        }
    }

    /// Draw the front pile card into the hand, recycling non-in-play
    /// hand cards into the pile first when the pile is empty and the
    /// rules allow it.
    pub(crate) fn draw_to_hand(&mut self) -> Result<CardId, GameError> {
        if self.player.deck.is_empty() && self.config.recycle_on_empty_deck {
            let mut recyclable: Vec<CardId> = self
                .player
                .hand
                .iter()
                .copied()
                .filter(|id| {
                    self.cards
                        .get(id)
                        .map_or(false, |c| c.position == Position::Hand)
                })
                .collect();
            if !recyclable.is_empty() {
                self.rng.shuffle(&mut recyclable);
                for id in recyclable {
                    self.player.remove_from_hand(id);
                    if let Some(card) = self.cards.get_mut(&id) {
                        card.position = Position::Deck;
                    }
                    self.player.deck.push_back(id);
                }
                debug!("pile empty: hand cards shuffled back in");
            }
        }

        let Some(id) = self.player.deck.pop_front() else {
            return Err(GameError::DeckExhausted);
        };
        if let Some(card) = self.cards.get_mut(&id) {
            card.position = Position::Hand;
            debug!("drew {}", card.name);
        }
        self.player.hand.push(id);
        Ok(id)
    }

    fn require_battle(&self) -> Result<(), GameError> {
        if self.mode == GameMode::Battle {
            Ok(())
        } else {
            Err(GameError::ModeMismatch)
        }
    }

    /// Post-combat settlement: defeat first, then wave-cleared
    /// transitions.
    fn settle_after_combat(&mut self) {
        if self.player.hp <= 0 {
            self.mode = GameMode::GameOver(GameOutcome::Defeat);
            info!("player defeated after {} completed rounds", self.rounds_completed);
            return;
        }
        if self.enemies.is_empty() {
            if self.config.single_fixed_wave {
                self.mode = GameMode::GameOver(GameOutcome::Victory);
                info!("wave cleared, victory");
            } else if self.config.shop_enabled {
                economy::open_shop(self);
            } else {
                round::start_next_round(self);
            }
        }
    }

    fn record(&mut self, kind: ActionKind, round: u32) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.history.push_back(ActionRecord::new(kind, round, sequence));
    }
}

#[cfg(test)]
impl GameState {
    /// First card in the hand with position `Hand`.
    pub(crate) fn first_hand_card_id(&self) -> Option<CardId> {
        self.player
            .hand
            .iter()
            .copied()
            .find(|id| self.cards.get(id).map_or(false, |c| c.position == Position::Hand))
    }

    pub(crate) fn set_in_play_for_test(&mut self, id: CardId) {
        self.cards.get_mut(&id).unwrap().position = Position::InPlay;
    }

    pub(crate) fn spawn_enemy_for_test(&mut self, name: &str, hp: i32, attack: i32) -> CardId {
        let id = self.alloc_card_id();
        let mut card = Card::new(id, name, hp, attack, Owner::Enemy);
        card.position = Position::InPlay;
        self.cards.insert(id, card);
        self.enemies.in_play.push(id);
        id
    }

    pub(crate) fn destroy_enemy_for_test(&mut self, id: CardId) {
        self.destroy_enemy(id);
    }

    pub(crate) fn set_rounds_completed_for_test(&mut self, rounds: u32) {
        self.rounds_completed = rounds;
    }

    pub(crate) fn grant_extra_draw_for_test(&mut self, draws: u32) {
        self.player.extra_draw += draws;
    }

    pub(crate) fn set_coins_for_test(&mut self, coins: u32) {
        self.player.coins = coins;
    }

    pub(crate) fn enter_shop_for_test(&mut self) {
        economy::open_shop(self);
    }
}
