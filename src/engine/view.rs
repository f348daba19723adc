//! Read-only state snapshot for the rendering collaborator.
//!
//! `GameView` carries everything the renderer needs and nothing it can
//! mutate: card stats with positions and damage flags, player totals,
//! the pending shop selection, and the overlord's current line.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Position};

use super::economy::ShopPending;
use super::state::{GameMode, GameState};

/// Snapshot of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub position: Position,
    /// Damaged during the most recent resolution pass.
    pub recently_damaged: bool,
}

impl CardView {
    fn of(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            hp: card.hp,
            attack: card.attack,
            position: card.position,
            recently_damaged: card.recently_damaged,
        }
    }
}

/// Full snapshot of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub mode: GameMode,
    pub player_hp: i32,
    pub coins: u32,
    pub extra_draw: u32,
    pub rounds_completed: u32,
    pub deck_size: usize,
    /// Hand-roster cards in draw order (positions `Hand` and `InPlay`).
    pub hand: Vec<CardView>,
    /// Enemy cards in spawn order.
    pub enemies: Vec<CardView>,
    pub pending: ShopPending,
    pub flavor_line: String,
}

impl GameState {
    /// Take a read-only snapshot of the observable state.
    #[must_use]
    pub fn view(&self) -> GameView {
        let hand = self
            .hand_ids()
            .into_iter()
            .filter_map(|id| self.card(id).map(CardView::of))
            .collect();
        let enemies = self
            .enemy_ids()
            .into_iter()
            .filter_map(|id| self.card(id).map(CardView::of))
            .collect();

        GameView {
            mode: self.mode(),
            player_hp: self.player_hp(),
            coins: self.coins(),
            extra_draw: self.extra_draw(),
            rounds_completed: self.rounds_completed(),
            deck_size: self.deck_len(),
            hand,
            enemies,
            pending: self.pending(),
            flavor_line: self.flavor_line().to_owned(),
        }
    }
}
