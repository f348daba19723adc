//! The round controller.
//!
//! Invoked from shop confirm (or straight from a cleared wave when the
//! shop is disabled). Recycles every surviving hand card to the back of
//! the draw pile, spawns the next wave with scaled hp, performs the
//! player's silent bonus draws, and returns the game to battle.

use log::{debug, info};

use crate::cards::{template, Card, Owner, Position};

use super::state::{GameMode, GameState};

/// Hp growth per completed round.
const HP_SCALE_STEP: f64 = 0.2;

/// Scaled hp for a freshly spawned enemy:
/// `floor(base * (1 + 0.2 * rounds_completed))`.
#[must_use]
pub(crate) fn scaled_hp(base: i32, rounds_completed: u32) -> i32 {
    (f64::from(base) * (1.0 + HP_SCALE_STEP * f64::from(rounds_completed))).floor() as i32
}

/// Spawn a fresh enemy wave for the current round counter.
pub(crate) fn spawn_wave(state: &mut GameState) {
    let templates: &[template::CardTemplate] = if state.config.single_fixed_wave {
        &template::SKIRMISH_WAVE
    } else {
        &template::SCALING_WAVE
    };

    for t in templates {
        let hp = if state.config.single_fixed_wave {
            t.hp
        } else {
            scaled_hp(t.hp, state.rounds_completed)
        };
        let id = state.alloc_card_id();
        let mut card = Card::new(id, t.name, hp, t.attack, Owner::Enemy);
        card.position = Position::InPlay;
        state.cards.insert(id, card);
        state.enemies.in_play.push(id);
    }
    debug!(
        "wave spawned for round {}: {} enemies",
        state.rounds_completed + 1,
        templates.len()
    );
}

/// Advance to the next round after the shop closes.
pub(crate) fn start_next_round(state: &mut GameState) {
    state.rounds_completed += 1;

    // Recycle every surviving hand card, in hand order, to the back of
    // the pile. Defeated cards left the hand already.
    let survivors: Vec<_> = state.player.hand.drain(..).collect();
    for id in survivors {
        if let Some(card) = state.cards.get_mut(&id) {
            card.position = Position::Deck;
        }
        state.player.deck.push_back(id);
    }

    spawn_wave(state);

    // Bonus draws are silent: no taunt, no combat, exhaustion ignored.
    for _ in 0..state.player.extra_draw {
        if state.draw_to_hand().is_err() {
            break;
        }
    }

    state.mode = GameMode::Battle;
    info!("round {} begins", state.rounds_completed + 1);
}

#[cfg(test)]
mod tests {
    use crate::cards::Position;
    use crate::core::GameConfig;
    use crate::engine::state::GameState;

    use super::{scaled_hp, start_next_round};

    #[test]
    fn test_scaled_hp_formula() {
        // floor(2 * 1.6) = 3
        assert_eq!(scaled_hp(2, 3), 3);
        assert_eq!(scaled_hp(2, 0), 2);
        assert_eq!(scaled_hp(3, 1), 3); // floor(3.6)
        assert_eq!(scaled_hp(1, 4), 1); // floor(1.8)
        assert_eq!(scaled_hp(3, 5), 6); // floor(6.0)
    }

    #[test]
    fn test_round_end_recycles_all_hand_cards() {
        let mut state = GameState::new_game(GameConfig::standard(), 11);
        let played = state.first_hand_card_id().unwrap();
        state.set_in_play_for_test(played);
        let hand_before = state.hand_ids();
        let deck_before = state.deck_len();

        start_next_round(&mut state);

        // No draw bonus yet, so the whole hand went back to the pile.
        assert!(state.hand_ids().is_empty());
        assert_eq!(state.deck_len(), deck_before + hand_before.len());
        // The in-play card went back too.
        assert_eq!(state.card(played).unwrap().position, Position::Deck);
    }

    #[test]
    fn test_next_wave_is_scaled() {
        let mut state = GameState::new_game(GameConfig::standard(), 12);
        for id in state.enemy_ids() {
            state.destroy_enemy_for_test(id);
        }

        // Three rounds in, the 2-hp base spawns at 3.
        state.set_rounds_completed_for_test(2);
        start_next_round(&mut state);

        assert_eq!(state.rounds_completed(), 3);
        let front = state.enemy_ids()[0];
        let card = state.card(front).unwrap();
        assert_eq!(card.hp, 3);
        assert_eq!(card.attack, 2); // attack never scales
    }

    #[test]
    fn test_extra_draw_pulls_cards_silently() {
        let mut state = GameState::new_game(GameConfig::standard(), 13);
        state.grant_extra_draw_for_test(2);
        let flavor_before = state.flavor_line().to_owned();
        let hand_before = state.hand_ids().len();

        start_next_round(&mut state);

        // Round start recycled the 3-card hand, then drew 2 back.
        assert_eq!(state.hand_ids().len(), 2);
        assert!(state.deck_len() >= hand_before);
        assert_eq!(state.flavor_line(), flavor_before);
    }
}
