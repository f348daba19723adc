//! Property tests: structural invariants hold under arbitrary play.
//!
//! A random input script drives the public API; rejected inputs are
//! allowed (they must simply leave state consistent). After every step:
//!
//! - conservation: pile + hand + permanently lost cards always equals
//!   the number of player cards ever created, and lost never shrinks
//! - roster membership matches each card's position
//! - no visible card has non-positive hp
//! - the draw bonus never decreases

use proptest::prelude::*;

use deckwave::{GameConfig, GameMode, GameState, Position, UpgradeKind};

fn drive_step(state: &mut GameState, byte: u8) {
    match state.mode() {
        GameMode::Battle => {
            if byte % 2 == 0 {
                let _ = state.request_draw();
            } else {
                let playable: Vec<_> = state
                    .view()
                    .hand
                    .iter()
                    .filter(|c| c.position == Position::Hand)
                    .map(|c| c.id)
                    .collect();
                if playable.is_empty() {
                    let _ = state.request_draw();
                } else {
                    let pick = playable[(byte as usize / 2) % playable.len()];
                    let _ = state.play_card(pick);
                }
            }
        }
        GameMode::Shop => match byte % 4 {
            0 => {
                let _ = state.confirm_shop();
            }
            1 => {
                let _ = state.purchase_upgrade(UpgradeKind::Attack);
            }
            2 => {
                let _ = state.purchase_upgrade(UpgradeKind::Health);
            }
            _ => {
                let _ = state.purchase_upgrade(UpgradeKind::Draw);
            }
        },
        GameMode::GameOver(_) => {}
    }
}

fn check_invariants(state: &GameState, lost_before: usize, extra_draw_before: u32) {
    let config = state.config();
    let view = state.view();

    // Conservation of player cards.
    let accounted = view.deck_size + view.hand.len() + state.cards_lost();
    assert_eq!(accounted, config.deck_size);
    assert!(state.cards_lost() >= lost_before);

    // Position matches roster membership; no dead card is visible.
    for card in &view.hand {
        assert!(matches!(card.position, Position::Hand | Position::InPlay));
        assert!(card.hp > 0, "{} visible at {} hp", card.name, card.hp);
    }
    for card in &view.enemies {
        assert_eq!(card.position, Position::InPlay);
        assert!(card.hp > 0, "{} visible at {} hp", card.name, card.hp);
    }

    // The draw bonus only grows.
    assert!(view.extra_draw >= extra_draw_before);
}

proptest! {
    #[test]
    fn invariants_hold_under_random_play(
        seed in any::<u64>(),
        script in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        let mut state = GameState::new_game(GameConfig::standard(), seed);
        check_invariants(&state, 0, 0);

        for byte in script {
            let lost = state.cards_lost();
            let extra = state.extra_draw();

            drive_step(&mut state, byte);
            check_invariants(&state, lost, extra);

            if matches!(state.mode(), GameMode::GameOver(_)) {
                break;
            }
        }
    }

    #[test]
    fn skirmish_invariants_hold_under_random_play(
        seed in any::<u64>(),
        script in proptest::collection::vec(any::<u8>(), 0..40),
    ) {
        let mut state = GameState::new_game(GameConfig::skirmish(), seed);
        check_invariants(&state, 0, 0);

        for byte in script {
            let lost = state.cards_lost();
            let extra = state.extra_draw();

            drive_step(&mut state, byte);
            check_invariants(&state, lost, extra);

            if matches!(state.mode(), GameMode::GameOver(_)) {
                break;
            }
        }
    }
}
