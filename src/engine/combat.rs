//! The combat resolver.
//!
//! One exchange runs after every accepted draw or play, synchronously to
//! completion. Two phases, strictly ordered:
//!
//! 1. **Enemy phase** — every enemy card attacks in spawn order. Each
//!    attacker picks a uniformly random player in-play card; with none
//!    in play it hits the player directly. A player card reduced to
//!    non-positive hp is removed from the hand immediately, permanently.
//! 2. **Player phase** — every player in-play card attacks the front
//!    enemy. A defeated enemy is destroyed and its reward recorded in
//!    the ledger.
//!
//! Both phases fix their attacker list at phase start; target pools are
//! recomputed per attacker. There is no mitigation and no multi-target.

use log::debug;

use crate::cards::CardId;

use super::state::GameState;

/// Run one full exchange: enemy phase, then player phase.
pub(crate) fn resolve_exchange(state: &mut GameState) {
    state.clear_damage_flags();
    enemy_phase(state);
    player_phase(state);
}

fn enemy_phase(state: &mut GameState) {
    // Attacker list fixed at phase start.
    let attackers: Vec<CardId> = state.enemies.in_play.iter().copied().collect();

    for attacker_id in attackers {
        let Some(attacker) = state.card(attacker_id) else {
            continue;
        };
        let attack = attacker.attack;
        let attacker_name = attacker.name.clone();

        // Target pool recomputed per attacker: earlier removals shrink it.
        let defenders = state.player_in_play_ids();
        if let Some(&target_id) = state.rng.choose(&defenders) {
            let (target_name, defeated) = match state.card_mut(target_id) {
                Some(target) => {
                    target.take_damage(attack);
                    (target.name.clone(), target.is_defeated())
                }
                None => continue,
            };
            debug!("{attacker_name} attacks {target_name} for {attack}");
            if defeated {
                debug!("{target_name} is defeated and lost");
                state.remove_player_card(target_id);
            }
        } else {
            state.player.hp -= attack;
            debug!(
                "{attacker_name} attacks the player for {attack}, player hp now {}",
                state.player.hp
            );
        }
    }
}

fn player_phase(state: &mut GameState) {
    // Attacker list fixed at phase start: cards defeated in the enemy
    // phase never strike back.
    let attackers = state.player_in_play_ids();

    for attacker_id in attackers {
        let Some(attacker) = state.card(attacker_id) else {
            continue;
        };
        let attack = attacker.attack;
        let attacker_name = attacker.name.clone();

        // Front-most enemy, no randomness.
        let Some(target_id) = state.enemies.front() else {
            break;
        };
        let (target_name, target_attack, defeated) = match state.card_mut(target_id) {
            Some(target) => {
                target.take_damage(attack);
                (target.name.clone(), target.attack, target.is_defeated())
            }
            None => continue,
        };
        debug!("{attacker_name} attacks {target_name} for {attack}");
        if defeated {
            let coins = target_attack.max(1) as u32;
            state.ledger.record(coins);
            state.destroy_enemy(target_id);
            debug!("{target_name} defeated, {coins} coins banked for the shop");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{CardId, Position};
    use crate::core::GameConfig;
    use crate::engine::state::GameState;

    use super::resolve_exchange;

    /// A game whose wave is cleared out so combat can be staged by hand.
    fn staged_game(seed: u64) -> GameState {
        let mut state = GameState::new_game(GameConfig::standard(), seed);
        for id in state.enemy_ids() {
            state.destroy_enemy_for_test(id);
        }
        state
    }

    #[test]
    fn test_enemy_hits_player_directly_with_no_in_play_cards() {
        let mut state = staged_game(1);
        state.spawn_enemy_for_test("Raider", 3, 2);

        resolve_exchange(&mut state);

        assert_eq!(state.player_hp(), 14 - 2);
        // Untouched enemy: the player had no attackers in play.
        let enemy = state.card(state.enemy_ids()[0]).unwrap();
        assert_eq!(enemy.hp, 3);
    }

    #[test]
    fn test_player_phase_targets_front_enemy() {
        let mut state = staged_game(2);
        // Harmless enemies: the staged card must live to strike.
        let front = state.spawn_enemy_for_test("Front", 5, 0);
        let back = state.spawn_enemy_for_test("Back", 5, 0);

        let played = state.first_hand_card_id().unwrap();
        state.set_in_play_for_test(played);
        let attack = state.card(played).unwrap().attack;

        resolve_exchange(&mut state);

        // Only the front card was struck, regardless of roster length.
        assert_eq!(state.card(front).unwrap().hp, 5 - attack);
        assert_eq!(state.card(back).unwrap().hp, 5);
    }

    #[test]
    fn test_defeated_enemy_grants_floored_reward() {
        let mut state = staged_game(3);
        // Attack 0 still grants the one-coin floor.
        state.spawn_enemy_for_test("Drone", 1, 0);

        let played = state.first_hand_card_id().unwrap();
        state.set_in_play_for_test(played);

        resolve_exchange(&mut state);

        assert!(state.enemy_ids().is_empty());
        assert_eq!(state.ledger_total(), 1);
    }

    #[test]
    fn test_defeated_player_card_is_removed_before_player_phase() {
        let mut state = staged_game(4);
        // One heavy hitter kills the sole in-play card; the card must
        // not strike back.
        state.spawn_enemy_for_test("Ogre", 4, 99);

        let played = state.first_hand_card_id().unwrap();
        state.set_in_play_for_test(played);

        resolve_exchange(&mut state);

        let card = state.card(played).unwrap();
        assert_eq!(card.position, Position::Removed);
        assert!(!state.hand_ids().contains(&played));
        assert_eq!(state.card(state.enemy_ids()[0]).unwrap().hp, 4);
    }

    #[test]
    fn test_attacker_list_fixed_at_enemy_phase_start() {
        let mut state = staged_game(5);
        let a = state.spawn_enemy_for_test("First", 2, 1);
        let b = state.spawn_enemy_for_test("Second", 2, 1);

        resolve_exchange(&mut state);

        // Both enemies struck the player exactly once.
        assert_eq!(state.player_hp(), 14 - 2);
        assert_eq!(state.card(a).unwrap().hp, 2);
        assert_eq!(state.card(b).unwrap().hp, 2);
    }

    #[test]
    fn test_damage_flags_reset_each_exchange() {
        let mut state = staged_game(6);
        state.spawn_enemy_for_test("Jab", 10, 1);

        let played = state.first_hand_card_id().unwrap();
        state.set_in_play_for_test(played);

        resolve_exchange(&mut state);
        assert!(state.card(played).unwrap().recently_damaged);

        // Clear the wave; the next exchange has no attackers, so the
        // flag resets and stays unset.
        let enemy = state.enemy_ids()[0];
        state.destroy_enemy_for_test(enemy);
        resolve_exchange(&mut state);
        assert!(!state.card(played).unwrap().recently_damaged);
    }

    #[test]
    fn test_exchange_is_deterministic_per_seed() {
        let run = |seed: u64| -> (i32, Vec<CardId>) {
            let mut state = staged_game(seed);
            state.spawn_enemy_for_test("Raider", 6, 2);
            let first = state.first_hand_card_id().unwrap();
            state.set_in_play_for_test(first);
            resolve_exchange(&mut state);
            (state.player_hp(), state.hand_ids())
        };

        assert_eq!(run(77), run(77));
    }
}
