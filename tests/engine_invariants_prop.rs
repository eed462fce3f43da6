//! Property tests for the rule engine.
//!
//! Random seeds and random action streams must never break:
//! - exactly four cells per active piece on top of the settled stack
//! - cell values stay within 0..=7
//! - score only grows, and only by line clear amounts
//! - rejected moves leave the board untouched

use proptest::prelude::*;
use tiny_tetris::core::{line_clear_score, GameState, ScriptedRng};
use tiny_tetris::types::{GameAction, EMPTY_CELL};

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::Left),
        Just(GameAction::Right),
        Just(GameAction::Rotate),
        Just(GameAction::Drop),
        Just(GameAction::Tick),
    ]
}

proptest! {
    #[test]
    fn generated_rollout_respects_core_invariants(
        seed in any::<u32>(),
        actions in prop::collection::vec(action_strategy(), 1..300),
    ) {
        let mut g = GameState::new(seed);
        g.start_new_game();

        for action in actions {
            if g.is_game_over() {
                break;
            }

            let before_cells = g.cells().to_vec();
            let before_score = g.score();
            let before_lines = g.lines();
            let before_piece = g.piece_id();

            let ok = g.apply_action(action);

            prop_assert!(g.cells().iter().all(|&c| c <= 7));
            prop_assert!(g.score() >= before_score);

            let gained = g.score() - before_score;
            let cleared = (g.lines() - before_lines) as usize;
            prop_assert_eq!(gained, line_clear_score(cleared));

            let moves = matches!(action, GameAction::Left | GameAction::Right | GameAction::Rotate);
            if moves && !ok {
                prop_assert_eq!(g.cells(), before_cells.as_slice());
            }

            if let Some(piece) = g.active() {
                for p in piece.cells() {
                    prop_assert_eq!(g.board().get(p.x, p.y), Some(piece.kind.cell_value()));
                }
            }

            // A piece solidified: either the next one spawned or the game ended.
            if g.piece_id() != before_piece {
                prop_assert_eq!(g.piece_id(), before_piece + 1);
                prop_assert!(g.active().is_some());
            }
        }
    }

    #[test]
    fn occupied_count_changes_by_four_or_clears(
        script in prop::collection::vec(0u32..64, 3..30),
        drops in 1usize..40,
    ) {
        let mut g = GameState::with_rng(ScriptedRng::new(script));
        g.start_new_game();

        for _ in 0..drops {
            if g.is_game_over() {
                break;
            }
            let before = g.cells().iter().filter(|&&c| c != EMPTY_CELL).count();
            let lines = g.lines();
            g.drop_piece();
            let after = g.cells().iter().filter(|&&c| c != EMPTY_CELL).count();
            let cleared = (g.lines() - lines) as usize;

            let spawned = if g.is_game_over() { 0 } else { 4 };
            prop_assert_eq!(after + cleared * 10, before + spawned);
        }
    }

    #[test]
    fn same_seed_same_game(seed in any::<u32>(), actions in prop::collection::vec(action_strategy(), 1..100)) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        a.start_new_game();
        b.start_new_game();

        for action in actions {
            prop_assert_eq!(a.apply_action(action), b.apply_action(action));
        }
        prop_assert_eq!(a.cells(), b.cells());
        prop_assert_eq!(a.score(), b.score());
    }
}
