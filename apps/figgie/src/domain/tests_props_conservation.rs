//! Property-based tests: random action streams never break conservation,
//! never leave a crossed book, and the trade log replays exactly.

use proptest::prelude::*;

use crate::domain::rules::{total_money, POT};
use crate::domain::state::GameState;
use crate::domain::trade::replay_trades;
use crate::domain::turns::take_turn;
use crate::domain::{test_gens, test_prelude, Action, SUITS};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_setup_conserves_money(n in test_gens::num_players(), seed in any::<u64>()) {
        let state = GameState::deal(n, 100, seed).unwrap();
        prop_assert_eq!(state.ledger().pot(), POT);
        prop_assert_eq!(state.ledger().total_money(), u64::from(total_money(n)));
        for suit in SUITS {
            prop_assert_eq!(
                state.ledger().suit_total(suit),
                u32::from(state.deck().count(suit))
            );
        }
    }

    #[test]
    fn prop_random_actions_preserve_invariants(
        n in test_gens::num_players(),
        seed in any::<u64>(),
        actions in prop::collection::vec(test_gens::action(), 1..200),
    ) {
        let mut state = GameState::deal(n, 1000, seed).unwrap();
        for action in actions {
            if state.is_terminated() {
                break;
            }
            take_turn(&mut state, Ok(action)).unwrap();
            prop_assert!(state.check_invariants().is_ok());
        }

        let replayed = replay_trades(state.initial_ledger(), state.trades()).unwrap();
        prop_assert_eq!(&replayed, state.ledger());
    }

    #[test]
    fn prop_rejections_never_mutate(
        seed in any::<u64>(),
        actions in prop::collection::vec(test_gens::action(), 1..60),
    ) {
        let mut state = GameState::deal(4, 1000, seed).unwrap();
        for action in actions {
            if state.is_terminated() {
                break;
            }
            let ledger = state.ledger().clone();
            let book = state.book().clone();
            let rec = take_turn(&mut state, Ok(action)).unwrap();
            if rec.outcome.rejection().is_some() || action == Action::Pass {
                prop_assert_eq!(state.ledger(), &ledger);
                prop_assert_eq!(state.book(), &book);
            }
        }
    }
}
