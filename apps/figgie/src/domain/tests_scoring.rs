use crate::domain::ledger::{Ledger, Player};
use crate::domain::scoring::{score, score_ledger, split_remainder};
use crate::domain::state::PlayerId;
use crate::domain::suit_map::Hand;
use crate::domain::test_state_helpers::running_state;
use crate::domain::turns::take_turn;
use crate::domain::{Action, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

/// Ledger where each player holds `goal` cards of clubs and nothing else.
fn ledger_with_goal_counts(goal: &[u8], money: u32, pot: u32) -> Ledger {
    let players = goal
        .iter()
        .map(|&c| Player {
            money,
            hand: Hand::from_array([0, c, 0, 0]),
        })
        .collect();
    Ledger::from_parts(players, pot)
}

#[test]
fn single_majority_takes_whole_remainder() {
    let ledger = ledger_with_goal_counts(&[5, 3, 2, 0], 300, 200);
    let results = score_ledger(&ledger, Suit::Clubs).unwrap();

    let payouts: Vec<u32> = results.iter().map(|r| r.payout).collect();
    let shares: Vec<u32> = results.iter().map(|r| r.majority_share).collect();
    assert_eq!(payouts, [50, 30, 20, 0]);
    assert_eq!(shares, [100, 0, 0, 0]);
    assert_eq!(payouts.iter().sum::<u32>() + shares.iter().sum::<u32>(), 200);

    let balances: Vec<u32> = results.iter().map(|r| r.balance).collect();
    assert_eq!(balances, [450, 330, 320, 300]);
    assert_eq!(results.iter().map(|r| r.net).sum::<i64>(), 0);
}

#[test]
fn tied_majority_splits_evenly() {
    let ledger = ledger_with_goal_counts(&[4, 4, 1, 1], 300, 200);
    let results = score_ledger(&ledger, Suit::Clubs).unwrap();
    let payouts: Vec<u32> = results.iter().map(|r| r.payout).collect();
    let shares: Vec<u32> = results.iter().map(|r| r.majority_share).collect();
    assert_eq!(payouts, [40, 40, 10, 10]);
    assert_eq!(shares, [50, 50, 0, 0]);
}

#[test]
fn five_player_three_way_tie_gives_leftover_to_lowest_seat() {
    let ledger = ledger_with_goal_counts(&[3, 3, 3, 1, 0], 310, 200);
    let results = score_ledger(&ledger, Suit::Clubs).unwrap();
    let shares: Vec<u32> = results.iter().map(|r| r.majority_share).collect();
    assert_eq!(shares, [34, 33, 33, 0, 0]);
    let total: u32 = results.iter().map(|r| r.balance).sum();
    assert_eq!(total, 350 * 5);
}

#[test]
fn split_remainder_policy() {
    let seats: [PlayerId; 3] = [1, 2, 4];
    assert_eq!(split_remainder(101, &seats), vec![(1, 34), (2, 34), (4, 33)]);
    assert_eq!(split_remainder(99, &seats), vec![(1, 33), (2, 33), (4, 33)]);
    assert_eq!(split_remainder(0, &seats), vec![(1, 0), (2, 0), (4, 0)]);
    assert!(split_remainder(50, &[]).is_empty());
}

#[test]
fn payouts_above_pot_are_an_invariant_error() {
    let ledger = ledger_with_goal_counts(&[10, 10, 10, 10], 300, 200);
    assert!(matches!(
        score_ledger(&ledger, Suit::Clubs),
        Err(DomainError::Invariant(InvariantKind::MoneyNotConserved, _))
    ));
}

#[test]
fn scoring_a_running_game_is_rejected() {
    let state = running_state();
    assert!(matches!(
        score(&state),
        Err(DomainError::Invariant(InvariantKind::PhaseMismatch, _))
    ));
}

#[test]
fn scoring_after_all_pass_uses_goal_suit() {
    let mut state = running_state();
    for _ in 0..4 {
        take_turn(&mut state, Ok(Action::Pass)).unwrap();
    }
    let results = score(&state).unwrap();
    // Clubs holdings are [3, 3, 2, 2].
    let shares: Vec<u32> = results.iter().map(|r| r.majority_share).collect();
    assert_eq!(shares, [50, 50, 0, 0]);
    assert_eq!(
        results.iter().map(|r| u64::from(r.balance)).sum::<u64>(),
        state.expected_money()
    );
}
