use crate::domain::execution::ActionOutcome;
use crate::domain::state::{Phase, TerminationReason};
use crate::domain::summary::GameSummary;
use crate::domain::test_state_helpers::{make_state, even_hands, running_state, GOAL};
use crate::domain::turns::take_turn;
use crate::domain::{Action, RejectReason, Suit};

#[test]
fn players_rotate_round_robin() {
    let mut state = running_state();
    let seats: Vec<u8> = (0..6)
        .map(|i| {
            // Alternate bids so the game never stalls.
            let action = Action::Bid {
                suit: Suit::Spades,
                price: i + 1,
            };
            take_turn(&mut state, Ok(action)).unwrap().player
        })
        .collect();
    assert_eq!(seats, [0, 1, 2, 3, 0, 1]);
    assert_eq!(state.turn(), 6);
}

#[test]
fn all_players_passing_terminates() {
    let mut state = running_state();
    for i in 0..3 {
        take_turn(&mut state, Ok(Action::Pass)).unwrap();
        assert_eq!(state.consecutive_passes(), i + 1);
        assert_eq!(state.phase(), Phase::Running);
    }
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    assert_eq!(
        state.phase(),
        Phase::Terminated(TerminationReason::AllPassed)
    );
    assert_eq!(state.revealed_goal_suit(), Some(GOAL));
}

#[test]
fn rejected_actions_count_as_passes() {
    let mut state = running_state();
    take_turn(&mut state, Ok(Action::Buy { suit: Suit::Hearts })).unwrap();
    take_turn(&mut state, Err(RejectReason::Malformed)).unwrap();
    take_turn(&mut state, Err(RejectReason::AgentError)).unwrap();
    assert_eq!(state.consecutive_passes(), 3);
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    assert!(state.is_terminated());
}

#[test]
fn accepted_quote_resets_pass_counter() {
    let mut state = running_state();
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    take_turn(
        &mut state,
        Ok(Action::Bid {
            suit: Suit::Clubs,
            price: 4,
        }),
    )
    .unwrap();
    assert_eq!(state.consecutive_passes(), 0);
    for _ in 0..3 {
        take_turn(&mut state, Ok(Action::Pass)).unwrap();
    }
    assert!(!state.is_terminated());
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    assert!(state.is_terminated());
    assert_eq!(state.turn(), 7);
}

#[test]
fn turn_limit_terminates() {
    let mut state = make_state(even_hands(), &[300; 4], 3);
    for price in 1..=3 {
        take_turn(
            &mut state,
            Ok(Action::Bid {
                suit: Suit::Hearts,
                price,
            }),
        )
        .unwrap();
    }
    assert_eq!(
        state.termination(),
        Some(TerminationReason::TurnLimit)
    );
}

#[test]
fn terminated_state_is_absorbing() {
    let mut state = running_state();
    for _ in 0..4 {
        take_turn(&mut state, Ok(Action::Pass)).unwrap();
    }
    let turn = state.turn();
    assert!(take_turn(&mut state, Ok(Action::Pass)).unwrap_err().is_internal());
    assert_eq!(state.turn(), turn);
    assert_eq!(state.log().len(), 4);
}

#[test]
fn goal_suit_hidden_while_running() {
    let mut state = running_state();
    take_turn(&mut state, Ok(Action::Pass)).unwrap();
    assert_eq!(state.revealed_goal_suit(), None);
    assert!(GameSummary::from_state(&state).is_err());
}

#[test]
fn log_records_submissions_and_outcomes() {
    let mut state = running_state();
    take_turn(&mut state, Err(RejectReason::Malformed)).unwrap();
    let rec = take_turn(
        &mut state,
        Ok(Action::Offer {
            suit: Suit::Spades,
            price: 0,
        }),
    )
    .unwrap();
    assert_eq!(
        rec.outcome,
        ActionOutcome::Rejected {
            reason: RejectReason::NonPositivePrice
        }
    );
    assert_eq!(state.log()[0].submitted, None);
    assert_eq!(state.log()[1].player, 1);
    assert!(state.log()[1].submitted.is_some());
}

#[test]
fn summary_reveals_everything_at_the_end() {
    let mut state = running_state();
    take_turn(
        &mut state,
        Ok(Action::Offer {
            suit: Suit::Spades,
            price: 9,
        }),
    )
    .unwrap();
    take_turn(&mut state, Ok(Action::Buy { suit: Suit::Spades })).unwrap();
    for _ in 0..4 {
        take_turn(&mut state, Ok(Action::Pass)).unwrap();
    }
    let summary = GameSummary::from_state(&state).unwrap();
    assert_eq!(summary.goal_suit, GOAL);
    assert_eq!(summary.trades.len(), 1);
    assert_eq!(summary.initial_hands, even_hands());
    assert_eq!(summary.log.len(), 6);
    assert_eq!(summary.termination, TerminationReason::AllPassed);
}
