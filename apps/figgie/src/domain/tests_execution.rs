use crate::domain::execution::{apply, validate, ActionOutcome, Validated};
use crate::domain::market::Quote;
use crate::domain::test_state_helpers::{hands_p0_without_hearts, make_state, running_state};
use crate::domain::{Action, RejectReason, Suit, SUITS};

fn rejected(outcome: ActionOutcome) -> RejectReason {
    outcome
        .rejection()
        .unwrap_or_else(|| panic!("expected rejection, got {outcome:?}"))
}

fn bid(suit: Suit, price: i64) -> Action {
    Action::Bid { suit, price }
}

fn offer(suit: Suit, price: i64) -> Action {
    Action::Offer { suit, price }
}

#[test]
fn bid_must_improve_best_bid() {
    let mut state = running_state();
    apply(&mut state, 0, bid(Suit::Hearts, 5)).unwrap();

    let before = state.book().clone();
    assert_eq!(
        rejected(apply(&mut state, 1, bid(Suit::Hearts, 5)).unwrap()),
        RejectReason::NotImprovingBid
    );
    assert_eq!(
        rejected(apply(&mut state, 1, bid(Suit::Hearts, 4)).unwrap()),
        RejectReason::NotImprovingBid
    );
    assert_eq!(state.book(), &before);

    apply(&mut state, 1, bid(Suit::Hearts, 6)).unwrap();
    assert_eq!(
        state.book().bid(Suit::Hearts),
        Some(Quote {
            price: 6,
            player: 1
        })
    );
}

#[test]
fn bid_at_or_above_offer_is_rejected() {
    let mut state = running_state();
    apply(&mut state, 0, offer(Suit::Spades, 10)).unwrap();
    assert_eq!(
        rejected(apply(&mut state, 1, bid(Suit::Spades, 10)).unwrap()),
        RejectReason::CrossesOffer
    );
    assert_eq!(
        rejected(apply(&mut state, 1, bid(Suit::Spades, 11)).unwrap()),
        RejectReason::CrossesOffer
    );
    assert!(apply(&mut state, 1, bid(Suit::Spades, 9)).unwrap().rejection().is_none());
}

#[test]
fn offer_must_improve_and_stay_above_bid() {
    let mut state = running_state();
    apply(&mut state, 0, bid(Suit::Clubs, 8)).unwrap();
    apply(&mut state, 1, offer(Suit::Clubs, 15)).unwrap();

    assert_eq!(
        rejected(apply(&mut state, 2, offer(Suit::Clubs, 15)).unwrap()),
        RejectReason::NotImprovingOffer
    );
    assert_eq!(
        rejected(apply(&mut state, 2, offer(Suit::Clubs, 8)).unwrap()),
        RejectReason::CrossesBid
    );
    assert!(apply(&mut state, 2, offer(Suit::Clubs, 9))
        .unwrap()
        .rejection()
        .is_none());
    assert!(state.book().check_uncrossed().is_ok());
}

#[test]
fn non_positive_and_oversized_prices_are_rejected() {
    let mut state = running_state();
    for price in [0, -1, -350] {
        assert_eq!(
            rejected(apply(&mut state, 0, bid(Suit::Hearts, price)).unwrap()),
            RejectReason::NonPositivePrice
        );
        assert_eq!(
            rejected(apply(&mut state, 0, offer(Suit::Hearts, price)).unwrap()),
            RejectReason::NonPositivePrice
        );
    }
    assert_eq!(
        rejected(apply(&mut state, 0, bid(Suit::Hearts, i64::MAX)).unwrap()),
        RejectReason::PriceOutOfRange
    );
}

#[test]
fn holdings_limit_quotes() {
    let mut state = make_state(hands_p0_without_hearts(), &[20, 300, 300, 300], 1000);
    assert_eq!(
        rejected(apply(&mut state, 0, offer(Suit::Hearts, 10)).unwrap()),
        RejectReason::NoCards
    );
    assert_eq!(
        rejected(apply(&mut state, 0, bid(Suit::Spades, 21)).unwrap()),
        RejectReason::InsufficientFunds
    );
    assert!(apply(&mut state, 0, bid(Suit::Spades, 20))
        .unwrap()
        .rejection()
        .is_none());
}

#[test]
fn buy_executes_against_offer_and_clears_every_suit() {
    let mut state = running_state();
    apply(&mut state, 0, bid(Suit::Spades, 3)).unwrap();
    apply(&mut state, 1, offer(Suit::Hearts, 20)).unwrap();
    apply(&mut state, 2, bid(Suit::Diamonds, 4)).unwrap();
    apply(&mut state, 3, offer(Suit::Clubs, 12)).unwrap();

    let outcome = apply(&mut state, 0, Action::Buy { suit: Suit::Hearts }).unwrap();
    let trade = *outcome.trade().unwrap();
    assert_eq!((trade.buyer, trade.seller, trade.price), (0, 1, 20));
    assert_eq!(trade.suit, Suit::Hearts);

    assert!(state.book().is_empty());
    for suit in SUITS {
        assert_eq!(state.book().get_quotes(suit), (None, None));
    }
    assert_eq!(state.book().last_trade(Suit::Hearts), Some(20));

    let ledger = state.ledger();
    assert_eq!(ledger.player(0).unwrap().money, 280);
    assert_eq!(ledger.player(1).unwrap().money, 320);
    assert_eq!(ledger.player(0).unwrap().hand[Suit::Hearts], 3);
    assert_eq!(ledger.player(1).unwrap().hand[Suit::Hearts], 1);
    assert_eq!(state.trades(), &[trade]);
}

#[test]
fn sell_executes_against_bid() {
    let mut state = running_state();
    apply(&mut state, 2, bid(Suit::Diamonds, 7)).unwrap();
    let outcome = apply(&mut state, 3, Action::Sell { suit: Suit::Diamonds }).unwrap();
    let trade = outcome.trade().copied().unwrap();
    assert_eq!((trade.buyer, trade.seller, trade.price), (2, 3, 7));
    assert_eq!(state.ledger().player(2).unwrap().money, 293);
    assert_eq!(state.ledger().player(3).unwrap().money, 307);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn hitting_missing_or_own_quotes_is_rejected() {
    let mut state = running_state();
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Buy { suit: Suit::Spades }).unwrap()),
        RejectReason::NoOffer
    );
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Sell { suit: Suit::Spades }).unwrap()),
        RejectReason::NoBid
    );

    apply(&mut state, 0, bid(Suit::Spades, 5)).unwrap();
    apply(&mut state, 0, offer(Suit::Spades, 9)).unwrap();
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Buy { suit: Suit::Spades }).unwrap()),
        RejectReason::SelfTrade
    );
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Sell { suit: Suit::Spades }).unwrap()),
        RejectReason::SelfTrade
    );
    assert!(state.trades().is_empty());
}

#[test]
fn buyer_must_afford_offer() {
    let mut state = make_state(hands_p0_without_hearts(), &[20, 300, 300, 300], 1000);
    apply(&mut state, 1, offer(Suit::Spades, 25)).unwrap();
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Buy { suit: Suit::Spades }).unwrap()),
        RejectReason::InsufficientFunds
    );
}

#[test]
fn seller_must_hold_card() {
    let mut state = make_state(hands_p0_without_hearts(), &[300; 4], 1000);
    apply(&mut state, 1, bid(Suit::Hearts, 5)).unwrap();
    assert_eq!(
        rejected(apply(&mut state, 0, Action::Sell { suit: Suit::Hearts }).unwrap()),
        RejectReason::NoCards
    );
}

#[test]
fn validate_is_pure_and_reports_trade_sides() {
    let mut state = running_state();
    apply(&mut state, 1, offer(Suit::Clubs, 11)).unwrap();
    let snapshot = state.clone();
    let actor = state.ledger().player(2).unwrap();
    let v = validate(state.book(), 2, actor, &Action::Buy { suit: Suit::Clubs }).unwrap();
    assert_eq!(
        v,
        Validated::Trade {
            suit: Suit::Clubs,
            price: 11,
            buyer: 2,
            seller: 1
        }
    );
    assert_eq!(state.ledger(), snapshot.ledger());
    assert_eq!(state.book(), snapshot.book());
}

#[test]
fn unknown_player_is_an_engine_error() {
    let mut state = running_state();
    let err = apply(&mut state, 7, Action::Pass).unwrap_err();
    assert!(err.is_internal());
}
