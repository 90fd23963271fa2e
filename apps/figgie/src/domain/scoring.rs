//! End-of-game scoring: per-card payout plus the majority share of the
//! pot remainder.

use serde::Serialize;
use tracing::info;

use super::ledger::Ledger;
use super::rules::{CARD_BONUS, STARTING_MONEY};
use super::state::{GameState, PlayerId};
use super::suit_map::Hand;
use super::suits::Suit;
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub goal_cards: u8,
    /// Money held when the game ended, before payouts.
    pub money: u32,
    pub payout: u32,
    pub majority_share: u32,
    /// `money + payout + majority_share`.
    pub balance: u32,
    /// `balance` minus starting money; zero-sum across players.
    pub net: i64,
    pub hand: Hand,
}

/// Split `remainder` across `tied` (ascending seat order).
///
/// Everyone gets the floor share; leftover units go one each to the
/// lowest seats first, so the whole remainder is always paid out.
pub fn split_remainder(remainder: u32, tied: &[PlayerId]) -> Vec<(PlayerId, u32)> {
    if tied.is_empty() {
        return Vec::new();
    }
    let n = tied.len() as u32;
    let base = remainder / n;
    let leftover = (remainder % n) as usize;
    tied.iter()
        .enumerate()
        .map(|(i, &p)| (p, base + u32::from(i < leftover)))
        .collect()
}

/// Score a final ledger against `goal_suit`.
pub fn score_ledger(ledger: &Ledger, goal_suit: Suit) -> Result<Vec<PlayerResult>, DomainError> {
    let counts: Vec<u8> = ledger.players().iter().map(|p| p.hand[goal_suit]).collect();
    let payouts: Vec<u32> = counts.iter().map(|&c| CARD_BONUS * u32::from(c)).collect();
    let paid: u32 = payouts.iter().sum();
    let remainder = ledger.pot().checked_sub(paid).ok_or_else(|| {
        DomainError::invariant(
            InvariantKind::MoneyNotConserved,
            format!("payouts {paid} exceed pot {}", ledger.pot()),
        )
    })?;

    let max_count = counts.iter().copied().max().unwrap_or(0);
    let tied: Vec<PlayerId> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == max_count)
        .map(|(i, _)| i as PlayerId)
        .collect();
    let mut shares = vec![0u32; counts.len()];
    for (p, share) in split_remainder(remainder, &tied) {
        shares[usize::from(p)] = share;
    }

    let results: Vec<PlayerResult> = ledger
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let balance = p.money + payouts[i] + shares[i];
            PlayerResult {
                player: i as PlayerId,
                goal_cards: counts[i],
                money: p.money,
                payout: payouts[i],
                majority_share: shares[i],
                balance,
                net: i64::from(balance) - i64::from(STARTING_MONEY),
                hand: p.hand,
            }
        })
        .collect();

    let distributed: u64 = results.iter().map(|r| u64::from(r.balance)).sum();
    if distributed != ledger.total_money() {
        return Err(DomainError::invariant(
            InvariantKind::MoneyNotConserved,
            format!(
                "final balances {distributed} != total money {}",
                ledger.total_money()
            ),
        ));
    }
    Ok(results)
}

/// Score a terminated game. Scoring a running game is an engine defect.
pub fn score(state: &GameState) -> Result<Vec<PlayerResult>, DomainError> {
    state.require_terminated()?;
    let goal_suit = state.goal_suit();
    let results = score_ledger(state.ledger(), goal_suit)?;
    info!(
        %goal_suit,
        balances = ?results.iter().map(|r| r.balance).collect::<Vec<_>>(),
        "Game scored"
    );
    Ok(results)
}
