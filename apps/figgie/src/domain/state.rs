use serde::Serialize;

use super::dealing::{deal, DeckComposition};
use super::ledger::Ledger;
use super::market::MarketBook;
use super::rules::{table_entry, total_money, STARTING_MONEY};
use super::suits::Suit;
use super::trade::Trade;
use super::turns::TurnRecord;
use crate::errors::domain::{ConfigKind, DomainError, InvariantKind};

pub type PlayerId = u8; // 0..num_players

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Every player passed in sequence with no intervening activity.
    AllPassed,
    /// The configured maximum turn count was reached.
    TurnLimit,
}

/// Game progression. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Running,
    Terminated(TerminationReason),
}

/// One game session.
///
/// The goal suit is private: players only ever see a [`PlayerView`]
/// projection, and the suit is revealed through [`GameState::revealed_goal_suit`]
/// once the game has terminated.
///
/// [`PlayerView`]: super::player_view::PlayerView
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) phase: Phase,
    /// Turns taken so far; also the index of the next turn.
    pub(crate) turn: u32,
    pub(crate) max_turns: u32,
    /// Consecutive no-op turns (passes and rejected actions).
    pub(crate) consecutive_passes: u8,
    pub(crate) ledger: Ledger,
    pub(crate) book: MarketBook,
    pub(crate) trades: Vec<Trade>,
    pub(crate) log: Vec<TurnRecord>,
    deck: DeckComposition,
    goal_suit: Suit,
    initial_ledger: Ledger,
    expected_money: u64,
}

impl GameState {
    /// Deal a fresh game from `seed`.
    pub fn deal(num_players: u8, max_turns: u32, seed: u64) -> Result<Self, DomainError> {
        let entry = table_entry(num_players)?;
        let dealt = deal(num_players, seed)?;
        let ledger = Ledger::seat(dealt.hands, STARTING_MONEY, entry.ante);
        let state = Self::from_parts(dealt.deck, dealt.goal_suit, ledger, max_turns)?;
        debug_assert_eq!(state.expected_money, u64::from(total_money(num_players)));
        Ok(state)
    }

    /// Build a running game from explicit parts, e.g. a hand-crafted
    /// position. The ledger's current total becomes the conserved total.
    pub fn from_parts(
        deck: DeckComposition,
        goal_suit: Suit,
        ledger: Ledger,
        max_turns: u32,
    ) -> Result<Self, DomainError> {
        let num_players = u8::try_from(ledger.num_players()).map_err(|_| {
            DomainError::config(
                ConfigKind::InvalidPlayerCount,
                format!("{} players", ledger.num_players()),
            )
        })?;
        table_entry(num_players)?;
        if max_turns == 0 {
            return Err(DomainError::config(
                ConfigKind::InvalidMaxTurns,
                "max turns must be positive",
            ));
        }
        if !deck.is_valid_goal(goal_suit) {
            return Err(DomainError::config(
                ConfigKind::InvalidGoalSuit,
                format!("{goal_suit} cannot be the goal for deck {:?}", deck.counts()),
            ));
        }
        let expected_money = ledger.total_money();
        ledger.check_conservation(&deck, expected_money)?;

        Ok(Self {
            phase: Phase::Running,
            turn: 0,
            max_turns,
            consecutive_passes: 0,
            initial_ledger: ledger.clone(),
            ledger,
            book: MarketBook::new(),
            trades: Vec::new(),
            log: Vec::new(),
            deck,
            goal_suit,
            expected_money,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    pub fn termination(&self) -> Option<TerminationReason> {
        match self.phase {
            Phase::Terminated(reason) => Some(reason),
            Phase::Running => None,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn num_players(&self) -> u8 {
        // from_parts guarantees this fits.
        self.ledger.num_players() as u8
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        (self.turn % u32::from(self.num_players())) as PlayerId
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn initial_ledger(&self) -> &Ledger {
        &self.initial_ledger
    }

    pub fn book(&self) -> &MarketBook {
        &self.book
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    pub fn deck(&self) -> &DeckComposition {
        &self.deck
    }

    pub fn expected_money(&self) -> u64 {
        self.expected_money
    }

    /// The goal suit, available only once the game is over.
    pub fn revealed_goal_suit(&self) -> Option<Suit> {
        self.is_terminated().then_some(self.goal_suit)
    }

    pub(crate) fn goal_suit(&self) -> Suit {
        self.goal_suit
    }

    pub(crate) fn require_running(&self) -> Result<(), DomainError> {
        match self.phase {
            Phase::Running => Ok(()),
            Phase::Terminated(reason) => Err(DomainError::invariant(
                InvariantKind::PhaseMismatch,
                format!("game already terminated ({reason:?})"),
            )),
        }
    }

    pub(crate) fn require_terminated(&self) -> Result<TerminationReason, DomainError> {
        self.termination().ok_or_else(|| {
            DomainError::invariant(InvariantKind::PhaseMismatch, "game is still running")
        })
    }

    /// Conservation of money and cards plus an uncrossed book.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        self.ledger
            .check_conservation(&self.deck, self.expected_money)?;
        self.book.check_uncrossed()
    }
}
