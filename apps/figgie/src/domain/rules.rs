//! Fixed game constants and the player-count table.

use crate::errors::domain::{ConfigKind, DomainError};

/// Card counts assigned to suits, before shuffling the assignment.
pub const SUIT_SIZES: [u8; 4] = [12, 10, 10, 8];
pub const DECK_SIZE: u8 = 40;
pub const STARTING_MONEY: u32 = 350;
pub const POT: u32 = 200;
/// Paid per goal-suit card held at the end of the game.
pub const CARD_BONUS: u32 = 10;
pub const DEFAULT_MAX_TURNS: u32 = 1000;
pub const MIN_PLAYERS: u8 = 4;
pub const MAX_PLAYERS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub num_players: u8,
    pub hand_size: u8,
    pub ante: u32,
}

const TABLE: [TableEntry; 2] = [
    TableEntry {
        num_players: 4,
        hand_size: 10,
        ante: 50,
    },
    TableEntry {
        num_players: 5,
        hand_size: 8,
        ante: 40,
    },
];

/// Look up the hand size and ante for a player count.
///
/// The entry is checked against the deck size and pot so a bad table can
/// never seat a game.
pub fn table_entry(num_players: u8) -> Result<TableEntry, DomainError> {
    let entry = TABLE
        .iter()
        .find(|e| e.num_players == num_players)
        .copied()
        .ok_or_else(|| {
            DomainError::config(
                ConfigKind::InvalidPlayerCount,
                format!("{num_players} players; expected {MIN_PLAYERS} or {MAX_PLAYERS}"),
            )
        })?;
    check_entry(&entry)?;
    Ok(entry)
}

fn check_entry(entry: &TableEntry) -> Result<(), DomainError> {
    let n = u32::from(entry.num_players);
    if entry.ante * n != POT {
        return Err(DomainError::config(
            ConfigKind::MalformedTable,
            format!("ante {} x {} players != pot {POT}", entry.ante, n),
        ));
    }
    if u32::from(entry.hand_size) * n != u32::from(DECK_SIZE) {
        return Err(DomainError::config(
            ConfigKind::MalformedTable,
            format!(
                "hand size {} x {} players != deck size {DECK_SIZE}",
                entry.hand_size, n
            ),
        ));
    }
    if entry.ante > STARTING_MONEY {
        return Err(DomainError::config(
            ConfigKind::MalformedTable,
            format!("ante {} exceeds starting money", entry.ante),
        ));
    }
    Ok(())
}

/// Total money in a game of `num_players`, pot included.
pub const fn total_money(num_players: u8) -> u32 {
    STARTING_MONEY * num_players as u32
}
