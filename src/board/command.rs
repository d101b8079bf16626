//! Typed score commands: `<team> [v1] [v2] [v3]`.
//!
//! The team number is strict. Values are lenient: a token that is not an
//! integer counts as 0 and a missing trailing token keeps the current score.

use crate::error::CommandError;

use super::{CRITERIA, Leaderboard, Scores};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCommand {
    pub slot: usize,
    pub values: Scores,
}

/// Parse an entry buffer against the current board. Blank input yields
/// `Ok(None)`.
pub fn parse_command(input: &str, board: &Leaderboard) -> Result<Option<ScoreCommand>, CommandError> {
    let mut tokens = input.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let out_of_range = |slot: String| CommandError::OutOfRange {
        slot,
        count: board.len(),
    };
    let slot: i64 = match first.parse() {
        Ok(slot) => slot,
        // Too many digits for any board.
        Err(_) if is_integer(first) => return Err(out_of_range(first.to_string())),
        Err(_) => return Err(CommandError::InvalidSlot(first.to_string())),
    };
    if slot < 1 || slot as u64 > board.len() as u64 {
        return Err(out_of_range(slot.to_string()));
    }
    let slot = slot as usize;

    let mut values = *board.competitor(slot)?.scores();
    for (value, token) in values.iter_mut().zip(tokens.take(CRITERIA)) {
        *value = token.parse().unwrap_or(0);
    }

    Ok(Some(ScoreCommand { slot, values }))
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
