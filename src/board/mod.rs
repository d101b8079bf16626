//! Leaderboard state: competitors, their scores and the per-criterion records.
//!
//! The board decides *when* something worth celebrating happened and hands
//! back `ScoringEvent`s; it knows nothing about how those are drawn.

pub mod command;

use std::collections::BTreeSet;

use crate::error::BoardError;

/// Number of scoring criteria tracked per competitor.
pub const CRITERIA: usize = 3;

pub type Scores = [i64; CRITERIA];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    slot: usize,
    name: String,
    scores: Scores,
}

impl Competitor {
    pub fn new(slot: usize, label: &str) -> Self {
        Competitor {
            slot,
            name: format!("{label} ({slot})"),
            scores: [0; CRITERIA],
        }
    }

    /// 1-based position on the board.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }
}

/// A criterion's record was beaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEvent {
    /// 0-based criterion index.
    pub criterion: usize,
    pub slot: usize,
    /// 0-based row the competitor is drawn on.
    pub row: usize,
}

/// Slots sharing the current maximum of a criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    slots: BTreeSet<usize>,
}

impl Highlight {
    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_tie(&self) -> bool {
        self.slots.len() > 1
    }

    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    competitors: Vec<Competitor>,
    records: Scores,
}

impl Leaderboard {
    /// Create `count` competitors, labelled by `label(slot)`.
    pub fn new(count: usize, label: impl Fn(usize) -> String) -> Self {
        let competitors = (1..=count).map(|slot| Competitor::new(slot, &label(slot))).collect();
        Leaderboard {
            competitors,
            records: [0; CRITERIA],
        }
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn competitor(&self, slot: usize) -> Result<&Competitor, BoardError> {
        self.index(slot).map(|i| &self.competitors[i])
    }

    /// Highest value ever seen per criterion.
    pub fn records(&self) -> &Scores {
        &self.records
    }

    fn index(&self, slot: usize) -> Result<usize, BoardError> {
        if (1..=self.competitors.len()).contains(&slot) {
            Ok(slot - 1)
        } else {
            Err(BoardError::InvalidSlot {
                slot,
                count: self.competitors.len(),
            })
        }
    }

    /// Overwrite a competitor's scores. Lower values are stored as-is; any
    /// value strictly above its criterion's record raises the record and
    /// yields one event.
    pub fn update_scores(
        &mut self,
        slot: usize,
        values: Scores,
    ) -> Result<Vec<ScoringEvent>, BoardError> {
        let row = self.index(slot)?;
        let competitor = &mut self.competitors[row];
        let mut events = Vec::new();

        for (criterion, &value) in values.iter().enumerate() {
            competitor.scores[criterion] = value;
            if value > self.records[criterion] {
                self.records[criterion] = value;
                events.push(ScoringEvent { criterion, slot, row });
            }
        }

        Ok(events)
    }

    /// Per criterion, the slots holding its current maximum. A criterion
    /// whose best is 0 has no leader.
    pub fn compute_highlights(&self) -> [Highlight; CRITERIA] {
        std::array::from_fn(|criterion| {
            let best = self
                .competitors
                .iter()
                .map(|c| c.scores[criterion])
                .max()
                .unwrap_or(0);
            if best == 0 {
                return Highlight::default();
            }
            Highlight {
                slots: self
                    .competitors
                    .iter()
                    .filter(|c| c.scores[criterion] == best)
                    .map(|c| c.slot)
                    .collect(),
            }
        })
    }
}
