use itertools::Itertools;

/// Interface for rolling dices
pub trait Source {
    /// Draw one uniform value in `[1, sides]`
    fn throw(&mut self, sides: u64) -> u64;
}

/// Select how the individual results collapse into a total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Max,
    Min,
}

impl Aggregation {
    /// Map the command line flags to an aggregation
    ///
    /// Max wins over min which wins over sum when several flags are
    /// set at once.
    pub fn from_flags(use_max: bool, use_min: bool) -> Self {
        if use_max {
            Aggregation::Max
        } else if use_min {
            Aggregation::Min
        } else {
            Aggregation::Sum
        }
    }

    /// Max and min of an empty sequence are defined as 0 so the
    /// evaluator stays total even for a 0-dices roll.
    pub(crate) fn apply(&self, rolls: &[i64]) -> i64 {
        match self {
            Aggregation::Sum => rolls.iter().sum(),
            Aggregation::Max => rolls.iter().copied().max().unwrap_or(0),
            Aggregation::Min => rolls.iter().copied().min().unwrap_or(0),
        }
    }
}

/// Keep the individual results of a roll with its aggregated total
///
/// Results are signed: a `.-` modifier can push a dice below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    rolls: Vec<i64>,
    total: i64,
}

impl Outcome {
    pub(crate) fn new(rolls: Vec<i64>, total: i64) -> Self {
        Outcome { rolls, total }
    }

    /// Ordered per-dice results, already shifted by any per-dice modifier
    pub fn get_rolls(&self) -> &[i64] {
        &self.rolls
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`[{}]` = **{}**",
            self.rolls.iter().format(", "),
            self.total
        )
    }
}
