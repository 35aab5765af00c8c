//! Errors returned by the balancer and the non-fatal diagnostics reported alongside results.

use crate::models::player::Position;
use crate::models::squad::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fatal errors: the balancing request is aborted.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BalanceError {
    /// Confirmed count is odd or below two full squads.
    #[error("Need an even number of at least {required} confirmed players (have {confirmed})")]
    InsufficientPlayers { confirmed: usize, required: usize },
    /// More players than two squads can field; trim to a match pool first.
    #[error("At most {capacity} players fit in two squads (have {confirmed})")]
    TooManyPlayers { confirmed: usize, capacity: usize },
    #[error("Unsupported field player count {0} (expected 5 or 6)")]
    UnsupportedFieldCount(usize),
    #[error("No valid formation exists for {field_count} field players")]
    EmptyCatalog { field_count: usize },
    /// Formation slot count and field group size disagree (programming error).
    #[error("Formation has {expected} slots but {actual} field players were given")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("No split was evaluated (iteration budget is zero)")]
    NoValidSplit,
    #[error("Invalid draw result: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),
}

/// Post-condition violations on a squad or split (indicate a logic defect).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Player {player} is assigned more than once")]
    DuplicatePlayer { player: String },
    #[error("Position {position} has {count} players (max {max})")]
    PositionOverfilled {
        position: Position,
        count: usize,
        max: usize,
    },
    #[error("Squad has {count} goalkeepers (expected 1)")]
    GoalkeeperCount { count: usize },
    #[error("Player {player} is in the squad but has no position")]
    MissingPlayer { player: String },
    #[error("Player {player} has a position but is not in the squad")]
    UnexpectedPlayer { player: String },
    #[error("Player {player} appears in both squads")]
    PlayerInBothSquads { player: String },
}

/// Malformed player records.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("Player name is blank")]
    BlankName,
    #[error("Player {player} has no eligible positions")]
    NoEligiblePositions { player: String },
    #[error("Player {player} has no rating for {position}")]
    MissingRating { player: String, position: Position },
    #[error("Player {player} has non-finite rating {value} for {position}")]
    InvalidRating {
        player: String,
        position: Position,
        value: f64,
    },
    #[error("Player {player} appears more than once in the roster")]
    DuplicateName { player: String },
}

/// Recoverable conditions: the run proceeds, the caller is told.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A confirmed name matched nobody in the roster; it was skipped.
    UnknownPlayer { name: String },
    /// The same player was confirmed twice; the repeat was skipped.
    DuplicateConfirmation { name: String },
    /// Fewer than two GK-eligible players; squads may field an improvised goalkeeper.
    InsufficientGoalkeepers { eligible: usize },
    /// The chosen split puts a non GK-eligible player in goal.
    ImprovisedGoalkeeper { side: Side, player: String },
    /// Players left out because the pool exceeded two squads.
    Substitutes { players: Vec<String> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownPlayer { name } => {
                write!(f, "Player '{}' not found in roster, skipped", name)
            }
            Diagnostic::DuplicateConfirmation { name } => {
                write!(f, "Player '{}' confirmed more than once", name)
            }
            Diagnostic::InsufficientGoalkeepers { eligible } => write!(
                f,
                "Fewer than 2 GK-eligible players ({}); falling back to best GK ratings",
                eligible
            ),
            Diagnostic::ImprovisedGoalkeeper { side, player } => {
                write!(f, "Squad {:?} plays {} in goal out of position", side, player)
            }
            Diagnostic::Substitutes { players } => {
                write!(f, "Substitutes: {}", players.join(", "))
            }
        }
    }
}
