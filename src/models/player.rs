//! Player, Position and the line/kind groupings used by formations.

use crate::models::error::RosterError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Slot type on the pitch.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Gk,
    Lcb,
    Rcb,
    Lm,
    Cm,
    Rm,
    Cf,
}

/// Cardinality class of a position within one squad.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionKind {
    /// Exactly one per squad.
    Goalkeeper,
    /// At most one per squad.
    Lateral,
    /// At most two per squad.
    Central,
}

/// Line of the team a position belongs to (used for the `D-M-F` label).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    Goalkeeper,
    Defense,
    Midfield,
    Forward,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Gk,
        Position::Lcb,
        Position::Rcb,
        Position::Lm,
        Position::Cm,
        Position::Rm,
        Position::Cf,
    ];

    /// Every position except the goalkeeper, in slot-expansion order.
    pub const FIELD: [Position; 6] = [
        Position::Lcb,
        Position::Rcb,
        Position::Lm,
        Position::Cm,
        Position::Rm,
        Position::Cf,
    ];

    pub fn kind(self) -> PositionKind {
        match self {
            Position::Gk => PositionKind::Goalkeeper,
            Position::Lcb | Position::Rcb | Position::Lm | Position::Rm => PositionKind::Lateral,
            Position::Cm | Position::Cf => PositionKind::Central,
        }
    }

    pub fn line(self) -> Line {
        match self {
            Position::Gk => Line::Goalkeeper,
            Position::Lcb | Position::Rcb => Line::Defense,
            Position::Lm | Position::Cm | Position::Rm => Line::Midfield,
            Position::Cf => Line::Forward,
        }
    }

    /// Maximum number of players a single squad may field in this position.
    pub fn max_per_squad(self) -> u8 {
        match self.kind() {
            PositionKind::Goalkeeper | PositionKind::Lateral => 1,
            PositionKind::Central => 2,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Position::Gk => "GK",
            Position::Lcb => "LCB",
            Position::Rcb => "RCB",
            Position::Lm => "LM",
            Position::Cm => "CM",
            Position::Rm => "RM",
            Position::Cf => "CF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A rated player from the roster.
///
/// `position_ratings` is pre-computed by the caller and already carries any off-position
/// penalty; nothing in this crate re-derives or re-penalises it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub overall_rating: f64,
    /// Natural roles of the player.
    pub eligible_positions: BTreeSet<Position>,
    /// Rating for every position, including penalised estimates for non-natural ones.
    pub position_ratings: BTreeMap<Position, f64>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        overall_rating: f64,
        eligible_positions: impl IntoIterator<Item = Position>,
        position_ratings: impl IntoIterator<Item = (Position, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            overall_rating,
            eligible_positions: eligible_positions.into_iter().collect(),
            position_ratings: position_ratings.into_iter().collect(),
        }
    }

    /// Stored rating for `position` (0.0 if absent; `validate` rejects such players).
    pub fn rating(&self, position: Position) -> f64 {
        self.position_ratings.get(&position).copied().unwrap_or(0.0)
    }

    pub fn is_eligible(&self, position: Position) -> bool {
        self.eligible_positions.contains(&position)
    }

    pub fn can_keep_goal(&self) -> bool {
        self.is_eligible(Position::Gk)
    }

    /// Case-insensitive name comparison (names are unique keys).
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Check the record invariants: non-blank name, at least one natural position and a
    /// finite rating for every position.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::BlankName);
        }
        if self.eligible_positions.is_empty() {
            return Err(RosterError::NoEligiblePositions {
                player: self.name.clone(),
            });
        }
        for position in Position::ALL {
            match self.position_ratings.get(&position) {
                None => {
                    return Err(RosterError::MissingRating {
                        player: self.name.clone(),
                        position,
                    })
                }
                Some(value) if !value.is_finite() => {
                    return Err(RosterError::InvalidRating {
                        player: self.name.clone(),
                        position,
                        value: *value,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Validate every player and reject duplicate names (case-insensitive).
pub fn validate_roster(players: &[Player]) -> Result<(), RosterError> {
    let mut seen = BTreeSet::new();
    for p in players {
        p.validate()?;
        if !seen.insert(p.name.trim().to_lowercase()) {
            return Err(RosterError::DuplicateName {
                player: p.name.clone(),
            });
        }
    }
    Ok(())
}
