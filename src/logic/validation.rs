//! Post-condition checks on a squad and on a full split.

use crate::models::{Position, SplitResult, Squad, ValidationError};
use std::collections::BTreeSet;

/// Check that a squad's assignment is a proper bijection onto legal slots.
///
/// Rules: no player assigned twice, lateral positions at most once, central positions at
/// most twice, exactly one goalkeeper, and assigned players equal the squad members.
pub fn validate(squad: &Squad) -> Result<(), ValidationError> {
    let mut assigned = BTreeSet::new();
    for slot in &squad.assignment.slots {
        if !assigned.insert(slot.player.as_str()) {
            return Err(ValidationError::DuplicatePlayer {
                player: slot.player.clone(),
            });
        }
    }

    for position in Position::FIELD {
        let count = squad.assignment.count(position);
        let max = usize::from(position.max_per_squad());
        if count > max {
            return Err(ValidationError::PositionOverfilled {
                position,
                count,
                max,
            });
        }
    }

    let goalkeepers = squad.assignment.count(Position::Gk);
    if goalkeepers != 1 {
        return Err(ValidationError::GoalkeeperCount { count: goalkeepers });
    }

    let members: BTreeSet<&str> = squad.players.iter().map(|p| p.name.as_str()).collect();
    if let Some(missing) = members.difference(&assigned).next() {
        return Err(ValidationError::MissingPlayer {
            player: missing.to_string(),
        });
    }
    if let Some(extra) = assigned.difference(&members).next() {
        return Err(ValidationError::UnexpectedPlayer {
            player: extra.to_string(),
        });
    }
    Ok(())
}

/// Validate both squads and make sure nobody plays for both.
pub fn validate_split(split: &SplitResult) -> Result<(), ValidationError> {
    validate(&split.squad_a)?;
    validate(&split.squad_b)?;
    if let Some(p) = split
        .squad_a
        .players
        .iter()
        .find(|p| split.squad_b.contains(&p.name))
    {
        return Err(ValidationError::PlayerInBothSquads {
            player: p.name.clone(),
        });
    }
    Ok(())
}
