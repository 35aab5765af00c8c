//! Integration tests for squad and split validation.

mod common;

use common::player;
use squad_balancer::{
    validate, validate_split, Assignment, Formation, Player, Position, SlotAssignment,
    SplitResult, Squad, ValidationError,
};

fn squad_of(entries: &[(&str, Position)]) -> Squad {
    let players: Vec<Player> = entries
        .iter()
        .map(|(name, pos)| player(name, 6.0, &[*pos]))
        .collect();
    let slots = players
        .iter()
        .zip(entries)
        .map(|(p, (_, pos))| SlotAssignment::new(p, *pos, p.rating(*pos)))
        .collect();
    let formation = Formation::from_counts(
        entries
            .iter()
            .filter(|(_, p)| *p != Position::Gk)
            .map(|(_, p)| (*p, 1)),
    );
    Squad::new(players, formation, Assignment::new(slots))
}

fn valid_squad(prefix: &str) -> Squad {
    let positions = [
        Position::Gk,
        Position::Lcb,
        Position::Rcb,
        Position::Lm,
        Position::Cm,
        Position::Cf,
    ];
    let names: Vec<String> = positions.iter().map(|p| format!("{prefix}{p}")).collect();
    let entries: Vec<(&str, Position)> = names.iter().map(String::as_str).zip(positions).collect();
    squad_of(&entries)
}

#[test]
fn valid_squad_passes_and_is_idempotent() {
    let squad = valid_squad("A");
    assert_eq!(validate(&squad), Ok(()));
    assert_eq!(validate(&squad), validate(&squad));
}

#[test]
fn two_central_players_are_allowed() {
    let squad = squad_of(&[
        ("GK", Position::Gk),
        ("D", Position::Lcb),
        ("M1", Position::Cm),
        ("M2", Position::Cm),
        ("F1", Position::Cf),
        ("F2", Position::Cf),
    ]);
    assert_eq!(validate(&squad), Ok(()));
}

#[test]
fn repeated_lateral_position_fails() {
    let squad = squad_of(&[
        ("GK", Position::Gk),
        ("D1", Position::Lcb),
        ("D2", Position::Lcb),
        ("M", Position::Cm),
        ("F", Position::Cf),
    ]);
    assert_eq!(
        validate(&squad),
        Err(ValidationError::PositionOverfilled {
            position: Position::Lcb,
            count: 2,
            max: 1
        })
    );
}

#[test]
fn three_central_players_fail() {
    let squad = squad_of(&[
        ("GK", Position::Gk),
        ("D", Position::Rcb),
        ("M1", Position::Cm),
        ("M2", Position::Cm),
        ("M3", Position::Cm),
        ("F", Position::Cf),
    ]);
    let err = validate(&squad).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::PositionOverfilled {
            position: Position::Cm,
            count: 3,
            ..
        }
    ));
    // Same result the second time.
    assert_eq!(validate(&squad), Err(err));
}

#[test]
fn duplicate_assignment_fails() {
    let mut squad = valid_squad("A");
    let again = squad.assignment.slots[1].clone();
    squad.assignment.slots.push(again);
    assert_eq!(
        validate(&squad),
        Err(ValidationError::DuplicatePlayer {
            player: "ALCB".to_string()
        })
    );
}

#[test]
fn unassigned_member_fails() {
    let mut squad = valid_squad("A");
    squad.assignment.slots.pop();
    assert_eq!(
        validate(&squad),
        Err(ValidationError::MissingPlayer {
            player: "ACF".to_string()
        })
    );
}

#[test]
fn assigned_outsider_fails() {
    let mut squad = valid_squad("A");
    let outsider = player("Outsider", 6.0, &[Position::Rm]);
    squad
        .assignment
        .slots
        .push(SlotAssignment::new(&outsider, Position::Rm, 6.0));
    assert_eq!(
        validate(&squad),
        Err(ValidationError::UnexpectedPlayer {
            player: "Outsider".to_string()
        })
    );
}

#[test]
fn squad_without_goalkeeper_fails() {
    let squad = squad_of(&[
        ("D", Position::Lcb),
        ("M", Position::Cm),
        ("F", Position::Cf),
    ]);
    assert_eq!(
        validate(&squad),
        Err(ValidationError::GoalkeeperCount { count: 0 })
    );
}

#[test]
fn split_rejects_player_in_both_squads() {
    let a = valid_squad("A");
    let mut b = valid_squad("B");
    // Swap B's striker for A's striker.
    let shared = a.players[5].clone();
    b.players[5] = shared.clone();
    b.assignment.slots[5] = SlotAssignment::new(&shared, Position::Cf, 6.0);

    let split = SplitResult::new(a.clone(), b);
    assert_eq!(
        validate_split(&split),
        Err(ValidationError::PlayerInBothSquads {
            player: "ACF".to_string()
        })
    );

    let ok = SplitResult::new(a, valid_squad("B"));
    assert_eq!(validate_split(&ok), Ok(()));
    assert_eq!(ok.score_difference, 0.0);
}
