//! Integration tests for the position assignment solver.

mod common;

use common::{player, uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use squad_balancer::{
    assign, best_formation, BalanceError, Formation, FormationCatalog, Player, Position,
};

fn two_two_one() -> Formation {
    Formation::from_counts([
        (Position::Lcb, 1),
        (Position::Rcb, 1),
        (Position::Lm, 1),
        (Position::Rm, 1),
        (Position::Cf, 1),
    ])
}

#[test]
fn size_mismatch_is_an_error() {
    let players = vec![uniform("A", 6.0, &[Position::Cm]); 4];
    assert!(matches!(
        assign(&players, &two_two_one()),
        Err(BalanceError::SizeMismatch {
            expected: 5,
            actual: 4
        })
    ));
}

#[test]
fn specialists_land_in_their_positions() {
    // Listed in reverse slot order so the identity permutation is wrong.
    let players = vec![
        player("Striker", 8.0, &[Position::Cf]),
        player("RightWing", 7.0, &[Position::Rm]),
        player("LeftWing", 7.0, &[Position::Lm]),
        player("RightBack", 6.5, &[Position::Rcb]),
        player("LeftBack", 6.5, &[Position::Lcb]),
    ];
    let a = assign(&players, &two_two_one()).unwrap();
    assert_eq!(a.position_of("Striker"), Some(Position::Cf));
    assert_eq!(a.position_of("RightWing"), Some(Position::Rm));
    assert_eq!(a.position_of("LeftWing"), Some(Position::Lm));
    assert_eq!(a.position_of("RightBack"), Some(Position::Rcb));
    assert_eq!(a.position_of("LeftBack"), Some(Position::Lcb));
    assert!((a.total_score() - 35.0).abs() < 1e-9);
    assert!(a.slots.iter().all(|s| s.natural));
}

#[test]
fn scores_are_stored_ratings_without_extra_penalty() {
    let players = vec![
        player("A", 5.0, &[Position::Gk]),
        player("B", 5.0, &[Position::Gk]),
        player("C", 5.0, &[Position::Gk]),
        player("D", 5.0, &[Position::Gk]),
        player("E", 5.0, &[Position::Gk]),
    ];
    let a = assign(&players, &two_two_one()).unwrap();
    // Every field slot is off-position: stored rating is 4.0, used verbatim.
    for s in &a.slots {
        assert!((s.score - 4.0).abs() < 1e-9);
        assert!(!s.natural);
    }
    assert!((a.total_score() - 20.0).abs() < 1e-9);
}

#[test]
fn ties_keep_the_first_permutation() {
    let players: Vec<Player> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|n| uniform(n, 6.0, &[Position::Cm]))
        .collect();
    let a = assign(&players, &two_two_one()).unwrap();
    let order: Vec<&str> = a.slots.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    let slots: Vec<Position> = a.slots.iter().map(|s| s.position).collect();
    assert_eq!(slots, two_two_one().slots());
}

/// Each player in turn takes the free slot with their highest rating.
fn greedy_score(players: &[Player], formation: &Formation) -> f64 {
    let mut free = formation.slots();
    let mut total = 0.0;
    for p in players {
        let (idx, rating) = free
            .iter()
            .enumerate()
            .map(|(i, &s)| (i, p.rating(s)))
            .fold((0, f64::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best });
        total += rating;
        free.remove(idx);
    }
    total
}

fn random_player(rng: &mut StdRng, name: String) -> Player {
    let natural = Position::FIELD[rng.gen_range(0..Position::FIELD.len())];
    let ratings: Vec<(Position, f64)> = Position::ALL
        .iter()
        .map(|&p| (p, rng.gen_range(3.0..9.5)))
        .collect();
    Player::new(name, 6.0, [natural], ratings)
}

#[test]
fn never_worse_than_greedy() {
    let mut rng = StdRng::seed_from_u64(7);
    for field_count in [5, 6] {
        let catalog = FormationCatalog::new(field_count).unwrap();
        for round in 0..20 {
            let players: Vec<Player> = (0..field_count)
                .map(|i| random_player(&mut rng, format!("R{round}-{i}")))
                .collect();
            for formation in catalog.formations() {
                let best = assign(&players, formation).unwrap().total_score();
                assert!(best + 1e-9 >= greedy_score(&players, formation));
            }
        }
    }
}

#[test]
fn best_formation_uses_two_strikers_when_they_are_strongest() {
    let players = vec![
        player("CF1", 9.0, &[Position::Cf]),
        player("CF2", 9.0, &[Position::Cf]),
        player("M", 6.0, &[Position::Cm]),
        player("D", 6.0, &[Position::Lcb]),
        player("W", 6.0, &[Position::Lm]),
    ];
    let catalog = FormationCatalog::new(5).unwrap();
    let (formation, a) = best_formation(&players, &catalog).unwrap();
    assert_eq!(formation.count(Position::Cf), 2);
    assert_eq!(a.position_of("CF1"), Some(Position::Cf));
    assert_eq!(a.position_of("CF2"), Some(Position::Cf));
    assert!(a.slots.iter().all(|s| s.natural));
    assert!(formation.is_valid());
}
