//! Shared roster fixtures for the integration tests.
#![allow(dead_code)]

use squad_balancer::{Player, Position};

/// Player rated `rating` in their natural positions and 80% of it elsewhere.
pub fn player(name: &str, rating: f64, eligible: &[Position]) -> Player {
    let ratings = Position::ALL.iter().map(|&p| {
        let r = if eligible.contains(&p) { rating } else { rating * 0.8 };
        (p, r)
    });
    Player::new(name, rating, eligible.iter().copied(), ratings)
}

/// Player with the same rating in every position.
pub fn uniform(name: &str, rating: f64, eligible: &[Position]) -> Player {
    Player::new(
        name,
        rating,
        eligible.iter().copied(),
        Position::ALL.iter().map(|&p| (p, rating)),
    )
}

/// `keepers` GK-eligible players followed by outfield players, `total` in all, with ratings
/// spread between 5.0 and 8.0.
pub fn pool(total: usize, keepers: usize) -> Vec<Player> {
    (0..total)
        .map(|i| {
            let rating = 5.0 + (i % 7) as f64 * 0.5;
            if i < keepers {
                player(&format!("K{i}"), rating, &[Position::Gk])
            } else {
                let natural = match i % 4 {
                    0 => Position::Lcb,
                    1 => Position::Cm,
                    2 => Position::Rm,
                    _ => Position::Cf,
                };
                player(&format!("P{i}"), rating, &[natural])
            }
        })
        .collect()
}

pub fn names(players: &[Player]) -> Vec<String> {
    players.iter().map(|p| p.name.clone()).collect()
}
