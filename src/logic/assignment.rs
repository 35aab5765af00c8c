//! Position assignment: best bijection of field players onto a formation's slots.

use crate::logic::catalog::FormationCatalog;
use crate::models::{Assignment, BalanceError, Formation, Player, SlotAssignment};

/// Find the score-maximising assignment of `field_players` to the slots of `formation`.
///
/// Every permutation is evaluated (at most 6! = 720). The score of a pair is the player's
/// stored rating for that slot, with no further penalty. Ties keep the first permutation in
/// lexicographic order, so results are reproducible for a given player order.
pub fn assign(field_players: &[Player], formation: &Formation) -> Result<Assignment, BalanceError> {
    let slots = formation.slots();
    if slots.len() != field_players.len() {
        return Err(BalanceError::SizeMismatch {
            expected: slots.len(),
            actual: field_players.len(),
        });
    }

    // ratings[player][slot]
    let ratings: Vec<Vec<f64>> = field_players
        .iter()
        .map(|p| slots.iter().map(|&s| p.rating(s)).collect())
        .collect();

    // order[slot] = index of the player standing in that slot
    let mut order: Vec<usize> = (0..field_players.len()).collect();
    let mut best_order = order.clone();
    let mut best_score = f64::NEG_INFINITY;

    loop {
        let score: f64 = order
            .iter()
            .enumerate()
            .map(|(slot, &player)| ratings[player][slot])
            .sum();
        if score > best_score {
            best_score = score;
            best_order.copy_from_slice(&order);
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    let assigned = best_order
        .iter()
        .zip(slots.iter())
        .map(|(&player, &slot)| {
            let p = &field_players[player];
            SlotAssignment::new(p, slot, p.rating(slot))
        })
        .collect();
    Ok(Assignment::new(assigned))
}

/// Try every formation in the catalog and keep the best `(formation, assignment)` pair.
/// Ties keep the formation listed first.
pub fn best_formation(
    field_players: &[Player],
    catalog: &FormationCatalog,
) -> Result<(Formation, Assignment), BalanceError> {
    let mut best: Option<(Formation, Assignment)> = None;
    for formation in catalog.formations() {
        let assignment = assign(field_players, formation)?;
        let better = match &best {
            Some((_, current)) => assignment.total_score() > current.total_score(),
            None => true,
        };
        if better {
            best = Some((formation.clone(), assignment));
        }
    }
    best.ok_or(BalanceError::EmptyCatalog {
        field_count: catalog.field_count(),
    })
}

/// Rearrange into the next lexicographic permutation; false once the last one is reached.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
