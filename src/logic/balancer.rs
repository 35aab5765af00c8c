//! Squad balancer: randomised search for the split with the smallest score difference.

use crate::logic::assignment::best_formation;
use crate::logic::catalog::FormationCatalog;
use crate::logic::validation::validate_split;
use crate::models::{
    validate_roster, BalanceConfig, BalanceError, Diagnostic, Player, Position, Side,
    SlotAssignment, SplitResult, Squad,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Why the search stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A split within `tolerance` was found.
    WithinTolerance,
    /// `max_iterations` splits were evaluated.
    IterationBudget,
    /// The wall-clock limit ran out.
    TimeLimit,
}

/// Best split found plus how the search went.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceOutcome {
    pub split: SplitResult,
    /// Iterations actually run (each evaluates one split).
    pub iterations: usize,
    pub stop_reason: StopReason,
    pub diagnostics: Vec<Diagnostic>,
}

/// Balance `confirmed` into two squads, seeding the RNG from `config.seed` (or entropy).
pub fn balance(confirmed: &[Player], config: &BalanceConfig) -> Result<BalanceOutcome, BalanceError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    balance_with_rng(confirmed, config, &mut rng)
}

/// Same as [`balance`] with a caller-supplied RNG.
///
/// Every iteration shuffles the pool, deals two halves, picks each half's goalkeeper and
/// lets every catalog formation compete for the remaining field players. The lowest
/// difference seen is kept; the search stops early once it is within `config.tolerance`.
pub fn balance_with_rng<R: Rng>(
    confirmed: &[Player],
    config: &BalanceConfig,
    rng: &mut R,
) -> Result<BalanceOutcome, BalanceError> {
    config.validate()?;
    let catalog = FormationCatalog::new(config.field_count)?;
    validate_roster(confirmed)?;

    let required = config.pool_size();
    if confirmed.len() % 2 != 0 || confirmed.len() < required {
        return Err(BalanceError::InsufficientPlayers {
            confirmed: confirmed.len(),
            required,
        });
    }
    if confirmed.len() > required {
        return Err(BalanceError::TooManyPlayers {
            confirmed: confirmed.len(),
            capacity: required,
        });
    }

    let mut diagnostics = Vec::new();
    let eligible = confirmed.iter().filter(|p| p.can_keep_goal()).count();
    if eligible < 2 {
        let d = Diagnostic::InsufficientGoalkeepers { eligible };
        log::warn!("{}", d);
        diagnostics.push(d);
    }

    let started = Instant::now();
    let time_limit = config.time_limit();
    let mut pool = confirmed.to_vec();
    let mut best: Option<SplitResult> = None;
    let mut iterations = 0;
    let mut stop_reason = StopReason::IterationBudget;

    while iterations < config.max_iterations {
        if let Some(limit) = time_limit {
            if iterations > 0 && started.elapsed() >= limit {
                stop_reason = StopReason::TimeLimit;
                break;
            }
        }
        iterations += 1;

        let split = candidate_split(&mut pool, &catalog, config, rng)?;
        let difference = split.score_difference;
        let improved = best
            .as_ref()
            .map_or(true, |b| difference < b.score_difference);
        if improved {
            log::trace!("Iteration {}: new best difference {:.3}", iterations, difference);
            best = Some(split);
        }
        if difference <= config.tolerance {
            stop_reason = StopReason::WithinTolerance;
            break;
        }
        if iterations % 100 == 0 {
            if let Some(b) = &best {
                log::debug!("Iteration {}: best difference {:.3}", iterations, b.score_difference);
            }
        }
    }

    let split = best.ok_or(BalanceError::NoValidSplit)?;
    validate_split(&split)?;

    for side in [Side::A, Side::B] {
        if let Some(gk) = split.squad(side).goalkeeper() {
            if !gk.natural {
                let d = Diagnostic::ImprovisedGoalkeeper {
                    side,
                    player: gk.player.clone(),
                };
                log::warn!("{}", d);
                diagnostics.push(d);
            }
        }
    }

    log::info!(
        "Draw finished after {} iteration(s) ({:?}): {} vs {} -> difference {:.3}",
        iterations,
        stop_reason,
        split.squad_a.formation.label(),
        split.squad_b.formation.label(),
        split.score_difference
    );

    Ok(BalanceOutcome {
        split,
        iterations,
        stop_reason,
        diagnostics,
    })
}

/// Index of the goalkeeper for a group: best GK rating among GK-eligible players, or best
/// GK rating overall if nobody is eligible. Ties keep the earlier player.
pub fn choose_goalkeeper(members: &[Player]) -> Option<usize> {
    let eligible = members
        .iter()
        .enumerate()
        .filter(|(_, p)| p.can_keep_goal());
    best_goalkeeper_rating(eligible).or_else(|| best_goalkeeper_rating(members.iter().enumerate()))
}

fn best_goalkeeper_rating<'a>(candidates: impl Iterator<Item = (usize, &'a Player)>) -> Option<usize> {
    candidates
        .fold(None, |best: Option<(usize, f64)>, (i, p)| {
            let rating = p.rating(Position::Gk);
            match best {
                Some((_, current)) if current >= rating => best,
                _ => Some((i, rating)),
            }
        })
        .map(|(i, _)| i)
}

/// Shuffle, deal two halves and build both squads.
fn candidate_split<R: Rng>(
    pool: &mut [Player],
    catalog: &FormationCatalog,
    config: &BalanceConfig,
    rng: &mut R,
) -> Result<SplitResult, BalanceError> {
    pool.shuffle(rng);
    let half = pool.len() / 2;
    let mut first = pool[..half].to_vec();
    let mut second = pool[half..].to_vec();
    spread_goalkeepers(&mut first, &mut second, rng);

    let squad_a = build_squad(first, catalog, config)?;
    let squad_b = build_squad(second, catalog, config)?;
    Ok(SplitResult::new(squad_a, squad_b))
}

/// If one half was dealt no GK-eligible player while the other holds two or more, swap one
/// of them across for a random player of the empty half.
fn spread_goalkeepers<R: Rng>(first: &mut [Player], second: &mut [Player], rng: &mut R) {
    let in_first = keeper_indices(first);
    let in_second = keeper_indices(second);
    if in_first.is_empty() && in_second.len() >= 2 {
        swap_keeper(second, &in_second, first, rng);
    } else if in_second.is_empty() && in_first.len() >= 2 {
        swap_keeper(first, &in_first, second, rng);
    }
}

fn keeper_indices(half: &[Player]) -> Vec<usize> {
    half.iter()
        .enumerate()
        .filter(|(_, p)| p.can_keep_goal())
        .map(|(i, _)| i)
        .collect()
}

fn swap_keeper<R: Rng>(from: &mut [Player], keepers: &[usize], to: &mut [Player], rng: &mut R) {
    if to.is_empty() {
        return;
    }
    if let Some(&k) = keepers.choose(rng) {
        let target = rng.gen_range(0..to.len());
        std::mem::swap(&mut from[k], &mut to[target]);
    }
}

/// Pick the goalkeeper, find the best formation for the rest and score the squad.
fn build_squad(
    members: Vec<Player>,
    catalog: &FormationCatalog,
    config: &BalanceConfig,
) -> Result<Squad, BalanceError> {
    let gk_index = choose_goalkeeper(&members).ok_or(BalanceError::SizeMismatch {
        expected: config.squad_size(),
        actual: 0,
    })?;
    let mut field = members.clone();
    let keeper = field.remove(gk_index);

    let (formation, field_assignment) = best_formation(&field, catalog)?;

    let mut gk_score = keeper.rating(Position::Gk);
    if !keeper.can_keep_goal() {
        gk_score *= config.goalkeeper_penalty;
    }
    let assignment = field_assignment.prepend(SlotAssignment::new(&keeper, Position::Gk, gk_score));
    Ok(Squad::new(members, formation, assignment))
}
