//! Roster side of a draw: match confirmed names to players and trim the pool to two squads.

use crate::models::{Diagnostic, Player};

/// Confirmed players found in the roster, in confirmation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub players: Vec<Player>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve `names` against `roster` (case-insensitive, surrounding whitespace ignored).
/// Unknown and repeated names are skipped and reported.
pub fn resolve_confirmed(roster: &[Player], names: &[String]) -> Resolution {
    let mut resolution = Resolution::default();
    for name in names {
        let Some(player) = roster.iter().find(|p| p.has_name(name)) else {
            let d = Diagnostic::UnknownPlayer {
                name: name.trim().to_string(),
            };
            log::warn!("{}", d);
            resolution.diagnostics.push(d);
            continue;
        };
        if resolution.players.iter().any(|p| p.name == player.name) {
            let d = Diagnostic::DuplicateConfirmation {
                name: player.name.clone(),
            };
            log::warn!("{}", d);
            resolution.diagnostics.push(d);
            continue;
        }
        resolution.players.push(player.clone());
    }
    log::info!(
        "{} of {} confirmed name(s) matched the roster",
        resolution.players.len(),
        names.len()
    );
    resolution
}

/// Field players per squad for a pool: 12-13 players play 6-a-side (5 + GK),
/// 14 or more play 7-a-side (6 + GK). None below 12. Odd pools still fail the player-count
/// check in [`draw`](crate::draw); the extra player is never benched.
pub fn field_count_for(pool_size: usize) -> Option<usize> {
    match pool_size {
        0..=11 => None,
        12 | 13 => Some(5),
        _ => Some(6),
    }
}

/// Players who start and players left on the bench.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchPool {
    pub starters: Vec<Player>,
    pub substitutes: Vec<Player>,
}

impl MatchPool {
    pub fn substitute_names(&self) -> Vec<String> {
        self.substitutes.iter().map(|p| p.name.clone()).collect()
    }
}

/// Trim `players` to two squads of `field_count + 1`.
///
/// The first two GK-eligible players always start, then non-goalkeepers fill the remaining
/// places in confirmation order, then any other goalkeepers. Pools that already fit are
/// returned unchanged.
pub fn select_match_pool(players: Vec<Player>, field_count: usize) -> MatchPool {
    let capacity = 2 * (field_count + 1);
    if players.len() <= capacity {
        return MatchPool {
            starters: players,
            substitutes: Vec::new(),
        };
    }

    let mut starting = vec![false; players.len()];
    let mut places = capacity;

    for (i, _) in players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.can_keep_goal())
        .take(2)
    {
        starting[i] = true;
        places -= 1;
    }
    for (i, p) in players.iter().enumerate() {
        if places == 0 {
            break;
        }
        if !starting[i] && !p.can_keep_goal() {
            starting[i] = true;
            places -= 1;
        }
    }
    for flag in starting.iter_mut() {
        if places == 0 {
            break;
        }
        if !*flag {
            *flag = true;
            places -= 1;
        }
    }

    let mut pool = MatchPool::default();
    for (p, starts) in players.into_iter().zip(starting) {
        if starts {
            pool.starters.push(p);
        } else {
            pool.substitutes.push(p);
        }
    }
    pool
}
