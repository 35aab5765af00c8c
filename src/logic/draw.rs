//! Full draw: confirmed names in, a serialisable report of both squads out.

use crate::logic::balancer::{balance, BalanceOutcome, StopReason};
use crate::logic::roster::{field_count_for, resolve_confirmed, select_match_pool};
use crate::models::{
    validate_roster, BalanceConfig, BalanceError, Diagnostic, Formation, Line, Player, Position,
    Side, Squad,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a draw (for callers that store results).
pub type DrawId = Uuid;

/// Input of a draw: the roster, who confirmed, and the search settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    pub roster: Vec<Player>,
    /// Names of the confirmed players (matched case-insensitively).
    pub confirmed: Vec<String>,
    #[serde(default)]
    pub config: BalanceConfig,
    /// Derive `config.field_count` from the number of confirmed players.
    #[serde(default)]
    pub auto_field_count: bool,
}

/// How even the two squads are, by the difference of their per-player averages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Under 0.3.
    Excellent,
    /// Under 0.7.
    Good,
    /// Under 1.2.
    Moderate,
    Significant,
}

impl Verdict {
    pub fn from_average_difference(difference: f64) -> Self {
        let d = difference.abs();
        if d < 0.3 {
            Verdict::Excellent
        } else if d < 0.7 {
            Verdict::Good
        } else if d < 1.2 {
            Verdict::Moderate
        } else {
            Verdict::Significant
        }
    }
}

/// One player in the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSlot {
    pub name: String,
    pub position: Position,
    pub line: Line,
    pub score: f64,
    /// False when the player is out of position.
    pub natural: bool,
}

/// One squad in the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadReport {
    pub side: Side,
    pub members: Vec<String>,
    pub formation: Formation,
    /// `D-M-F`, e.g. `"2-2-1"`.
    pub formation_label: String,
    /// Goalkeeper first, then field slots.
    pub players: Vec<PlayerSlot>,
    pub total_score: f64,
    pub average_score: f64,
    pub overall_average: f64,
}

impl SquadReport {
    pub fn from_squad(side: Side, squad: &Squad) -> Self {
        Self {
            side,
            members: squad.member_names(),
            formation: squad.formation.clone(),
            formation_label: squad.formation.label(),
            players: squad
                .assignment
                .slots
                .iter()
                .map(|s| PlayerSlot {
                    name: s.player.clone(),
                    position: s.position,
                    line: s.position.line(),
                    score: s.score,
                    natural: s.natural,
                })
                .collect(),
            total_score: squad.total_score(),
            average_score: squad.average_score(),
            overall_average: squad.overall_average(),
        }
    }

    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.position)
    }
}

/// Result of a draw, ready to be stored or rendered by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawReport {
    pub id: DrawId,
    pub drawn_at: DateTime<Utc>,
    /// Squad A then squad B.
    pub squads: Vec<SquadReport>,
    pub score_difference: f64,
    pub verdict: Verdict,
    pub iterations: usize,
    pub stop_reason: StopReason,
    pub substitutes: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DrawReport {
    pub fn new(outcome: &BalanceOutcome, substitutes: Vec<String>, diagnostics: Vec<Diagnostic>) -> Self {
        let split = &outcome.split;
        let average_difference =
            split.squad_a.average_score() - split.squad_b.average_score();
        Self {
            id: Uuid::new_v4(),
            drawn_at: Utc::now(),
            squads: vec![
                SquadReport::from_squad(Side::A, &split.squad_a),
                SquadReport::from_squad(Side::B, &split.squad_b),
            ],
            score_difference: split.score_difference,
            verdict: Verdict::from_average_difference(average_difference),
            iterations: outcome.iterations,
            stop_reason: outcome.stop_reason,
            substitutes,
            diagnostics,
        }
    }

    pub fn squad(&self, side: Side) -> Option<&SquadReport> {
        self.squads.iter().find(|s| s.side == side)
    }
}

/// Run a complete draw.
///
/// 1. Validate the roster and resolve confirmed names (unknown/repeated names are reported).
/// 2. Reject an odd or too small pool before any search.
/// 3. Bench players beyond two full squads.
/// 4. Balance and build the report.
pub fn draw(request: &DrawRequest) -> Result<DrawReport, BalanceError> {
    validate_roster(&request.roster)?;
    let resolution = resolve_confirmed(&request.roster, &request.confirmed);
    let mut diagnostics = resolution.diagnostics;
    let confirmed = resolution.players.len();

    let mut config = request.config.clone();
    if request.auto_field_count {
        if let Some(field_count) = field_count_for(confirmed) {
            config.field_count = field_count;
        }
    }

    let required = config.pool_size();
    if confirmed % 2 != 0 || confirmed < required {
        return Err(BalanceError::InsufficientPlayers {
            confirmed,
            required,
        });
    }

    let pool = select_match_pool(resolution.players, config.field_count);
    let substitutes = pool.substitute_names();
    if !substitutes.is_empty() {
        let d = Diagnostic::Substitutes {
            players: substitutes.clone(),
        };
        log::warn!("{}", d);
        diagnostics.push(d);
    }

    let outcome = balance(&pool.starters, &config)?;
    diagnostics.extend(outcome.diagnostics.iter().cloned());
    Ok(DrawReport::new(&outcome, substitutes, diagnostics))
}
