//! Formation: how many field players stand in each non-goalkeeper position.

use crate::models::player::{Line, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Position counts for the field players of one squad (goalkeeper excluded, always 1).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formation {
    counts: BTreeMap<Position, u8>,
}

impl Formation {
    /// Build from `(position, count)` pairs. Missing field positions count as zero and any
    /// goalkeeper entry is ignored.
    pub fn from_counts(counts: impl IntoIterator<Item = (Position, u8)>) -> Self {
        let mut map: BTreeMap<Position, u8> =
            Position::FIELD.iter().map(|&p| (p, 0)).collect();
        for (position, count) in counts {
            if position != Position::Gk {
                map.insert(position, count);
            }
        }
        Self { counts: map }
    }

    pub fn count(&self, position: Position) -> u8 {
        self.counts.get(&position).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<Position, u8> {
        &self.counts
    }

    /// Number of field slots.
    pub fn field_count(&self) -> usize {
        self.counts.values().map(|&c| usize::from(c)).sum()
    }

    pub fn line_count(&self, line: Line) -> usize {
        self.counts
            .iter()
            .filter(|(p, _)| p.line() == line)
            .map(|(_, &c)| usize::from(c))
            .sum()
    }

    pub fn defenders(&self) -> usize {
        self.line_count(Line::Defense)
    }

    pub fn midfielders(&self) -> usize {
        self.line_count(Line::Midfield)
    }

    pub fn forwards(&self) -> usize {
        self.line_count(Line::Forward)
    }

    /// Conventional `D-M-F` label, e.g. `"2-3-1"`.
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.defenders(), self.midfielders(), self.forwards())
    }

    /// One entry per slot, in `Position::FIELD` order.
    pub fn slots(&self) -> Vec<Position> {
        Position::FIELD
            .iter()
            .flat_map(|&p| std::iter::repeat(p).take(usize::from(self.count(p))))
            .collect()
    }

    /// Cardinality limits hold and every line (defense, midfield, forward) is covered.
    pub fn is_valid(&self) -> bool {
        let within_limits = Position::FIELD
            .iter()
            .all(|&p| self.count(p) <= p.max_per_squad());
        within_limits && self.defenders() >= 1 && self.midfielders() >= 1 && self.forwards() >= 1
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
