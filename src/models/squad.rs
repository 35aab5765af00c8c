//! Assignment, Squad and SplitResult: the output of one balancing run.

use crate::models::formation::Formation;
use crate::models::player::{Player, Position};
use serde::{Deserialize, Serialize};

/// Which of the two squads.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

/// One player placed in one slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignment {
    /// Player name (unique key into the roster).
    pub player: String,
    pub position: Position,
    pub score: f64,
    /// True if `position` is one of the player's eligible positions.
    pub natural: bool,
}

impl SlotAssignment {
    pub fn new(player: &Player, position: Position, score: f64) -> Self {
        Self {
            player: player.name.clone(),
            position,
            score,
            natural: player.is_eligible(position),
        }
    }
}

/// Ordered player→slot bijection for a group of players.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub slots: Vec<SlotAssignment>,
}

impl Assignment {
    pub fn new(slots: Vec<SlotAssignment>) -> Self {
        Self { slots }
    }

    pub fn total_score(&self) -> f64 {
        self.slots.iter().map(|s| s.score).sum()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot given to `name`, if assigned.
    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.slots
            .iter()
            .find(|s| s.player == name)
            .map(|s| s.position)
    }

    pub fn count(&self, position: Position) -> usize {
        self.slots.iter().filter(|s| s.position == position).count()
    }

    /// The same bijection with `first` placed ahead of the existing slots.
    pub fn prepend(self, first: SlotAssignment) -> Self {
        let mut slots = Vec::with_capacity(self.slots.len() + 1);
        slots.push(first);
        slots.extend(self.slots);
        Self { slots }
    }
}

/// A squad: its members, chosen formation and the full assignment (goalkeeper first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub players: Vec<Player>,
    pub formation: Formation,
    pub assignment: Assignment,
}

impl Squad {
    pub fn new(players: Vec<Player>, formation: Formation, assignment: Assignment) -> Self {
        Self {
            players,
            formation,
            assignment,
        }
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn total_score(&self) -> f64 {
        self.assignment.total_score()
    }

    /// `total_score / squad size` (0.0 for an empty squad).
    pub fn average_score(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.total_score() / self.players.len() as f64
    }

    /// Mean `overall_rating` of the members, independent of slots.
    pub fn overall_average(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.players.iter().map(|p| p.overall_rating).sum::<f64>() / self.players.len() as f64
    }

    pub fn goalkeeper(&self) -> Option<&SlotAssignment> {
        self.assignment
            .slots
            .iter()
            .find(|s| s.position == Position::Gk)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn member_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}

/// One candidate partition of the pool into two squads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub squad_a: Squad,
    pub squad_b: Squad,
    pub score_difference: f64,
}

impl SplitResult {
    pub fn new(squad_a: Squad, squad_b: Squad) -> Self {
        let score_difference = (squad_a.total_score() - squad_b.total_score()).abs();
        Self {
            squad_a,
            squad_b,
            score_difference,
        }
    }

    pub fn squad(&self, side: Side) -> &Squad {
        match side {
            Side::A => &self.squad_a,
            Side::B => &self.squad_b,
        }
    }

    /// Side holding the named player, if any.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.squad_a.contains(name) {
            Some(Side::A)
        } else if self.squad_b.contains(name) {
            Some(Side::B)
        } else {
            None
        }
    }
}
