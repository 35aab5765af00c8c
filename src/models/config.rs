//! Balancer configuration.

use crate::models::error::BalanceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search budget and scoring knobs for one balancing run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceConfig {
    /// Field players per squad (5 for 12-player matches, 6 for 14-player matches).
    #[serde(default = "default_field_count")]
    pub field_count: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Stop as soon as a split's score difference is at or below this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Multiplier applied to the GK rating of a goalkeeper who is not GK-eligible.
    #[serde(default = "default_goalkeeper_penalty")]
    pub goalkeeper_penalty: f64,
    /// Seed for reproducible draws; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Wall-clock budget, checked between iterations.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

fn default_field_count() -> usize {
    5
}

fn default_max_iterations() -> usize {
    1000
}

fn default_tolerance() -> f64 {
    0.05
}

fn default_goalkeeper_penalty() -> f64 {
    0.3
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            field_count: default_field_count(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            goalkeeper_penalty: default_goalkeeper_penalty(),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl BalanceConfig {
    pub fn new(field_count: usize, max_iterations: usize, tolerance: f64) -> Self {
        Self {
            field_count,
            max_iterations,
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_goalkeeper_penalty(mut self, penalty: f64) -> Self {
        self.goalkeeper_penalty = penalty;
        self
    }

    /// Players per squad, goalkeeper included.
    pub fn squad_size(&self) -> usize {
        self.field_count + 1
    }

    /// Players needed for two full squads.
    pub fn pool_size(&self) -> usize {
        2 * self.squad_size()
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Reject a non-finite tolerance and a goalkeeper penalty outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if !self.tolerance.is_finite() {
            return Err(BalanceError::InvalidConfig {
                field: "tolerance",
                value: self.tolerance,
            });
        }
        if !(0.0..=1.0).contains(&self.goalkeeper_penalty) {
            return Err(BalanceError::InvalidConfig {
                field: "goalkeeperPenalty",
                value: self.goalkeeper_penalty,
            });
        }
        Ok(())
    }
}
