//! Formation catalog: every legal formation for a given number of field players.

use crate::models::{BalanceError, Formation, Position};

/// Field player counts the catalog supports (12- and 14-player matches).
pub const SUPPORTED_FIELD_COUNTS: [usize; 2] = [5, 6];

/// Enumerate every formation whose counts sum to `field_count`, respect the lateral/central
/// limits and cover all three lines.
///
/// Order is deterministic: an odometer over `LCB, RCB, LM, CM, RM, CF` with `CF` the fastest
/// digit.
pub fn valid_formations(field_count: usize) -> Vec<Formation> {
    let limits: Vec<u8> = Position::FIELD.iter().map(|p| p.max_per_squad()).collect();
    let mut digits = vec![0u8; limits.len()];
    let mut out = Vec::new();

    loop {
        let total: usize = digits.iter().map(|&d| usize::from(d)).sum();
        if total == field_count {
            let formation =
                Formation::from_counts(Position::FIELD.iter().copied().zip(digits.iter().copied()));
            if formation.is_valid() {
                out.push(formation);
            }
        }

        // Advance the odometer; stop once every digit has wrapped.
        let mut i = digits.len();
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if digits[i] < limits[i] {
                digits[i] += 1;
                break;
            }
            digits[i] = 0;
        }
    }
}

/// Validated, immutable list of formations for one field count. Built once per run.
#[derive(Clone, Debug)]
pub struct FormationCatalog {
    field_count: usize,
    formations: Vec<Formation>,
}

impl FormationCatalog {
    pub fn new(field_count: usize) -> Result<Self, BalanceError> {
        if !SUPPORTED_FIELD_COUNTS.contains(&field_count) {
            return Err(BalanceError::UnsupportedFieldCount(field_count));
        }
        let formations = valid_formations(field_count);
        if formations.is_empty() {
            return Err(BalanceError::EmptyCatalog { field_count });
        }
        log::debug!(
            "Formation catalog for {} field players: {} formations",
            field_count,
            formations.len()
        );
        Ok(Self {
            field_count,
            formations,
        })
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}
