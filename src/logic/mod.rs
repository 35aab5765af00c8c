//! Draw logic: formation catalog, position assignment, squad balancing, validation.

mod assignment;
mod balancer;
mod catalog;
mod draw;
mod roster;
mod validation;

pub use assignment::{assign, best_formation};
pub use balancer::{balance, balance_with_rng, choose_goalkeeper, BalanceOutcome, StopReason};
pub use catalog::{valid_formations, FormationCatalog, SUPPORTED_FIELD_COUNTS};
pub use draw::{draw, DrawId, DrawReport, DrawRequest, PlayerSlot, SquadReport, Verdict};
pub use roster::{field_count_for, resolve_confirmed, select_match_pool, MatchPool, Resolution};
pub use validation::{validate, validate_split};
