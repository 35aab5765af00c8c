//! Data structures for a draw: players, formations, squads, configuration and errors.

mod config;
mod error;
mod formation;
mod player;
mod squad;

pub use config::BalanceConfig;
pub use error::{BalanceError, Diagnostic, RosterError, ValidationError};
pub use formation::Formation;
pub use player::{validate_roster, Line, Player, Position, PositionKind};
pub use squad::{Assignment, Side, SlotAssignment, SplitResult, Squad};
