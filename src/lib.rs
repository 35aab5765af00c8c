//! Casual football draw: split confirmed players into two balanced squads, each with a
//! formation and a position per player.

pub mod logic;
pub mod models;

pub use logic::{
    assign, balance, balance_with_rng, best_formation, choose_goalkeeper, draw, field_count_for,
    resolve_confirmed, select_match_pool, valid_formations, validate, validate_split,
    BalanceOutcome, DrawId, DrawReport, DrawRequest, FormationCatalog, MatchPool, PlayerSlot,
    Resolution, SquadReport, StopReason, Verdict, SUPPORTED_FIELD_COUNTS,
};
pub use models::{
    validate_roster, Assignment, BalanceConfig, BalanceError, Diagnostic, Formation, Line, Player,
    Position, PositionKind, RosterError, Side, SlotAssignment, SplitResult, Squad,
    ValidationError,
};
