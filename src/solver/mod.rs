//! Goal solvers: time to target, required contribution and projected value

mod engine;
mod goals;

pub use engine::{
    simulate, SimulationEngine, SolverConfig, DEFAULT_MAX_HORIZON_YEARS,
    DEFAULT_SEARCH_BOUND_MONTHS, HORIZON_YEARS_LIMIT,
};
