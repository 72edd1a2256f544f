//! Goal Simulator - investment goal solvers over monthly compounding
//!
//! This library provides:
//! - Time to reach a savings target
//! - Monthly contribution required to reach a target by a horizon
//! - Projected value of a lump sum plus monthly contributions
//! - Year-by-year breakdown of contributions, returns and balance
//! - Parallel batch evaluation and CSV request loading

pub mod error;
pub mod model;
pub mod goal;
pub mod breakdown;
pub mod result;
pub mod solver;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoadError, SimulationError};
pub use model::{advance, monthly_rate, MonthlyRate};
pub use goal::{SimulationMode, SimulationRequest};
pub use breakdown::{BreakdownBuilder, MonthRow, YearlyEntry};
pub use result::{SimulationResult, SimulationSummary};
pub use solver::{simulate, SimulationEngine, SolverConfig};
pub use rates::ReferenceRate;
pub use scenario::ScenarioRunner;
