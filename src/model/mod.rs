//! Monthly compounding model shared by every solver

mod rate;
mod state;
pub mod annuity;

pub use rate::{advance, monthly_rate, MonthlyRate, MONTHS_PER_YEAR};
pub use state::SimulationState;
