//! Simulation engine: dispatch and the shared monthly stepping loop

use std::env;

use log::debug;

use crate::breakdown::{BreakdownBuilder, MonthRow, YearlyEntry};
use crate::error::SimulationError;
use crate::goal::{SimulationMode, SimulationRequest};
use crate::model::{MonthlyRate, SimulationState, MONTHS_PER_YEAR};
use crate::result::SimulationResult;

/// 100 years
pub const DEFAULT_SEARCH_BOUND_MONTHS: u32 = 1200;

pub const DEFAULT_MAX_HORIZON_YEARS: u32 = 1000;

/// Largest horizon whose month count still fits in a `u32`
pub const HORIZON_YEARS_LIMIT: u32 = u32::MAX / MONTHS_PER_YEAR;

/// Configuration for a simulation engine
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Longest time-to-target search before giving up
    pub search_bound_months: u32,

    /// Longest horizon accepted for required contribution and projected value
    pub max_horizon_years: u32,

    /// Whether to keep the per-month trace in the result
    pub detailed_output: bool,
}

impl SolverConfig {
    /// Build from `GOAL_SEARCH_BOUND_MONTHS`, `GOAL_MAX_HORIZON_YEARS` and
    /// `GOAL_DETAILED_OUTPUT`, falling back to defaults. The horizon is capped
    /// at `HORIZON_YEARS_LIMIT`.
    ///
    /// For binaries; the engine itself never reads the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let search_bound_months = lookup("GOAL_SEARCH_BOUND_MONTHS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.search_bound_months);
        let max_horizon_years = lookup("GOAL_MAX_HORIZON_YEARS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_horizon_years)
            .min(HORIZON_YEARS_LIMIT);
        let detailed_output = lookup("GOAL_DETAILED_OUTPUT")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.detailed_output);

        Self {
            search_bound_months,
            max_horizon_years,
            detailed_output,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            search_bound_months: DEFAULT_SEARCH_BOUND_MONTHS,
            max_horizon_years: DEFAULT_MAX_HORIZON_YEARS,
            detailed_output: false,
        }
    }
}

/// Outcome of one pass of the stepping loop
#[derive(Debug)]
pub(super) struct Run {
    pub state: SimulationState,
    pub yearly: Vec<YearlyEntry>,
    pub monthly: Vec<MonthRow>,
}

impl Run {
    pub fn into_result(
        self,
        mode: SimulationMode,
        resolved_monthly_contribution: f64,
        covered_by_initial_deposit: bool,
    ) -> SimulationResult {
        let final_balance = self.state.eop_balance;
        let total_contributed = self.state.contributed_to_date;
        SimulationResult {
            mode,
            months_elapsed: self.state.month,
            final_balance,
            total_contributed,
            total_return: final_balance - total_contributed,
            resolved_monthly_contribution,
            covered_by_initial_deposit,
            yearly_breakdown: self.yearly,
            monthly: self.monthly,
        }
    }
}

/// Runs simulation requests. Holds only its configuration; every call works
/// on its own local state.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    pub(super) config: SolverConfig,
}

impl SimulationEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the request, then run the matching solver
    pub fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        let rate = request.validate(self.config.max_horizon_years)?;
        debug!("simulating {:?} at monthly rate {}", request.mode(), rate.value());

        match request {
            SimulationRequest::TimeToTarget(p) => self.solve_time_to_target(p, rate),
            SimulationRequest::RequiredContribution(p) => self.solve_required_contribution(p, rate),
            SimulationRequest::ProjectedValue(p) => self.solve_projected_value(p, rate),
        }
    }

    /// Step up to `max_months` months from `initial_deposit`, stopping after the
    /// first month for which `stop` holds.
    ///
    /// Every solver goes through here so that all modes share one `advance`
    /// ordering and one breakdown.
    pub(super) fn run<F>(
        &self,
        initial_deposit: f64,
        rate: MonthlyRate,
        contribution: f64,
        max_months: u32,
        stop: F,
    ) -> Result<Run, SimulationError>
    where
        F: Fn(&SimulationState) -> bool,
    {
        let mut state = SimulationState::initial(initial_deposit);
        let years = max_months.div_ceil(MONTHS_PER_YEAR).max(1) as usize;
        let mut breakdown = BreakdownBuilder::with_capacity(years);
        let mut monthly = if self.config.detailed_output {
            Vec::with_capacity(max_months as usize)
        } else {
            Vec::new()
        };

        for _ in 0..max_months {
            state.advance_month(rate, contribution);

            if !state.eop_balance.is_finite() {
                return Err(SimulationError::NonFiniteBalance { month: state.month });
            }

            breakdown.record(&state);
            if self.config.detailed_output {
                monthly.push(MonthRow::from_state(&state, rate, contribution));
            }

            if stop(&state) {
                break;
            }
        }

        Ok(Run {
            yearly: breakdown.finish(&state),
            state,
            monthly,
        })
    }
}

/// Run a request with the default configuration
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    SimulationEngine::default().simulate(request)
}
