//! Scenario runner for batch simulations
//!
//! One engine configuration shared across many independent requests. Requests
//! share no state, so batches run in parallel.

use log::info;
use rayon::prelude::*;

use crate::error::SimulationError;
use crate::goal::SimulationRequest;
use crate::result::SimulationResult;
use crate::solver::{SimulationEngine, SolverConfig};

/// Runs batches of requests against one engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let request = SimulationRequest::projected_value(0.0, 500.0, 10, 10.0);
///
/// for (rate, result) in runner.rate_sensitivity(&request, &[6.17, 12.14, 14.25]) {
///     println!("{rate}: {:?}", result.map(|r| r.final_balance));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: SimulationEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config),
        }
    }

    /// Run a single request
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        self.engine.simulate(request)
    }

    /// Run every request in parallel; results keep the input order
    pub fn run_batch(
        &self,
        requests: &[SimulationRequest],
    ) -> Vec<Result<SimulationResult, SimulationError>> {
        info!("running batch of {} requests", requests.len());
        requests
            .par_iter()
            .map(|request| self.engine.simulate(request))
            .collect()
    }

    /// Re-run one request at each annual rate
    pub fn rate_sensitivity(
        &self,
        request: &SimulationRequest,
        annual_rates_percent: &[f64],
    ) -> Vec<(f64, Result<SimulationResult, SimulationError>)> {
        annual_rates_percent
            .par_iter()
            .map(|&rate| (rate, self.engine.simulate(&request.with_annual_rate(rate))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let runner = ScenarioRunner::new();
        let requests = vec![
            SimulationRequest::projected_value(0.0, 1000.0, 1, 12.0),
            SimulationRequest::time_to_target(-1.0, 100.0, 5.0, 0.0),
            SimulationRequest::time_to_target(100_000.0, 1000.0, 0.0, 0.0),
        ];

        let results = runner.run_batch(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().months_elapsed, 12);
        assert!(matches!(results[1], Err(SimulationError::InvalidInput { .. })));
        assert_eq!(results[2].as_ref().unwrap().months_elapsed, 100);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let requests: Vec<_> = (1..=20)
            .map(|years| SimulationRequest::projected_value(1000.0, 100.0, years, 8.0))
            .collect();

        let batch = runner.run_batch(&requests);
        for (request, result) in requests.iter().zip(&batch) {
            assert_eq!(result, &runner.run(request));
        }
    }

    #[test]
    fn test_higher_rate_needs_less_contribution() {
        let runner = ScenarioRunner::new();
        let request = SimulationRequest::required_contribution(200_000.0, 15, 0.0, 5000.0);

        let results = runner.rate_sensitivity(&request, &[0.0, 6.17, 12.14, 14.25]);
        let payments: Vec<f64> = results
            .iter()
            .map(|(_, r)| r.as_ref().unwrap().resolved_monthly_contribution)
            .collect();

        assert_eq!(results[0].0, 0.0);
        assert!(payments.windows(2).all(|w| w[1] < w[0]));
    }
}
