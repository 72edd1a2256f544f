//! The three solver modes, all built on `SimulationEngine::run`

use log::{debug, warn};

use super::engine::SimulationEngine;
use crate::error::SimulationError;
use crate::goal::{
    ProjectedValueParams, RequiredContributionParams, SimulationMode, TimeToTargetParams,
};
use crate::model::{annuity, MonthlyRate, MONTHS_PER_YEAR};
use crate::result::SimulationResult;

impl SimulationEngine {
    /// Smallest whole number of months for the balance to reach the target
    pub(super) fn solve_time_to_target(
        &self,
        p: &TimeToTargetParams,
        rate: MonthlyRate,
    ) -> Result<SimulationResult, SimulationError> {
        let bound = self.config.search_bound_months;

        if p.initial_deposit >= p.target_amount {
            debug!("initial deposit already meets target");
            let run = self.run(p.initial_deposit, rate, p.monthly_contribution, 0, |_| true)?;
            return Ok(run.into_result(SimulationMode::TimeToTarget, p.monthly_contribution, true));
        }

        // Closed form only holds without a lump sum; a finite estimate well past
        // the bound rules the goal out without stepping. Anything else steps.
        if p.initial_deposit == 0.0 {
            let estimate = annuity::months_to_reach(p.target_amount, p.monthly_contribution, rate);
            if estimate.is_finite() && estimate.ceil() > bound as f64 + 1.0 {
                warn!("closed form needs {:.1} months, bound is {}", estimate, bound);
                return Err(SimulationError::GoalUnreachable { bound_months: bound });
            }
            debug!("closed form estimates {:.2} months", estimate);
        }

        let target = p.target_amount;
        let run = self.run(p.initial_deposit, rate, p.monthly_contribution, bound, |s| {
            s.eop_balance >= target
        })?;

        if run.state.eop_balance < target {
            warn!("target {} not reached within {} months", target, bound);
            return Err(SimulationError::GoalUnreachable { bound_months: bound });
        }

        Ok(run.into_result(SimulationMode::TimeToTarget, p.monthly_contribution, false))
    }

    /// Level monthly payment that reaches the target at the horizon
    pub(super) fn solve_required_contribution(
        &self,
        p: &RequiredContributionParams,
        rate: MonthlyRate,
    ) -> Result<SimulationResult, SimulationError> {
        let months = p.horizon_years * MONTHS_PER_YEAR;

        // Lump sum on its own, stepped the same way as every other balance
        let lump_sum = self.run(p.initial_deposit, rate, 0.0, months, |_| false)?;
        let lump_sum_value = lump_sum.state.eop_balance;

        if lump_sum_value >= p.target_amount {
            debug!(
                "initial deposit grows to {:.2}, covering target {:.2}",
                lump_sum_value, p.target_amount
            );
            return Ok(lump_sum.into_result(SimulationMode::RequiredContribution, 0.0, true));
        }

        let shortfall = p.target_amount - lump_sum_value;
        let factor = annuity::future_value_factor(rate, months);
        if !factor.is_finite() {
            return Err(SimulationError::NonFiniteBalance { month: months });
        }
        let payment = shortfall / factor;

        let run = self.run(p.initial_deposit, rate, payment, months, |_| false)?;
        Ok(run.into_result(SimulationMode::RequiredContribution, payment, false))
    }

    /// Balance after the full horizon
    pub(super) fn solve_projected_value(
        &self,
        p: &ProjectedValueParams,
        rate: MonthlyRate,
    ) -> Result<SimulationResult, SimulationError> {
        let months = p.horizon_years * MONTHS_PER_YEAR;
        let run = self.run(p.initial_deposit, rate, p.monthly_contribution, months, |_| false)?;
        Ok(run.into_result(SimulationMode::ProjectedValue, p.monthly_contribution, false))
    }
}
