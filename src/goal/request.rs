//! Request types, one per solver mode

use serde::{Deserialize, Serialize};

use super::validate::{require_horizon, require_non_negative, require_positive};
use crate::error::SimulationError;
use crate::model::{monthly_rate, MonthlyRate};

/// Which question the caller is asking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationMode {
    /// How long until the target is reached?
    TimeToTarget,
    /// How much per month to reach the target in time?
    RequiredContribution,
    /// What will the account be worth at the horizon?
    ProjectedValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeToTargetParams {
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    #[serde(default)]
    pub initial_deposit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredContributionParams {
    pub target_amount: f64,
    pub horizon_years: u32,
    pub annual_rate_percent: f64,
    #[serde(default)]
    pub initial_deposit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedValueParams {
    pub initial_deposit: f64,
    pub monthly_contribution: f64,
    pub horizon_years: u32,
    pub annual_rate_percent: f64,
}

/// A single simulation request, tagged by `mode` on the wire
///
/// ```ignore
/// {"mode": "TimeToTarget", "targetAmount": 100000, "monthlyContribution": 1000,
///  "annualRatePercent": 12}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum SimulationRequest {
    TimeToTarget(TimeToTargetParams),
    RequiredContribution(RequiredContributionParams),
    ProjectedValue(ProjectedValueParams),
}

impl SimulationRequest {
    pub fn time_to_target(
        target_amount: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        initial_deposit: f64,
    ) -> Self {
        SimulationRequest::TimeToTarget(TimeToTargetParams {
            target_amount,
            monthly_contribution,
            annual_rate_percent,
            initial_deposit,
        })
    }

    pub fn required_contribution(
        target_amount: f64,
        horizon_years: u32,
        annual_rate_percent: f64,
        initial_deposit: f64,
    ) -> Self {
        SimulationRequest::RequiredContribution(RequiredContributionParams {
            target_amount,
            horizon_years,
            annual_rate_percent,
            initial_deposit,
        })
    }

    pub fn projected_value(
        initial_deposit: f64,
        monthly_contribution: f64,
        horizon_years: u32,
        annual_rate_percent: f64,
    ) -> Self {
        SimulationRequest::ProjectedValue(ProjectedValueParams {
            initial_deposit,
            monthly_contribution,
            horizon_years,
            annual_rate_percent,
        })
    }

    /// Same request at a different annual rate
    pub fn with_annual_rate(&self, annual_rate_percent: f64) -> Self {
        let mut request = self.clone();
        let rate = match &mut request {
            SimulationRequest::TimeToTarget(p) => &mut p.annual_rate_percent,
            SimulationRequest::RequiredContribution(p) => &mut p.annual_rate_percent,
            SimulationRequest::ProjectedValue(p) => &mut p.annual_rate_percent,
        };
        *rate = annual_rate_percent;
        request
    }

    pub fn initial_deposit(&self) -> f64 {
        match self {
            SimulationRequest::TimeToTarget(p) => p.initial_deposit,
            SimulationRequest::RequiredContribution(p) => p.initial_deposit,
            SimulationRequest::ProjectedValue(p) => p.initial_deposit,
        }
    }

    pub fn mode(&self) -> SimulationMode {
        match self {
            SimulationRequest::TimeToTarget(_) => SimulationMode::TimeToTarget,
            SimulationRequest::RequiredContribution(_) => SimulationMode::RequiredContribution,
            SimulationRequest::ProjectedValue(_) => SimulationMode::ProjectedValue,
        }
    }

    /// Check every field against its domain and derive the monthly rate.
    ///
    /// Runs before any simulation so a failed request never produces output.
    pub fn validate(&self, max_horizon_years: u32) -> Result<MonthlyRate, SimulationError> {
        match self {
            SimulationRequest::TimeToTarget(p) => {
                require_positive("targetAmount", p.target_amount)?;
                require_positive("monthlyContribution", p.monthly_contribution)?;
                require_non_negative("initialDeposit", p.initial_deposit)?;
                monthly_rate(p.annual_rate_percent)
            }
            SimulationRequest::RequiredContribution(p) => {
                require_positive("targetAmount", p.target_amount)?;
                require_horizon(p.horizon_years, max_horizon_years)?;
                require_non_negative("initialDeposit", p.initial_deposit)?;
                monthly_rate(p.annual_rate_percent)
            }
            SimulationRequest::ProjectedValue(p) => {
                require_non_negative("initialDeposit", p.initial_deposit)?;
                require_positive("monthlyContribution", p.monthly_contribution)?;
                require_horizon(p.horizon_years, max_horizon_years)?;
                monthly_rate(p.annual_rate_percent)
            }
        }
    }
}
