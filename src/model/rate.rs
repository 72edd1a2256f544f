//! Effective monthly rate and the single-period stepping function

use crate::error::SimulationError;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Effective monthly rate derived from a nominal annual percentage
///
/// Only constructible from the annual percentage, so the monthly value can
/// never drift from the rate it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MonthlyRate(f64);

impl MonthlyRate {
    /// Simple division: 12% a year is 1% a month (no geometric conversion)
    pub fn from_annual_percent(annual_rate_percent: f64) -> Self {
        Self(annual_rate_percent / 100.0 / 12.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Validate an annual percentage and convert it to the monthly rate
pub fn monthly_rate(annual_rate_percent: f64) -> Result<MonthlyRate, SimulationError> {
    if !annual_rate_percent.is_finite() {
        return Err(SimulationError::invalid(
            "annualRatePercent",
            "must be a finite number",
        ));
    }
    if annual_rate_percent < 0.0 {
        return Err(SimulationError::invalid(
            "annualRatePercent",
            "must be greater than or equal to 0",
        ));
    }
    Ok(MonthlyRate::from_annual_percent(annual_rate_percent))
}

/// Advance one month: interest accrues on the balance, then the contribution lands.
///
/// The contribution made in a month earns nothing in that month.
#[inline]
pub fn advance(balance: f64, rate: MonthlyRate, contribution: f64) -> f64 {
    balance * (1.0 + rate.0) + contribution
}
