//! Output rows for monthly and yearly views

use serde::{Deserialize, Serialize};

use crate::model::{MonthlyRate, SimulationState};

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRow {
    pub month: u32,
    pub year: u32,
    pub month_in_year: u32,
    pub bop_balance: f64,
    pub interest: f64,
    pub contribution: f64,
    pub balance: f64,
    pub contributed_to_date: f64,
}

impl MonthRow {
    /// Capture the month that `state` has just stepped through
    pub fn from_state(state: &SimulationState, rate: MonthlyRate, contribution: f64) -> Self {
        Self {
            month: state.month,
            year: state.year,
            month_in_year: state.month_in_year,
            bop_balance: state.bop_balance,
            interest: state.interest_credited(rate),
            contribution,
            balance: state.eop_balance,
            contributed_to_date: state.contributed_to_date,
        }
    }
}

/// Snapshot at the end of a year, or at the last simulated month of a partial year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyEntry {
    /// 1-indexed; year 1 covers months 1-12
    pub year: u32,

    /// Months of this year actually simulated (12 except for a partial final year)
    pub months_in_year: u32,

    pub contributed_to_date: f64,

    /// Always `balance - contributed_to_date`
    pub accrued_return: f64,

    pub balance: f64,
}

impl YearlyEntry {
    pub fn new(year: u32, months_in_year: u32, contributed_to_date: f64, balance: f64) -> Self {
        Self {
            year,
            months_in_year,
            contributed_to_date,
            accrued_return: balance - contributed_to_date,
            balance,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.months_in_year < 12
    }
}
