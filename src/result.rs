//! Simulation output records

use serde::{Deserialize, Serialize};

use crate::breakdown::{MonthRow, YearlyEntry};
use crate::goal::SimulationMode;
use crate::model::MONTHS_PER_YEAR;

/// Complete result of one simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub mode: SimulationMode,

    /// Compounding periods simulated
    pub months_elapsed: u32,

    pub final_balance: f64,

    /// Initial deposit plus every periodic contribution applied
    pub total_contributed: f64,

    /// `final_balance - total_contributed`
    pub total_return: f64,

    /// Given for time-to-target and projected value, solved for required contribution
    pub resolved_monthly_contribution: f64,

    /// The lump sum alone meets the target (no time or contribution needed)
    pub covered_by_initial_deposit: bool,

    /// One entry per completed year plus a partial final year
    pub yearly_breakdown: Vec<YearlyEntry>,

    /// Per-month trace, only filled when the engine runs with detailed output
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monthly: Vec<MonthRow>,
}

impl SimulationResult {
    /// Derived display figures
    pub fn summary(&self) -> SimulationSummary {
        let (return_pct, growth_multiple) = if self.total_contributed > 0.0 {
            (
                self.total_return / self.total_contributed * 100.0,
                self.final_balance / self.total_contributed,
            )
        } else {
            (0.0, 0.0)
        };

        SimulationSummary {
            mode: self.mode,
            months_elapsed: self.months_elapsed,
            whole_years: self.months_elapsed / MONTHS_PER_YEAR,
            remaining_months: self.months_elapsed % MONTHS_PER_YEAR,
            final_balance: self.final_balance,
            total_contributed: self.total_contributed,
            total_return: self.total_return,
            return_pct,
            growth_multiple,
            resolved_monthly_contribution: self.resolved_monthly_contribution,
            covered_by_initial_deposit: self.covered_by_initial_deposit,
        }
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub mode: SimulationMode,
    pub months_elapsed: u32,
    pub whole_years: u32,
    pub remaining_months: u32,
    pub final_balance: f64,
    pub total_contributed: f64,
    pub total_return: f64,
    /// Return as a percentage of everything contributed (0 when nothing was)
    pub return_pct: f64,
    /// Final balance per unit contributed (0 when nothing was)
    pub growth_multiple: f64,
    pub resolved_monthly_contribution: f64,
    pub covered_by_initial_deposit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(months: u32, final_balance: f64, contributed: f64) -> SimulationResult {
        SimulationResult {
            mode: SimulationMode::ProjectedValue,
            months_elapsed: months,
            final_balance,
            total_contributed: contributed,
            total_return: final_balance - contributed,
            resolved_monthly_contribution: 100.0,
            covered_by_initial_deposit: false,
            yearly_breakdown: Vec::new(),
            monthly: Vec::new(),
        }
    }

    #[test]
    fn test_summary_ratios() {
        let summary = result(30, 15_000.0, 12_000.0).summary();
        assert_eq!(summary.whole_years, 2);
        assert_eq!(summary.remaining_months, 6);
        assert_relative_eq!(summary.return_pct, 25.0, epsilon = 1e-12);
        assert_relative_eq!(summary.growth_multiple, 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_nothing_contributed() {
        let summary = result(0, 0.0, 0.0).summary();
        assert_eq!(summary.return_pct, 0.0);
        assert_eq!(summary.growth_multiple, 0.0);
    }

    #[test]
    fn test_monthly_trace_omitted_from_json_when_empty() {
        let json = serde_json::to_value(result(12, 1.0, 1.0)).unwrap();
        assert!(json.get("monthly").is_none());
        assert_eq!(json["mode"], "ProjectedValue");
        assert_eq!(json["monthsElapsed"], 12);
    }
}
