//! Builds the yearly ledger while a simulation steps forward

use super::rows::{MonthRow, YearlyEntry};
use crate::model::SimulationState;

/// Collects one `YearlyEntry` per completed year, plus a partial final year.
///
/// Feed it the state after every month with [`record`](Self::record), then
/// call [`finish`](Self::finish) with the final state.
#[derive(Debug, Default)]
pub struct BreakdownBuilder {
    entries: Vec<YearlyEntry>,
}

impl BreakdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            entries: Vec::with_capacity(years),
        }
    }

    /// Snapshot the state if it sits on a year boundary
    pub fn record(&mut self, state: &SimulationState) {
        if state.at_year_end() {
            self.entries.push(YearlyEntry::new(
                state.year,
                state.month_in_year,
                state.contributed_to_date,
                state.eop_balance,
            ));
        }
    }

    /// Close the ledger at the last simulated month.
    ///
    /// A partial final year is reported as-is. A simulation that never
    /// stepped reports its initial state as year 1.
    pub fn finish(mut self, state: &SimulationState) -> Vec<YearlyEntry> {
        if state.month == 0 {
            self.entries.push(YearlyEntry::new(
                1,
                0,
                state.contributed_to_date,
                state.eop_balance,
            ));
        } else if !state.at_year_end() {
            self.entries.push(YearlyEntry::new(
                state.year,
                state.month_in_year,
                state.contributed_to_date,
                state.eop_balance,
            ));
        }
        self.entries
    }

    /// Rebuild the ledger from a stored monthly trace
    pub fn from_trace(initial_deposit: f64, trace: &[MonthRow]) -> Vec<YearlyEntry> {
        let Some(last) = trace.last() else {
            return vec![YearlyEntry::new(1, 0, initial_deposit, initial_deposit)];
        };

        let mut entries: Vec<YearlyEntry> = trace
            .iter()
            .filter(|row| row.month_in_year == 12)
            .map(|row| YearlyEntry::new(row.year, 12, row.contributed_to_date, row.balance))
            .collect();

        if last.month_in_year != 12 {
            entries.push(YearlyEntry::new(
                last.year,
                last.month_in_year,
                last.contributed_to_date,
                last.balance,
            ));
        }
        entries
    }
}
