//! Running state of one simulation

use super::rate::{advance, MonthlyRate, MONTHS_PER_YEAR};

/// State of the account at a point in time during a simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Months simulated so far (0 before the first step)
    pub month: u32,

    /// Year containing the current month (1-indexed)
    pub year: u32,

    /// Month within the year (1-12, 0 before the first step)
    pub month_in_year: u32,

    /// Beginning of period balance
    pub bop_balance: f64,

    /// End of period balance
    pub eop_balance: f64,

    /// Initial deposit plus every contribution applied so far
    pub contributed_to_date: f64,
}

impl SimulationState {
    /// Initialize state at time zero with the lump sum already in the account
    pub fn initial(initial_deposit: f64) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            bop_balance: initial_deposit,
            eop_balance: initial_deposit,
            contributed_to_date: initial_deposit,
        }
    }

    /// Advance to the next month, applying one period of `advance`
    pub fn advance_month(&mut self, rate: MonthlyRate, contribution: f64) {
        self.month += 1;
        self.year = (self.month - 1) / MONTHS_PER_YEAR + 1;
        self.month_in_year = (self.month - 1) % MONTHS_PER_YEAR + 1;

        self.bop_balance = self.eop_balance;
        self.eop_balance = advance(self.bop_balance, rate, contribution);
        self.contributed_to_date += contribution;
    }

    /// Interest credited during the month just simulated
    pub fn interest_credited(&self, rate: MonthlyRate) -> f64 {
        self.bop_balance * rate.value()
    }

    /// Balance minus everything paid in
    pub fn accrued_return(&self) -> f64 {
        self.eop_balance - self.contributed_to_date
    }

    pub fn at_year_end(&self) -> bool {
        self.month_in_year == MONTHS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::monthly_rate;

    #[test]
    fn test_timing_rolls_over_year() {
        let rate = monthly_rate(0.0).unwrap();
        let mut state = SimulationState::initial(0.0);

        for _ in 0..12 {
            state.advance_month(rate, 1.0);
        }
        assert_eq!(state.month, 12);
        assert_eq!(state.year, 1);
        assert!(state.at_year_end());

        state.advance_month(rate, 1.0);
        assert_eq!(state.month, 13);
        assert_eq!(state.year, 2);
        assert_eq!(state.month_in_year, 1);
        assert!(!state.at_year_end());
    }

    #[test]
    fn test_contributed_includes_initial_deposit() {
        let rate = monthly_rate(6.0).unwrap();
        let mut state = SimulationState::initial(500.0);
        state.advance_month(rate, 100.0);
        state.advance_month(rate, 100.0);

        assert_eq!(state.contributed_to_date, 700.0);
        assert!(state.eop_balance > state.contributed_to_date);
        assert_eq!(state.accrued_return(), state.eop_balance - 700.0);
    }

    #[test]
    fn test_bop_follows_prior_eop() {
        let rate = monthly_rate(12.0).unwrap();
        let mut state = SimulationState::initial(1000.0);
        state.advance_month(rate, 0.0);
        let first_eop = state.eop_balance;
        state.advance_month(rate, 0.0);

        assert_eq!(state.bop_balance, first_eop);
        assert!((state.interest_credited(rate) - first_eop * 0.01).abs() < 1e-9);
    }
}
