//! Reference annual rates for retail calculators

use serde::{Deserialize, Serialize};

/// Annual rate used when the caller does not pick one (SELIC)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 14.25;

/// Benchmark rates offered as presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceRate {
    /// Regulated savings account
    Savings,
    /// Interbank deposit rate
    Cdi,
    /// Central bank policy rate
    Selic,
}

impl ReferenceRate {
    pub const ALL: [ReferenceRate; 3] =
        [ReferenceRate::Savings, ReferenceRate::Cdi, ReferenceRate::Selic];

    /// Nominal annual percentage, e.g. 14.25 for 14.25%
    pub fn annual_percent(self) -> f64 {
        match self {
            ReferenceRate::Savings => 6.17,
            ReferenceRate::Cdi => 12.14,
            ReferenceRate::Selic => DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferenceRate::Savings => "Savings",
            ReferenceRate::Cdi => "CDI",
            ReferenceRate::Selic => "SELIC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rates_ordered() {
        let rates: Vec<f64> = ReferenceRate::ALL.iter().map(|r| r.annual_percent()).collect();
        assert!(rates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ReferenceRate::Selic.annual_percent(), DEFAULT_ANNUAL_RATE_PERCENT);
    }
}
