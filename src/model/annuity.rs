//! Closed-form ordinary annuity helpers
//!
//! Used to solve for a level payment and to estimate the time to a target
//! when there is no lump sum. Balances themselves always come from stepping.

use super::rate::MonthlyRate;

/// Future value of 1 paid at the end of each of `months` periods
pub fn future_value_factor(rate: MonthlyRate, months: u32) -> f64 {
    if rate.is_zero() {
        return months as f64;
    }

    // ln_1p/exp_m1 keep precision once 1 + r rounds to 1
    let r = rate.value();
    (months as f64 * r.ln_1p()).exp_m1() / r
}

/// Level end-of-period payment that accumulates to `shortfall` after `months`
pub fn payment_for_shortfall(shortfall: f64, rate: MonthlyRate, months: u32) -> f64 {
    shortfall / future_value_factor(rate, months)
}

/// Fractional number of months for an annuity of `contribution` to reach `target`
/// starting from an empty balance
///
/// May be infinite when `target * r` overflows; callers treat that as no estimate.
pub fn months_to_reach(target: f64, contribution: f64, rate: MonthlyRate) -> f64 {
    if rate.is_zero() {
        return target / contribution;
    }

    let r = rate.value();
    (target * r / contribution).ln_1p() / r.ln_1p()
}
