//! Domain checks for request fields

use crate::error::SimulationError;
use crate::model::MONTHS_PER_YEAR;

pub fn require_finite(field: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::invalid(field, "must be a finite number"))
    }
}

/// Value must be strictly greater than zero
pub fn require_positive(field: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(field, "must be greater than 0"))
    }
}

pub fn require_non_negative(field: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(
            field,
            "must be greater than or equal to 0",
        ))
    }
}

/// Whole years, at least one, at most `max_years`
pub fn require_horizon(years: u32, max_years: u32) -> Result<(), SimulationError> {
    if years == 0 {
        return Err(SimulationError::invalid("horizonYears", "must be greater than 0"));
    }
    if years > max_years {
        return Err(SimulationError::invalid(
            "horizonYears",
            format!("must not exceed {} years", max_years),
        ));
    }
    if years.checked_mul(MONTHS_PER_YEAR).is_none() {
        return Err(SimulationError::invalid("horizonYears", "is too long to count in months"));
    }
    Ok(())
}
