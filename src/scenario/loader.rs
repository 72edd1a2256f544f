//! Load simulation requests from CSV
//!
//! Expected header:
//! `mode,target_amount,monthly_contribution,horizon_years,annual_rate_percent,initial_deposit`
//!
//! Cells that a mode does not use may be left blank or the column omitted.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LoadError, SimulationError};
use crate::goal::SimulationRequest;

/// Raw CSV row; every cell kept as text so bad numbers map to `InvalidInput`
#[derive(Debug, Deserialize)]
struct CsvRow {
    mode: String,
    #[serde(default)]
    target_amount: Option<String>,
    #[serde(default)]
    monthly_contribution: Option<String>,
    #[serde(default)]
    horizon_years: Option<String>,
    #[serde(default)]
    annual_rate_percent: Option<String>,
    #[serde(default)]
    initial_deposit: Option<String>,
}

impl CsvRow {
    fn to_request(self) -> Result<SimulationRequest, SimulationError> {
        let mode: String = self
            .mode
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let rate = required_amount("annualRatePercent", self.annual_rate_percent)?;

        match mode.as_str() {
            "timetotarget" => Ok(SimulationRequest::time_to_target(
                required_amount("targetAmount", self.target_amount)?,
                required_amount("monthlyContribution", self.monthly_contribution)?,
                rate,
                optional_amount("initialDeposit", self.initial_deposit)?.unwrap_or(0.0),
            )),
            "requiredcontribution" => Ok(SimulationRequest::required_contribution(
                required_amount("targetAmount", self.target_amount)?,
                required_years(self.horizon_years)?,
                rate,
                optional_amount("initialDeposit", self.initial_deposit)?.unwrap_or(0.0),
            )),
            "projectedvalue" => Ok(SimulationRequest::projected_value(
                required_amount("initialDeposit", self.initial_deposit)?,
                required_amount("monthlyContribution", self.monthly_contribution)?,
                required_years(self.horizon_years)?,
                rate,
            )),
            _ => Err(SimulationError::invalid(
                "mode",
                format!("unknown mode `{}`", self.mode),
            )),
        }
    }
}

fn optional_amount(field: &str, cell: Option<String>) -> Result<Option<f64>, SimulationError> {
    match cell.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| SimulationError::invalid(field, format!("`{}` is not a number", text))),
    }
}

fn required_amount(field: &str, cell: Option<String>) -> Result<f64, SimulationError> {
    optional_amount(field, cell)?.ok_or_else(|| SimulationError::invalid(field, "is required"))
}

fn required_years(cell: Option<String>) -> Result<u32, SimulationError> {
    match cell.as_deref().map(str::trim) {
        None | Some("") => Err(SimulationError::invalid("horizonYears", "is required")),
        Some(text) => text.parse::<u32>().map_err(|_| {
            SimulationError::invalid(
                "horizonYears",
                format!("`{}` is not a whole number of years", text),
            )
        }),
    }
}

/// Load requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<SimulationRequest>, LoadError> {
    let file = File::open(path)?;
    load_requests_from_reader(file)
}

/// Load requests from any reader; stops at the first bad row
pub fn load_requests_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<SimulationRequest>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (index, record) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        let request = row
            .to_request()
            .map_err(|source| LoadError::Row { row: index + 1, source })?;
        requests.push(request);
    }

    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
mode,target_amount,monthly_contribution,horizon_years,annual_rate_percent,initial_deposit
TimeToTarget,100000,1000,,12,
required-contribution,100000,,5,12,60000
projected_value,,1000,1,12,0
";

    #[test]
    fn test_load_all_modes() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            requests,
            vec![
                SimulationRequest::time_to_target(100_000.0, 1000.0, 12.0, 0.0),
                SimulationRequest::required_contribution(100_000.0, 5, 12.0, 60_000.0),
                SimulationRequest::projected_value(0.0, 1000.0, 1, 12.0),
            ]
        );
    }

    #[test]
    fn test_missing_required_cell() {
        let csv = "mode,target_amount,monthly_contribution,annual_rate_percent\n\
                   TimeToTarget,5000,,3\n";
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();

        match err {
            LoadError::Row { row, source } => {
                assert_eq!(row, 1);
                assert_eq!(source, SimulationError::invalid("monthlyContribution", "is required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell() {
        let csv = "mode,initial_deposit,monthly_contribution,horizon_years,annual_rate_percent\n\
                   ProjectedValue,0,100,2,5\n\
                   ProjectedValue,abc,100,2,5\n";
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Row { row: 2, source: SimulationError::InvalidInput { ref field, .. } }
                if field == "initialDeposit"
        ));
    }

    #[test]
    fn test_fractional_years_rejected() {
        let csv = "mode,target_amount,horizon_years,annual_rate_percent\n\
                   RequiredContribution,1000,2.5,4\n";
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("horizonYears"));
    }

    #[test]
    fn test_unknown_mode() {
        let csv = "mode,annual_rate_percent\nRetireEarly,4\n";
        let err = load_requests_from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 1: invalid input for `mode`: unknown mode `RetireEarly`"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_requests("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
