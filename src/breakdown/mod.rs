//! Year-by-year ledger of a simulation

mod rows;
mod builder;
mod export;

pub use rows::{MonthRow, YearlyEntry};
pub use builder::BreakdownBuilder;
pub use export::{write_breakdown_csv, write_monthly_csv};
