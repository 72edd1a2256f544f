//! Batch evaluation of many simulation requests

mod runner;
pub mod loader;

pub use runner::ScenarioRunner;
pub use loader::{load_requests, load_requests_from_reader};
