//! Simulation requests and their parameter validation

mod request;
mod validate;

pub use request::{
    ProjectedValueParams, RequiredContributionParams, SimulationMode, SimulationRequest,
    TimeToTargetParams,
};
pub use validate::{require_finite, require_horizon, require_non_negative, require_positive};
