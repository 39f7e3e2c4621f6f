//! Shared test mocks and fixtures for the Lingua learning backend.

mod clock;
mod fixtures;

pub use clock::{FixedClock, StepClock};
pub use fixtures::sample_catalog;
