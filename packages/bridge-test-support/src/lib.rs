//! Bridge test support utilities
//!
//! This crate provides utilities shared between unit and integration tests:
//! unified logging initialization, problem-details contract assertions, and
//! unique test data helpers. It deliberately does not depend on the app
//! crate so the error contract is asserted structurally.

pub mod logging;
pub mod problem_details;
pub mod unique;
