#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that declares this module
#[ctor::ctor]
fn init_logging() {
    bridge_test_support::logging::init();
}

pub use bridge_test_support::problem_details::assert_problem_details_from_service_response;
pub use bridge_test_support::unique::{unique_email, unique_str};
