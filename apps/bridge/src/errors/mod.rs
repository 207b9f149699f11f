//! Error codes for the bridge API.

pub mod error_code;

pub use error_code::ErrorCode;
