pub mod bridge;
pub mod claims;
pub mod codec;
