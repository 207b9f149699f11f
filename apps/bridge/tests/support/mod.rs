#![allow(dead_code)]

pub mod app_builder;
pub mod directory;
pub mod tokens;

pub use app_builder::create_test_app;
pub use directory::MockDirectory;
