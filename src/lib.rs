pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod wiki;
