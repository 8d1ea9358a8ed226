pub mod app;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod store;
#[cfg(feature = "testing")]
pub mod tests;
pub mod types;
pub mod utils;
