pub mod config;
pub mod ergast;
pub mod fetch_limiter;
pub mod race_utils;
pub mod state;
