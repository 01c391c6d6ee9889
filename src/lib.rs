//! Proxy and aggregation layer over an Ergast-compatible motorsport
//! statistics API, plus the view-state core of the globe client.

pub mod client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;

pub use routes::{build_router, init_tracing, make_app};
pub use utils::{config::Config, state::AppState};
