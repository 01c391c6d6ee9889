//! Non-rendering core of the globe client: view state, aggregator access,
//! globe point derivation and standings tables.

pub mod api;
pub mod controller;
pub mod globe;
pub mod table;
pub mod view;

pub use api::{AggregatorClient, ClientError, HttpAggregatorClient};
pub use controller::ViewController;
pub use view::{FetchTicket, ViewData, ViewMode, ViewState};
