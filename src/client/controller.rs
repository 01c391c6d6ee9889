use tracing::warn;

use crate::client::{
    api::{AggregatorClient, ClientError},
    view::{FetchTicket, ViewData, ViewMode, ViewState},
};

/// Runs the fetch for `ticket` without touching any view state, so callers
/// can issue it concurrently and hand the result to [`ViewState::apply`].
pub async fn load<C: AggregatorClient + ?Sized>(
    client: &C,
    ticket: &FetchTicket,
) -> Result<ViewData, ClientError> {
    client.fetch_view(&ticket.season, ticket.mode).await
}

/// Drives a [`ViewState`] from user actions against an aggregator.
pub struct ViewController<C> {
    client: C,
    state: ViewState,
}

impl<C: AggregatorClient> ViewController<C> {
    pub fn new(client: C) -> Self {
        ViewController {
            client,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Loads the season list and then the default view.
    pub async fn mount(&mut self) {
        let seasons = self.client.fetch_seasons().await;
        if let Err(e) = &seasons {
            warn!("Loading seasons failed: {}", e);
        }
        let ticket = self.state.seasons_loaded(seasons);
        self.run(ticket).await;
    }

    pub async fn change_season(&mut self, season: &str) {
        let ticket = self.state.set_season(season);
        self.run(ticket).await;
    }

    pub async fn change_view_mode(&mut self, mode: ViewMode) {
        let ticket = self.state.set_view_mode(mode);
        self.run(ticket).await;
    }

    async fn run(&mut self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let result = load(&self.client, &ticket).await;
        if !self.state.apply(&ticket, result) {
            warn!(generation = ticket.generation, "Discarded stale response");
        }
    }
}
