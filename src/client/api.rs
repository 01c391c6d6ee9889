//! HTTP access to the aggregator from the client side.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{from_str, Value};
use thiserror::Error;
use tracing::debug;

use crate::{
    client::view::{ViewData, ViewMode},
    models::{
        race::RaceSummary,
        season::{Season, SeasonListResponse},
        standings::StandingsPayload,
    },
};

pub const DEFAULT_AGGREGATOR_URL: &str = "http://localhost:5000/ergast/f1";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("No data for {season}")]
    NoData { season: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait AggregatorClient: Send + Sync {
    async fn fetch_seasons(&self) -> Result<Vec<Season>, ClientError>;
    async fn fetch_view(&self, season: &str, mode: ViewMode) -> Result<ViewData, ClientError>;
}

pub struct HttpAggregatorClient {
    http: Client,
    base_url: String,
}

impl Default for HttpAggregatorClient {
    fn default() -> Self {
        Self::new(DEFAULT_AGGREGATOR_URL)
    }
}

impl HttpAggregatorClient {
    pub fn new(base_url: &str) -> Self {
        HttpAggregatorClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Option<Value>, ClientError> {
        debug!(%url, "Fetching from aggregator");
        let res = self.http.get(url).send().await?;
        if !res.status().is_success() {
            return Ok(None);
        }
        let body = res.text().await?;
        Ok(Some(from_str(&body)?))
    }
}

#[async_trait]
impl AggregatorClient for HttpAggregatorClient {
    async fn fetch_seasons(&self) -> Result<Vec<Season>, ClientError> {
        let url = format!("{}/seasons.json", self.base_url);
        let payload = self.get_json(&url).await?.ok_or(ClientError::NoData {
            season: "seasons".to_string(),
        })?;
        let response: SeasonListResponse = serde_json::from_value(payload)?;
        Ok(response.season_table.seasons)
    }

    async fn fetch_view(&self, season: &str, mode: ViewMode) -> Result<ViewData, ClientError> {
        let url = format!("{}/{}", self.base_url, mode.endpoint(season));
        let payload = self.get_json(&url).await?.ok_or_else(|| ClientError::NoData {
            season: season.to_string(),
        })?;
        parse_view(mode, payload)
    }
}

#[derive(Deserialize, Default)]
struct LenientRaceTable {
    #[serde(rename = "RaceTable", default)]
    race_table: LenientRaces,
}

#[derive(Deserialize, Default)]
struct LenientRaces {
    #[serde(rename = "Races", default)]
    races: Vec<Value>,
}

/// Interprets an aggregator payload for `mode`. Races without a two-element
/// finite location are skipped; missing tables read as empty.
pub fn parse_view(mode: ViewMode, payload: Value) -> Result<ViewData, ClientError> {
    match mode {
        ViewMode::Races | ViewMode::Sprint => {
            let table: LenientRaceTable = serde_json::from_value(payload)?;
            let races = table
                .race_table
                .races
                .into_iter()
                .filter_map(|race| serde_json::from_value::<RaceSummary>(race).ok())
                .filter(|race| race.location.iter().all(|coord| coord.is_finite()))
                .collect();
            Ok(ViewData::Races(races))
        }
        ViewMode::Driver => {
            let standings: StandingsPayload = serde_json::from_value(payload)?;
            Ok(ViewData::DriverStandings(
                standings
                    .standings_table
                    .standings_lists
                    .into_iter()
                    .next()
                    .map(|list| list.driver_standings)
                    .unwrap_or_default(),
            ))
        }
        ViewMode::Constructor => {
            let standings: StandingsPayload = serde_json::from_value(payload)?;
            Ok(ViewData::ConstructorStandings(
                standings
                    .standings_table
                    .standings_lists
                    .into_iter()
                    .next()
                    .map(|list| list.constructor_standings)
                    .unwrap_or_default(),
            ))
        }
    }
}
