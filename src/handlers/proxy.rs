use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::{models::error::Error, routes::catalog::Endpoint, utils::state::AppState};

#[derive(Deserialize, Debug, Default)]
pub struct ProxyParams {
    pub season: Option<String>,
    pub round: Option<String>,
}

/// Forwards one catalog endpoint upstream and returns the `MRData` payload.
pub async fn forward(
    state: &AppState,
    endpoint: &Endpoint,
    params: ProxyParams,
    query: Vec<(String, String)>,
) -> Result<Json<Value>, Error> {
    let path = endpoint.upstream_path(params.season.as_deref(), params.round.as_deref());

    match state.ergast.fetch_mrdata(&path, &query).await {
        Ok(mrdata) => Ok(Json(mrdata)),
        Err(err) => {
            error!("Error fetching {}: {}", endpoint.upstream, err);
            Err(err.into())
        }
    }
}
