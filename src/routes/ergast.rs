use axum::{
    extract::{Path, Query, State},
    routing::{get, MethodRouter},
    Router,
};

use crate::{
    handlers::{
        proxy::{forward, ProxyParams},
        race::{current_races, season_races, sprint_races},
        seasons::list_seasons,
    },
    routes::catalog::{local_paths, Endpoint, EndpointKind, ENDPOINTS},
    utils::state::AppState,
};

fn proxy_route(endpoint: &'static Endpoint) -> MethodRouter<AppState> {
    if endpoint.has_params() {
        get(
            move |State(state): State<AppState>,
                  Path(params): Path<ProxyParams>,
                  Query(query): Query<Vec<(String, String)>>| async move {
                forward(&state, endpoint, params, query).await
            },
        )
    } else {
        get(
            move |State(state): State<AppState>,
                  Query(query): Query<Vec<(String, String)>>| async move {
                forward(&state, endpoint, ProxyParams::default(), query).await
            },
        )
    }
}

/// Every route below `/ergast/f1`, each registered bare, with a trailing
/// slash and with `.json`.
pub fn ergast_routes() -> Router<AppState> {
    let mut router = Router::new();
    for path in local_paths("/{season}/races") {
        router = router.route(&path, get(season_races));
    }
    for path in local_paths("/{season}/sprint/races") {
        router = router.route(&path, get(sprint_races));
    }

    for endpoint in ENDPOINTS {
        let method_router = match endpoint.kind {
            EndpointKind::Proxy => proxy_route(endpoint),
            EndpointKind::SeasonList => get(list_seasons),
            EndpointKind::CurrentRaces => get(current_races),
        };
        for path in endpoint.local_paths() {
            router = router.route(&path, method_router.clone());
        }
    }

    router
}
