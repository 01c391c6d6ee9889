use reqwest::Client;
use tracing::info;

use crate::utils::{config::Config, ergast::ErgastClient, fetch_limiter::FetchLimiter};

#[derive(Clone)]
pub struct AppState {
    pub ergast: ErgastClient,
}

impl AppState {
    pub fn init(config: &Config) -> Self {
        info!(
            max_concurrent = config.upstream_max_concurrent,
            "Upstream API at {}", config.upstream_base_url
        );
        let limiter = FetchLimiter::new(config.upstream_max_concurrent);
        let ergast = ErgastClient::new(Client::new(), &config.upstream_base_url, limiter);
        AppState { ergast }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_client_follows_config() {
        let state = AppState::init(&Config::with_upstream("http://localhost:9000/api/f1/"));
        assert_eq!(state.ergast.base_url(), "http://localhost:9000/api/f1");
        assert_eq!(
            state.ergast.url("2023/races.json"),
            "http://localhost:9000/api/f1/2023/races.json"
        );
    }
}
