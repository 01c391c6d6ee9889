//! Fixed table of proxied endpoints.

use crate::utils::race_utils::CURRENT_SEASON;

pub const ERGAST_PREFIX: &str = "/ergast/f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Forwarded verbatim to upstream.
    Proxy,
    /// Served by the seasons listing handler.
    SeasonList,
    /// Served by the current-season race enrichment handler.
    CurrentRaces,
}

#[derive(Debug)]
pub struct Endpoint {
    /// Local path below [`ERGAST_PREFIX`], in axum path syntax.
    pub path: &'static str,
    /// Upstream path template relative to the API root.
    pub upstream: &'static str,
    pub kind: EndpointKind,
}

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint { path: "/circuits", upstream: "circuits", kind: EndpointKind::Proxy },
    Endpoint { path: "/constructors", upstream: "constructors", kind: EndpointKind::Proxy },
    Endpoint {
        path: "/{season}/constructorstandings",
        upstream: "{season}/constructorStandings",
        kind: EndpointKind::Proxy,
    },
    Endpoint { path: "/drivers", upstream: "drivers", kind: EndpointKind::Proxy },
    Endpoint {
        path: "/{season}/driverstandings",
        upstream: "{season}/driverStandings",
        kind: EndpointKind::Proxy,
    },
    Endpoint {
        path: "/{season}/{round}/laps",
        upstream: "{season}/{round}/laps",
        kind: EndpointKind::Proxy,
    },
    Endpoint {
        path: "/{season}/{round}/pitstops",
        upstream: "{season}/{round}/pitstops",
        kind: EndpointKind::Proxy,
    },
    Endpoint {
        path: "/{season}/qualifying",
        upstream: "{season}/qualifying",
        kind: EndpointKind::Proxy,
    },
    Endpoint { path: "/races", upstream: "races", kind: EndpointKind::CurrentRaces },
    Endpoint { path: "/results", upstream: "results", kind: EndpointKind::Proxy },
    Endpoint { path: "/seasons", upstream: "seasons", kind: EndpointKind::SeasonList },
    Endpoint { path: "/sprint", upstream: "sprint", kind: EndpointKind::Proxy },
    Endpoint { path: "/status", upstream: "status", kind: EndpointKind::Proxy },
];

impl Endpoint {
    pub fn has_params(&self) -> bool {
        self.path.contains('{')
    }

    /// The bare, trailing-slash and `.json` forms of the local path.
    pub fn local_paths(&self) -> [String; 3] {
        local_paths(self.path)
    }

    /// Path as advertised by the capability listing.
    pub fn documented_path(&self) -> String {
        format!("{ERGAST_PREFIX}{}/", self.path)
    }

    /// Substitutes path parameters into the upstream template. A missing
    /// season becomes `current`, a missing round becomes empty.
    pub fn upstream_path(&self, season: Option<&str>, round: Option<&str>) -> String {
        let path = self
            .upstream
            .replace("{season}", season.unwrap_or(CURRENT_SEASON))
            .replace("{round}", round.unwrap_or(""));

        if path.ends_with(".json") {
            path
        } else {
            format!("{path}.json")
        }
    }
}

/// Registers `path` bare, with a trailing slash (the form the listing
/// advertises) and with a `.json` suffix.
pub fn local_paths(path: &str) -> [String; 3] {
    [path.to_string(), format!("{path}/"), format!("{path}.json")]
}

pub fn find(path: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|endpoint| endpoint.path == path)
}
