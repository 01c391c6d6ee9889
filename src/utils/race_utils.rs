//! Race enrichment: attaches pole position and winner to every race of a
//! listing by fetching per-round data from upstream.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::{
    models::{
        ergast::{leading_surname, parse_coordinate, RaceTablePayload, RoundRace, ScheduledRace},
        race::RaceSummary,
    },
    utils::ergast::{ErgastClient, UpstreamError},
};

pub const UNKNOWN: &str = "Unknown";
pub const SPRINT_POLE_POSITION: &str = "N/A";
pub const CURRENT_SEASON: &str = "current";

/// Which listing is enriched and from which per-round sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceVariant {
    Season(String),
    Current,
    Sprint(String),
}

impl RaceVariant {
    pub fn season(&self) -> &str {
        match self {
            RaceVariant::Season(season) | RaceVariant::Sprint(season) => season,
            RaceVariant::Current => CURRENT_SEASON,
        }
    }

    pub fn is_sprint(&self) -> bool {
        matches!(self, RaceVariant::Sprint(_))
    }

    pub fn listing_path(&self) -> String {
        match self {
            RaceVariant::Season(season) => format!("{season}.json"),
            RaceVariant::Current => format!("{CURRENT_SEASON}.json"),
            RaceVariant::Sprint(season) => format!("{season}/sprint.json"),
        }
    }

    fn round_path(&self, round: &str, resource: &str) -> String {
        format!("{}/{round}/{resource}.json", self.season())
    }
}

/// A race after enrichment but before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceCandidate {
    pub name: String,
    pub country: String,
    pub location: [Option<f64>; 2],
    pub pole_position: String,
    pub winner: String,
}

impl RaceCandidate {
    pub fn new(race: &ScheduledRace, pole_position: String, winner: String) -> Self {
        let location = race.circuit.as_ref().and_then(|c| c.location.as_ref());
        RaceCandidate {
            name: race.race_name.clone(),
            country: location.map(|l| l.country.clone()).unwrap_or_default(),
            location: [
                location.and_then(|l| parse_coordinate(&l.long)),
                location.and_then(|l| parse_coordinate(&l.lat)),
            ],
            pole_position,
            winner,
        }
    }

    /// Keeps the race only when it is named, has a country and both
    /// coordinates are finite.
    pub fn validate(self) -> Option<RaceSummary> {
        let [Some(long), Some(lat)] = self.location else {
            return None;
        };
        if self.name.is_empty() || self.country.is_empty() {
            return None;
        }
        Some(RaceSummary {
            name: self.name,
            country: self.country,
            location: [long, lat],
            pole_position: self.pole_position,
            winner: self.winner,
        })
    }
}

fn first_race(payload: &RaceTablePayload<RoundRace>) -> Option<&RoundRace> {
    payload.race_table.races.first()
}

pub fn pole_position_from(qualifying: &RaceTablePayload<RoundRace>) -> String {
    first_race(qualifying)
        .and_then(|race| leading_surname(&race.qualifying_results))
        .unwrap_or(UNKNOWN)
        .to_string()
}

pub fn winner_from(results: &RaceTablePayload<RoundRace>) -> String {
    first_race(results)
        .and_then(|race| leading_surname(&race.results))
        .unwrap_or(UNKNOWN)
        .to_string()
}

pub fn sprint_winner_from(sprint: &RaceTablePayload<RoundRace>) -> String {
    first_race(sprint)
        .and_then(|race| leading_surname(&race.sprint_results))
        .unwrap_or(UNKNOWN)
        .to_string()
}

async fn enrich_race(
    ergast: &ErgastClient,
    variant: &RaceVariant,
    race: &ScheduledRace,
) -> Result<RaceCandidate, UpstreamError> {
    let round = race.round.as_str();

    let (pole_position, winner) = if variant.is_sprint() {
        let sprint: RaceTablePayload<RoundRace> =
            ergast.fetch(&variant.round_path(round, "sprint")).await?;
        (SPRINT_POLE_POSITION.to_string(), sprint_winner_from(&sprint))
    } else {
        let qualifying_path = variant.round_path(round, "qualifying");
        let results_path = variant.round_path(round, "results");
        let (qualifying, results) = tokio::try_join!(
            ergast.fetch::<RaceTablePayload<RoundRace>>(&qualifying_path),
            ergast.fetch::<RaceTablePayload<RoundRace>>(&results_path)
        )?;
        (pole_position_from(&qualifying), winner_from(&results))
    };

    debug!(round, %pole_position, %winner, "Enriched race");
    Ok(RaceCandidate::new(race, pole_position, winner))
}

/// Fetches the listing for `variant`, enriches every race concurrently and
/// drops races that fail validation. Listing order is preserved; any failed
/// fetch fails the whole call.
pub async fn enriched_races(
    ergast: &ErgastClient,
    variant: &RaceVariant,
) -> Result<Vec<RaceSummary>, UpstreamError> {
    let listing: RaceTablePayload<ScheduledRace> = ergast.fetch(&variant.listing_path()).await?;
    let races = listing.race_table.races;
    info!(
        season = variant.season(),
        sprint = variant.is_sprint(),
        count = races.len(),
        "Enriching races"
    );

    let candidates =
        try_join_all(races.iter().map(|race| enrich_race(ergast, variant, race))).await?;

    Ok(candidates
        .into_iter()
        .filter_map(RaceCandidate::validate)
        .collect())
}
