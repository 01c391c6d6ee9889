//! View state of the globe client.
//!
//! State changes only through user actions and fetch completions. Each fetch
//! carries the generation it was started in, so a response that arrives after
//! a newer fetch was started is dropped instead of overwriting fresher data.

use chrono::{Datelike, Utc};

use crate::models::{
    race::RaceSummary,
    season::Season,
    standings::{ConstructorStanding, DriverStanding},
};

pub const SEASONS_ERROR: &str = "Failed to load seasons";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Races,
    Sprint,
    Driver,
    Constructor,
}

impl ViewMode {
    /// Aggregator path for this mode, relative to `/ergast/f1`.
    pub fn endpoint(self, season: &str) -> String {
        match self {
            ViewMode::Races => format!("{season}/races.json"),
            ViewMode::Sprint => format!("{season}/sprint/races.json"),
            ViewMode::Driver => format!("{season}/driverstandings.json"),
            ViewMode::Constructor => format!("{season}/constructorstandings.json"),
        }
    }

    pub fn shows_globe(self) -> bool {
        matches!(self, ViewMode::Races | ViewMode::Sprint)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewData {
    Races(Vec<RaceSummary>),
    DriverStandings(Vec<DriverStanding>),
    ConstructorStandings(Vec<ConstructorStanding>),
}

/// Identifies one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub season: String,
    pub mode: ViewMode,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub seasons: Vec<String>,
    pub season: Option<String>,
    pub view_mode: ViewMode,
    pub races: Vec<RaceSummary>,
    pub driver_standings: Vec<DriverStanding>,
    pub constructor_standings: Vec<ConstructorStanding>,
    pub selected_race: Option<RaceSummary>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            loading: true,
            ..Default::default()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies the season list loaded on mount. Seasons arrive oldest first
    /// and are shown newest first; the newest becomes the selected season.
    pub fn seasons_loaded<E>(&mut self, result: Result<Vec<Season>, E>) -> Option<FetchTicket> {
        match result {
            Ok(seasons) => {
                self.seasons = seasons.into_iter().rev().map(|s| s.season).collect();
                let default = self
                    .seasons
                    .first()
                    .cloned()
                    .unwrap_or_else(current_year);
                self.season = Some(default);
            }
            Err(_) => {
                self.season = Some(current_year());
                let ticket = self.begin_fetch();
                self.error = Some(SEASONS_ERROR.to_string());
                return ticket;
            }
        }
        self.begin_fetch()
    }

    /// Selects a season; starts a new fetch cycle if it changed.
    pub fn set_season(&mut self, season: &str) -> Option<FetchTicket> {
        if self.season.as_deref() == Some(season) {
            return None;
        }
        self.season = Some(season.to_string());
        self.selected_race = None;
        self.begin_fetch()
    }

    /// Switches the view mode; starts a new fetch cycle if it changed.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Option<FetchTicket> {
        if self.view_mode == mode {
            return None;
        }
        self.view_mode = mode;
        self.selected_race = None;
        self.begin_fetch()
    }

    /// Starts a fetch for the current season and mode. Returns `None` while
    /// no season is known.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let season = self.season.clone()?;
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Some(FetchTicket {
            generation: self.generation,
            season,
            mode: self.view_mode,
        })
    }

    /// Applies a completed fetch. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn apply<E: std::fmt::Display>(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ViewData, E>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match result {
            Ok(ViewData::Races(races)) => self.races = races,
            Ok(ViewData::DriverStandings(standings)) => self.driver_standings = standings,
            Ok(ViewData::ConstructorStandings(standings)) => self.constructor_standings = standings,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
        true
    }

    /// Opens the detail panel for the race plotted under `point_id`.
    pub fn select_point(&mut self, point_id: Option<&str>) {
        self.selected_race = point_id
            .and_then(|id| self.races.iter().find(|race| race.name == id))
            .cloned();
    }

    pub fn close_details(&mut self) {
        self.selected_race = None;
    }

    pub fn shows_globe(&self) -> bool {
        self.view_mode.shows_globe() && self.error.is_none()
    }
}

fn current_year() -> String {
    Utc::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(name: &str) -> RaceSummary {
        RaceSummary {
            name: name.to_string(),
            country: "Italy".to_string(),
            location: [9.28, 45.62],
            pole_position: "Sainz".to_string(),
            winner: "Verstappen".to_string(),
        }
    }

    fn season(year: &str) -> Season {
        Season {
            season: year.to_string(),
            url: format!("https://en.wikipedia.org/wiki/{year}_Formula_One_World_Championship"),
        }
    }

    fn mounted() -> (ViewState, FetchTicket) {
        let mut state = ViewState::new();
        let ticket = state
            .seasons_loaded::<String>(Ok(vec![season("2022"), season("2023"), season("2024")]))
            .unwrap();
        (state, ticket)
    }

    #[test]
    fn newest_season_is_selected_on_mount() {
        let (state, ticket) = mounted();
        assert_eq!(state.seasons, ["2024", "2023", "2022"]);
        assert_eq!(state.season.as_deref(), Some("2024"));
        assert_eq!(ticket.mode, ViewMode::Races);
        assert!(state.loading);
    }

    #[test]
    fn season_failure_falls_back_to_current_year() {
        let mut state = ViewState::new();
        let ticket = state.seasons_loaded(Err("connection refused")).unwrap();
        assert_eq!(state.season, Some(current_year()));
        assert_eq!(ticket.season, current_year());
        assert_eq!(state.error.as_deref(), Some(SEASONS_ERROR));
    }

    #[test]
    fn empty_season_list_falls_back_to_current_year() {
        let mut state = ViewState::new();
        state.seasons_loaded::<String>(Ok(vec![])).unwrap();
        assert_eq!(state.season, Some(current_year()));
    }

    #[test]
    fn errors_clear_loading_and_keep_previous_data() {
        let (mut state, ticket) = mounted();
        let monza = vec![race("Italian Grand Prix")];
        assert!(state.apply::<String>(&ticket, Ok(ViewData::Races(monza))));
        assert!(!state.loading);

        let ticket = state.set_season("2023").unwrap();
        assert!(state.apply(&ticket, Err("No data for 2023")));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("No data for 2023"));
        assert_eq!(state.races.len(), 1);
        assert!(!state.shows_globe());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let (mut state, _) = mounted();
        let stale = state.set_view_mode(ViewMode::Sprint).unwrap();
        let fresh = state.set_view_mode(ViewMode::Driver).unwrap();

        assert!(state.apply::<String>(&fresh, Ok(ViewData::DriverStandings(vec![]))));
        assert!(!state.apply::<String>(&stale, Ok(ViewData::Races(vec![race("Sprint GP")]))));
        assert!(state.races.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn unchanged_selection_starts_no_fetch() {
        let (mut state, _) = mounted();
        assert!(state.set_season("2024").is_none());
        assert!(state.set_view_mode(ViewMode::Races).is_none());
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn point_selection_and_reset() {
        let (mut state, ticket) = mounted();
        state.apply::<String>(&ticket, Ok(ViewData::Races(vec![race("Italian Grand Prix")])));

        state.select_point(Some("Italian Grand Prix"));
        assert_eq!(state.selected_race.as_ref().map(|r| r.winner.as_str()), Some("Verstappen"));

        state.select_point(Some("Unknown GP"));
        assert!(state.selected_race.is_none());

        state.select_point(Some("Italian Grand Prix"));
        state.close_details();
        assert!(state.selected_race.is_none());

        state.select_point(Some("Italian Grand Prix"));
        state.set_view_mode(ViewMode::Constructor);
        assert!(state.selected_race.is_none());
    }

    #[test]
    fn endpoints_per_mode() {
        assert_eq!(ViewMode::Races.endpoint("2023"), "2023/races.json");
        assert_eq!(ViewMode::Sprint.endpoint("2023"), "2023/sprint/races.json");
        assert_eq!(ViewMode::Driver.endpoint("2023"), "2023/driverstandings.json");
        assert_eq!(ViewMode::Constructor.endpoint("2023"), "2023/constructorstandings.json");
    }
}
