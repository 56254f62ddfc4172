pub mod standings;

pub use standings::{rank_by, StandingsEntry};

use crate::config::SeasonConfig;
use crate::driver::Driver;
use crate::error::{Result, SeasonError};
use crate::roster::{parse_roster, Roster, RosterTeam};
use crate::team::Team;

/// Identity of a season as seen by its drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonInfo {
    pub year: i32,
    pub number_of_drivers: usize,
}

/// A season: every team and driver on the roster plus the finishing order
/// of the most recent race.
///
/// The season is the sole owner of its drivers. Teams refer to drivers by
/// id and drivers refer to teams by index, so dropping a season releases
/// everything exactly once.
#[derive(Debug, Clone)]
pub struct Season {
    info: SeasonInfo,
    teams: Vec<Team>,
    drivers: Vec<Driver>,
    last_race_results: Vec<u32>,
    races_run: usize,
    sentinel: String,
}

impl Season {
    /// Build a season from roster text using the default settings.
    pub fn new(roster_text: &str) -> Result<Self> {
        Self::with_config(roster_text, &SeasonConfig::default())
    }

    pub fn with_config(roster_text: &str, config: &SeasonConfig) -> Result<Self> {
        let roster = parse_roster(roster_text, &config.sentinel)?;
        Self::from_roster(&roster, config)
    }

    /// Build a season from an already parsed roster.
    ///
    /// Driver ids are handed out sequentially from 1 in roster order. Either
    /// the whole season is built or an error is returned; nothing partial
    /// escapes.
    pub fn from_roster(roster: &Roster, config: &SeasonConfig) -> Result<Self> {
        let info = SeasonInfo {
            year: roster.year,
            number_of_drivers: roster.number_of_drivers(),
        };

        let mut teams = Vec::with_capacity(roster.number_of_teams());
        let mut drivers = Vec::with_capacity(info.number_of_drivers);
        let mut next_id: u32 = 1;

        for (team_index, entry) in roster.teams.iter().enumerate() {
            let mut team = Team::new(&entry.name)?;
            for name in &entry.drivers {
                let mut driver = Driver::new(name, next_id)?;
                next_id += 1;
                driver.set_season(info);
                team.add_driver(driver.id())?;
                driver.set_team(team_index);
                drivers.push(driver);
            }
            teams.push(team);
        }

        tracing::debug!(
            year = info.year,
            teams = teams.len(),
            drivers = drivers.len(),
            "season created"
        );

        Ok(Self {
            info,
            teams,
            drivers,
            last_race_results: Vec::new(),
            races_run: 0,
            sentinel: config.sentinel.clone(),
        })
    }

    pub fn info(&self) -> SeasonInfo {
        self.info
    }

    pub fn year(&self) -> i32 {
        self.info.year
    }

    pub fn number_of_drivers(&self) -> usize {
        self.drivers.len()
    }

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    /// Drivers in id order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Teams in roster order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn driver(&self, id: u32) -> Option<&Driver> {
        self.driver_index(id).map(|i| &self.drivers[i])
    }

    pub fn team_of(&self, driver: &Driver) -> Option<&Team> {
        driver.team().and_then(|i| self.teams.get(i))
    }

    /// Driver ids of the most recent race in finishing order. Empty until a
    /// race has been recorded.
    pub fn last_race_results(&self) -> &[u32] {
        &self.last_race_results
    }

    pub fn races_run(&self) -> usize {
        self.races_run
    }

    /// Finishing position (1-based) of a driver in the most recent race.
    pub fn last_race_position(&self, driver_id: u32) -> Option<usize> {
        self.last_race_results
            .iter()
            .position(|&id| id == driver_id)
            .map(|i| i + 1)
    }

    /// Record one race. `results[i]` is the id of the driver who finished in
    /// position `i + 1`.
    ///
    /// The whole result list is checked before any points are awarded. The
    /// finishing order replaces the one kept from the previous race.
    pub fn add_race_result(&mut self, results: &[u32]) -> Result<()> {
        if results.len() != self.drivers.len() {
            return Err(SeasonError::ResultsLength {
                expected: self.drivers.len(),
                actual: results.len(),
            });
        }

        let mut seen = vec![false; self.drivers.len()];
        let mut order = Vec::with_capacity(results.len());
        for (i, &id) in results.iter().enumerate() {
            let index = self.driver_index(id).ok_or(SeasonError::InvalidDriver(id))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(SeasonError::DuplicateResult(id));
            }
            // Overflow is checked here so a failing race awards nobody
            self.drivers[index].points_after(i + 1)?;
            order.push(index);
        }

        for (i, index) in order.into_iter().enumerate() {
            self.drivers[index].add_race_result(i + 1)?;
        }
        self.last_race_results = results.to_vec();
        self.races_run += 1;

        tracing::debug!(race = self.races_run, winner = ?results.first(), "race recorded");
        Ok(())
    }

    /// Render the roster back into the text format it was parsed from.
    pub fn to_roster_text(&self) -> String {
        let roster = Roster {
            year: self.info.year,
            teams: self
                .teams
                .iter()
                .map(|team| RosterTeam {
                    name: team.name().to_string(),
                    drivers: team
                        .driver_ids()
                        .filter_map(|id| self.driver(id))
                        .map(|d| d.name().to_string())
                        .collect(),
                })
                .collect(),
        };
        roster.to_text(&self.sentinel)
    }

    fn driver_index(&self, id: u32) -> Option<usize> {
        (id as usize)
            .checked_sub(1)
            .filter(|&i| i < self.drivers.len())
    }
}
