use std::cmp::Reverse;

use serde::Serialize;

use super::Season;
use crate::driver::Driver;
use crate::error::{Result, SeasonError};
use crate::team::Team;

/// Tie-break key used when there is no last-race position to compare.
///
/// Every race covers every driver, so this only applies before the first
/// race, when all drivers tie on it and keep id order.
const NO_HISTORY: usize = usize::MAX;

/// Order `items` by descending points, breaking ties by ascending
/// `tie_break`. Items equal on both keys keep their input order.
pub fn rank_by<'a, T, P, B>(items: &'a [T], points: P, tie_break: B) -> Vec<&'a T>
where
    P: Fn(&T) -> u32,
    B: Fn(&T) -> usize,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by_cached_key(|item| (Reverse(points(item)), tie_break(item)));
    ranked
}

/// One row of a standings table, detached from the season for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsEntry {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drivers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_race_position: Option<usize>,
}

impl Season {
    /// Tie-break key of a single driver.
    fn driver_tie_break(&self, driver_id: u32) -> usize {
        self.last_race_position(driver_id).unwrap_or(NO_HISTORY)
    }

    /// Tie-break key of a team: the key of its best placed driver.
    fn team_tie_break(&self, team: &Team) -> usize {
        team.driver_ids()
            .map(|id| self.driver_tie_break(id))
            .min()
            .unwrap_or(NO_HISTORY)
    }

    pub fn team_points(&self, team: &Team) -> u32 {
        team.points(&self.drivers)
    }

    /// Drivers from most to fewest points. Ties go to the driver who placed
    /// better in the most recent race.
    pub fn drivers_standings(&self) -> Vec<&Driver> {
        rank_by(&self.drivers, Driver::points, |d| self.driver_tie_break(d.id()))
    }

    /// Teams from most to fewest points. Ties go to the team whose best
    /// driver placed better in the most recent race.
    pub fn teams_standings(&self) -> Vec<&Team> {
        rank_by(
            &self.teams,
            |t| self.team_points(t),
            |t| self.team_tie_break(t),
        )
    }

    /// Driver at a 1-based standings position.
    pub fn driver_by_position(&self, position: usize) -> Result<&Driver> {
        let max = self.number_of_drivers();
        if position == 0 || position > max {
            return Err(SeasonError::InvalidPosition { position, max });
        }
        Ok(self.drivers_standings()[position - 1])
    }

    /// Team at a 1-based standings position.
    pub fn team_by_position(&self, position: usize) -> Result<&Team> {
        let max = self.number_of_teams();
        if position == 0 || position > max {
            return Err(SeasonError::InvalidPosition { position, max });
        }
        Ok(self.teams_standings()[position - 1])
    }

    fn driver_entry(&self, position: usize, driver: &Driver) -> StandingsEntry {
        StandingsEntry {
            position,
            id: Some(driver.id()),
            name: driver.name().to_string(),
            points: driver.points(),
            team: self.team_of(driver).map(|t| t.name().to_string()),
            drivers: Vec::new(),
            last_race_position: self.last_race_position(driver.id()),
        }
    }

    fn team_entry(&self, position: usize, team: &Team) -> StandingsEntry {
        StandingsEntry {
            position,
            id: None,
            name: team.name().to_string(),
            points: self.team_points(team),
            team: None,
            drivers: team
                .driver_ids()
                .filter_map(|id| self.driver(id))
                .map(|d| d.name().to_string())
                .collect(),
            last_race_position: team
                .driver_ids()
                .filter_map(|id| self.last_race_position(id))
                .min(),
        }
    }

    pub fn driver_standings_entries(&self) -> Vec<StandingsEntry> {
        let entries: Vec<_> = self
            .drivers_standings()
            .into_iter()
            .enumerate()
            .map(|(i, driver)| self.driver_entry(i + 1, driver))
            .collect();
        tracing::debug!(entries = entries.len(), "driver standings computed");
        entries
    }

    pub fn team_standings_entries(&self) -> Vec<StandingsEntry> {
        self.teams_standings()
            .into_iter()
            .enumerate()
            .map(|(i, team)| self.team_entry(i + 1, team))
            .collect()
    }

    pub fn driver_entry_at(&self, position: usize) -> Result<StandingsEntry> {
        let driver = self.driver_by_position(position)?;
        Ok(self.driver_entry(position, driver))
    }

    pub fn team_entry_at(&self, position: usize) -> Result<StandingsEntry> {
        let team = self.team_by_position(position)?;
        Ok(self.team_entry(position, team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2018\nFerrari\nSebastian Vettel\nKimi Raikonen\nMercedes\nLewis Hamilton\nValtteri Bottas\nRedBull Racing\nDaniel\nMax Verstappen\nMcLaren\nFernando Alonso\nNone";

    fn sample_season() -> Season {
        Season::new(SAMPLE).unwrap()
    }

    fn driver_ids(standings: &[&Driver]) -> Vec<u32> {
        standings.iter().map(|d| d.id()).collect()
    }

    fn team_names<'a>(standings: &[&'a Team]) -> Vec<&'a str> {
        standings.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_rank_by_orders_points_then_tie_break() {
        let items: Vec<(u32, usize)> = vec![(1, 5), (3, 2), (3, 1), (2, 0)];
        let ranked = rank_by(&items, |i| i.0, |i| i.1);
        assert_eq!(ranked, vec![&(3, 1), &(3, 2), &(2, 0), &(1, 5)]);
    }

    #[test]
    fn test_rank_by_is_stable_on_full_ties() {
        let items: Vec<(&str, usize)> = vec![("a", 0), ("b", 0), ("c", 0)];
        let ranked = rank_by(&items, |_| 0, |i| i.1);
        assert_eq!(ranked, vec![&("a", 0), &("b", 0), &("c", 0)]);
    }

    #[test]
    fn test_initial_standings_follow_id_order() {
        let season = sample_season();
        assert_eq!(driver_ids(&season.drivers_standings()), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(
            team_names(&season.teams_standings()),
            vec!["Ferrari", "Mercedes", "RedBull Racing", "McLaren"]
        );
    }

    #[test]
    fn test_sample_race_standings() {
        let mut season = sample_season();
        season.add_race_result(&[2, 3, 1, 5, 4, 7, 6]).unwrap();

        assert_eq!(driver_ids(&season.drivers_standings()), vec![2, 3, 1, 5, 4, 7, 6]);
        assert_eq!(season.driver_by_position(1).unwrap().id(), 2);
        assert_eq!(season.driver_by_position(7).unwrap().id(), 6);

        // Ferrari 10, Mercedes 7, RedBull 3, McLaren 1
        assert_eq!(
            team_names(&season.teams_standings()),
            vec!["Ferrari", "Mercedes", "RedBull Racing", "McLaren"]
        );
        assert_eq!(season.team_by_position(1).unwrap().name(), "Ferrari");
    }

    #[test]
    fn test_driver_tie_goes_to_last_race_winner() {
        let mut season = sample_season();
        // Race 1: driver 1 wins (6), driver 2 last (0)
        season.add_race_result(&[1, 3, 4, 5, 6, 7, 2]).unwrap();
        // Race 2: driver 2 wins (6), driver 1 last (0); both now on 6
        season.add_race_result(&[2, 3, 4, 5, 6, 7, 1]).unwrap();

        let standings = season.drivers_standings();
        let one = standings.iter().position(|d| d.id() == 1).unwrap();
        let two = standings.iter().position(|d| d.id() == 2).unwrap();
        assert_eq!(standings[one].points(), standings[two].points());
        assert!(two < one);
    }

    #[test]
    fn test_team_tie_uses_best_driver() {
        let roster = "2020\nAlpha\nA1\nA2\nBeta\nB1\nB2";
        let mut season = Season::new(roster).unwrap();
        // B1 wins, A1 second, A2 third, B2 last: Alpha 2+1=3, Beta 3+0=3
        season.add_race_result(&[3, 1, 2, 4]).unwrap();

        assert_eq!(season.team_points(&season.teams()[0]), 3);
        assert_eq!(season.team_points(&season.teams()[1]), 3);
        assert_eq!(team_names(&season.teams_standings()), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_leader_has_max_points() {
        let mut season = sample_season();
        season.add_race_result(&[5, 4, 3, 2, 1, 7, 6]).unwrap();
        season.add_race_result(&[4, 5, 6, 7, 1, 2, 3]).unwrap();
        season.add_race_result(&[7, 1, 2, 3, 4, 5, 6]).unwrap();

        let leader = season.driver_by_position(1).unwrap();
        let max = season.drivers().iter().map(Driver::points).max().unwrap();
        assert_eq!(leader.points(), max);
    }

    #[test]
    fn test_standings_are_idempotent() {
        let mut season = sample_season();
        season.add_race_result(&[3, 1, 2, 7, 6, 5, 4]).unwrap();

        assert_eq!(
            driver_ids(&season.drivers_standings()),
            driver_ids(&season.drivers_standings())
        );
        assert_eq!(
            team_names(&season.teams_standings()),
            team_names(&season.teams_standings())
        );
    }

    #[test]
    fn test_position_bounds() {
        let season = sample_season();
        assert_eq!(
            season.driver_by_position(0).unwrap_err(),
            SeasonError::InvalidPosition { position: 0, max: 7 }
        );
        assert_eq!(
            season.driver_by_position(8).unwrap_err(),
            SeasonError::InvalidPosition { position: 8, max: 7 }
        );
        assert!(season.team_by_position(0).is_err());
        assert!(season.team_by_position(5).is_err());
        assert!(season.team_by_position(4).is_ok());
    }

    #[test]
    fn test_history_is_complete_after_any_race() {
        let mut season = sample_season();
        assert!((1..=7).all(|id| season.last_race_position(id).is_none()));
        assert!((1..=7).all(|id| season.driver_tie_break(id) == NO_HISTORY));

        // A race must list every driver exactly once, so no driver can be left
        // without a last-race position.
        assert_eq!(
            season.add_race_result(&[1, 1, 2, 3, 4, 5, 6]).unwrap_err(),
            SeasonError::DuplicateResult(1)
        );
        season.add_race_result(&[7, 6, 5, 4, 3, 2, 1]).unwrap();
        for id in 1..=7 {
            assert_eq!(season.last_race_position(id), Some(8 - id as usize));
            assert_ne!(season.driver_tie_break(id), NO_HISTORY);
        }
        for team in season.teams() {
            assert_ne!(season.team_tie_break(team), NO_HISTORY);
        }
    }

    #[test]
    fn test_team_without_drivers_has_no_history() {
        let season = sample_season();
        let empty = Team::new("Empty").unwrap();
        assert_eq!(season.team_tie_break(&empty), NO_HISTORY);
    }

    #[test]
    fn test_driver_entries() {
        let mut season = sample_season();
        season.add_race_result(&[2, 3, 1, 5, 4, 7, 6]).unwrap();

        let entries = season.driver_standings_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].id, Some(2));
        assert_eq!(entries[0].name, "Kimi Raikonen");
        assert_eq!(entries[0].points, 6);
        assert_eq!(entries[0].team.as_deref(), Some("Ferrari"));
        assert_eq!(entries[0].last_race_position, Some(1));
    }

    #[test]
    fn test_team_entries() {
        let mut season = sample_season();
        season.add_race_result(&[2, 3, 1, 5, 4, 7, 6]).unwrap();

        let entries = season.team_standings_entries();
        assert_eq!(entries[0].name, "Ferrari");
        assert_eq!(entries[0].points, 10);
        assert_eq!(entries[0].drivers, vec!["Sebastian Vettel", "Kimi Raikonen"]);
        assert_eq!(entries[0].last_race_position, Some(1));
        assert_eq!(entries[3].name, "McLaren");
        assert_eq!(entries[3].drivers, vec!["Fernando Alonso"]);
    }

    #[test]
    fn test_entry_at_matches_full_table() {
        let mut season = sample_season();
        season.add_race_result(&[2, 3, 1, 5, 4, 7, 6]).unwrap();

        let drivers = season.driver_standings_entries();
        assert_eq!(season.driver_entry_at(3).unwrap(), drivers[2]);
        let teams = season.team_standings_entries();
        assert_eq!(season.team_entry_at(4).unwrap(), teams[3]);

        assert!(season.driver_entry_at(8).is_err());
        assert!(season.team_entry_at(0).is_err());
    }

    #[test]
    fn test_entries_serialize_without_empty_fields() {
        let season = sample_season();
        let json = serde_json::to_value(season.team_standings_entries()).unwrap();
        let first = &json[0];
        assert_eq!(first["name"], "Ferrari");
        assert!(first.get("id").is_none());
        assert!(first.get("last_race_position").is_none());
    }
}
