use crate::error::{Result, SeasonError};
use crate::season::SeasonInfo;

/// Lowest valid finishing position.
const MIN_POSITION: usize = 1;

/// A driver taking part in a season.
///
/// `team` is the index of the driver's team inside its season and `season`
/// is a copy of the season's identity, so a driver never owns either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: u32,
    name: String,
    points: u32,
    team: Option<usize>,
    season: Option<SeasonInfo>,
}

impl Driver {
    /// Create a driver with zero points and no team or season.
    pub fn new(name: &str, id: u32) -> Result<Self> {
        if name.is_empty() {
            return Err(SeasonError::EmptyName);
        }
        if id == 0 {
            return Err(SeasonError::InvalidDriverId);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            points: 0,
            team: None,
            season: None,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Index of the driver's team within its season.
    pub fn team(&self) -> Option<usize> {
        self.team
    }

    pub fn season(&self) -> Option<&SeasonInfo> {
        self.season.as_ref()
    }

    pub fn set_team(&mut self, team: usize) {
        self.team = Some(team);
    }

    /// Assign the driver to a season. Points always restart from zero here.
    pub fn set_season(&mut self, season: SeasonInfo) {
        self.season = Some(season);
        self.points = 0;
    }

    /// Award points for finishing a race in `position` (1-based).
    ///
    /// The winner of an `n`-driver season earns `n - 1`, last place earns 0.
    pub fn add_race_result(&mut self, position: usize) -> Result<()> {
        self.points = self.points_after(position)?;
        Ok(())
    }

    /// Points total after finishing a race in `position`, without recording it.
    pub fn points_after(&self, position: usize) -> Result<u32> {
        if position < MIN_POSITION {
            return Err(SeasonError::InvalidPosition {
                position,
                max: self.season.map_or(0, |s| s.number_of_drivers),
            });
        }
        let season = self.season.ok_or(SeasonError::SeasonNotAssigned)?;
        if position > season.number_of_drivers {
            return Err(SeasonError::InvalidPosition {
                position,
                max: season.number_of_drivers,
            });
        }
        u32::try_from(season.number_of_drivers - position)
            .ok()
            .and_then(|award| self.points.checked_add(award))
            .ok_or(SeasonError::PointsOverflow(self.id))
    }

    #[cfg(test)]
    pub(crate) fn set_points(&mut self, points: u32) {
        self.points = points;
    }
}
