use crate::driver::Driver;
use crate::error::{Result, SeasonError};

/// One of the two seats in a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverSlot {
    First,
    Second,
}

/// A team of at most two drivers.
///
/// Seats hold driver ids, never the drivers themselves: the season owns every
/// driver and a team only points at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    first_driver: Option<u32>,
    second_driver: Option<u32>,
}

impl Team {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(SeasonError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            first_driver: None,
            second_driver: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seat a driver in the first free slot, first seat before second.
    pub fn add_driver(&mut self, driver_id: u32) -> Result<()> {
        if self.first_driver.is_none() {
            self.first_driver = Some(driver_id);
        } else if self.second_driver.is_none() {
            self.second_driver = Some(driver_id);
        } else {
            return Err(SeasonError::TeamFull {
                team: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn driver(&self, slot: DriverSlot) -> Option<u32> {
        match slot {
            DriverSlot::First => self.first_driver,
            DriverSlot::Second => self.second_driver,
        }
    }

    /// Ids of the seated drivers, first seat first.
    pub fn driver_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.first_driver.iter().chain(self.second_driver.iter()).copied()
    }

    /// Sum of both drivers' points. A seat whose driver cannot be found in
    /// `drivers` contributes nothing.
    pub fn points(&self, drivers: &[Driver]) -> u32 {
        self.driver_ids()
            .filter_map(|id| drivers.iter().find(|d| d.id() == id))
            .map(Driver::points)
            .sum()
    }
}
