//! Racing season model: parse a roster of teams and drivers, record race
//! finishing orders and rank drivers and teams by points.

pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod roster;
pub mod season;
pub mod team;

pub use driver::Driver;
pub use error::SeasonError;
pub use season::{Season, SeasonInfo};
pub use team::{DriverSlot, Team};
