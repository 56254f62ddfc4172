pub mod parser;
pub mod results;

pub use parser::{parse_roster, Roster, RosterTeam, DEFAULT_SENTINEL};
pub use results::parse_race_results;
