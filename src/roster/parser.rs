use crate::error::{Result, SeasonError};

/// Token used in roster text when a team has no second driver.
pub const DEFAULT_SENTINEL: &str = "None";

/// Lines per team block: team name, first driver, second driver.
const LINES_PER_TEAM: usize = 3;

/// A parsed roster, before any driver ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub year: i32,
    pub teams: Vec<RosterTeam>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTeam {
    pub name: String,
    /// One or two driver names, in seat order.
    pub drivers: Vec<String>,
}

impl Roster {
    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn number_of_drivers(&self) -> usize {
        self.teams.iter().map(|t| t.drivers.len()).sum()
    }

    /// Render back into roster text, writing `sentinel` for an empty second seat.
    pub fn to_text(&self, sentinel: &str) -> String {
        let mut lines = vec![self.year.to_string()];
        for team in &self.teams {
            lines.push(team.name.clone());
            for seat in 0..2 {
                lines.push(
                    team.drivers
                        .get(seat)
                        .cloned()
                        .unwrap_or_else(|| sentinel.to_string()),
                );
            }
        }
        lines.join("\n")
    }
}

/// Parse roster text.
///
/// Format: the year on the first line, then one block of three lines per
/// team (team name, first driver, second driver). A driver line equal to
/// `sentinel` leaves that seat empty; only the second seat may be empty.
/// Surrounding whitespace is trimmed from every line and trailing blank
/// lines are ignored.
///
/// # Errors
///
/// Returns `SeasonError::BadSeasonInfo` with the 1-based line number when:
/// - the year is missing or is not an integer
/// - the last team block is incomplete
/// - a team name is empty, or a driver name is empty
/// - a team's first driver is the sentinel
pub fn parse_roster(text: &str, sentinel: &str) -> Result<Roster> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let (year_line, rest) = lines.split_first().ok_or_else(|| bad(1, "missing year"))?;
    let year: i32 = year_line
        .parse()
        .map_err(|_| bad(1, format!("year '{}' is not an integer", year_line)))?;

    if rest.len() % LINES_PER_TEAM != 0 {
        let line = 2 + (rest.len() / LINES_PER_TEAM) * LINES_PER_TEAM;
        return Err(bad(
            line,
            format!("team '{}' is missing driver lines", rest[line - 2]),
        ));
    }

    let mut teams = Vec::with_capacity(rest.len() / LINES_PER_TEAM);
    for (index, block) in rest.chunks(LINES_PER_TEAM).enumerate() {
        let line = 2 + index * LINES_PER_TEAM;
        let name = block[0];
        if name.is_empty() {
            return Err(bad(line, "team name is empty"));
        }

        let mut drivers = Vec::with_capacity(2);
        for (seat, driver) in block[1..].iter().enumerate() {
            let driver_line = line + 1 + seat;
            if driver.is_empty() {
                return Err(bad(driver_line, "driver name is empty"));
            }
            if *driver == sentinel {
                if seat == 0 {
                    return Err(bad(
                        driver_line,
                        format!("team '{}' has no first driver", name),
                    ));
                }
                continue;
            }
            drivers.push(driver.to_string());
        }

        teams.push(RosterTeam {
            name: name.to_string(),
            drivers,
        });
    }

    tracing::debug!(
        year,
        teams = teams.len(),
        "parsed roster"
    );

    Ok(Roster { year, teams })
}

fn bad(line: usize, reason: impl Into<String>) -> SeasonError {
    SeasonError::BadSeasonInfo {
        line,
        reason: reason.into(),
    }
}
