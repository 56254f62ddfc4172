use anyhow::{bail, Context, Result};

/// Parse a race results file.
///
/// One race per line, finishing order first to last, driver ids separated by
/// commas and/or whitespace. Blank lines and lines starting with `#` are
/// skipped. Races are returned in file order.
pub fn parse_race_results(text: &str) -> Result<Vec<Vec<u32>>> {
    let mut races = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let race = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .with_context(|| format!("line {}: invalid driver id '{}'", index + 1, token))
            })
            .collect::<Result<Vec<_>>>()?;

        if race.is_empty() {
            bail!("line {}: race has no drivers", index + 1);
        }
        races.push(race);
    }

    Ok(races)
}
