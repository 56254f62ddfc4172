use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::season::StandingsEntry;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Secondary column: a driver's team, or a team's drivers
fn entry_detail(entry: &StandingsEntry) -> String {
    match &entry.team {
        Some(team) => team.clone(),
        None => entry.drivers.join(" / "),
    }
}

/// Format standings as a table with columns: Position, Points, Name, Detail
/// No headers. Position column is right-aligned with a trailing dot, points
/// are right-aligned to the widest value.
pub fn format_standings_table(entries: &[StandingsEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No standings to show.".to_string();
    }

    let term_width = get_terminal_width();
    let position_width = entries.len().to_string().len() + 1;
    let points_width = entries
        .iter()
        .map(|e| e.points.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);
    let separator = "  ";

    entries
        .iter()
        .map(|entry| {
            let position_str = format!("{:>width$}", format!("{}.", entry.position), width = position_width);
            let points_str = format!("{:>width$}", entry.points, width = points_width);
            let name = format!("{:<width$}", entry.name, width = name_width);

            // Detail gets whatever the terminal has left
            let fixed_width = position_width + 1 + points_width + separator.len() * 2 + name_width;
            let detail = entry_detail(entry);
            let detail = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&detail, width - fixed_width),
                Some(_) => truncate(&detail, 10),
                None => detail,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    position_str.dimmed(),
                    points_str.bold(),
                    separator,
                    name.yellow(),
                    separator,
                    detail.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    position_str, points_str, separator, name, separator, detail
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: position, points, name, detail (no headers, no colors)
pub fn format_standings_tsv(entries: &[StandingsEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.position,
                entry.points,
                entry.name,
                entry_detail(entry)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as a pretty-printed JSON array
pub fn format_standings_json(entries: &[StandingsEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Format a single standings entry with detailed multi-line output
pub fn format_entry_detail(entry: &StandingsEntry, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let last_race = entry
        .last_race_position
        .map_or_else(|| "-".to_string(), |p| p.to_string());

    if use_colors {
        lines.push(format!("{}. {}", entry.position, entry.name.bold()));
    } else {
        lines.push(format!("{}. {}", entry.position, entry.name));
    }
    if let Some(id) = entry.id {
        lines.push(format!("  Id: {}", id));
    }
    lines.push(format!("  Points: {}", entry.points));
    if let Some(team) = &entry.team {
        lines.push(format!("  Team: {}", team));
    }
    if !entry.drivers.is_empty() {
        lines.push(format!("  Drivers: {}", entry.drivers.join(", ")));
    }
    lines.push(format!("  Last race: {}", last_race));

    lines.join("\n")
}
