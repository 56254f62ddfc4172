pub mod formatter;

pub use formatter::{
    format_entry_detail, format_standings_json, format_standings_table, format_standings_tsv,
    should_use_colors,
};
