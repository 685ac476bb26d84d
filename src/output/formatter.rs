use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{Width, terminal_size};

/// A scorecard with its calculated rating for display
#[derive(Debug, Clone, Serialize)]
pub struct RatedItem<'a> {
    pub name: &'a str,
    pub rating: f64,
    pub max_rating: f64,
    pub descriptions: Vec<String>,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a rating with at most two decimals, trailing zeros trimmed
/// (4.4615 -> "4.46", 5.0 -> "5", 4.5 -> "4.5")
pub fn format_rating(rating: f64) -> String {
    let formatted = format!("{:.2}", rating);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format rated items as a table with columns: Index, Rating, Name
/// Index column: 3 chars (fits "99."), right-aligned
/// Rating column: right-aligned, 11 chars wide (fits "10.25 / 100")
/// With `show_descriptions`, each rater description follows on its own indented line
pub fn format_rated_table(items: &[RatedItem], use_colors: bool, show_descriptions: bool) -> String {
    if items.is_empty() {
        return "No scorecards rated.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let rating_width = 11;
    let separator = "  ";

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let index_str = format!("{:>2}.", idx + 1);
            let rating_str = format!(
                "{} / {}",
                format_rating(item.rating),
                format_rating(item.max_rating)
            );
            let rating_padded = format!("{:>width$}", rating_str, width = rating_width);

            let fixed_width = index_width + 1 + rating_width + separator.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(item.name, width - fixed_width),
                Some(_) => truncate_name(item.name, 20),
                None => item.name.to_string(),
            };

            let mut line = if use_colors {
                format!(
                    "{} {}{}{}",
                    index_str.dimmed(),
                    rating_padded.bold(),
                    separator,
                    name
                )
            } else {
                format!("{} {}{}{}", index_str, rating_padded, separator, name)
            };

            if show_descriptions {
                for description in &item.descriptions {
                    line.push('\n');
                    if use_colors {
                        line.push_str(&format!("      - {}", description.dimmed()));
                    } else {
                        line.push_str(&format!("      - {}", description));
                    }
                }
            }

            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format rated items as tab-separated values for scripting
/// Columns: rating, name (no headers, no colors)
pub fn format_tsv(items: &[RatedItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}\t{}", format_rating(item.rating), item.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format rated items as a pretty-printed JSON array
pub fn format_json(items: &[RatedItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, rating: f64) -> RatedItem<'_> {
        RatedItem {
            name,
            rating,
            max_rating: 10.0,
            descriptions: vec![
                format!("GoreRater rated {} at 8 with weighting of 0.4", name),
                "Mild language throughout".to_string(),
            ],
        }
    }

    #[test]
    fn test_format_rating_trims_zeros() {
        assert_eq!(format_rating(5.0), "5");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_rating(0.0), "0");
    }

    #[test]
    fn test_format_rating_rounds_to_two_places() {
        assert_eq!(format_rating(4.4615), "4.46");
        assert_eq!(format_rating(9.999), "10");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Alien", 20), "Alien");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("The Texas Chain Saw Massacre", 15), "The Texas Ch...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Alien", 3), "Ali");
    }

    #[test]
    fn test_format_rated_table_empty() {
        let items: Vec<RatedItem> = vec![];
        assert_eq!(format_rated_table(&items, false, false), "No scorecards rated.");
    }

    #[test]
    fn test_format_rated_table_rows() {
        let items = vec![item("Alien", 7.25), item("Heat", 4.4615)];
        let result = format_rated_table(&items, false, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("7.25 / 10"));
        assert!(lines[0].contains("Alien"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("4.46 / 10"));
        assert!(lines[1].contains("Heat"));
    }

    #[test]
    fn test_format_rated_table_with_descriptions() {
        let items = vec![item("Alien", 7.0)];
        let result = format_rated_table(&items, false, true);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "      - GoreRater rated Alien at 8 with weighting of 0.4"
        );
        assert_eq!(lines[2], "      - Mild language throughout");
    }

    #[test]
    fn test_format_tsv() {
        let items = vec![item("Alien", 7.0), item("Heat", 4.4615)];
        assert_eq!(format_tsv(&items), "7\tAlien\n4.46\tHeat");
    }

    #[test]
    fn test_format_tsv_empty() {
        let items: Vec<RatedItem> = vec![];
        assert_eq!(format_tsv(&items), "");
    }

    #[test]
    fn test_format_json() {
        let items = vec![item("Alien", 7.0)];
        let json = format_json(&items).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Alien");
        assert_eq!(value[0]["rating"], 7.0);
        assert_eq!(value[0]["descriptions"].as_array().unwrap().len(), 2);
    }
}
