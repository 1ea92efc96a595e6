//! Text formatting for event cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, NaiveDateTime};

/// Characters of description shown on a list card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// `FREE` for zero-priced events, otherwise the euro amount.
#[must_use]
pub fn price_label(ticket_price: i64) -> String {
    if ticket_price == 0 { "FREE".to_owned() } else { format!("€{ticket_price}") }
}

/// `HH:MM - HH:MM` in 24-hour time.
#[must_use]
pub fn time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

/// Day-of-month and short month name for the date badge.
#[must_use]
pub fn date_badge(start: NaiveDateTime) -> (u32, String) {
    (start.day(), start.format("%b").to_string())
}
