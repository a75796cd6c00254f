//! Shared UI helpers.

use ratatui::{
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::theme::{BORDER_STYLE, TITLE_STYLE};

/// Creates a bordered panel block with a styled title.
#[must_use]
pub fn create_border_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(BORDER_STYLE)
        .title(Span::styled(format!(" {title} "), TITLE_STYLE))
}

/// Formats an amount with thousands separators.
///
/// Cents are shown only when the amount is not whole.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_with_commas(4500000.0), "4,500,000");
/// assert_eq!(format_with_commas(-1200.5), "-1,200.50");
/// ```
#[must_use]
pub fn format_with_commas(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let fraction = (cents % 100.0) as u64;

    let s = whole.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 + 4);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if amount < 0.0 && cents > 0.0 {
        result.push('-');
    }
    let mut result: String = result.chars().rev().collect();
    if fraction > 0 {
        result.push_str(&format!(".{fraction:02}"));
    }
    result
}
