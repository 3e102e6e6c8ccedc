//! Strict lexical number validation.

use crate::types::Cell;

/// Returns `true` if the cell, rendered as text, is a strictly formatted number.
///
/// Accepted: an optional single leading `-`, one or more ASCII digits, optionally followed by `.`
/// and one or more digits (`0`, `-1.12`, `"100"`).
///
/// Rejected: `+1.5`, `5.`, `.5`, `1.2.3`, `12ABC`, `""`, `"-"`, `"."`. Number cells render through
/// [`Cell`]'s `Display`, so `NaN` and infinities are rejected too.
pub fn is_valid_number(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => is_valid_number_str(s),
        Cell::Number(v) => is_valid_number_str(&v.to_string()),
    }
}

/// String form of [`is_valid_number`].
pub fn is_valid_number_str(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
