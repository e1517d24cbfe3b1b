//! Keystroke formatters.
//!
//! Each formatter maps whatever text is in the input to the canonical display
//! text for its field. Formatting is idempotent: feeding a formatted value back
//! in returns it unchanged.

use crate::field::Field;

const CARD_DIGITS: usize = 16;
const CARD_GROUP: usize = 4;
const EXPIRATION_DIGITS: usize = 6;

/// Keep only ASCII digits.
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Group card digits in blocks of four, e.g. `4111 1111 1111 1111`.
///
/// Digits past the sixteenth are dropped.
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = digits(value).chars().take(CARD_DIGITS).collect();
    digits
        .chunks(CARD_GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render expiration digits as `MM/YYYY`.
///
/// Up to two digits are shown as typed; the slash appears with the third.
pub fn format_expiration(value: &str) -> String {
    let digits: String = digits(value).chars().take(EXPIRATION_DIGITS).collect();
    if digits.len() <= 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    format!("{month}/{year}")
}

/// CVV text is kept as typed, cut at the input boundary.
pub fn format_cvv(value: &str) -> String {
    value.chars().take(Field::Cvv.max_len()).collect()
}

/// Apply the formatter belonging to `field`.
pub fn format_field(field: Field, value: &str) -> String {
    match field {
        Field::CardNumber => format_card_number(value),
        Field::Expiration => format_expiration(value),
        Field::Cvv => format_cvv(value),
    }
}
