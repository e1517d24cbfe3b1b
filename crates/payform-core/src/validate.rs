//! Field validators.
//!
//! Validators look at the displayed value only. The same functions back both
//! the submit-time error messages and the live "submit enabled" check.

use crate::calendar::YearMonth;
use crate::error::FieldError;
use crate::field::Field;
use crate::format::digits;

const CARD_DIGITS: usize = 16;

/// Exactly 16 digits, separators ignored.
pub fn validate_card_number(value: &str) -> Result<(), FieldError> {
    let count = digits(value).len();
    if count == CARD_DIGITS {
        Ok(())
    } else {
        Err(FieldError::CardNumberLength { digits: count })
    }
}

/// Parse a strict `MM/YYYY` value.
pub fn parse_expiration(value: &str) -> Option<YearMonth> {
    let (month, year) = value.split_once('/')?;
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if month.len() != 2 || year.len() != 4 || !all_digits(month) || !all_digits(year) {
        return None;
    }
    YearMonth::new(year.parse().ok()?, month.parse().ok()?)
}

/// `MM/YYYY`, month 01-12, not before `today`'s month.
///
/// A card expiring in the current month is still accepted.
pub fn validate_expiration(value: &str, today: YearMonth) -> Result<(), FieldError> {
    let expiry = parse_expiration(value).ok_or(FieldError::ExpirationFormat)?;
    if expiry < today {
        return Err(FieldError::Expired);
    }
    Ok(())
}

/// 3 or 4 digits, anything else ignored.
pub fn validate_cvv(value: &str) -> Result<(), FieldError> {
    let count = digits(value).len();
    if (3..=4).contains(&count) {
        Ok(())
    } else {
        Err(FieldError::CvvLength { digits: count })
    }
}

/// Run the validator belonging to `field`.
pub fn validate_field(field: Field, value: &str, today: YearMonth) -> Result<(), FieldError> {
    match field {
        Field::CardNumber => validate_card_number(value),
        Field::Expiration => validate_expiration(value, today),
        Field::Cvv => validate_cvv(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    #[test]
    fn card_number_needs_sixteen_digits() {
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        assert!(validate_card_number("4111111111111111").is_ok());
        assert_eq!(
            validate_card_number("4111 1111 1111 111"),
            Err(FieldError::CardNumberLength { digits: 15 })
        );
        assert_eq!(
            validate_card_number(""),
            Err(FieldError::CardNumberLength { digits: 0 })
        );
    }

    #[test]
    fn expiration_month_out_of_range() {
        assert_eq!(
            validate_expiration("13/2024", today()),
            Err(FieldError::ExpirationFormat)
        );
        assert_eq!(
            validate_expiration("00/2030", today()),
            Err(FieldError::ExpirationFormat)
        );
    }

    #[test]
    fn expiration_shape() {
        for bad in ["", "1", "12", "12/", "12/203", "1/2030", "12-2030", "12/20301", "ab/2030"] {
            assert_eq!(
                validate_expiration(bad, today()),
                Err(FieldError::ExpirationFormat),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn expiration_relative_to_today() {
        assert_eq!(validate_expiration("09/2026", today()), Err(FieldError::Expired));
        assert_eq!(validate_expiration("12/2025", today()), Err(FieldError::Expired));
        assert!(validate_expiration("10/2026", today()).is_ok());
        assert!(validate_expiration("11/2026", today()).is_ok());
        assert!(validate_expiration("01/2031", today()).is_ok());
    }

    #[test]
    fn cvv_three_or_four_digits() {
        assert!(validate_cvv("123").is_ok());
        assert!(validate_cvv("1234").is_ok());
        assert_eq!(validate_cvv("12"), Err(FieldError::CvvLength { digits: 2 }));
        assert_eq!(validate_cvv("12a"), Err(FieldError::CvvLength { digits: 2 }));
        assert_eq!(validate_cvv(""), Err(FieldError::CvvLength { digits: 0 }));
    }

    #[test]
    fn parse_expiration_values() {
        assert_eq!(parse_expiration("03/2027"), YearMonth::new(2027, 3));
        assert_eq!(parse_expiration("3/2027"), None);
    }
}
