//! Field checks shared by the entity `create` helpers.
use rust_decimal::Decimal;

use crate::errors::ModelError;

/// Largest absolute value a `NUMERIC(10,2)` column accepts, exclusive.
const MONEY_LIMIT: i64 = 100_000_000;

pub fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn required_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    required(field, value)?;
    max_len(field, value, max)
}

/// Money must fit `NUMERIC(10,2)`: two decimal places, eight integer digits.
pub fn money(field: &str, value: &Decimal) -> Result<(), ModelError> {
    if value.round_dp(2) != *value {
        return Err(ModelError::Validation(format!("{field} must have at most 2 decimal places")));
    }
    if value.abs() >= Decimal::from(MONEY_LIMIT) {
        return Err(ModelError::Validation(format!("{field} must have at most 10 digits")));
    }
    Ok(())
}

pub fn non_negative_money(field: &str, value: &Decimal) -> Result<(), ModelError> {
    money(field, value)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ModelError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

pub fn within(field: &str, value: f64, min: f64, max: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ModelError::Validation(format!("{field} must be between {min} and {max}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn money_accepts_two_places() {
        assert!(money("amount", &Decimal::from_str("150.00").unwrap()).is_ok());
        assert!(money("amount", &Decimal::from_str("99999999.99").unwrap()).is_ok());
    }

    #[test]
    fn money_rejects_extra_scale_and_overflow() {
        assert!(money("amount", &Decimal::from_str("1.005").unwrap()).is_err());
        assert!(money("amount", &Decimal::from_str("100000000.00").unwrap()).is_err());
    }

    #[test]
    fn negative_price_rejected() {
        assert!(non_negative_money("price", &Decimal::from_str("-1").unwrap()).is_err());
        assert!(non_negative_money("price", &Decimal::ZERO).is_ok());
    }

    #[test]
    fn length_counts_chars() {
        assert!(max_len("phone", "ééé", 3).is_ok());
        assert!(max_len("phone", "abcd", 3).is_err());
        assert!(required_len("method", "  ", 10).is_err());
    }

    #[test]
    fn range_rejects_nan() {
        assert!(within("rating", f64::NAN, 0.0, 5.0).is_err());
        assert!(within("rating", 4.5, 0.0, 5.0).is_ok());
        assert!(within("rating", 5.1, 0.0, 5.0).is_err());
    }
}
