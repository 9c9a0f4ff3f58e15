//! Custom field validators for `#[validate(custom(function = ...))]`

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::constants::MAX_AMOUNT_CENTS;

/// Amount that fits a `NUMERIC(10, 2)` column and is not negative
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    if *value > Decimal::new(MAX_AMOUNT_CENTS, 2) {
        return Err(ValidationError::new("amount_too_large"));
    }
    Ok(())
}

/// Percentage between 0 and 100 inclusive
pub fn validate_percentage(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::new("percentage"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_bounds() {
        assert!(validate_amount(&Decimal::ZERO).is_ok());
        assert!(validate_amount(&Decimal::new(9_999_999_999, 2)).is_ok());
        assert!(validate_amount(&Decimal::new(100_000_000, 0)).is_err());
        assert!(validate_amount(&Decimal::new(1_000_000_000, 0)).is_err());
        assert!(validate_amount(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let mut zero = Decimal::ZERO;
        zero.set_sign_negative(true);
        assert!(validate_amount(&zero).is_ok());
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(validate_percentage(&Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_percentage(&Decimal::new(10001, 2)).is_err());
        assert!(validate_percentage(&Decimal::new(-1, 0)).is_err());
    }
}
