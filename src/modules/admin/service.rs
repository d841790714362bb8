use bigdecimal::BigDecimal;
use std::{borrow::Cow, str::FromStr};
use validator::{ValidationError, ValidationErrors};

const MAX_PRICE: i64 = 100_000_000;

pub fn parse_price(raw: &str) -> Result<BigDecimal, ValidationError> {
    let price = BigDecimal::from_str(raw.trim()).map_err(|_| {
        ValidationError::new("INVALID_PRICE").with_message(Cow::from("Price must be a number"))
    })?;

    if price < BigDecimal::from(0) {
        return Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price must not be negative")));
    }

    if price >= BigDecimal::from(MAX_PRICE) {
        return Err(ValidationError::new("INVALID_PRICE")
            .with_message(Cow::from("Price is too large")));
    }

    Ok(price.round(2))
}

pub fn validate_price(raw: &str) -> Result<(), ValidationError> {
    parse_price(raw).map(|_| ())
}

/// Checkbox-style form flag.
pub fn parse_flag(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_lowercase().as_ref() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        _ => Err(ValidationError::new("INVALID_FLAG")
            .with_message(Cow::from("Expected true or false"))),
    }
}

pub fn field_error(field: &'static str, error: ValidationError) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prices_to_cents() {
        assert_eq!(parse_price("12.99").unwrap(), BigDecimal::from_str("12.99").unwrap());
        assert_eq!(parse_price(" 0 ").unwrap(), BigDecimal::from(0));
        assert_eq!(parse_price("4.999").unwrap(), BigDecimal::from_str("5.00").unwrap());
    }

    #[test]
    fn rejects_negative_or_garbage_prices() {
        assert!(parse_price("-0.01").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("100000000").is_err());
    }

    #[test]
    fn parses_flags() {
        assert!(parse_flag("on").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
