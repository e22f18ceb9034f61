use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Prices are stored as NUMERIC(10, 2)
pub const PRICE_MAX_SCALE: u32 = 2;
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 8;

lazy_static! {
    /// Regex for validating image references (file names or URLs)
    /// Must be a single token without whitespace
    /// - Valid: "image.png", "https://cdn.example.com/funkos/1.webp", "img/spiderman.jpg"
    /// - Invalid: "", "my image.png", " image.png"
    pub static ref IMAGE_REF_REGEX: Regex = Regex::new(r"^\S+$").unwrap();
}

/// Rejects strings that are empty or only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_decimal_min_zero(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("decimal_min_zero");
        err.message = Some("must be greater than or equal to 0".into());
        return Err(err);
    }
    Ok(())
}

/// Non-negative, fits NUMERIC(10, 2) without rounding
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    validate_decimal_min_zero(value)?;

    if value.normalize().scale() > PRICE_MAX_SCALE {
        let mut err = ValidationError::new("price_scale");
        err.message = Some("must have at most 2 decimal places".into());
        return Err(err);
    }

    if *value >= Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS)) {
        let mut err = ValidationError::new("price_max");
        err.message = Some("must be less than 100000000".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref_regex_valid() {
        assert!(IMAGE_REF_REGEX.is_match("image.png"));
        assert!(IMAGE_REF_REGEX.is_match("https://cdn.example.com/funkos/1.webp"));
        assert!(IMAGE_REF_REGEX.is_match("img/spiderman.jpg"));
    }

    #[test]
    fn test_image_ref_regex_invalid() {
        assert!(!IMAGE_REF_REGEX.is_match("")); // empty
        assert!(!IMAGE_REF_REGEX.is_match("my image.png")); // space
        assert!(!IMAGE_REF_REGEX.is_match(" image.png")); // leading space
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("category 1").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn test_validate_decimal_min_zero() {
        assert!(validate_decimal_min_zero(&Decimal::ZERO).is_ok());
        assert!(validate_decimal_min_zero(&Decimal::new(1999, 2)).is_ok());
        assert!(validate_decimal_min_zero(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(&Decimal::ZERO).is_ok());
        assert!(validate_price(&Decimal::new(1999, 2)).is_ok());
        assert!(validate_price(&Decimal::new(19990, 3)).is_ok()); // trailing zero
        assert!(validate_price(&Decimal::new(9_999_999_999, 2)).is_ok()); // 99999999.99

        assert!(validate_price(&Decimal::new(-1, 2)).is_err());
        assert!(validate_price(&Decimal::new(19999, 3)).is_err()); // 19.999
        assert!(validate_price(&Decimal::from(100_000_000)).is_err());
        assert!(validate_price(&Decimal::from(123_456_789)).is_err());
    }
}
