use bigdecimal::{BigDecimal, Zero};
use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_user_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        if !re.is_match(email) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }

    /// Animal weights may be zero (not yet weighed) but never negative.
    pub fn validate_animal_weight(weight: &BigDecimal) -> Result<(), AppError> {
        if weight < &BigDecimal::zero() {
            return Err(AppError::ValidationError(
                "Weight cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Distributed weight must be strictly positive.
    pub fn validate_distribution_weight(weight: &BigDecimal) -> Result<(), AppError> {
        if weight <= &BigDecimal::zero() {
            return Err(AppError::ValidationError(
                "Distributed weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
