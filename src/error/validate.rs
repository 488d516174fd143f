//! Shared input-validation helpers
//!
//! Every calculation checks its arguments against a documented plausible
//! range before computing. These helpers keep the checks and the error
//! wording consistent across modules.

use crate::error::{MedimetryError, Result};
use crate::types::Sex;

/// Require a strictly positive value
pub fn require_positive(parameter: &str, value: f64, expected: &'static str) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(MedimetryError::invalid_input(
            format!("{parameter} must be positive, got {value}"),
            expected,
        ))
    }
}

/// Require a non-negative value
pub fn require_non_negative(parameter: &str, value: f64, expected: &'static str) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(MedimetryError::invalid_input(
            format!("{parameter} must be non-negative, got {value}"),
            expected,
        ))
    }
}

/// Require a positive age in years
pub fn require_age(age: u32) -> Result<()> {
    if age > 0 {
        Ok(())
    } else {
        Err(MedimetryError::invalid_input(
            "age must be positive",
            "age >= 1 year",
        ))
    }
}

/// Require a heart rate in the plausible 1-300 bpm range
pub fn require_heart_rate(heart_rate: u32) -> Result<()> {
    if (1..=300).contains(&heart_rate) {
        Ok(())
    } else {
        Err(MedimetryError::invalid_input(
            format!("heart rate must be between 1 and 300 bpm, got {heart_rate}"),
            "1..=300 bpm",
        ))
    }
}

/// Require a sex for which the formula or score is defined
pub fn require_male_or_female(sex: Sex, context: &str) -> Result<()> {
    match sex {
        Sex::Male | Sex::Female => Ok(()),
        Sex::Diverse => Err(MedimetryError::invalid_input(
            format!("sex must be male or female for {context}"),
            "Sex::Male or Sex::Female",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("weight", 70.0, "weight > 0").is_ok());
        assert!(require_positive("weight", 0.0, "weight > 0").is_err());
        assert!(require_positive("weight", -1.0, "weight > 0").is_err());
        // NaN never compares greater than zero
        assert!(require_positive("weight", f64::NAN, "weight > 0").is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("albumin", 0.0, "albumin >= 0").is_ok());
        assert!(require_non_negative("albumin", -0.1, "albumin >= 0").is_err());
    }

    #[test]
    fn test_require_heart_rate_bounds() {
        assert!(require_heart_rate(1).is_ok());
        assert!(require_heart_rate(300).is_ok());
        assert!(require_heart_rate(0).is_err());
        assert!(require_heart_rate(301).is_err());
    }

    #[test]
    fn test_error_message_names_parameter_and_range() {
        let err = require_positive("creatinine", -2.0, "creatinine > 0 mg/dL").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("creatinine"));
        assert!(text.contains("creatinine > 0 mg/dL"));
    }

    #[test]
    fn test_require_male_or_female() {
        assert!(require_male_or_female(Sex::Male, "MDRD").is_ok());
        assert!(require_male_or_female(Sex::Female, "MDRD").is_ok());
        assert!(require_male_or_female(Sex::Diverse, "MDRD").is_err());
    }
}
