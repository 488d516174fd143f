//! Shared enumerations used across the calculation modules.
//!
//! These are the closed selector sets (sex, ethnical race) that several
//! formulas branch on. String parsing accepts the short codes used in
//! clinical data sets; anything unrecognized is an invalid-input error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MedimetryError;

/// Sex of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Diverse (not accepted by formulas defined for male/female only)
    Diverse,
}

impl Sex {
    /// Short code used in clinical data sets
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
            Self::Diverse => "d",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Diverse => "diverse",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for Sex {
    type Err = MedimetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "d" | "diverse" => Ok(Self::Diverse),
            other => Err(MedimetryError::invalid_input(
                format!("unknown sex {other:?}"),
                "one of m, f, d",
            )),
        }
    }
}

/// Ethnical race categories used by the renal eGFR corrections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EthnicalRace {
    /// African-American
    AfricanAmerican,
    /// European
    European,
    /// Other or unspecified; no correction factor is applied
    Other,
}

impl EthnicalRace {
    /// Human-readable label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AfricanAmerican => "african_american",
            Self::European => "european",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EthnicalRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for EthnicalRace {
    type Err = MedimetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "african_american" | "african-american" => Ok(Self::AfricanAmerican),
            "european" => Ok(Self::European),
            "other" => Ok(Self::Other),
            other => Err(MedimetryError::invalid_input(
                format!("unknown ethnical race {other:?}"),
                "one of african_american, european, other",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_string() {
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("d".parse::<Sex>().unwrap(), Sex::Diverse);
        assert!("x".parse::<Sex>().is_err());
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Male.to_string(), "male");
        assert_eq!(Sex::Female.code(), "f");
    }

    #[test]
    fn test_race_from_string() {
        assert_eq!(
            "african_american".parse::<EthnicalRace>().unwrap(),
            EthnicalRace::AfricanAmerican
        );
        assert_eq!(
            "African-American".parse::<EthnicalRace>().unwrap(),
            EthnicalRace::AfricanAmerican
        );
        assert_eq!(
            "other".parse::<EthnicalRace>().unwrap(),
            EthnicalRace::Other
        );
        assert!("martian".parse::<EthnicalRace>().is_err());
    }
}
