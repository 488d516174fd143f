//! Neurological assessment: Glasgow Coma Scale (GCS).
//!
//! The scale sums three component scores (eye 1-4, verbal 1-5, motor 1-6)
//! into a total of 3-15 with a severity category. Components recorded as
//! not testable carry no score; asking for a total over an untestable
//! component is an invalid input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MedimetryError, Result};

/// Eye opening response (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeResponse {
    /// Component could not be assessed (e.g. orbital swelling)
    NotTestable,
    /// No eye opening (1)
    None,
    /// Eye opening to pain (2)
    ToPain,
    /// Eye opening to verbal command (3)
    ToVerbal,
    /// Spontaneous eye opening (4)
    Spontaneous,
}

impl EyeResponse {
    /// Score contribution, or `None` when the component is not testable
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::NotTestable => None,
            Self::None => Some(1),
            Self::ToPain => Some(2),
            Self::ToVerbal => Some(3),
            Self::Spontaneous => Some(4),
        }
    }

    /// Build from a raw 1-4 score
    pub fn from_score(score: u8) -> Result<Self> {
        match score {
            1 => Ok(Self::None),
            2 => Ok(Self::ToPain),
            3 => Ok(Self::ToVerbal),
            4 => Ok(Self::Spontaneous),
            other => Err(MedimetryError::invalid_input(
                format!("eye response must be between 1 and 4, got {other}"),
                "1..=4",
            )),
        }
    }
}

/// Verbal response (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerbalResponse {
    /// Component could not be assessed (e.g. intubation)
    NotTestable,
    /// No verbal response (1)
    None,
    /// Incomprehensible sounds (2)
    IncomprehensibleSounds,
    /// Inappropriate words (3)
    InappropriateWords,
    /// Confused conversation (4)
    Confused,
    /// Oriented (5)
    Oriented,
}

impl VerbalResponse {
    /// Score contribution, or `None` when the component is not testable
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::NotTestable => None,
            Self::None => Some(1),
            Self::IncomprehensibleSounds => Some(2),
            Self::InappropriateWords => Some(3),
            Self::Confused => Some(4),
            Self::Oriented => Some(5),
        }
    }

    /// Build from a raw 1-5 score
    pub fn from_score(score: u8) -> Result<Self> {
        match score {
            1 => Ok(Self::None),
            2 => Ok(Self::IncomprehensibleSounds),
            3 => Ok(Self::InappropriateWords),
            4 => Ok(Self::Confused),
            5 => Ok(Self::Oriented),
            other => Err(MedimetryError::invalid_input(
                format!("verbal response must be between 1 and 5, got {other}"),
                "1..=5",
            )),
        }
    }
}

/// Motor response (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorResponse {
    /// Component could not be assessed (e.g. paralysis)
    NotTestable,
    /// No motor response (1)
    None,
    /// Extension to pain (2)
    ExtensionToPain,
    /// Abnormal flexion to pain (3)
    FlexionToPain,
    /// Withdrawal from pain (4)
    WithdrawalFromPain,
    /// Localizes pain (5)
    LocalizesPain,
    /// Obeys commands (6)
    ObeysCommands,
}

impl MotorResponse {
    /// Score contribution, or `None` when the component is not testable
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::NotTestable => None,
            Self::None => Some(1),
            Self::ExtensionToPain => Some(2),
            Self::FlexionToPain => Some(3),
            Self::WithdrawalFromPain => Some(4),
            Self::LocalizesPain => Some(5),
            Self::ObeysCommands => Some(6),
        }
    }

    /// Build from a raw 1-6 score
    pub fn from_score(score: u8) -> Result<Self> {
        match score {
            1 => Ok(Self::None),
            2 => Ok(Self::ExtensionToPain),
            3 => Ok(Self::FlexionToPain),
            4 => Ok(Self::WithdrawalFromPain),
            5 => Ok(Self::LocalizesPain),
            6 => Ok(Self::ObeysCommands),
            other => Err(MedimetryError::invalid_input(
                format!("motor response must be between 1 and 6, got {other}"),
                "1..=6",
            )),
        }
    }
}

/// Glasgow Coma Scale severity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GcsCategory {
    /// Total score 3-8
    Severe,
    /// Total score 9-12
    Moderate,
    /// Total score 13-15
    Mild,
}

impl GcsCategory {
    /// Human-readable label for the category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Severe => "Severe",
            Self::Moderate => "Moderate",
            Self::Mild => "Mild",
        }
    }
}

impl fmt::Display for GcsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

fn not_testable(component: &str) -> MedimetryError {
    MedimetryError::invalid_input(
        format!("{component} response is not testable and cannot be scored"),
        "a testable response",
    )
}

/// Calculate the Glasgow Coma Scale total and severity category.
///
/// The total is in 3-15; severe <= 8, moderate 9-12, mild >= 13.
pub fn glasgow_coma_scale(
    eye: EyeResponse,
    verbal: VerbalResponse,
    motor: MotorResponse,
) -> Result<(u8, GcsCategory)> {
    let eye_points = eye.points().ok_or_else(|| not_testable("eye"))?;
    let verbal_points = verbal.points().ok_or_else(|| not_testable("verbal"))?;
    let motor_points = motor.points().ok_or_else(|| not_testable("motor"))?;

    let total = eye_points + verbal_points + motor_points;

    let category = if total <= 8 {
        GcsCategory::Severe
    } else if total <= 12 {
        GcsCategory::Moderate
    } else {
        GcsCategory::Mild
    };

    Ok((total, category))
}

/// Calculate the Glasgow Coma Scale from raw integer component scores.
///
/// Each component is range-checked independently (eye 1-4, verbal 1-5,
/// motor 1-6) before scoring.
pub fn gcs_from_scores(eye: u8, verbal: u8, motor: u8) -> Result<(u8, GcsCategory)> {
    glasgow_coma_scale(
        EyeResponse::from_score(eye)?,
        VerbalResponse::from_score(verbal)?,
        MotorResponse::from_score(motor)?,
    )
}
