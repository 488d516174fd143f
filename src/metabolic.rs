//! Hepatic assessment: Child-Pugh score and grade for liver disease
//! severity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::validate::require_non_negative;
use crate::error::Result;

/// Ascites severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AscitesSeverity {
    /// No ascites (1 point)
    None,
    /// Slight ascites (2 points)
    Slight,
    /// Moderate ascites (3 points)
    Moderate,
}

/// Hepatic encephalopathy grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncephalopathyGrade {
    /// No encephalopathy (1 point)
    None,
    /// Grade 1-2 (2 points)
    Grade1To2,
    /// Grade 3-4 (3 points)
    Grade3To4,
}

/// Child-Pugh classification grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildPughGrade {
    /// Score 5-6: well-compensated disease
    A,
    /// Score 7-9: significant functional compromise
    B,
    /// Score 10-15: decompensated disease
    C,
}

impl fmt::Display for ChildPughGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Calculate the Child-Pugh score for liver disease severity.
///
/// Bilirubin is in mg/dL, albumin in g/dL. Each of the five parameters
/// scores 1-3 points on a fixed ladder; the sum (5-15) maps to grade A
/// (<= 6), B (7-9) or C (>= 10).
pub fn child_pugh_score(
    bilirubin: f64,
    albumin: f64,
    inr: f64,
    ascites: AscitesSeverity,
    encephalopathy: EncephalopathyGrade,
) -> Result<(u8, ChildPughGrade)> {
    require_non_negative("bilirubin", bilirubin, "bilirubin >= 0 mg/dL")?;
    require_non_negative("albumin", albumin, "albumin >= 0 g/dL")?;
    require_non_negative("INR", inr, "INR >= 0")?;

    let mut score = 0u8;

    // Bilirubin (mg/dL): < 2.0 / 2.0-3.0 / > 3.0
    score += if bilirubin < 2.0 {
        1
    } else if bilirubin <= 3.0 {
        2
    } else {
        3
    };

    // Albumin (g/dL): > 3.5 / 2.8-3.5 / < 2.8
    score += if albumin > 3.5 {
        1
    } else if albumin >= 2.8 {
        2
    } else {
        3
    };

    // INR: < 1.7 / 1.7-2.3 / > 2.3
    score += if inr < 1.7 {
        1
    } else if inr <= 2.3 {
        2
    } else {
        3
    };

    score += match ascites {
        AscitesSeverity::None => 1,
        AscitesSeverity::Slight => 2,
        AscitesSeverity::Moderate => 3,
    };

    score += match encephalopathy {
        EncephalopathyGrade::None => 1,
        EncephalopathyGrade::Grade1To2 => 2,
        EncephalopathyGrade::Grade3To4 => 3,
    };

    let grade = if score <= 6 {
        ChildPughGrade::A
    } else if score <= 9 {
        ChildPughGrade::B
    } else {
        ChildPughGrade::C
    };

    log::debug!("Child-Pugh score {score} -> grade {grade}");
    Ok((score, grade))
}
