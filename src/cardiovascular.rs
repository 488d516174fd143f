//! Cardiovascular calculations: mean arterial pressure, CHA2DS2-VASc
//! stroke-risk score and albumin-corrected calcium.

use serde::{Deserialize, Serialize};

use crate::error::validate::{require_age, require_male_or_female, require_non_negative};
use crate::error::{MedimetryError, Result};
use crate::types::Sex;
use crate::utils::round_to;

/// Clinical risk factors for the CHA2DS2-VASc score.
///
/// Each factor is worth one point, except stroke/vascular history which is
/// worth two. Construct with struct-update syntax for the common case:
/// `ChadsVascRiskFactors { hypertension: true, ..Default::default() }`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChadsVascRiskFactors {
    /// Congestive heart failure or LV dysfunction
    pub chf: bool,
    /// Hypertension
    pub hypertension: bool,
    /// Stroke, TIA or thromboembolism history (2 points)
    pub stroke_vascular_history: bool,
    /// Diabetes mellitus
    pub diabetes: bool,
    /// Vascular disease (prior MI, PAD or aortic plaque)
    pub vascular_disease: bool,
}

/// Calculate mean arterial pressure (MAP) in mm Hg.
///
/// Both pressures are in mm Hg; the diastolic pressure must be below the
/// systolic pressure. The result is rounded to one decimal place.
pub fn mean_arterial_pressure(systolic: u32, diastolic: u32) -> Result<f64> {
    if systolic == 0 {
        return Err(MedimetryError::invalid_input(
            "systolic pressure must be positive",
            "systolic > 0 mm Hg",
        ));
    }
    if diastolic == 0 {
        return Err(MedimetryError::invalid_input(
            "diastolic pressure must be positive",
            "diastolic > 0 mm Hg",
        ));
    }
    if diastolic >= systolic {
        return Err(MedimetryError::invalid_input(
            format!("diastolic pressure must be below systolic pressure, got {diastolic}/{systolic}"),
            "diastolic < systolic",
        ));
    }

    Ok(round_to(f64::from(2 * diastolic + systolic) / 3.0, 1))
}

/// Calculate the CHA2DS2-VASc score for stroke risk in atrial fibrillation.
///
/// Age >= 75 scores 2 points, 65-74 one point; female sex scores one point.
/// The score is defined for male and female patients only. Range 0-9.
pub fn chads_vasc_score(age: u32, sex: Sex, risk_factors: &ChadsVascRiskFactors) -> Result<u8> {
    require_age(age)?;
    require_male_or_female(sex, "CHA2DS2-VASc")?;

    let mut score = 0u8;

    // Age bracket
    if age >= 75 {
        score += 2;
    } else if age >= 65 {
        score += 1;
    }

    // Sex category
    if sex == Sex::Female {
        score += 1;
    }

    // Clinical factors, one point each
    if risk_factors.chf {
        score += 1;
    }
    if risk_factors.hypertension {
        score += 1;
    }
    if risk_factors.diabetes {
        score += 1;
    }
    if risk_factors.vascular_disease {
        score += 1;
    }

    // Stroke/vascular history, two points
    if risk_factors.stroke_vascular_history {
        score += 2;
    }

    Ok(score)
}

/// Correct total serum calcium (mg/dL) for serum albumin (g/dL).
///
/// Corrected Ca = total Ca + 0.8 x (4.0 - albumin), rounded to two decimal
/// places.
pub fn calcium_correction(total_calcium: f64, albumin: f64) -> Result<f64> {
    require_non_negative("total calcium", total_calcium, "total calcium >= 0 mg/dL")?;
    require_non_negative("albumin", albumin, "albumin >= 0 g/dL")?;

    Ok(round_to(total_calcium + 0.8 * (4.0 - albumin), 2))
}
