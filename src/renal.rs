//! Renal function: creatinine clearance and estimated GFR formulas.
//!
//! Cockcroft-Gault estimates creatinine clearance in mL/min; MDRD and
//! CKD-EPI estimate the glomerular filtration rate in mL/min/1.73 m² and
//! are returned unrounded. Sex and race corrections are multiplicative
//! factors on the base expression.

use crate::error::validate::{require_age, require_male_or_female, require_positive};
use crate::error::{MedimetryError, Result};
use crate::types::{EthnicalRace, Sex};

/// Calculate creatinine clearance with the Cockcroft-Gault formula.
///
/// Age in years (1-120), weight in kg, serum creatinine in mg/dL. The
/// optional height (cm) is accepted for call-site symmetry with other
/// formulas but does not enter the standard calculation. The result is
/// rounded to a whole mL/min.
pub fn cockcroft_gault(
    age: u32,
    weight: f64,
    creatinine: f64,
    sex: Sex,
    height: Option<f64>,
) -> Result<u32> {
    require_age(age)?;
    if age > 120 {
        return Err(MedimetryError::invalid_input(
            format!("age must be at most 120 years, got {age}"),
            "1..=120 years",
        ));
    }
    require_positive("weight", weight, "0 < weight < 400 kg")?;
    if weight >= 400.0 {
        return Err(MedimetryError::invalid_input(
            format!("weight must be below 400 kilograms, got {weight}"),
            "0 < weight < 400 kg",
        ));
    }
    require_positive("creatinine", creatinine, "creatinine > 0 mg/dL")?;
    require_male_or_female(sex, "Cockcroft-Gault")?;
    if let Some(h) = height {
        if !(h > 0.0 && h < 150.0) {
            return Err(MedimetryError::invalid_input(
                format!("height must be positive and below 150 centimeters, got {h}"),
                "0 < height < 150 cm",
            ));
        }
    }

    // ((140 - age) x weight) / (72 x creatinine)
    let mut clearance = ((140.0 - f64::from(age)) * weight) / (72.0 * creatinine);

    if sex == Sex::Female {
        clearance *= 0.85;
    }

    Ok(clearance.round() as u32)
}

/// Calculate eGFR with the MDRD (Modification of Diet in Renal Disease)
/// study equation, unrounded.
///
/// Serum creatinine in mg/dL. Pass [`EthnicalRace::Other`] when no race
/// correction applies.
pub fn mdrd(creatinine: f64, age: u32, sex: Sex, race: EthnicalRace) -> Result<f64> {
    require_positive("creatinine", creatinine, "creatinine > 0 mg/dL")?;
    require_age(age)?;
    require_male_or_female(sex, "MDRD")?;

    // 175 x creatinine^-1.154 x age^-0.203
    let mut egfr = 175.0 * creatinine.powf(-1.154) * f64::from(age).powf(-0.203);

    if sex == Sex::Female {
        egfr *= 0.742;
    }
    if race == EthnicalRace::AfricanAmerican {
        egfr *= 1.212;
    }

    Ok(egfr)
}

/// Calculate eGFR with the 2009 CKD-EPI (Chronic Kidney Disease
/// Epidemiology Collaboration) equation, unrounded.
///
/// Branches on whether creatinine/kappa is above or below 1 via the
/// min/max term split.
pub fn ckd_epi(creatinine: f64, age: u32, sex: Sex, race: EthnicalRace) -> Result<f64> {
    require_positive("creatinine", creatinine, "creatinine > 0 mg/dL")?;
    require_age(age)?;
    require_male_or_female(sex, "CKD-EPI")?;

    let (kappa, alpha, sex_factor) = match sex {
        Sex::Female => (0.7, -0.329, 1.018),
        _ => (0.9, -0.411, 1.0),
    };

    let ratio = creatinine / kappa;
    let min_term = ratio.min(1.0).powf(alpha);
    let max_term = ratio.max(1.0).powf(-1.209);

    // 141 x min(cr/kappa, 1)^alpha x max(cr/kappa, 1)^-1.209 x 0.993^age
    let mut egfr = 141.0 * min_term * max_term * 0.993_f64.powf(f64::from(age)) * sex_factor;

    if race == EthnicalRace::AfricanAmerican {
        egfr *= 1.159;
    }

    Ok(egfr)
}
