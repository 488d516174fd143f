//! Anthropometric calculations: body-mass index and body-surface area.
//!
//! BMI categories follow the WHO classification with half-open boundaries
//! (a BMI of exactly 25.0 is overweight). Body surface area offers five
//! published power-law formulas selectable via [`BsaFormula`]; Mosteller is
//! the default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::validate::require_positive;
use crate::error::{MedimetryError, Result};
use crate::utils::round_to;

/// BMI classification categories according to WHO standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 24.9
    Normal,
    /// BMI 25.0 to 29.9
    Overweight,
    /// BMI 30.0 to 34.9
    ObeseClassI,
    /// BMI 35.0 to 39.9
    ObeseClassII,
    /// BMI 40.0 and above
    ObeseClassIII,
}

impl BmiCategory {
    /// Human-readable label for the category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Body surface area calculation formulas
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BsaFormula {
    /// DuBois & DuBois (1916)
    DuBois,
    /// Mosteller (1987), the default
    #[default]
    Mosteller,
    /// Haycock (1978)
    Haycock,
    /// Gehan & George (1970)
    GehanGeorge,
    /// Boyd (1935)
    Boyd,
}

impl BsaFormula {
    /// All available formulas, in a fixed order
    pub const ALL: [Self; 5] = [
        Self::DuBois,
        Self::Mosteller,
        Self::Haycock,
        Self::GehanGeorge,
        Self::Boyd,
    ];

    /// Published name of the formula
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DuBois => "DuBois",
            Self::Mosteller => "Mosteller",
            Self::Haycock => "Haycock",
            Self::GehanGeorge => "Gehan-George",
            Self::Boyd => "Boyd",
        }
    }
}

impl fmt::Display for BsaFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const WEIGHT_RANGE: &str = "0 < weight <= 300 kg";
const HEIGHT_RANGE: &str = "0 < height <= 3 m";

fn validate_weight(weight: f64) -> Result<()> {
    require_positive("weight", weight, WEIGHT_RANGE)?;
    if weight > 300.0 {
        return Err(MedimetryError::invalid_input(
            format!("weight must be at most 300 kilograms, got {weight}"),
            WEIGHT_RANGE,
        ));
    }
    Ok(())
}

fn validate_height(height: f64) -> Result<()> {
    require_positive("height", height, HEIGHT_RANGE)?;
    if height > 3.0 {
        return Err(MedimetryError::invalid_input(
            format!("height must be at most 3 meters, got {height} (did you provide centimeters?)"),
            HEIGHT_RANGE,
        ));
    }
    Ok(())
}

/// Calculate body-mass index from weight in kilograms and height in meters.
///
/// The result is rounded to one decimal place.
pub fn bmi(weight: f64, height: f64) -> Result<f64> {
    validate_weight(weight)?;
    validate_height(height)?;
    Ok(round_to(weight / (height * height), 1))
}

/// Calculate BMI with height given in centimeters.
pub fn bmi_from_cm(weight: f64, height_cm: f64) -> Result<f64> {
    if height_cm <= 10.0 {
        return Err(MedimetryError::invalid_input(
            format!("height must be above 10 centimeters, got {height_cm} (did you provide meters?)"),
            "10 < height <= 300 cm",
        ));
    }
    bmi(weight, height_cm / 100.0)
}

/// Classify a BMI value into WHO categories.
///
/// Boundaries are half-open: 18.5 is normal weight, 25.0 is overweight,
/// and so on at 30.0, 35.0 and 40.0.
pub fn bmi_category(bmi_value: f64) -> Result<BmiCategory> {
    require_positive("BMI", bmi_value, "BMI > 0")?;

    let category = if bmi_value < 18.5 {
        BmiCategory::Underweight
    } else if bmi_value < 25.0 {
        BmiCategory::Normal
    } else if bmi_value < 30.0 {
        BmiCategory::Overweight
    } else if bmi_value < 35.0 {
        BmiCategory::ObeseClassI
    } else if bmi_value < 40.0 {
        BmiCategory::ObeseClassII
    } else {
        BmiCategory::ObeseClassIII
    };
    Ok(category)
}

/// Calculate BMI and classify it in one call.
pub fn bmi_with_category(weight: f64, height: f64) -> Result<(f64, BmiCategory)> {
    let value = bmi(weight, height)?;
    let category = bmi_category(value)?;
    Ok((value, category))
}

/// Calculate and classify BMI with height given in centimeters.
pub fn bmi_with_category_cm(weight: f64, height_cm: f64) -> Result<(f64, BmiCategory)> {
    let value = bmi_from_cm(weight, height_cm)?;
    let category = bmi_category(value)?;
    Ok((value, category))
}

/// Calculate body surface area in square meters using the selected formula.
///
/// Weight is in kilograms, height in meters. The result is rounded to two
/// decimal places.
pub fn bsa(weight: f64, height: f64, formula: BsaFormula) -> Result<f64> {
    require_positive("weight", weight, "weight > 0 kg")?;
    require_positive("height", height, "height > 0 m")?;

    let height_cm = height * 100.0;
    let value = match formula {
        // BSA = 0.007184 x weight^0.425 x height_cm^0.725
        BsaFormula::DuBois => 0.007184 * weight.powf(0.425) * height_cm.powf(0.725),
        // BSA = sqrt((weight x height_cm) / 3600)
        BsaFormula::Mosteller => (weight * height_cm / 3600.0).sqrt(),
        // BSA = 0.024265 x weight^0.5378 x height_cm^0.3964
        BsaFormula::Haycock => 0.024265 * weight.powf(0.5378) * height_cm.powf(0.3964),
        // BSA = 0.0235 x weight^0.51456 x height_cm^0.42246
        BsaFormula::GehanGeorge => 0.0235 * weight.powf(0.51456) * height_cm.powf(0.42246),
        // BSA = 0.03330 x weight^(0.6157 - 0.0188 x log10(weight)) x height_cm^0.3
        BsaFormula::Boyd => {
            let weight_exp = 0.6157 - 0.0188 * weight.log10();
            0.03330 * weight.powf(weight_exp) * height_cm.powf(0.3)
        }
    };
    Ok(round_to(value, 2))
}

/// Calculate BSA with height given in centimeters.
pub fn bsa_from_cm(weight: f64, height_cm: f64, formula: BsaFormula) -> Result<f64> {
    require_positive("height", height_cm, "height > 0 cm")?;
    bsa(weight, height_cm / 100.0, formula)
}

/// Calculate BSA with every available formula, in the order of
/// [`BsaFormula::ALL`].
pub fn bsa_all_formulas(weight: f64, height: f64) -> Result<Vec<(BsaFormula, f64)>> {
    BsaFormula::ALL
        .iter()
        .map(|&formula| Ok((formula, bsa(weight, height, formula)?)))
        .collect()
}
