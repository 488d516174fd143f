//! Pulmonary embolism risk assessment: Geneva scores and the PERC rule.
//!
//! Two Geneva variants are provided: the simplified revised Geneva score
//! (Klok et al., 2008) with one point per clinical factor, and the revised
//! Geneva score (Le Gal et al., 2006) with weighted points and explicit
//! heart-rate brackets. Both map to the same low/intermediate/high risk
//! levels with fixed clinical probabilities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::validate::{require_age, require_heart_rate};
use crate::error::{MedimetryError, Result};

/// Geneva score risk levels for pulmonary embolism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenevaRiskLevel {
    /// Low clinical probability
    Low,
    /// Intermediate clinical probability
    Intermediate,
    /// High clinical probability
    High,
}

impl GenevaRiskLevel {
    /// Human-readable label for the risk level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Intermediate => "Intermediate",
            Self::High => "High",
        }
    }

    /// Clinical PE probability associated with the risk level
    #[must_use]
    pub const fn pe_probability(self) -> &'static str {
        match self {
            Self::Low => "8%",
            Self::Intermediate => "28%",
            Self::High => "74%",
        }
    }
}

impl fmt::Display for GenevaRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Geneva score result for pulmonary embolism risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenevaScore {
    /// Total points
    pub score: u32,
    /// Risk level derived from the score
    pub risk_level: GenevaRiskLevel,
    /// Clinical PE probability for the risk level
    pub pe_probability: String,
}

/// Clinical risk factors shared by both Geneva score variants.
///
/// Construct with struct-update syntax:
/// `GenevaRiskFactors { hemoptysis: true, ..Default::default() }`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenevaRiskFactors {
    /// Previous PE or DVT history
    pub previous_pe_dvt: bool,
    /// Surgery or fracture within one month
    pub recent_surgery: bool,
    /// Hemoptysis
    pub hemoptysis: bool,
    /// Active cancer (treatment ongoing, within 6 months, or palliative)
    pub active_cancer: bool,
    /// Unilateral lower limb pain
    pub unilateral_leg_pain: bool,
    /// Unilateral lower limb edema and superficial venous dilatation
    pub unilateral_leg_edema: bool,
    /// Pain on lower limb deep venous palpation
    pub pain_on_palpation: bool,
}

/// Criteria of the PERC rule beyond the three measured values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercCriteria {
    /// Unilateral leg swelling
    pub unilateral_leg_swelling: bool,
    /// Hemoptysis
    pub hemoptysis: bool,
    /// Surgery or trauma within four weeks
    pub recent_surgery_trauma: bool,
    /// Prior history of PE or DVT
    pub prior_pe_dvt: bool,
    /// Hormone use (oral contraceptives, hormone replacement or pregnancy)
    pub hormone_use: bool,
}

/// PERC rule result for pulmonary embolism rule-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercResult {
    /// Number of positive criteria (0-8)
    pub positive_criteria: u8,
    /// True when any criterion is positive
    pub positive: bool,
    /// Clinical recommendation text
    pub recommendation: String,
}

impl PercResult {
    /// Whether the rule is positive (PE cannot be ruled out)
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.positive
    }
}

impl From<&PercResult> for bool {
    fn from(result: &PercResult) -> Self {
        result.positive
    }
}

fn geneva_result(score: u32, low_max: u32, intermediate_max: u32) -> GenevaScore {
    let risk_level = if score <= low_max {
        GenevaRiskLevel::Low
    } else if score <= intermediate_max {
        GenevaRiskLevel::Intermediate
    } else {
        GenevaRiskLevel::High
    };
    GenevaScore {
        score,
        risk_level,
        pe_probability: risk_level.pe_probability().to_string(),
    }
}

/// Calculate the simplified revised Geneva score (Klok et al., 2008).
///
/// Age 60-79 scores 1 point, >= 80 scores 2; heart rate over 100 bpm and
/// each clinical factor score 1 point. Low risk <= 3, intermediate 4-8,
/// high >= 9.
pub fn geneva_score(
    age: u32,
    heart_rate_over_100: bool,
    factors: &GenevaRiskFactors,
) -> Result<GenevaScore> {
    require_age(age)?;

    let mut score = 0u32;

    // Age bracket
    if age >= 80 {
        score += 2;
    } else if age >= 60 {
        score += 1;
    }

    if heart_rate_over_100 {
        score += 1;
    }

    // Clinical factors, one point each
    if factors.previous_pe_dvt {
        score += 1;
    }
    if factors.recent_surgery {
        score += 1;
    }
    if factors.hemoptysis {
        score += 1;
    }
    if factors.active_cancer {
        score += 1;
    }
    if factors.unilateral_leg_pain {
        score += 1;
    }
    if factors.unilateral_leg_edema {
        score += 1;
    }
    if factors.pain_on_palpation {
        score += 1;
    }

    Ok(geneva_result(score, 3, 8))
}

/// Calculate the revised Geneva score (Le Gal et al., 2006).
///
/// Uses weighted points and explicit heart-rate brackets: 75-94 bpm scores
/// 3 points, >= 95 scores 5. A heart rate of `None` is treated as normal.
/// Low risk <= 3, intermediate 4-10, high >= 11.
pub fn geneva_revised_score(
    age: u32,
    heart_rate: Option<u32>,
    factors: &GenevaRiskFactors,
) -> Result<GenevaScore> {
    require_age(age)?;
    if let Some(hr) = heart_rate {
        require_heart_rate(hr)?;
    }

    let mut score = 0u32;

    if age >= 65 {
        score += 1;
    }

    // Heart rate brackets
    match heart_rate {
        Some(hr) if hr >= 95 => score += 5,
        Some(hr) if hr >= 75 => score += 3,
        _ => {}
    }

    // Weighted clinical factors
    if factors.previous_pe_dvt {
        score += 3;
    }
    if factors.recent_surgery {
        score += 2;
    }
    if factors.hemoptysis {
        score += 2;
    }
    if factors.active_cancer {
        score += 2;
    }
    if factors.unilateral_leg_pain {
        score += 3;
    }
    if factors.unilateral_leg_edema {
        score += 4;
    }
    if factors.pain_on_palpation {
        score += 4;
    }

    Ok(geneva_result(score, 3, 10))
}

/// Evaluate the PERC (Pulmonary Embolism Rule-out Criteria) rule.
///
/// Eight criteria each contribute one positive count: age >= 50, heart
/// rate >= 100 bpm, oxygen saturation < 95%, and the five boolean criteria.
/// The rule is positive when any criterion is positive; a negative rule
/// allows PE to be ruled out without further testing in low-risk patients.
pub fn perc_rule(
    age: u32,
    heart_rate: u32,
    oxygen_saturation: f64,
    criteria: &PercCriteria,
) -> Result<PercResult> {
    require_age(age)?;
    require_heart_rate(heart_rate)?;
    if !(oxygen_saturation > 0.0 && oxygen_saturation <= 100.0) {
        return Err(MedimetryError::invalid_input(
            format!("oxygen saturation must be between 0 and 100%, got {oxygen_saturation}"),
            "0 < SpO2 <= 100 %",
        ));
    }

    let mut count = 0u8;

    if age >= 50 {
        count += 1;
    }
    if heart_rate >= 100 {
        count += 1;
    }
    if oxygen_saturation < 95.0 {
        count += 1;
    }
    if criteria.unilateral_leg_swelling {
        count += 1;
    }
    if criteria.hemoptysis {
        count += 1;
    }
    if criteria.recent_surgery_trauma {
        count += 1;
    }
    if criteria.prior_pe_dvt {
        count += 1;
    }
    if criteria.hormone_use {
        count += 1;
    }

    let positive = count > 0;
    let recommendation = if positive {
        format!("PERC positive ({count} criteria) - Further evaluation needed")
    } else {
        "PERC negative - PE can be ruled out without further testing in low-risk patients"
            .to_string()
    };

    log::debug!("PERC rule: {count} positive criteria");
    Ok(PercResult {
        positive_criteria: count,
        positive,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geneva_score_no_factors() {
        let result = geneva_score(30, false, &GenevaRiskFactors::default()).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.risk_level, GenevaRiskLevel::Low);
        assert_eq!(result.pe_probability, "8%");
    }

    #[test]
    fn test_geneva_score_age_brackets() {
        let none = GenevaRiskFactors::default();
        assert_eq!(geneva_score(59, false, &none).unwrap().score, 0);
        assert_eq!(geneva_score(60, false, &none).unwrap().score, 1);
        assert_eq!(geneva_score(79, false, &none).unwrap().score, 1);
        assert_eq!(geneva_score(80, false, &none).unwrap().score, 2);
    }

    #[test]
    fn test_geneva_score_risk_boundaries() {
        let none = GenevaRiskFactors::default();
        // 2 (age) + 1 (factor) = 3 -> low
        let low = geneva_score(
            85,
            false,
            &GenevaRiskFactors {
                hemoptysis: true,
                ..none
            },
        )
        .unwrap();
        assert_eq!((low.score, low.risk_level), (3, GenevaRiskLevel::Low));

        // One more point tips into intermediate
        let intermediate = geneva_score(
            85,
            true,
            &GenevaRiskFactors {
                hemoptysis: true,
                ..none
            },
        )
        .unwrap();
        assert_eq!(
            (intermediate.score, intermediate.risk_level),
            (4, GenevaRiskLevel::Intermediate)
        );
    }

    #[test]
    fn test_geneva_score_all_factors_high_risk() {
        let all = GenevaRiskFactors {
            previous_pe_dvt: true,
            recent_surgery: true,
            hemoptysis: true,
            active_cancer: true,
            unilateral_leg_pain: true,
            unilateral_leg_edema: true,
            pain_on_palpation: true,
        };
        // 1 (age 70) + 1 (HR) + 7 factors = 9 -> high
        let result = geneva_score(70, true, &all).unwrap();
        assert_eq!(result.score, 9);
        assert_eq!(result.risk_level, GenevaRiskLevel::High);
        assert_eq!(result.pe_probability, "74%");
    }

    #[test]
    fn test_geneva_score_invalid_age() {
        assert!(geneva_score(0, false, &GenevaRiskFactors::default()).is_err());
    }

    #[test]
    fn test_geneva_revised_heart_rate_brackets() {
        let none = GenevaRiskFactors::default();
        assert_eq!(geneva_revised_score(70, None, &none).unwrap().score, 1);
        assert_eq!(geneva_revised_score(70, Some(60), &none).unwrap().score, 1);
        assert_eq!(
            geneva_revised_score(70, Some(75), &none).unwrap().score,
            4
        );
        assert_eq!(
            geneva_revised_score(70, Some(94), &none).unwrap().score,
            4
        );
        assert_eq!(
            geneva_revised_score(70, Some(95), &none).unwrap().score,
            6
        );
    }

    #[test]
    fn test_geneva_revised_age_bracket() {
        let none = GenevaRiskFactors::default();
        assert_eq!(geneva_revised_score(64, None, &none).unwrap().score, 0);
        assert_eq!(geneva_revised_score(65, None, &none).unwrap().score, 1);
    }

    #[test]
    fn test_geneva_revised_risk_boundaries() {
        // 1 (age) + 5 (HR) + 2 (surgery) + 2 (hemoptysis) = 10 -> intermediate
        let intermediate = geneva_revised_score(
            70,
            Some(100),
            &GenevaRiskFactors {
                recent_surgery: true,
                hemoptysis: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            (intermediate.score, intermediate.risk_level),
            (10, GenevaRiskLevel::Intermediate)
        );

        // 1 + 5 + 3 (leg pain) + 2 (hemoptysis) = 11 -> high
        let high = geneva_revised_score(
            70,
            Some(100),
            &GenevaRiskFactors {
                unilateral_leg_pain: true,
                hemoptysis: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!((high.score, high.risk_level), (11, GenevaRiskLevel::High));
    }

    #[test]
    fn test_geneva_revised_weighted_maximum() {
        let all = GenevaRiskFactors {
            previous_pe_dvt: true,
            recent_surgery: true,
            hemoptysis: true,
            active_cancer: true,
            unilateral_leg_pain: true,
            unilateral_leg_edema: true,
            pain_on_palpation: true,
        };
        // 1 + 5 + (3+2+2+2+3+4+4) = 26
        let result = geneva_revised_score(70, Some(120), &all).unwrap();
        assert_eq!(result.score, 26);
        assert_eq!(result.risk_level, GenevaRiskLevel::High);
    }

    #[test]
    fn test_geneva_revised_invalid_inputs() {
        let none = GenevaRiskFactors::default();
        assert!(geneva_revised_score(0, None, &none).is_err());
        assert!(geneva_revised_score(70, Some(0), &none).is_err());
        assert!(geneva_revised_score(70, Some(301), &none).is_err());
    }

    #[test]
    fn test_perc_negative() {
        let result = perc_rule(30, 80, 98.0, &PercCriteria::default()).unwrap();
        assert_eq!(result.positive_criteria, 0);
        assert!(!result.positive);
        assert!(!result.is_positive());
        assert!(!bool::from(&result));
        assert_eq!(
            result.recommendation,
            "PERC negative - PE can be ruled out without further testing in low-risk patients"
        );
    }

    #[test]
    fn test_perc_counts_equal_true_criteria() {
        // Age and heart rate positive, everything else negative
        let result = perc_rule(55, 110, 98.0, &PercCriteria::default()).unwrap();
        assert_eq!(result.positive_criteria, 2);
        assert!(result.positive);

        // All eight criteria positive
        let all = PercCriteria {
            unilateral_leg_swelling: true,
            hemoptysis: true,
            recent_surgery_trauma: true,
            prior_pe_dvt: true,
            hormone_use: true,
        };
        let result = perc_rule(55, 110, 93.0, &all).unwrap();
        assert_eq!(result.positive_criteria, 8);
        assert_eq!(
            result.recommendation,
            "PERC positive (8 criteria) - Further evaluation needed"
        );
    }

    #[test]
    fn test_perc_threshold_boundaries() {
        let none = PercCriteria::default();
        assert_eq!(perc_rule(49, 80, 98.0, &none).unwrap().positive_criteria, 0);
        assert_eq!(perc_rule(50, 80, 98.0, &none).unwrap().positive_criteria, 1);
        assert_eq!(perc_rule(30, 99, 98.0, &none).unwrap().positive_criteria, 0);
        assert_eq!(
            perc_rule(30, 100, 98.0, &none).unwrap().positive_criteria,
            1
        );
        assert_eq!(
            perc_rule(30, 80, 95.0, &none).unwrap().positive_criteria,
            0
        );
        assert_eq!(
            perc_rule(30, 80, 94.9, &none).unwrap().positive_criteria,
            1
        );
    }

    #[test]
    fn test_perc_invalid_inputs() {
        let none = PercCriteria::default();
        assert!(perc_rule(0, 80, 98.0, &none).is_err());
        assert!(perc_rule(30, 0, 98.0, &none).is_err());
        assert!(perc_rule(30, 301, 98.0, &none).is_err());
        assert!(perc_rule(30, 80, 0.0, &none).is_err());
        assert!(perc_rule(30, 80, 100.5, &none).is_err());
        assert!(perc_rule(30, 80, f64::NAN, &none).is_err());
    }
}
