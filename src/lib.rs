//! A Rust library of clinical calculation formulas and scores with input
//! validation, covering anthropometric, cardiac, cardiovascular, hepatic,
//! neurological, pulmonary and renal assessments plus unit and date
//! conversions.
//!
//! Every function is a pure, synchronous computation over its arguments:
//! inputs are validated against documented plausible ranges, the published
//! formula or scoring ladder is applied, and the result is returned rounded
//! to the documented precision. The only failure mode is
//! [`MedimetryError::InvalidInput`].

pub mod anthropometric;
pub mod cardiac;
pub mod cardiovascular;
pub mod converters;
pub mod error;
pub mod metabolic;
pub mod neuro;
pub mod pulmonary;
pub mod renal;
pub mod types;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use error::{MedimetryError, Result};
pub use types::{EthnicalRace, Sex};

// Selectors and categories
pub use anthropometric::{BmiCategory, BsaFormula};
pub use cardiac::QtcFormula;
pub use cardiovascular::ChadsVascRiskFactors;
pub use metabolic::{AscitesSeverity, ChildPughGrade, EncephalopathyGrade};
pub use neuro::{EyeResponse, GcsCategory, MotorResponse, VerbalResponse};
pub use pulmonary::{GenevaRiskFactors, GenevaRiskLevel, GenevaScore, PercCriteria, PercResult};

// Conversion functions
pub use converters::{dob2age, dob2age_parts, mgdl2umoll, umoll2mgdl};
