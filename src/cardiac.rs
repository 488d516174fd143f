//! Cardiac interval calculations: corrected QT interval (QTc).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::validate::{require_heart_rate, require_positive};
use crate::error::Result;
use crate::utils::round_to;

/// QT interval correction formulas
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QtcFormula {
    /// QTc = QT / sqrt(RR), the default and most commonly used
    #[default]
    Bazett,
    /// QTc = QT / cbrt(RR)
    Fridericia,
    /// QTc = QT + 154 x (1 - RR)
    Framingham,
    /// QTc = QT + 1.75 x (HR - 60)
    Hodges,
}

impl QtcFormula {
    /// Published name of the formula
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bazett => "Bazett",
            Self::Fridericia => "Fridericia",
            Self::Framingham => "Framingham",
            Self::Hodges => "Hodges",
        }
    }
}

impl fmt::Display for QtcFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Calculate the corrected QT interval (QTc) in milliseconds.
///
/// The QT interval is given in milliseconds, the heart rate in beats per
/// minute (1-300). The heart rate is converted to the RR interval in
/// seconds (60/HR); at 60 bpm (RR = 1.0 s) every formula returns the QT
/// interval unchanged. The result is rounded to one decimal place.
pub fn qtc_correction(qt_interval: f64, heart_rate: u32, formula: QtcFormula) -> Result<f64> {
    require_positive("QT interval", qt_interval, "QT interval > 0 ms")?;
    require_heart_rate(heart_rate)?;

    let rr_interval = 60.0 / f64::from(heart_rate);

    let qtc = match formula {
        QtcFormula::Bazett => qt_interval / rr_interval.sqrt(),
        QtcFormula::Fridericia => qt_interval / rr_interval.cbrt(),
        QtcFormula::Framingham => qt_interval + 154.0 * (1.0 - rr_interval),
        QtcFormula::Hodges => qt_interval + 1.75 * (f64::from(heart_rate) - 60.0),
    };

    Ok(round_to(qtc, 1))
}
