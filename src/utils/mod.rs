//! Small numeric utilities shared by the calculation modules.

/// Round a value to the given number of decimal places
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
