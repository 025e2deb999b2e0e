//! Conversion resolver
//!
//! Detects the category a pair of units belongs to and computes the
//! converted value. Linear categories pivot through their reference unit;
//! temperature goes through Celsius.

use smartconv_core::ConvertError;
use tracing::{debug, trace};
use crate::{Category, CategoryKind, Conversion};
use crate::units::UNITS;

/// Convert `value` from one unit to another, detecting the category
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    resolve(value, from_unit, to_unit).map(|c| c.result)
}

/// Convert `value`, returning the full conversion record
pub fn resolve(value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConvertError> {
    let category = match UNITS.category_of(from_unit, to_unit) {
        Some(c) => c,
        None => {
            trace!(from = from_unit, to = to_unit, "no category holds both units");
            return Err(ConvertError::unknown_conversion(from_unit, to_unit));
        }
    };
    trace!(%category, from = from_unit, to = to_unit, "category detected");

    convert_in(category, value, from_unit, to_unit)
}

/// Convert `value` within an explicitly chosen category
pub fn convert_in(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<Conversion, ConvertError> {
    let kind = UNITS
        .kind(category)
        .ok_or_else(|| ConvertError::InvalidCategory(category.to_string()))?;

    let result = match kind {
        CategoryKind::Linear(_) => {
            let from_factor = kind
                .factor(from_unit)
                .ok_or_else(|| ConvertError::unknown_unit(from_unit, category.name()))?;
            let to_factor = kind
                .factor(to_unit)
                .ok_or_else(|| ConvertError::unknown_unit(to_unit, category.name()))?;

            if from_unit == to_unit {
                value
            } else {
                value * (to_factor / from_factor)
            }
        }
        CategoryKind::Temperature(scales) => {
            let target = scales
                .iter()
                .find(|s| s.name == to_unit)
                .ok_or_else(|| ConvertError::unknown_unit(to_unit, category.name()))?;
            let celsius = to_celsius(from_unit, value)
                .ok_or_else(|| ConvertError::unknown_unit(from_unit, category.name()))?;

            if from_unit == to_unit {
                value
            } else {
                (target.from_celsius)(celsius)
            }
        }
    };

    debug!(%category, value, from = from_unit, to = to_unit, result, "converted");

    Ok(Conversion {
        value,
        from: from_unit.to_string(),
        to: to_unit.to_string(),
        result,
        category,
    })
}

/// Bring a temperature reading onto the Celsius scale
fn to_celsius(unit: &str, value: f64) -> Option<f64> {
    match unit {
        "Celsius" => Some(value),
        "Fahrenheit" => Some((value - 32.0) * 5.0 / 9.0),
        "Kelvin" => Some(value - 273.15),
        _ => None,
    }
}
