//! Conversion type - the outcome of one resolved request

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// Decimal places used when a conversion is displayed
pub const DISPLAY_PRECISION: usize = 4;

/// A resolved conversion: source value and unit, target unit and value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    pub category: Category,
}

impl Conversion {
    /// Format as `"{value} {from} = {result} {to}"` with `precision` decimals on the result.
    /// The source value keeps its float form, so `10` prints as `10.0`.
    pub fn display(&self, precision: usize) -> String {
        format!("{:?} {} = {:.*} {}", self.value, self.from, precision, self.result, self.to)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(DISPLAY_PRECISION))
    }
}
