//! smartconv Units - Unit registry and conversion
//!
//! Converts a value between two units of the same category, either from
//! explicit unit names or from a free-text phrase such as "10 kg to lb".
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (kg, g, mg, lb, oz)
//! - Temperature (C, F, K)

mod category;
mod unit;
mod conversion;
mod convert;
mod parse;
mod units;

pub use category::Category;
pub use unit::{CategoryKind, CelsiusFn, LinearUnit, TemperatureUnit, UnitDefinition};
pub use conversion::{Conversion, DISPLAY_PRECISION};
pub use convert::{convert, convert_in, resolve};
pub use parse::{parse, evaluate, parse_classic, parse_value, ParsedRequest, ClassicRequest};
pub use units::{UnitRegistry, UNITS};
