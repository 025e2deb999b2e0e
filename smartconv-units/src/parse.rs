//! Smart-input parsing - free text like "10 kg to lb" or "25 C in F"

use std::sync::LazyLock;
use regex::Regex;
use serde::{Serialize, Deserialize};
use smartconv_core::ConvertError;
use tracing::debug;
use crate::{Category, Conversion};
use crate::convert::{convert_in, resolve};
use crate::units::UNITS;

/// `<number> <unit> [to|in] <unit>`, anchored at the start of the input
static SMART_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d*)?|\.\d+)\s*([a-z]+)\s*(?:to|in)?\s*([a-z]+)")
        .expect("smart input pattern is valid")
});

/// A conversion request extracted from free text, with canonical unit names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ParsedRequest {
    pub fn resolve(&self) -> Result<Conversion, ConvertError> {
        resolve(self.value, &self.from, &self.to)
    }
}

/// A structured request as entered in classic mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicRequest {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl ClassicRequest {
    pub fn resolve(&self) -> Result<Conversion, ConvertError> {
        convert_in(self.category, self.value, &self.from, &self.to)
    }
}

/// Parse a free-text conversion request.
///
/// Only the first match at the start of the input counts; anything after
/// the second unit token is ignored. Unit tokens are lowercased and mapped
/// through the alias table.
pub fn parse(text: &str) -> Result<ParsedRequest, ConvertError> {
    let caps = SMART_INPUT.captures(text).ok_or(ConvertError::NoMatch)?;

    let number = &caps[1];
    let value = parse_value(number)?;

    let request = ParsedRequest {
        value,
        from: UNITS.canonical_name(&caps[2].to_lowercase()),
        to: UNITS.canonical_name(&caps[3].to_lowercase()),
    };
    debug!(input = text, ?request, "parsed smart input");

    Ok(request)
}

/// Parse and resolve a free-text request in one step
pub fn evaluate(text: &str) -> Result<Conversion, ConvertError> {
    parse(text)?.resolve()
}

/// Parse a classic-mode line: `<category> <from> <to> <value>`
///
/// Unit names go through the alias table so "meter" and "m" both mean Meter.
pub fn parse_classic(line: &str) -> Result<ClassicRequest, ConvertError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [category, from, to, value] = fields.as_slice() else {
        return Err(ConvertError::NoMatch);
    };

    let category: Category = category.parse()?;
    let value = parse_value(value)?;

    Ok(ClassicRequest {
        category,
        from: UNITS.canonical_name(from),
        to: UNITS.canonical_name(to),
        value,
    })
}

/// Parse a numeric field; signed, finite decimals only
pub fn parse_value(s: &str) -> Result<f64, ConvertError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConvertError::InvalidNumber(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kg_to_lb() {
        let req = parse("10 kg to lb").unwrap();
        assert_eq!(req.value, 10.0);
        assert_eq!(req.from, "Kilogram");
        assert_eq!(req.to, "Pound");

        let result = req.resolve().unwrap().result;
        assert!((result - 22.0462).abs() < 1e-9);
    }

    #[test]
    fn test_parse_temperature() {
        let req = parse("25 C to F").unwrap();
        assert_eq!(req.from, "Celsius");
        assert_eq!(req.to, "Fahrenheit");
        assert_eq!(req.resolve().unwrap().result, 77.0);
    }

    #[test]
    fn test_parse_no_match() {
        assert_eq!(parse("hello"), Err(ConvertError::NoMatch));
        assert_eq!(parse(""), Err(ConvertError::NoMatch));
        assert_eq!(parse("10 m"), Err(ConvertError::NoMatch));
        assert_eq!(parse("kg to lb"), Err(ConvertError::NoMatch));
        assert_eq!(parse("convert 10 kg to lb"), Err(ConvertError::NoMatch));
    }

    #[test]
    fn test_connector_optional() {
        let req = parse("10 kg lb").unwrap();
        assert_eq!(req.from, "Kilogram");
        assert_eq!(req.to, "Pound");
    }

    #[test]
    fn test_in_connector() {
        let req = parse("5 km in mi").unwrap();
        assert_eq!(req.from, "Kilometer");
        assert_eq!(req.to, "Mile");
    }

    #[test]
    fn test_inch_is_not_mistaken_for_connector() {
        let req = parse("12 in to cm").unwrap();
        assert_eq!(req.from, "Inch");
        assert_eq!(req.to, "Centimeter");

        let req = parse("3 ft in").unwrap();
        assert_eq!(req.from, "Foot");
        assert_eq!(req.to, "Inch");
    }

    #[test]
    fn test_case_insensitive() {
        let req = parse("10 KG TO LB").unwrap();
        assert_eq!(req.from, "Kilogram");
        assert_eq!(req.to, "Pound");
    }

    #[test]
    fn test_whitespace_tolerant() {
        let req = parse("  10kg   to   lb ").unwrap();
        assert_eq!(req.value, 10.0);
        assert_eq!(req.to, "Pound");
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(parse("2.5 m to ft").unwrap().value, 2.5);
        assert_eq!(parse(".5 m to ft").unwrap().value, 0.5);
        assert_eq!(parse("5. m to ft").unwrap().value, 5.0);
    }

    #[test]
    fn test_trailing_text_ignored() {
        let req = parse("10 kg to lb please, quickly").unwrap();
        assert_eq!(req.from, "Kilogram");
        assert_eq!(req.to, "Pound");
    }

    #[test]
    fn test_full_names_capitalized() {
        let req = parse("3 meter to foot").unwrap();
        assert_eq!(req.from, "Meter");
        assert_eq!(req.to, "Foot");
    }

    #[test]
    fn test_unknown_token_is_unknown_conversion() {
        let req = parse("10 xyz to kg").unwrap();
        assert_eq!(req.from, "Xyz");
        assert!(matches!(req.resolve(), Err(ConvertError::UnknownConversion { .. })));
    }

    #[test]
    fn test_evaluate() {
        let c = evaluate("100 c to k").unwrap();
        assert_eq!(c.result, 373.15);
        assert_eq!(c.category, Category::Temperature);

        assert_eq!(evaluate("nothing here"), Err(ConvertError::NoMatch));
        assert!(matches!(evaluate("1 kg to m"), Err(ConvertError::UnknownConversion { .. })));
    }

    #[test]
    fn test_overflowing_number_rejected() {
        let text = format!("{} kg to lb", "9".repeat(400));
        assert!(matches!(parse(&text), Err(ConvertError::InvalidNumber(_))));
        assert!(matches!(evaluate(&text), Err(ConvertError::InvalidNumber(_))));
    }

    #[test]
    fn test_evaluate_display() {
        assert_eq!(evaluate("10 kg to lb").unwrap().to_string(), "10.0 Kilogram = 22.0462 Pound");
    }

    #[test]
    fn test_parse_classic() {
        let req = parse_classic("Length Meter Foot 2").unwrap();
        assert_eq!(req.category, Category::Length);
        assert_eq!(req.from, "Meter");
        assert_eq!(req.to, "Foot");
        assert_eq!(req.value, 2.0);

        let req = parse_classic("temperature f c -40").unwrap();
        assert_eq!(req.from, "Fahrenheit");
        assert_eq!(req.value, -40.0);
        assert!((req.resolve().unwrap().result + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_classic_errors() {
        assert_eq!(parse_classic("Length Meter Foot"), Err(ConvertError::NoMatch));
        assert_eq!(
            parse_classic("Volume Liter Gallon 1"),
            Err(ConvertError::InvalidCategory("Volume".to_string()))
        );
        assert_eq!(
            parse_classic("Length Meter Foot abc"),
            Err(ConvertError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn test_classic_unit_outside_category() {
        let req = parse_classic("Length kg lb 1").unwrap();
        assert_eq!(req.resolve(), Err(ConvertError::unknown_unit("Kilogram", "Length")));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 3.25 "), Ok(3.25));
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }
}
