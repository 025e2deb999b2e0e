//! What the presentation layer shows for one request

use serde::Serialize;
use smartconv_core::{ConvertError, Severity};
use smartconv_units::Conversion;

pub const UNKNOWN_CONVERSION_MESSAGE: &str = "Could not identify the correct conversion type.";
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed. Please check the units.";
pub const CLASSIC_USAGE_MESSAGE: &str = "Expected: <category> <from> <to> <value>";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        conversion: Conversion,
        display: String,
    },
    Warning {
        code: &'static str,
        message: String,
        detail: String,
    },
    Error {
        code: &'static str,
        message: String,
        detail: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<String>,
    },
    /// Input was not a request; nothing is shown
    Silent,
}

impl Outcome {
    pub fn success(conversion: Conversion, precision: usize) -> Self {
        let display = conversion.display(precision);
        Outcome::Success { conversion, display }
    }

    /// Classify a failure by its severity
    pub fn from_error(err: &ConvertError) -> Self {
        match err.severity() {
            Severity::Silent => Outcome::Silent,
            Severity::Warning => Outcome::Warning {
                code: err.code(),
                message: UNKNOWN_CONVERSION_MESSAGE.to_string(),
                detail: err.to_string(),
            },
            Severity::Error => {
                let message = match err {
                    ConvertError::UnknownUnit { .. } => CONVERSION_FAILED_MESSAGE.to_string(),
                    other => format!("Invalid input: {}.", other),
                };
                Outcome::Error {
                    code: err.code(),
                    message,
                    detail: err.to_string(),
                    suggestion: err.suggestion(),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Display string of a successful conversion
    pub fn display(&self) -> Option<&str> {
        match self {
            Outcome::Success { display, .. } => Some(display),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartconv_units::resolve;

    #[test]
    fn test_success_display() {
        let c = resolve(10.0, "Kilogram", "Pound").unwrap();
        let outcome = Outcome::success(c, 4);
        assert!(outcome.is_success());
        assert_eq!(outcome.display(), Some("10.0 Kilogram = 22.0462 Pound"));
    }

    #[test]
    fn test_no_match_is_silent() {
        assert_eq!(Outcome::from_error(&ConvertError::NoMatch), Outcome::Silent);
    }

    #[test]
    fn test_unknown_conversion_is_warning() {
        let outcome = Outcome::from_error(&ConvertError::unknown_conversion("Meter", "Pound"));
        match outcome {
            Outcome::Warning { code, message, .. } => {
                assert_eq!(code, "UNKNOWN_CONVERSION");
                assert_eq!(message, UNKNOWN_CONVERSION_MESSAGE);
            }
            other => panic!("expected warning, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_is_error() {
        let outcome = Outcome::from_error(&ConvertError::unknown_unit("Gram", "Length"));
        match outcome {
            Outcome::Error { code, message, detail, suggestion } => {
                assert_eq!(code, "UNKNOWN_UNIT");
                assert_eq!(message, CONVERSION_FAILED_MESSAGE);
                assert_eq!(detail, "unknown unit Gram in Length");
                assert!(suggestion.is_some());
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number_is_error() {
        let outcome = Outcome::from_error(&ConvertError::InvalidNumber("abc".into()));
        assert!(matches!(outcome, Outcome::Error { code: "INVALID_NUMBER", .. }));
        assert!(outcome.display().is_none());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Outcome::Silent).unwrap();
        assert_eq!(json["status"], "silent");

        let c = resolve(0.0, "Celsius", "Fahrenheit").unwrap();
        let json = serde_json::to_value(Outcome::success(c, 4)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["display"], "0.0 Celsius = 32.0000 Fahrenheit");
        assert_eq!(json["conversion"]["result"], 32.0);
    }
}
