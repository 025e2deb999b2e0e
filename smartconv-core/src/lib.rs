//! smartconv Core - Fundamental types
//!
//! This crate provides the types shared by every smartconv crate:
//! - `ConvertError`: the failure taxonomy of parsing and conversion
//! - `Severity`: how loudly a failure is reported to the user

mod error;

pub use error::{ConvertError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertError, Severity};
    pub use crate::error::codes;
}
