//! smartconv - Smart unit converter
//!
//! Wraps the unit resolver in a session: input mode, bounded history of
//! successful conversions, configuration and output rendering.

mod config;
mod history;
mod outcome;
mod render;
mod session;

pub use config::{Config, ConfigError, Mode, OutputFormat};
pub use history::{History, DEFAULT_CAPACITY};
pub use outcome::Outcome;
pub use render::Renderer;
pub use session::Session;

pub use smartconv_core::{ConvertError, Severity};
pub use smartconv_units::{Category, Conversion};
