//! Conversion session
//!
//! Holds the per-user state: the current input mode and the history of
//! successful conversions. Every request runs to completion against
//! `&mut Session`.

use smartconv_core::ConvertError;
use smartconv_units::{self as units, Category, Conversion};
use tracing::{debug, info, warn};
use crate::config::{Config, Mode};
use crate::history::History;
use crate::outcome::{Outcome, CLASSIC_USAGE_MESSAGE};

pub struct Session {
    config: Config,
    mode: Mode,
    history: History,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            mode: config.mode,
            history: History::with_capacity(config.history_capacity),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!(from = %self.mode, to = %mode, "mode changed");
        }
        self.mode = mode;
    }

    /// Switch between smart and classic input; history is kept
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one line of input according to the current mode
    pub fn submit(&mut self, line: &str) -> Outcome {
        match self.mode {
            Mode::Smart => self.submit_text(line),
            Mode::Classic => match units::parse_classic(line) {
                Ok(req) => self.submit_classic(req.category, &req.from, &req.to, req.value),
                Err(ConvertError::NoMatch) => {
                    let detail = format!("could not read {:?}", line.trim());
                    Outcome::Error {
                        code: smartconv_core::codes::NO_MATCH,
                        message: CLASSIC_USAGE_MESSAGE.to_string(),
                        detail,
                        suggestion: None,
                    }
                }
                Err(e) => self.finish(Err(e)),
            },
        }
    }

    /// Smart-input request ("10 kg to lb")
    pub fn submit_text(&mut self, text: &str) -> Outcome {
        let result = units::evaluate(text);
        self.finish(result)
    }

    /// Classic request with an explicitly chosen category
    pub fn submit_classic(&mut self, category: Category, from: &str, to: &str, value: f64) -> Outcome {
        let result = units::convert_in(category, value, from, to);
        self.finish(result)
    }

    /// Discard the history when the session ends
    pub fn end(&mut self) {
        info!(entries = self.history.len(), "session ended");
        self.history.clear();
    }

    fn finish(&mut self, result: Result<Conversion, ConvertError>) -> Outcome {
        match result {
            Ok(conversion) => {
                let outcome = Outcome::success(conversion, self.config.precision);
                if let Some(entry) = outcome.display() {
                    if !self.history.push(entry) {
                        debug!(entry, "already in history");
                    }
                }
                outcome
            }
            Err(ConvertError::NoMatch) => Outcome::Silent,
            Err(e) => {
                warn!(code = e.code(), error = %e, "conversion failed");
                Outcome::from_error(&e)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
