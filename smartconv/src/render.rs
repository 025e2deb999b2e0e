//! Terminal renderer
//!
//! Renders outcomes, the history panel and registry listings as plain text
//! or as one JSON object per line.

use serde::Serialize;
use serde_json::json;
use smartconv_units::{Category, UNITS};
use crate::config::OutputFormat;
use crate::history::History;
use crate::outcome::Outcome;

pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render one outcome; silent outcomes produce no text output
    pub fn render_outcome(&self, outcome: &Outcome) -> Option<String> {
        match self.format {
            OutputFormat::Json => Some(to_json_line(outcome)),
            OutputFormat::Text => match outcome {
                Outcome::Success { display, .. } => Some(format!("✔ {}", display)),
                Outcome::Warning { message, .. } => Some(format!("⚠ {}", message)),
                Outcome::Error { message, detail, suggestion, .. } => {
                    let mut line = format!("✖ {} ({})", message, detail);
                    if let Some(s) = suggestion {
                        line.push_str(&format!("\n  hint: {}", s));
                    }
                    Some(line)
                }
                Outcome::Silent => None,
            },
        }
    }

    /// Render the history panel
    pub fn render_history(&self, history: &History) -> String {
        match self.format {
            OutputFormat::Json => to_json_line(&json!({
                "history": history.iter().collect::<Vec<_>>(),
                "capacity": history.capacity(),
            })),
            OutputFormat::Text => {
                if history.is_empty() {
                    return "No conversions yet.".to_string();
                }
                let mut output = format!("Conversion History (last {})", history.capacity());
                for entry in history.iter() {
                    output.push_str("\n  ");
                    output.push_str(entry);
                }
                output
            }
        }
    }

    pub fn render_categories(&self) -> String {
        let names: Vec<&str> = UNITS.categories().map(|c| c.name()).collect();
        match self.format {
            OutputFormat::Json => to_json_line(&json!({ "categories": names })),
            OutputFormat::Text => names.join("\n"),
        }
    }

    /// Render the units of a category with their shorthand aliases
    pub fn render_units(&self, category: Category) -> String {
        let units = UNITS.unit_names(category);
        match self.format {
            OutputFormat::Json => {
                let listed: Vec<_> = units
                    .iter()
                    .map(|name| json!({ "name": name, "aliases": UNITS.aliases_for(name) }))
                    .collect();
                to_json_line(&json!({ "category": category, "units": listed }))
            }
            OutputFormat::Text => {
                let mut output = format!("{}:", category);
                for name in units {
                    let aliases = UNITS.aliases_for(name);
                    if aliases.is_empty() {
                        output.push_str(&format!("\n  {}", name));
                    } else {
                        output.push_str(&format!("\n  {} ({})", name, aliases.join(", ")));
                    }
                }
                output
            }
        }
    }

    /// Render an informational message (mode changes, help)
    pub fn render_notice(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Json => to_json_line(&json!({ "notice": message })),
            OutputFormat::Text => message.to_string(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

fn to_json_line<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => json!({ "status": "error", "message": e.to_string() }).to_string(),
    }
}
