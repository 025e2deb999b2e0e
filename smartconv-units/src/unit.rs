//! Unit representation with conversion definitions

/// Converts a Celsius value into a temperature scale
pub type CelsiusFn = fn(f64) -> f64;

/// A unit of a linear category
#[derive(Debug, Clone, Copy)]
pub struct LinearUnit {
    /// Canonical unit name (e.g., "Kilometer")
    pub name: &'static str,
    /// How many of this unit equal one reference unit
    pub factor: f64,
}

/// A temperature scale
#[derive(Debug, Clone, Copy)]
pub struct TemperatureUnit {
    pub name: &'static str,
    pub from_celsius: CelsiusFn,
}

/// Conversion definition of a single unit
#[derive(Debug, Clone, Copy)]
pub enum UnitDefinition {
    /// Scale factor relative to the category's reference unit
    Scale(f64),
    /// Celsius to this unit
    FromCelsius(CelsiusFn),
}

/// The units of one category, tagged by how they convert
#[derive(Debug, Clone)]
pub enum CategoryKind {
    Linear(Vec<LinearUnit>),
    Temperature(Vec<TemperatureUnit>),
}

impl CategoryKind {
    /// Unit names in registration order
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self {
            CategoryKind::Linear(units) => units.iter().map(|u| u.name).collect(),
            CategoryKind::Temperature(scales) => scales.iter().map(|s| s.name).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    pub fn definition(&self, name: &str) -> Option<UnitDefinition> {
        match self {
            CategoryKind::Linear(units) => units
                .iter()
                .find(|u| u.name == name)
                .map(|u| UnitDefinition::Scale(u.factor)),
            CategoryKind::Temperature(scales) => scales
                .iter()
                .find(|s| s.name == name)
                .map(|s| UnitDefinition::FromCelsius(s.from_celsius)),
        }
    }

    /// Scale factor of a linear unit; `None` for unknown names and temperature scales
    pub fn factor(&self, name: &str) -> Option<f64> {
        match self.definition(name)? {
            UnitDefinition::Scale(f) => Some(f),
            UnitDefinition::FromCelsius(_) => None,
        }
    }
}
