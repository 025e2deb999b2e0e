//! Unit definitions organized by category

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, CategoryKind, LinearUnit, TemperatureUnit, UnitDefinition};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units and their shorthand aliases
pub struct UnitRegistry {
    categories: Vec<(Category, CategoryKind)>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            categories: Vec::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Categories in scan order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|(c, _)| *c)
    }

    pub fn kind(&self, category: Category) -> Option<&CategoryKind> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, kind)| kind)
    }

    /// Unit names of a category in registration order
    pub fn unit_names(&self, category: Category) -> Vec<&'static str> {
        self.kind(category)
            .map(|kind| kind.unit_names())
            .unwrap_or_default()
    }

    pub fn definition(&self, category: Category, unit: &str) -> Option<UnitDefinition> {
        self.kind(category)?.definition(unit)
    }

    /// First category (in scan order) whose units include both names
    pub fn category_of(&self, from: &str, to: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|(_, kind)| kind.contains(from) && kind.contains(to))
            .map(|(c, _)| *c)
    }

    /// Resolve a shorthand token to its canonical unit name.
    ///
    /// Tokens without an alias are returned capitalized ("xyz" -> "Xyz"),
    /// which may or may not name a registered unit.
    pub fn canonical_name(&self, token: &str) -> String {
        let token = token.trim().to_lowercase();
        match self.aliases.get(token.as_str()) {
            Some(name) => name.to_string(),
            None => capitalize(&token),
        }
    }

    /// Shorthand tokens that resolve to a unit, sorted
    pub fn aliases_for(&self, unit: &str) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self.aliases
            .iter()
            .filter(|(_, name)| **name == unit)
            .map(|(alias, _)| *alias)
            .collect();
        tokens.sort_unstable();
        tokens
    }

    fn register(&mut self, category: Category, kind: CategoryKind) {
        self.categories.push((category, kind));
    }

    fn alias(&mut self, alias: &'static str, name: &'static str) {
        self.aliases.insert(alias, name);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        self.register(Category::Length, CategoryKind::Linear(vec![
            LinearUnit { name: "Meter", factor: 1.0 },
            LinearUnit { name: "Kilometer", factor: 0.001 },
            LinearUnit { name: "Centimeter", factor: 100.0 },
            LinearUnit { name: "Millimeter", factor: 1000.0 },
            LinearUnit { name: "Mile", factor: 0.000621371 },
            LinearUnit { name: "Yard", factor: 1.09361 },
            LinearUnit { name: "Foot", factor: 3.28084 },
            LinearUnit { name: "Inch", factor: 39.3701 },
        ]));

        self.alias("m", "Meter");
        self.alias("km", "Kilometer");
        self.alias("cm", "Centimeter");
        self.alias("mm", "Millimeter");
        self.alias("mi", "Mile");
        self.alias("yd", "Yard");
        self.alias("ft", "Foot");
        self.alias("in", "Inch");
    }

    fn register_weight_units(&mut self) {
        self.register(Category::Weight, CategoryKind::Linear(vec![
            LinearUnit { name: "Kilogram", factor: 1.0 },
            LinearUnit { name: "Gram", factor: 1000.0 },
            LinearUnit { name: "Milligram", factor: 1e6 },
            LinearUnit { name: "Pound", factor: 2.20462 },
            LinearUnit { name: "Ounce", factor: 35.274 },
        ]));

        self.alias("kg", "Kilogram");
        self.alias("g", "Gram");
        self.alias("mg", "Milligram");
        self.alias("lb", "Pound");
        self.alias("oz", "Ounce");
    }

    fn register_temperature_units(&mut self) {
        self.register(Category::Temperature, CategoryKind::Temperature(vec![
            TemperatureUnit { name: "Celsius", from_celsius: |c| c },
            TemperatureUnit { name: "Fahrenheit", from_celsius: |c| c * 9.0 / 5.0 + 32.0 },
            TemperatureUnit { name: "Kelvin", from_celsius: |c| c + 273.15 },
        ]));

        self.alias("c", "Celsius");
        self.alias("f", "Fahrenheit");
        self.alias("k", "Kelvin");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
