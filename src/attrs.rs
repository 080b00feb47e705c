//! Attribute model for mark instances
//!
//! Every mark type declares a fixed schema of named, typed attributes. A mark
//! instance owns one `AttributeStore` holding the current value of each
//! declared attribute. After initialization the store is written only by the
//! constraint solver (between solves) and by handle edits; queries treat it
//! as an immutable snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Semantic type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Number,
    /// A color or null (unset)
    Color,
    Boolean,
    String,
    Enum,
}

/// How an attribute participates in constraint solving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverRole {
    /// Not a solver variable (style and payload attributes)
    None,
    /// Solver variable whose current value anchors the system on each pass
    Primary,
    /// Solver variable determined entirely by constraints
    Derived,
}

/// Declaration of one attribute in a mark's schema
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub role: SolverRole,
}

impl AttributeSpec {
    pub const fn number(name: &'static str, role: SolverRole) -> Self {
        Self {
            name,
            kind: AttributeKind::Number,
            role,
        }
    }

    pub const fn style(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: SolverRole::None,
        }
    }
}

/// Current value of one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Number(f64),
    Color(Option<String>),
    Boolean(bool),
    String(String),
    Enum(String),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Number(_) => AttributeKind::Number,
            AttributeValue::Color(_) => AttributeKind::Color,
            AttributeValue::Boolean(_) => AttributeKind::Boolean,
            AttributeValue::String(_) => AttributeKind::String,
            AttributeValue::Enum(_) => AttributeKind::Enum,
        }
    }
}

/// Per-instance mutable record of attribute values.
///
/// Attribute values are the only state a host needs to persist to
/// reconstruct a mark exactly, hence the serde support.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeStore {
    values: HashMap<String, AttributeValue>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: AttributeValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Verify that every attribute declared in `schema` is present with the
    /// declared kind. A mismatch is a construction bug in the mark type.
    pub fn matches_schema(&self, schema: &[AttributeSpec]) -> bool {
        schema
            .iter()
            .all(|spec| self.get(spec.name).map(AttributeValue::kind) == Some(spec.kind))
    }

    // Typed accessors. A missing or mis-kinded attribute is a programming
    // error (the store is total after initialization), so these panic with
    // the attribute name instead of returning a runtime error.

    pub fn number(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(AttributeValue::Number(v)) => *v,
            other => panic!("attribute '{}' is not a number: {:?}", name, other),
        }
    }

    pub fn set_number(&mut self, name: &str, value: f64) {
        self.set(name, AttributeValue::Number(value));
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttributeValue::Color(c)) => c.as_deref(),
            other => panic!("attribute '{}' is not a color: {:?}", name, other),
        }
    }

    pub fn boolean(&self, name: &str) -> bool {
        match self.get(name) {
            Some(AttributeValue::Boolean(v)) => *v,
            other => panic!("attribute '{}' is not a boolean: {:?}", name, other),
        }
    }

    pub fn string(&self, name: &str) -> &str {
        match self.get(name) {
            Some(AttributeValue::String(s)) => s.as_str(),
            other => panic!("attribute '{}' is not a string: {:?}", name, other),
        }
    }

    pub fn enum_tag(&self, name: &str) -> &str {
        match self.get(name) {
            Some(AttributeValue::Enum(s)) => s.as_str(),
            other => panic!("attribute '{}' is not an enum: {:?}", name, other),
        }
    }
}
