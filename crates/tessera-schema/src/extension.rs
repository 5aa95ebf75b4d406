//! Structured property extensions
//!
//! A few engine properties carry nested payloads that the generic
//! Object/Array editor cannot describe. Each one is a [`StructuredKind`]
//! with its own default and edit rules, and is selected by property name
//! plus owning component type through [`ExtensionRules`].

use crate::structured::{BoundsLimits, DurationValue, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Closed set of structured property kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuredKind {
    /// Per-axis movement limits (`CharacterController2D.bounds`)
    Bounds,
    /// Single primitive shape with size and color (`RenderComponent.obj`)
    Geometry,
    /// Seconds + nanoseconds duration (`cooldown`)
    Duration,
}

impl StructuredKind {
    pub fn default_value(&self) -> Value {
        match self {
            StructuredKind::Bounds => BoundsLimits::default().to_value(),
            StructuredKind::Geometry => Geometry::default().to_value(),
            StructuredKind::Duration => DurationValue::default().to_value(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            StructuredKind::Bounds => "Bounds",
            StructuredKind::Geometry => "Geometry",
            StructuredKind::Duration => "Duration",
        }
    }
}

impl FromStr for StructuredKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bounds" => Ok(StructuredKind::Bounds),
            "geometry" | "obj" => Ok(StructuredKind::Geometry),
            "duration" | "cooldown" => Ok(StructuredKind::Duration),
            other => Err(format!(
                "unknown structured kind '{}'; valid values: bounds, geometry, duration",
                other
            )),
        }
    }
}

/// Maps a property (optionally scoped to one component type) to a structured kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionRule {
    /// Component type the rule applies to; `None` matches every component
    #[serde(default)]
    pub component: Option<String>,
    pub property: String,
    pub kind: StructuredKind,
}

impl ExtensionRule {
    pub fn any_component(property: impl Into<String>, kind: StructuredKind) -> Self {
        Self {
            component: None,
            property: property.into(),
            kind,
        }
    }

    pub fn for_component(
        component: impl Into<String>,
        property: impl Into<String>,
        kind: StructuredKind,
    ) -> Self {
        Self {
            component: Some(component.into()),
            property: property.into(),
            kind,
        }
    }
}

/// Ordered rule set; later rules override earlier ones of the same scope
#[derive(Debug, Clone, Default)]
pub struct ExtensionRules {
    rules: Vec<ExtensionRule>,
}

impl ExtensionRules {
    /// Empty rule set (no structured extensions)
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine's known structured properties
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ExtensionRule::any_component("bounds", StructuredKind::Bounds),
                ExtensionRule::any_component("obj", StructuredKind::Geometry),
                ExtensionRule::any_component("cooldown", StructuredKind::Duration),
            ],
        }
    }

    pub fn push(&mut self, rule: ExtensionRule) {
        self.rules.push(rule);
    }

    pub fn extend(&mut self, rules: impl IntoIterator<Item = ExtensionRule>) {
        self.rules.extend(rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the structured kind for `property` on `component`.
    ///
    /// Component-scoped rules take precedence over component-agnostic ones.
    pub fn resolve(&self, component: &str, property: &str) -> Option<StructuredKind> {
        let scoped = self.rules.iter().rev().find(|rule| {
            rule.property == property && rule.component.as_deref() == Some(component)
        });

        scoped
            .or_else(|| {
                self.rules
                    .iter()
                    .rev()
                    .find(|rule| rule.property == property && rule.component.is_none())
            })
            .map(|rule| rule.kind)
    }
}
