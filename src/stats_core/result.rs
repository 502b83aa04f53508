//! Tree-shaped statistics result consumed by reporting layers

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_period: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StatisticsNode>,
}

impl StatisticsNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_split_period(mut self, split_period: impl Into<String>) -> Self {
        self.split_period = Some(split_period.into());
        self
    }

    pub fn add_child(&mut self, child: StatisticsNode) {
        self.children.push(child);
    }

    /// True when the node carries neither a value nor children
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}
