// ABOUTME: Recursive layout tree describing how a box is subdivided.
// ABOUTME: Leaves name components; internal nodes split their box along one axis.

use nestbox_core::{Orientation, SizeSpec};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::LayoutError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutNode {
    /// A single component, addressed by alias
    Leaf(String),
    /// A box split among `children`, in placement order
    Internal {
        orientation: Orientation,
        children: Vec<LayoutNode>,
        /// This node's own share inside its parent (defaults to weight 1)
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<SizeSpec>,
    },
}

impl LayoutNode {
    pub fn leaf(alias: impl Into<String>) -> Self {
        LayoutNode::Leaf(alias.into())
    }

    pub fn horizontal(children: impl IntoIterator<Item = LayoutNode>) -> Self {
        Self::split(Orientation::Horizontal, children)
    }

    pub fn vertical(children: impl IntoIterator<Item = LayoutNode>) -> Self {
        Self::split(Orientation::Vertical, children)
    }

    pub fn split(orientation: Orientation, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        LayoutNode::Internal {
            orientation,
            children: children.into_iter().collect(),
            size: None,
        }
    }

    /// Set the share of an internal node. Leaves take their size from the size map instead.
    pub fn with_size(mut self, spec: SizeSpec) -> Self {
        if let LayoutNode::Internal { size, .. } = &mut self {
            *size = Some(spec);
        }
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf(_))
    }

    /// All leaf aliases in placement order, hidden or not
    pub fn aliases(&self) -> Vec<&str> {
        let mut result = Vec::new();
        collect_aliases(self, &mut result);
        result
    }
}

fn collect_aliases<'a>(node: &'a LayoutNode, out: &mut Vec<&'a str>) {
    match node {
        LayoutNode::Leaf(alias) => out.push(alias.as_str()),
        LayoutNode::Internal { children, .. } => {
            for child in children {
                collect_aliases(child, out);
            }
        }
    }
}

impl TryFrom<Value> for LayoutNode {
    type Error = LayoutError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        node_from_value(value, "layout")
    }
}

/// Convert one node of the producer JSON shape, `path` locating it for error messages
fn node_from_value(value: Value, path: &str) -> Result<LayoutNode, LayoutError> {
    let mut map = match value {
        Value::String(alias) => return Ok(LayoutNode::Leaf(alias)),
        Value::Object(map) => map,
        other => {
            return Err(LayoutError::invalid(format!(
                "{path}: expected a component alias or an internal node, found {other}"
            )))
        }
    };

    let orientation = match map.remove("orientation") {
        Some(Value::String(s)) if s == "horizontal" => Orientation::Horizontal,
        Some(Value::String(s)) if s == "vertical" => Orientation::Vertical,
        Some(other) => {
            return Err(LayoutError::invalid(format!(
                "{path}: unknown orientation {other}"
            )))
        }
        None => {
            return Err(LayoutError::invalid(format!(
                "{path}: internal node is missing `orientation`"
            )))
        }
    };

    let children = match map.remove("children") {
        Some(Value::Array(children)) => children
            .into_iter()
            .enumerate()
            .map(|(i, child)| node_from_value(child, &format!("{path}.children[{i}]")))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(LayoutError::invalid(format!(
                "{path}: `children` must be an array, found {other}"
            )))
        }
        None => {
            return Err(LayoutError::invalid(format!(
                "{path}: internal node is missing `children`"
            )))
        }
    };

    let size = match map.remove("size") {
        None | Some(Value::Null) => None,
        Some(v) => Some(serde_json::from_value::<SizeSpec>(v).map_err(|e| {
            LayoutError::invalid(format!("{path}: invalid size: {e}"))
        })?),
    };

    Ok(LayoutNode::Internal {
        orientation,
        children,
        size,
    })
}

impl<'de> Deserialize<'de> for LayoutNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        LayoutNode::try_from(value).map_err(serde::de::Error::custom)
    }
}
