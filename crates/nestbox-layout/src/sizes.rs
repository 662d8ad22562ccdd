// ABOUTME: Per-component size preferences and the rules that read them.
// ABOUTME: Resolves each node's effective size and filters out hidden leaves.

use std::collections::HashMap;

use nestbox_core::SizeSpec;
use serde::{Deserialize, Serialize};

use crate::LayoutNode;

/// Sizing options for one component alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSpec>,
    #[serde(default)]
    pub hidden: bool,
}

impl ComponentSize {
    pub fn sized(spec: SizeSpec) -> Self {
        Self {
            size: Some(spec),
            hidden: false,
        }
    }

    pub fn hidden() -> Self {
        Self {
            size: None,
            hidden: true,
        }
    }
}

/// Component alias -> sizing options. Only leaves are addressed here.
pub type SizeMap = HashMap<String, ComponentSize>;

/// Effective size of `node` among its siblings
pub fn resolve_size(node: &LayoutNode, sizes: &SizeMap) -> SizeSpec {
    let declared = match node {
        LayoutNode::Leaf(alias) => sizes.get(alias).and_then(|c| c.size),
        LayoutNode::Internal { size, .. } => *size,
    };
    declared.unwrap_or_default()
}

/// Leaves are hidden only through the size map; internal nodes always show
pub fn is_visible(node: &LayoutNode, sizes: &SizeMap) -> bool {
    match node {
        LayoutNode::Leaf(alias) => !sizes.get(alias).is_some_and(|c| c.hidden),
        LayoutNode::Internal { .. } => true,
    }
}

/// Children taking part in space allocation, in their original order
pub fn visible_children<'a>(children: &'a [LayoutNode], sizes: &SizeMap) -> Vec<&'a LayoutNode> {
    children
        .iter()
        .filter(|child| is_visible(child, sizes))
        .collect()
}
