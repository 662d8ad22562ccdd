// ABOUTME: Recursive box builder: walks a layout tree and assigns every leaf a pixel box.
// ABOUTME: Each call computes the whole tree from scratch; nothing is cached.

use indexmap::IndexMap;
use nestbox_core::{PixelBox, Rect, SizeSpec};

use crate::partition::partition;
use crate::quantize::quantize;
use crate::sizes::{is_visible, resolve_size, visible_children, SizeMap};
use crate::{LayoutError, LayoutNode};

/// Leaf alias -> box, in placement order. Hidden leaves are absent.
pub type LayoutResult = IndexMap<String, PixelBox>;

/// Compute the box of every visible leaf under `layout`, inside `outer`.
///
/// A missing size map means every component takes its defaults.
pub fn compute_layout(
    layout: &LayoutNode,
    sizes: Option<&SizeMap>,
    outer: Rect,
) -> Result<LayoutResult, LayoutError> {
    if !outer.is_well_formed() {
        return Err(LayoutError::invalid(format!(
            "outer box needs finite, non-negative width and height, got {outer:?}"
        )));
    }

    let empty = SizeMap::new();
    let sizes = sizes.unwrap_or(&empty);

    let mut result = LayoutResult::new();
    collect_boxes(layout, outer, sizes, &mut result);
    Ok(result)
}

fn collect_boxes(node: &LayoutNode, rect: Rect, sizes: &SizeMap, out: &mut LayoutResult) {
    match node {
        LayoutNode::Leaf(alias) => {
            if !is_visible(node, sizes) {
                return;
            }
            let pixel_box = quantize(rect);
            tracing::trace!(alias = %alias, ?pixel_box, "Placed component");
            if out.insert(alias.clone(), pixel_box).is_some() {
                tracing::warn!(alias = %alias, "Alias appears more than once in layout, keeping last box");
            }
        }
        LayoutNode::Internal {
            orientation,
            children,
            ..
        } => {
            let visible = visible_children(children, sizes);
            let specs: Vec<SizeSpec> = visible.iter().map(|child| resolve_size(child, sizes)).collect();
            let spans = partition(orientation.axis_span(&rect), &specs);

            tracing::debug!(
                %orientation,
                span = orientation.axis_span(&rect),
                children = children.len(),
                visible = visible.len(),
                "Partitioning node"
            );

            let mut cursor = orientation.axis_origin(&rect);
            for (child, span) in visible.into_iter().zip(spans) {
                let child_box = quantize(orientation.slice(&rect, cursor, span));
                cursor += span;
                collect_boxes(child, child_box.into(), sizes, out);
            }
        }
    }
}
