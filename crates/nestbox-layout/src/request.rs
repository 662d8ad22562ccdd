// ABOUTME: JSON layout requests as sent by hosts: tree, optional sizes, optional box.
// ABOUTME: Structural problems surface as InvalidLayoutTree instead of generic JSON errors.

use nestbox_core::Rect;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::engine::{compute_layout, LayoutResult};
use crate::{LayoutError, LayoutNode, SizeMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRequest {
    pub layout: LayoutNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<SizeMap>,
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub outer: Option<Rect>,
}

impl LayoutRequest {
    pub fn new(layout: LayoutNode) -> Self {
        Self {
            layout,
            sizes: None,
            outer: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Lay out the request, using `default_box` when it carries none
    pub fn compute(&self, default_box: Rect) -> Result<LayoutResult, LayoutError> {
        compute_layout(
            &self.layout,
            self.sizes.as_ref(),
            self.outer.unwrap_or(default_box),
        )
    }
}

impl TryFrom<Value> for LayoutRequest {
    type Error = LayoutError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut map) = value else {
            return Err(LayoutError::invalid("layout request must be a JSON object"));
        };

        let layout = map
            .remove("layout")
            .ok_or_else(|| LayoutError::invalid("layout request is missing `layout`"))?;
        let layout = LayoutNode::try_from(layout)?;

        let sizes = match map.remove("sizes") {
            None | Some(Value::Null) => None,
            Some(v) => Some(serde_json::from_value(v)?),
        };

        let outer = match map.remove("box") {
            None | Some(Value::Null) => None,
            Some(Value::Object(b)) => Some(rect_from_map(&b)?),
            Some(other) => {
                return Err(LayoutError::invalid(format!(
                    "box must be an object, found {other}"
                )))
            }
        };

        Ok(Self {
            layout,
            sizes,
            outer,
        })
    }
}

impl<'de> Deserialize<'de> for LayoutRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        LayoutRequest::try_from(value).map_err(serde::de::Error::custom)
    }
}

fn rect_from_map(map: &Map<String, Value>) -> Result<Rect, LayoutError> {
    let required = |key: &str| {
        map.get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| LayoutError::invalid(format!("box is missing numeric `{key}`")))
    };
    let offset = |key: &str| match map.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| LayoutError::invalid(format!("box `{key}` must be a number, found {v}"))),
    };

    Ok(Rect {
        x: offset("x")?,
        y: offset("y")?,
        width: required("width")?,
        height: required("height")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestbox_core::{PixelBox, SizeSpec};

    #[test]
    fn full_request_computes() {
        let request = LayoutRequest::from_json(
            r#"{
                "layout": { "orientation": "horizontal", "children": ["foo", "bar"] },
                "sizes": { "foo": { "size": "60px" } },
                "box": { "width": 100, "height": 100 }
            }"#,
        )
        .unwrap();

        assert_eq!(request.outer, Some(Rect::sized(100.0, 100.0)));
        let result = request.compute(Rect::sized(1.0, 1.0)).unwrap();
        assert_eq!(result["foo"], PixelBox::new(0, 0, 60, 100));
        assert_eq!(result["bar"], PixelBox::new(60, 0, 40, 100));
    }

    #[test]
    fn null_sizes_and_missing_box_use_defaults() {
        let request = LayoutRequest::from_json(r#"{ "layout": "foo", "sizes": null }"#).unwrap();
        assert_eq!(request.sizes, None);
        let result = request.compute(Rect::new(5.0, 6.0, 7.0, 8.0)).unwrap();
        assert_eq!(result["foo"], PixelBox::new(5, 6, 7, 8));
    }

    #[test]
    fn box_without_height_is_invalid() {
        let err = LayoutRequest::from_json(r#"{ "layout": "foo", "box": { "width": 10 } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLayoutTree(_)));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn missing_layout_is_invalid() {
        let err = LayoutRequest::from_json(r#"{ "box": { "width": 10, "height": 10 } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLayoutTree(_)));
    }

    #[test]
    fn syntax_errors_are_json_errors() {
        let err = LayoutRequest::from_json("{ layout").unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn deserializes_through_serde() {
        let request: LayoutRequest = serde_json::from_str(
            r#"{ "layout": { "orientation": "vertical", "children": ["a", "b"] }, "box": { "width": 10, "height": 20 } }"#,
        )
        .unwrap();
        let result = request.compute(Rect::sized(1.0, 1.0)).unwrap();
        assert_eq!(result["b"], PixelBox::new(0, 10, 10, 10));

        let err = serde_json::from_str::<LayoutRequest>(r#"{ "layout": "a", "box": { "height": 5 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn serializes_with_box_key() {
        let mut request = LayoutRequest::new(LayoutNode::leaf("a"));
        request.outer = Some(Rect::sized(3.0, 4.0));
        request.sizes = Some(
            [("a".to_string(), crate::ComponentSize::sized(SizeSpec::Absolute(2)))]
                .into_iter()
                .collect(),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["box"]["width"], 3.0);
        assert_eq!(json["sizes"]["a"]["size"], "2px");
        let back = LayoutRequest::try_from(json).unwrap();
        assert_eq!(back, request);
    }
}
