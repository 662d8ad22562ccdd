// ABOUTME: Box geometry shared by the layout engine and its callers.
// ABOUTME: Fractional rectangles on the way in, integer pixel boxes on the way out.

use serde::{Deserialize, Serialize};

/// Axis along which an internal node subdivides its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children placed left to right, splitting the width
    Horizontal,
    /// Children placed top to bottom, splitting the height
    Vertical,
}

impl Orientation {
    /// Span of `rect` along this axis
    pub fn axis_span(self, rect: &Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Near edge of `rect` along this axis
    pub fn axis_origin(self, rect: &Rect) -> f64 {
        match self {
            Orientation::Horizontal => rect.x,
            Orientation::Vertical => rect.y,
        }
    }

    /// Slice of `parent` starting at `cursor` and running `span` along this axis.
    /// The orthogonal dimension is copied from the parent.
    pub fn slice(self, parent: &Rect, cursor: f64, span: f64) -> Rect {
        match self {
            Orientation::Horizontal => Rect {
                x: cursor,
                y: parent.y,
                width: span,
                height: parent.height,
            },
            Orientation::Vertical => Rect {
                x: parent.x,
                y: cursor,
                width: parent.width,
                height: span,
            },
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Rectangle in pixel space, possibly with fractional edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// True when every edge is a real number and the extent is not negative
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Integer box assigned to a component, in the global coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

impl From<PixelBox> for Rect {
    fn from(b: PixelBox) -> Self {
        Rect::new(b.x as f64, b.y as f64, b.width as f64, b.height as f64)
    }
}
