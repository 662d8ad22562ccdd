// ABOUTME: Size specifications for layout nodes.
// ABOUTME: Relative weights share leftover space, "<n>px" strings reserve fixed pixels.

use serde::{Deserialize, Serialize};

/// How much of its parent's axis a node claims
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSize", into = "RawSize")]
pub enum SizeSpec {
    /// Proportional share of the space left after absolute reservations
    Relative(f64),
    /// Exact pixel span, taken before any relative distribution
    Absolute(u32),
}

impl SizeSpec {
    /// Parse the producer string form.
    ///
    /// `"60px"` is an absolute count, anything else is read as a float weight.
    /// Unparseable input yields a NaN weight rather than an error.
    ///
    /// Weights go through `f64`'s parser, which is looser than the producer
    /// grammar `^\d+(\.\d+)?$`: `"-3"`, `"1e3"`, `"inf"` and padded `" 3 "` all
    /// parse. Negative and non-finite weights count as zero when partitioning.
    pub fn parse(s: &str) -> Self {
        if let Some(px) = parse_pixel_count(s) {
            return SizeSpec::Absolute(px);
        }
        SizeSpec::Relative(s.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Relative(1.0)
    }
}

impl std::fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeSpec::Relative(w) => write!(f, "{w}"),
            SizeSpec::Absolute(px) => write!(f, "{px}px"),
        }
    }
}

/// Matches `^\d+px$`. Counts beyond `u32::MAX` saturate.
fn parse_pixel_count(s: &str) -> Option<u32> {
    let digits = s.strip_suffix("px")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or_else(|_| {
        tracing::warn!(size = s, "Pixel count out of range, saturating");
        u32::MAX
    }))
}

/// Wire form: a bare number or a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(f64),
    Text(String),
}

impl From<RawSize> for SizeSpec {
    fn from(raw: RawSize) -> Self {
        match raw {
            RawSize::Number(w) => SizeSpec::Relative(w),
            RawSize::Text(s) => SizeSpec::parse(&s),
        }
    }
}

impl From<SizeSpec> for RawSize {
    fn from(spec: SizeSpec) -> Self {
        match spec {
            SizeSpec::Relative(w) => RawSize::Number(w),
            SizeSpec::Absolute(px) => RawSize::Text(format!("{px}px")),
        }
    }
}
