// ABOUTME: Rounds fractional boxes to whole pixels.
// ABOUTME: Far edges are rounded from their exact position so siblings stay flush.

use nestbox_core::{PixelBox, Rect};

/// Round the near edges, then round the far edges and measure back.
///
/// Two siblings sharing a fractional boundary round it the same way, so the
/// first one's far edge is always the second one's near edge.
pub fn quantize(rect: Rect) -> PixelBox {
    let x = round_half_up(rect.x);
    let y = round_half_up(rect.y);
    PixelBox {
        x: x as i64,
        y: y as i64,
        width: (round_half_up(rect.x + rect.width) - x) as i64,
        height: (round_half_up(rect.y + rect.height) - y) as i64,
    }
}

/// Ties go toward positive infinity, so -49.5 becomes -49
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rect_is_unchanged() {
        assert_eq!(quantize(Rect::new(5.0, 7.0, 30.0, 40.0)), PixelBox::new(5, 7, 30, 40));
    }

    #[test]
    fn thirds_tile_exactly() {
        let third = 100.0 / 3.0;
        let a = quantize(Rect::new(0.0, 0.0, third, 100.0));
        let b = quantize(Rect::new(third, 0.0, third, 100.0));
        let c = quantize(Rect::new(2.0 * third, 0.0, third, 100.0));

        assert_eq!((a.x, a.width), (0, 33));
        assert_eq!((b.x, b.width), (33, 34));
        assert_eq!((c.x, c.width), (67, 33));
        assert_eq!(a.right(), b.x);
        assert_eq!(b.right(), c.x);
        assert_eq!(c.right(), 100);
    }

    #[test]
    fn negative_half_pixels_round_up() {
        assert_eq!(quantize(Rect::new(-0.5, 0.0, 10.0, 10.0)), PixelBox::new(0, 0, 10, 10));
        let q = quantize(Rect::new(-100.0, -2.5, 50.5, 5.0));
        assert_eq!((q.x, q.width), (-100, 51));
        assert_eq!((q.y, q.height), (-2, 5));
    }

    #[test]
    fn vertical_edges_round_the_same_way() {
        let q = quantize(Rect::new(0.0, 10.4, 50.0, 20.2));
        assert_eq!(q.y, 10);
        assert_eq!(q.bottom(), 31);
    }
}
