//! Viewport intersection math for hosts without a native observer.
//!
//! Mirrors the observer semantics the adapters rely on: intersection ratio is
//! the fraction of the element's area overlapping the (margin-adjusted)
//! viewport, and an element is intersecting once that ratio meets the
//! configured threshold.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Fraction of `element`'s area overlapping `viewport` after adjusting the
/// viewport bottom edge by `bottom_margin` px (negative shrinks it, so
/// elements must scroll further in before they count as intersecting — or,
/// seen from the element's side, they can be flagged up to |margin| px early
/// relative to a larger viewport).
pub fn intersection_ratio(element: Rect, viewport: Rect, bottom_margin: f32) -> f32 {
    let element_area = element.area();
    if element_area <= 0.0 {
        return 0.0;
    }
    let adjusted = Rect {
        height: (viewport.height + bottom_margin).max(0.0),
        ..viewport
    };
    let left = element.x.max(adjusted.x);
    let right = element.right().min(adjusted.right());
    let top = element.y.max(adjusted.y);
    let bottom = element.bottom().min(adjusted.bottom());
    let overlap = (right - left).max(0.0) * (bottom - top).max(0.0);
    overlap / element_area
}

/// Threshold check over a computed ratio.
#[inline]
pub fn is_intersecting(ratio: f32, threshold: f32) -> bool {
    ratio >= threshold && ratio > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn full_overlap_is_one() {
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let el = Rect::new(100.0, 100.0, 200.0, 100.0);
        approx(intersection_ratio(el, vp, 0.0), 1.0, 1e-6);
    }

    #[test]
    fn half_scrolled_in_is_half() {
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        // Element straddling the bottom edge, half inside.
        let el = Rect::new(0.0, 750.0, 100.0, 100.0);
        approx(intersection_ratio(el, vp, 0.0), 0.5, 1e-6);
    }

    #[test]
    fn negative_bottom_margin_shrinks_viewport() {
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let el = Rect::new(0.0, 750.0, 100.0, 100.0);
        // With -50px the effective bottom sits at 750, so nothing overlaps.
        approx(intersection_ratio(el, vp, -50.0), 0.0, 1e-6);
    }

    #[test]
    fn zero_area_element_is_zero() {
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let el = Rect::new(0.0, 0.0, 0.0, 100.0);
        approx(intersection_ratio(el, vp, 0.0), 0.0, 1e-6);
    }

    #[test]
    fn threshold_check() {
        assert!(is_intersecting(0.5, 0.5));
        assert!(!is_intersecting(0.19, 0.2));
        assert!(!is_intersecting(0.0, 0.0));
    }
}
