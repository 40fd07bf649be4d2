//! Overlap scoring primitives for placement resolution.
//!
//! These are pure functions over [`Rect`]s and intervals, easy to
//! unit-test without any Win32 dependency.

use crate::Rect;

/// Fraction of `a`'s area that lies inside `b`, in [0, 1].
///
/// Returns 0 when the rectangles do not intersect (touching edges
/// count as no intersection).
fn contained_ratio(a: &Rect, b: &Rect) -> f32 {
    if !a.intersects(b) {
        return 0.0;
    }

    let left = a.left().max(b.left()) as f32;
    let right = a.right().min(b.right()) as f32;
    let top = a.top().max(b.top()) as f32;
    let bottom = a.bottom().min(b.bottom()) as f32;

    let shared = (right - left) * (bottom - top);
    shared / a.area() as f32
}

/// Symmetric overlap score between two rectangles, in [0, 1].
///
/// Averages the fraction of `a` inside `b` with the fraction of `b`
/// inside `a`, so a window slightly larger or slightly smaller than a
/// section still scores high. Equals 1 only when the rectangles are
/// identical; equals 0 only when they do not intersect.
pub fn overlap_ratio(a: &Rect, b: &Rect) -> f32 {
    (contained_ratio(a, b) + contained_ratio(b, a)) / 2.0
}

/// Signed overlap length between the intervals `[min0, max0]` and
/// `[min1, max1]`.
///
/// Positive when the intervals share space. Negative when they are
/// disjoint, with the magnitude equal to the gap between them, which
/// lets callers rank "closest miss" candidates.
pub fn interval_overlap(min0: i32, max0: i32, min1: i32, max1: i32) -> i32 {
    max0.min(max1) - min0.max(min1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rects_score_one() {
        let r = Rect::new(0, 0, 100, 100);
        assert_eq!(overlap_ratio(&r, &r), 1.0);
    }

    #[test]
    fn disjoint_rects_score_zero() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(200, 0, 100, 100);
        assert_eq!(overlap_ratio(&a, &b), 0.0);
    }

    #[test]
    fn touching_rects_score_zero() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 100, 100);
        assert_eq!(overlap_ratio(&a, &b), 0.0);
    }

    #[test]
    fn overlap_ratio_is_symmetric() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(25, 25, 200, 50);
        assert_eq!(overlap_ratio(&a, &b), overlap_ratio(&b, &a));
    }

    #[test]
    fn overlap_ratio_stays_in_range() {
        let pairs = [
            (Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)),
            (Rect::new(0, 0, 1000, 10), Rect::new(0, 0, 10, 1000)),
            (Rect::new(-50, -50, 100, 100), Rect::new(0, 0, 100, 100)),
        ];
        for (a, b) in pairs {
            let ratio = overlap_ratio(&a, &b);
            assert!((0.0..=1.0).contains(&ratio), "ratio was {ratio}");
        }
    }

    #[test]
    fn engulfing_scores_between_zero_and_one() {
        // A quarter-size window centered in a section: A is fully in B,
        // but B is only 25% in A, so the average is 0.625.
        let a = Rect::new(25, 25, 50, 50);
        let b = Rect::new(0, 0, 100, 100);
        assert_eq!(overlap_ratio(&a, &b), 0.625);
    }

    #[test]
    fn half_offset_scores_half() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 0, 100, 100);
        assert_eq!(overlap_ratio(&a, &b), 0.5);
    }

    #[test]
    fn interval_overlap_positive_when_shared() {
        assert_eq!(interval_overlap(0, 100, 50, 150), 50);
        assert_eq!(interval_overlap(0, 100, 0, 100), 100);
    }

    #[test]
    fn interval_overlap_negative_gap_when_disjoint() {
        assert_eq!(interval_overlap(0, 100, 130, 200), -30);
        assert_eq!(interval_overlap(130, 200, 0, 100), -30);
    }

    #[test]
    fn interval_overlap_zero_when_touching() {
        assert_eq!(interval_overlap(0, 100, 100, 200), 0);
    }
}
