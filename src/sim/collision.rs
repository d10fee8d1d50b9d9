//! Collision detection between axis-aligned rects
//!
//! Overlap is strict: two rects that only share an edge do not collide.
//! A player sliding along an obstacle's side is therefore safe.

use super::rect::Rect;

/// Check whether two rects overlap with non-zero area
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Index of the first rect in `others` that overlaps `rect`
pub fn first_hit(rect: &Rect, others: &[Rect]) -> Option<usize> {
    others.iter().position(|other| intersects(rect, other))
}

/// True if `rect` overlaps any of `others`
#[inline]
pub fn hits_any(rect: &Rect, others: &[Rect]) -> bool {
    first_hit(rect, others).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(49, 49, 10, 10);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 50, 50);
        // Right edge of a touches left edge of b
        assert!(!intersects(&a, &Rect::new(50, 0, 10, 10)));
        // Bottom edge of a touches top edge of b
        assert!(!intersects(&a, &Rect::new(0, 50, 10, 10)));
        // Corners touching
        assert!(!intersects(&a, &Rect::new(50, 50, 10, 10)));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(10, 80, 10, 10);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_first_hit_reports_index() {
        let player = Rect::square(100, 100, 50);
        let obstacles = [
            Rect::new(0, 0, 20, 20),
            Rect::new(500, 500, 20, 20),
            Rect::new(140, 140, 30, 30),
            Rect::new(120, 120, 30, 30),
        ];
        assert_eq!(first_hit(&player, &obstacles), Some(2));
        assert!(hits_any(&player, &obstacles));
        assert_eq!(first_hit(&player, &obstacles[..2]), None);
        assert!(!hits_any(&player, &[]));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..100, 1i32..100)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn rect_intersects_itself(a in arb_rect()) {
            prop_assert!(intersects(&a, &a));
        }

        #[test]
        fn horizontally_adjacent_never_intersect(a in arb_rect(), w in 1i32..100, dy in -50i32..50) {
            let b = Rect::new(a.right(), a.y + dy, w, a.h);
            prop_assert!(!intersects(&a, &b));
        }
    }
}
