//! Movement constraints for draggable handles.
//!
//! A constraint is a total function projecting any candidate point onto
//! the nearest legal point for its handle. Constraints never reject a
//! move: an out-of-range candidate is silently clamped. They compose by
//! plain nesting, innermost first, and applying a constraint to its own
//! output is a no-op.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Point;

/// A first-class constraint function.
///
/// Cheap to clone; equality is pointer identity so constraints can sit in
/// component props (they are rebuilt from current positions every render
/// pass anyway).
#[derive(Clone)]
pub struct Constraint(Rc<dyn Fn(Point) -> Point>);

impl Constraint {
    pub fn new(f: impl Fn(Point) -> Point + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Project a candidate point onto the legal region.
    pub fn apply(&self, p: Point) -> Point {
        (self.0)(p)
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constraint(..)")
    }
}

/// Clamp into the rectangle `[0, width] × [0, height]`.
pub fn in_rect(width: f32, height: f32) -> Constraint {
    Constraint::new(move |p| Point::new(p.x.clamp(0.0, width), p.y.clamp(0.0, height)))
}

/// Lock to the horizontal line `y = y0`, x passes through.
pub fn keep_on_y(y0: f32) -> Constraint {
    Constraint::new(move |p| Point::new(p.x, y0))
}

/// Keep x at or above `bound`.
pub fn keep_x_above(bound: f32) -> Constraint {
    Constraint::new(move |p| Point::new(p.x.max(bound), p.y))
}

/// Keep x at or below `bound`.
pub fn keep_x_below(bound: f32) -> Constraint {
    Constraint::new(move |p| Point::new(p.x.min(bound), p.y))
}

/// Inner-radius handle constraint: lock onto the center line, then stop
/// the handle from crossing outward past the outer handle.
///
/// Radius handles sit at `x = cx - r`, so a larger radius means a smaller
/// x; `outer_x` is the outer handle's currently rendered x coordinate.
pub fn ring_inner(outer_x: f32, cy: f32) -> Constraint {
    let lock = keep_on_y(cy);
    let floor = keep_x_above(outer_x);
    Constraint::new(move |p| floor.apply(lock.apply(p)))
}

/// Outer-radius handle constraint: the mirror of [`ring_inner`], keeping
/// the outer handle from crossing inward past the inner handle.
pub fn ring_outer(inner_x: f32, cy: f32) -> Constraint {
    let lock = keep_on_y(cy);
    let ceil = keep_x_below(inner_x);
    Constraint::new(move |p| ceil.apply(lock.apply(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::dist;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(-5.0, 261.0),
            Point::new(300.0, 300.0),
            Point::new(128.0, 128.0),
            Point::new(55.5, -0.25),
        ]
    }

    #[test]
    fn test_constraints_are_idempotent() {
        let constraints = [
            in_rect(256.0, 256.0),
            keep_on_y(128.0),
            keep_x_above(40.0),
            keep_x_below(90.0),
            ring_inner(68.0, 128.0),
            ring_outer(98.0, 128.0),
        ];
        for c in &constraints {
            for p in sample_points() {
                let once = c.apply(p);
                assert_eq!(c.apply(once), once);
            }
        }
    }

    #[test]
    fn test_in_rect_clamps_to_boundary() {
        let c = in_rect(100.0, 80.0);
        assert_eq!(c.apply(Point::new(-5.0, 85.0)), Point::new(0.0, 80.0));
    }

    #[test]
    fn test_in_rect_passes_interior_points_through() {
        let c = in_rect(100.0, 80.0);
        let p = Point::new(33.0, 79.5);
        assert_eq!(c.apply(p), p);
    }

    #[test]
    fn test_keep_on_y_only_touches_y() {
        let c = keep_on_y(128.0);
        assert_eq!(c.apply(Point::new(200.0, 17.0)), Point::new(200.0, 128.0));
    }

    #[test]
    fn test_ring_inner_locks_then_bounds() {
        // Outer handle at x = 68: candidates left of it snap to it, the
        // y lock applies either way.
        let c = ring_inner(68.0, 128.0);
        assert_eq!(c.apply(Point::new(50.0, 140.0)), Point::new(68.0, 128.0));
        assert_eq!(c.apply(Point::new(80.0, 140.0)), Point::new(80.0, 128.0));
    }

    #[test]
    fn test_ring_outer_locks_then_bounds() {
        let c = ring_outer(98.0, 128.0);
        assert_eq!(c.apply(Point::new(120.0, 10.0)), Point::new(98.0, 128.0));
        assert_eq!(c.apply(Point::new(40.0, 10.0)), Point::new(40.0, 128.0));
    }

    #[test]
    fn test_ring_ordering_survives_alternating_drags() {
        // Re-derive each handle's constraint from the sibling's current
        // position before every move, the way the widgets rebuild them on
        // each render pass.
        let center = Point::new(128.0, 128.0);
        let mut inner = Point::new(98.0, 128.0); // ri = 30
        let mut outer = Point::new(68.0, 128.0); // ro = 60

        let drags = [
            (true, Point::new(10.0, 50.0)),    // inner far out, must stop at outer
            (false, Point::new(200.0, 128.0)), // outer far in, must stop at inner
            (true, Point::new(120.0, 128.0)),  // inner back in
            (false, Point::new(-40.0, 90.0)),  // outer way out, only the y lock bites
            (true, Point::new(0.0, 0.0)),
        ];
        for (is_inner, raw) in drags {
            if is_inner {
                inner = ring_inner(outer.x, center.y).apply(raw);
            } else {
                outer = ring_outer(inner.x, center.y).apply(raw);
            }
            let ri = dist(center, inner);
            let ro = dist(center, outer);
            assert!(ri <= ro, "ri={ri} ro={ro} after drag to {raw:?}");
        }
    }

    #[test]
    fn test_disk_drag_scenario() {
        // 256x256 image, disk at (128, 128) r=40. Dragging the center to
        // (300, 300) clamps to the corner; the radius handle axis-locked
        // at the new cy derives r from distance.
        let (w, h) = (256.0, 256.0);
        let center = in_rect(w, h).apply(Point::new(300.0, 300.0));
        assert_eq!(center, Point::new(256.0, 256.0));

        let handle = keep_on_y(center.y).apply(Point::new(200.0, 256.0));
        assert_eq!(handle, Point::new(200.0, 256.0));
        assert_eq!(dist(center, handle), 56.0);
    }
}
