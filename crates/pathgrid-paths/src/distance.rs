use pathgrid_core::Point;

use crate::neighbors::{DIAGONAL_COST, ORTHOGONAL_COST};

/// Octile distance with integer step costs: 7 per diagonal, 5 per straight.
///
/// 7 is `5·√2` rounded up, so this can overestimate by a hair on long
/// diagonals. The search accepts that in exchange for integer arithmetic.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + ORTHOGONAL_COST * (dx - dy).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_values() {
        let o = Point::new(0, 0);
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Point::new(3, 0)), 15);
        assert_eq!(octile(o, Point::new(0, -2)), 10);
        assert_eq!(octile(o, Point::new(2, 2)), 14);
        assert_eq!(octile(o, Point::new(4, 1)), 7 + 15);
        assert_eq!(octile(Point::new(4, 1), o), octile(o, Point::new(4, 1)));
    }

    #[test]
    fn chebyshev_values() {
        assert_eq!(chebyshev(Point::new(1, 1), Point::new(2, 2)), 1);
        assert_eq!(chebyshev(Point::new(1, 1), Point::new(1, 1)), 0);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(-3, 1)), 3);
    }
}
