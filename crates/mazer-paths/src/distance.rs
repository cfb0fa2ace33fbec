use mazer_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible on a 4-connected grid with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_handles_negative_coordinates() {
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(2, -2)), 5);
    }
}
