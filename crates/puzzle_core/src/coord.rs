use std::fmt;
use std::ops::{Add, Sub};

/// A board cell as a row/column pair.
///
/// Components are signed so that out-of-range user input (including
/// negatives) can be represented and rejected by a bounds check instead of
/// failing at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise `other - self`.
    #[inline]
    pub fn delta(self, other: Coord) -> Coord {
        other - self
    }

    #[inline]
    pub fn plus(self, step: Coord) -> Coord {
        self + step
    }

    /// The unit step along this delta: each component replaced by its sign.
    ///
    /// Walking a straight or 45° line one cell at a time means repeatedly
    /// adding this to the current position.
    #[inline]
    pub fn direction(self) -> Coord {
        Coord::new(self.row.signum(), self.col.signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_destination_minus_source() {
        let a = Coord::new(2, 5);
        let b = Coord::new(0, 5);
        assert_eq!(a.delta(b), Coord::new(-2, 0));
        assert_eq!(b.delta(a), Coord::new(2, 0));
    }

    #[test]
    fn direction_is_component_wise_sign() {
        assert_eq!(Coord::new(-7, 0).direction(), Coord::new(-1, 0));
        assert_eq!(Coord::new(3, -3).direction(), Coord::new(1, -1));
        assert_eq!(Coord::new(0, 0).direction(), Coord::new(0, 0));
    }

    #[test]
    fn walking_by_direction_reaches_the_destination() {
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 4);
        let step = start.delta(end).direction();
        let mut pos = start.plus(step);
        let mut visited = Vec::new();
        while pos != end {
            visited.push(pos);
            pos = pos.plus(step);
        }
        assert_eq!(
            visited,
            vec![Coord::new(1, 1), Coord::new(2, 2), Coord::new(3, 3)]
        );
    }

    #[test]
    fn displays_as_row_col_pair() {
        assert_eq!(Coord::new(12, 3).to_string(), "(12, 3)");
    }
}
