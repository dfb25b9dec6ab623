use std::{
    fmt,
    ops::Add,
};

use serde::{Deserialize, Serialize};

/// Grid coordinate as `(row, column)`.
///
/// Components are signed so that positions submitted from outside (which may
/// be negative or past the edge) can be represented and rejected by bounds
/// checks instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Component-wise `self - other`, `None` on overflow.
    pub fn checked_sub(self, other: Coord) -> Option<Coord> {
        Some(Coord(
            self.0.checked_sub(other.0)?,
            self.1.checked_sub(other.1)?,
        ))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Row-major iteration over the half-open rectangle `from..to`.
    pub fn iter_fill(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Coord(row, col)))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
