//! Integer lattice coordinates.
//!
//! A block occupies exactly one cell of the lattice. Coordinates are plain
//! values: equality, ordering and hashing are all by component.
//!
//! The lattice is the full `i64` range on each axis and does not wrap. A cell
//! on the boundary simply has fewer than six neighbors, so stepping off the
//! edge yields `None` rather than overflowing.

use std::ops::{Add, Neg, Sub};

use crate::Direction;

/// A cell on the 3D block lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// East/west position
    pub x: i64,
    /// Vertical position
    pub y: i64,
    /// North/south position
    pub z: i64,
}

impl GridCoord {
    /// Origin of the lattice.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance between two cells.
    ///
    /// Saturates at `u64::MAX` for cells at opposite corners of the lattice.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
            .saturating_add(self.z.abs_diff(other.z))
    }

    /// Component-wise addition, `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(other.x)?,
            y: self.y.checked_add(other.y)?,
            z: self.z.checked_add(other.z)?,
        })
    }

    /// Component-wise subtraction, `None` on overflow.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(other.x)?,
            y: self.y.checked_sub(other.y)?,
            z: self.z.checked_sub(other.z)?,
        })
    }

    /// The cell one unit away along `direction`, or `None` past the edge of
    /// the lattice.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.checked_add(direction.offset())
    }

    /// Face neighbors that exist on the lattice, in [`Direction::ALL`] order.
    ///
    /// Always six, except for cells on the boundary.
    pub fn face_neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Direction from `self` to `other`, if they are face-adjacent.
    ///
    /// Returns `None` for the same cell, for diagonal cells and for anything
    /// further than one unit away.
    pub fn direction_to(&self, other: &Self) -> Option<Direction> {
        // A difference that overflows is nowhere near one unit.
        Direction::from_offset(other.checked_sub(*self)?)
    }

    /// Whether `other` shares a face with `self`.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.direction_to(other).is_some()
    }
}

/// Panics on overflow in debug builds, like `i64`. Use
/// [`GridCoord::checked_add`] for caller-supplied cells.
impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for GridCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl From<(i64, i64, i64)> for GridCoord {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
