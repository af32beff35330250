//! The six face directions and sets of them.
//!
//! A block declares the faces it is able to link through as a
//! [`DirectionSet`]. The set is a 6-bit mask, so it is `Copy` and cheap to
//! pass around by value.

use crate::GridCoord;

/// A lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six axis-aligned unit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +y
    Up,
    /// -y
    Down,
    /// +x
    Right,
    /// -x
    Left,
    /// +z
    Forward,
    /// -z
    Backward,
}

impl Direction {
    /// All six directions, in a fixed order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Right,
        Self::Left,
        Self::Forward,
        Self::Backward,
    ];

    /// Unit offset for this direction.
    pub const fn offset(self) -> GridCoord {
        match self {
            Self::Up => GridCoord::new(0, 1, 0),
            Self::Down => GridCoord::new(0, -1, 0),
            Self::Right => GridCoord::new(1, 0, 0),
            Self::Left => GridCoord::new(-1, 0, 0),
            Self::Forward => GridCoord::new(0, 0, 1),
            Self::Backward => GridCoord::new(0, 0, -1),
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Up | Self::Down => Axis::Y,
            Self::Forward | Self::Backward => Axis::Z,
        }
    }

    /// Position in [`Direction::ALL`], also the bit used by [`DirectionSet`].
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Right => 2,
            Self::Left => 3,
            Self::Forward => 4,
            Self::Backward => 5,
        }
    }

    /// Recover a direction from a unit offset.
    ///
    /// Returns `None` unless exactly one component is ±1 and the others are 0.
    pub fn from_offset(offset: GridCoord) -> Option<Self> {
        match (offset.x, offset.y, offset.z) {
            (0, 1, 0) => Some(Self::Up),
            (0, -1, 0) => Some(Self::Down),
            (1, 0, 0) => Some(Self::Right),
            (-1, 0, 0) => Some(Self::Left),
            (0, 0, 1) => Some(Self::Forward),
            (0, 0, -1) => Some(Self::Backward),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
            Self::Forward => "forward",
            Self::Backward => "backward",
        };
        f.write_str(name)
    }
}

/// The set of faces a block can link through.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// No faces.
    pub const EMPTY: Self = Self(0);

    /// All six faces.
    pub const ALL: Self = Self(0b11_1111);

    /// A set holding a single direction.
    pub const fn only(direction: Direction) -> Self {
        Self(1 << direction.index())
    }

    #[inline]
    pub const fn contains(&self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    /// Add a direction. Returns `true` if it was not already present.
    pub fn insert(&mut self, direction: Direction) -> bool {
        let had = self.contains(direction);
        self.0 |= 1 << direction.index();
        !had
    }

    /// Remove a direction. Returns `true` if it was present.
    pub fn remove(&mut self, direction: Direction) -> bool {
        let had = self.contains(direction);
        self.0 &= !(1 << direction.index());
        had
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// The set with every direction reversed.
    pub fn reversed(&self) -> Self {
        self.iter().map(Direction::reverse).collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl<'a> FromIterator<&'a Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = &'a Direction>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::only(direction)
    }
}

impl<const N: usize> From<[Direction; N]> for DirectionSet {
    fn from(directions: [Direction; N]) -> Self {
        directions.into_iter().collect()
    }
}

impl std::fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, direction) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}")?;
        }
        f.write_str("]")
    }
}
