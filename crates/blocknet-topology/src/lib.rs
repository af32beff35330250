//! Block Network Lattice Topology
//!
//! Grid-aligned connector blocks live on a 3D integer lattice. Two blocks can
//! only ever touch through one of the six faces of a unit cube:
//! - 2 neighbors along the x axis (right/left)
//! - 2 neighbors along the y axis (up/down)
//! - 2 neighbors along the z axis (forward/backward)
//!
//! # Adjacency
//!
//! Two coordinates are adjacent iff they differ by exactly one unit along
//! exactly one axis. Every adjacent pair is joined by a pair of opposite
//! directions: if `b` is `a` stepped along `d`, then `a` is `b` stepped along
//! `d.reverse()`.
//!
//! Which faces a block is willing to link through is described by a
//! [`DirectionSet`]; the network engine built on top of this crate decides
//! whether a link actually forms.

mod coord;
mod direction;
mod neighbors;

pub use coord::GridCoord;
pub use direction::{Axis, Direction, DirectionSet};
pub use neighbors::{are_adjacent, count_present_neighbors, face_neighbors};

/// Number of face neighbors per interior lattice cell
pub const FACE_CONNECTIONS: usize = 6;

/// Number of lattice axes
pub const AXES: usize = 3;

// Compile-time assertion: one positive and one negative face per axis
const _: () = assert!(2 * AXES == FACE_CONNECTIONS);
