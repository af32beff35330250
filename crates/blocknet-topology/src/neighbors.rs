//! 6-Connection Face Neighbor Computation
//!
//! Every interior lattice cell has exactly 6 face neighbors, one per
//! direction. The neighborhood is translation-invariant: the same six offsets
//! apply to every cell, and offsets that would leave the `i64` range are
//! skipped.

use crate::GridCoord;

/// Face neighbors of a coordinate, in [`crate::Direction::ALL`] order.
pub fn face_neighbors(coord: GridCoord) -> impl Iterator<Item = GridCoord> {
    coord.face_neighbors()
}

/// Check if two coordinates share a face.
///
/// True iff they differ by exactly one unit along exactly one axis.
pub fn are_adjacent(a: GridCoord, b: GridCoord) -> bool {
    a.direction_to(&b).is_some()
}

/// Count how many of a cell's 6 face neighbors are present in a set.
pub fn count_present_neighbors<F>(coord: GridCoord, is_present: F) -> usize
where
    F: Fn(GridCoord) -> bool,
{
    face_neighbors(coord).filter(|&n| is_present(n)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, FACE_CONNECTIONS};
    use proptest::prelude::*;

    #[test]
    fn exactly_6_neighbors() {
        assert_eq!(face_neighbors(GridCoord::ORIGIN).count(), 6);
    }

    #[test]
    fn boundary_cell_has_fewer_neighbors() {
        let edge = GridCoord::new(i64::MAX, 0, 0);
        assert_eq!(face_neighbors(edge).count(), FACE_CONNECTIONS - 1);
        assert_eq!(count_present_neighbors(edge, |_| true), 5);
        assert!(!are_adjacent(edge, GridCoord::new(i64::MIN, 0, 0)));
    }

    #[test]
    fn neighbor_relation_symmetric() {
        let a = GridCoord::new(3, -2, 1);
        let b = GridCoord::new(3, -2, 2);

        assert!(are_adjacent(a, b));
        assert!(are_adjacent(b, a));
    }

    #[test]
    fn not_adjacent_if_too_far() {
        assert!(!are_adjacent(GridCoord::ORIGIN, GridCoord::new(0, 0, 2)));
    }

    #[test]
    fn not_adjacent_to_self() {
        assert!(!are_adjacent(GridCoord::ORIGIN, GridCoord::ORIGIN));
    }

    #[test]
    fn count_neighbors_empty() {
        assert_eq!(count_present_neighbors(GridCoord::ORIGIN, |_| false), 0);
    }

    #[test]
    fn count_neighbors_all_present() {
        assert_eq!(count_present_neighbors(GridCoord::ORIGIN, |_| true), 6);
    }

    #[test]
    fn count_neighbors_partial() {
        // Only the horizontal plane (y = 0) is present
        let count = count_present_neighbors(GridCoord::ORIGIN, |c| c.y == 0);
        assert_eq!(count, 4);
    }

    fn any_coord() -> impl Strategy<Value = GridCoord> {
        (-1000i64..1000, -1000i64..1000, -1000i64..1000).prop_map(GridCoord::from)
    }

    proptest! {
        #[test]
        fn step_and_back_is_identity(c in any_coord(), i in 0usize..6) {
            let d = Direction::ALL[i];
            prop_assert_eq!(c.step(d).and_then(|n| n.step(d.reverse())), Some(c));
        }

        #[test]
        fn direction_to_matches_step(c in any_coord(), i in 0usize..6) {
            let d = Direction::ALL[i];
            let n = c.step(d).unwrap();
            prop_assert_eq!(c.direction_to(&n), Some(d));
            prop_assert_eq!(n.direction_to(&c), Some(d.reverse()));
        }

        #[test]
        fn edge_cells_never_wrap(y in any::<i64>(), z in any::<i64>()) {
            let far = GridCoord::new(i64::MAX, y, z);
            let near = GridCoord::new(i64::MIN, y, z);
            prop_assert_eq!(far.step(Direction::Right), None);
            prop_assert_eq!(near.step(Direction::Left), None);
            prop_assert!(!are_adjacent(far, near));
        }

        #[test]
        fn adjacency_is_unit_manhattan_on_one_axis(a in any_coord(), b in any_coord()) {
            prop_assert_eq!(are_adjacent(a, b), a.manhattan_distance(&b) == 1);
            prop_assert_eq!(are_adjacent(a, b), are_adjacent(b, a));
        }
    }
}
