//! Adjacency resolver.
//!
//! Two role-records link when their coordinates share a face and each one
//! lists the direction toward the other. Whether a *new* link may form also
//! depends on how many links the existing record already has:
//! - a terminal takes at most `terminal_connection_limit` links (default 1)
//! - a hub takes at most `hub_connection_limit` links (default 6, i.e. only
//!   direction mismatches ever stop it)
//!
//! A terminal registered at the same coordinate as a hub is linked to that
//! hub, and the shared cell counts as the terminal's connection.

use blocknet_topology::{DirectionSet, GridCoord};

use crate::config::NetworkConfig;
use crate::registry::{NodeKey, NodeRegistry, Role};

/// Whether blocks at `a` and `b` would link, judging by geometry and
/// declared directions alone.
pub fn directions_compatible(a: GridCoord, a_dirs: DirectionSet, b: GridCoord, b_dirs: DirectionSet) -> bool {
    match a.direction_to(&b) {
        Some(d) => a_dirs.contains(d) && b_dirs.contains(d.reverse()),
        None => false,
    }
}

/// Records at neighboring cells that are direction-compatible with `key`.
///
/// Empty if `key` is not registered.
pub fn face_links(registry: &NodeRegistry, key: NodeKey) -> Vec<NodeKey> {
    let Some(dirs) = registry.directions(key) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for d in dirs.iter() {
        let Some(neighbor) = key.coord.step(d) else {
            continue;
        };
        for (other, other_dirs) in registry.roles_at(neighbor) {
            if other_dirs.contains(d.reverse()) {
                links.push(other);
            }
        }
    }
    links
}

/// Number of links currently held by `key`.
pub fn connection_count(registry: &NodeRegistry, key: NodeKey) -> usize {
    let shared_cell = key.role == Role::Terminal && registry.contains(key.counterpart());
    face_links(registry, key).len() + usize::from(shared_cell)
}

/// Whether `key` has used up its role's connection limit.
pub fn is_saturated(registry: &NodeRegistry, key: NodeKey, config: &NetworkConfig) -> bool {
    connection_count(registry, key) >= config.limit(key.role)
}

/// Whether `existing` would accept a link from a block placed at `candidate`
/// with `candidate_dirs`.
pub fn can_connect(
    registry: &NodeRegistry,
    existing: NodeKey,
    candidate: GridCoord,
    candidate_dirs: DirectionSet,
    config: &NetworkConfig,
) -> bool {
    let Some(existing_dirs) = registry.directions(existing) else {
        return false;
    };
    directions_compatible(existing.coord, existing_dirs, candidate, candidate_dirs)
        && !is_saturated(registry, existing, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocknet_topology::Direction;

    fn coord(x: i64, y: i64, z: i64) -> GridCoord {
        GridCoord::new(x, y, z)
    }

    #[test]
    fn compatible_needs_both_directions() {
        let a = coord(0, 0, 0);
        let b = coord(0, 0, 1);
        assert!(directions_compatible(a, DirectionSet::ALL, b, DirectionSet::ALL));
        assert!(directions_compatible(
            a,
            DirectionSet::only(Direction::Forward),
            b,
            DirectionSet::only(Direction::Backward)
        ));
        assert!(!directions_compatible(a, DirectionSet::only(Direction::Up), b, DirectionSet::ALL));
        assert!(!directions_compatible(a, DirectionSet::ALL, b, DirectionSet::only(Direction::Forward)));
    }

    #[test]
    fn compatible_needs_unit_step() {
        assert!(!directions_compatible(coord(0, 0, 0), DirectionSet::ALL, coord(0, 0, 2), DirectionSet::ALL));
        assert!(!directions_compatible(coord(0, 0, 0), DirectionSet::ALL, coord(1, 0, 1), DirectionSet::ALL));
        assert!(!directions_compatible(coord(0, 0, 0), DirectionSet::ALL, coord(0, 0, 0), DirectionSet::ALL));
    }

    #[test]
    fn face_links_find_compatible_roles() {
        let mut registry = NodeRegistry::new();
        registry.insert(NodeKey::hub(coord(0, 0, 0)), DirectionSet::ALL);
        registry.insert(NodeKey::hub(coord(0, 0, 1)), DirectionSet::ALL);
        registry.insert(NodeKey::terminal(coord(0, 0, 1)), DirectionSet::ALL);
        registry.insert(NodeKey::hub(coord(1, 0, 0)), DirectionSet::only(Direction::Up));

        let links = face_links(&registry, NodeKey::hub(coord(0, 0, 0)));
        assert_eq!(
            links,
            vec![NodeKey::hub(coord(0, 0, 1)), NodeKey::terminal(coord(0, 0, 1))]
        );
        assert!(face_links(&registry, NodeKey::terminal(coord(5, 5, 5))).is_empty());
    }

    #[test]
    fn terminal_saturates_after_one_link() {
        let config = NetworkConfig::default();
        let mut registry = NodeRegistry::new();
        registry.insert(NodeKey::hub(coord(0, 0, 2)), DirectionSet::ALL);
        registry.insert(NodeKey::terminal(coord(0, 0, 1)), DirectionSet::ALL);

        let terminal = NodeKey::terminal(coord(0, 0, 1));
        assert_eq!(connection_count(&registry, terminal), 1);
        assert!(is_saturated(&registry, terminal, &config));
        assert!(!can_connect(&registry, terminal, coord(0, 0, 0), DirectionSet::ALL, &config));
    }

    #[test]
    fn shared_cell_counts_as_terminal_link() {
        let config = NetworkConfig::default();
        let mut registry = NodeRegistry::new();
        registry.insert(NodeKey::hub(coord(0, 0, 0)), DirectionSet::ALL);
        registry.insert(NodeKey::terminal(coord(0, 0, 0)), DirectionSet::ALL);

        let terminal = NodeKey::terminal(coord(0, 0, 0));
        assert_eq!(connection_count(&registry, terminal), 1);
        assert!(is_saturated(&registry, terminal, &config));
        // The hub's limit only covers faces.
        assert_eq!(connection_count(&registry, NodeKey::hub(coord(0, 0, 0))), 0);
    }

    #[test]
    fn hub_accepts_until_limit() {
        let mut registry = NodeRegistry::new();
        registry.insert(NodeKey::hub(coord(0, 0, 0)), DirectionSet::ALL);
        registry.insert(NodeKey::hub(coord(1, 0, 0)), DirectionSet::ALL);
        let hub = NodeKey::hub(coord(0, 0, 0));

        let config = NetworkConfig::default();
        assert!(can_connect(&registry, hub, coord(-1, 0, 0), DirectionSet::ALL, &config));

        let tight = NetworkConfig::default().with_hub_connection_limit(1);
        assert!(!can_connect(&registry, hub, coord(-1, 0, 0), DirectionSet::ALL, &tight));
    }

    #[test]
    fn missing_record_never_connects() {
        let registry = NodeRegistry::new();
        assert!(!can_connect(
            &registry,
            NodeKey::hub(coord(0, 0, 1)),
            coord(0, 0, 0),
            DirectionSet::ALL,
            &NetworkConfig::default()
        ));
    }
}
