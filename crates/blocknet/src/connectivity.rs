//! Connectivity analyzer: partition a registry into connected components.
//!
//! Only hubs relay. The analysis runs in three passes:
//! 1. BFS over hubs through hub-to-hub links gives the hub components.
//! 2. Every terminal joins the component of its anchor: the hub sharing its
//!    cell, otherwise the first linked hub in `Direction::ALL` order. A
//!    terminal touching hubs of two components therefore never joins them.
//! 3. Terminals without an anchor are grouped through terminal-to-terminal
//!    links into hub-less components.
//!
//! Networks are small and removal is the only operation that can break
//! connectivity, so a full re-traversal after each removal is enough.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use blocknet_topology::{DirectionSet, GridCoord};
use tracing::trace;

use crate::adjacency::face_links;
use crate::registry::{NodeKey, NodeRegistry, Role};

/// One maximal connected group of role-records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    registry: NodeRegistry,
}

impl Component {
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn has_hub(&self) -> bool {
        self.registry.has_hub()
    }

    pub fn position_count(&self) -> usize {
        self.registry.position_count()
    }

    pub fn record_count(&self) -> usize {
        self.registry.record_count()
    }

    pub fn contains_position(&self, coord: GridCoord) -> bool {
        self.registry.is_occupied(coord)
    }

    pub fn into_registry(self) -> NodeRegistry {
        self.registry
    }
}

/// Split `registry` into its connected components.
///
/// Hub components come first, ordered by their smallest hub coordinate,
/// followed by hub-less components ordered by their smallest terminal.
pub fn analyze(registry: &NodeRegistry) -> Vec<Component> {
    let mut component_of: BTreeMap<GridCoord, usize> = BTreeMap::new();
    let mut groups: Vec<Vec<(NodeKey, DirectionSet)>> = Vec::new();

    for (start, _) in registry.hubs() {
        if component_of.contains_key(&start) {
            continue;
        }
        let id = groups.len();
        let mut members = Vec::new();
        let mut queue = VecDeque::new();
        component_of.insert(start, id);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let key = NodeKey::hub(current);
            if let Some(dirs) = registry.directions(key) {
                members.push((key, dirs));
            }
            for link in face_links(registry, key) {
                if link.role != Role::Hub || component_of.contains_key(&link.coord) {
                    continue;
                }
                component_of.insert(link.coord, id);
                queue.push_back(link.coord);
            }
        }

        trace!(component = id, hubs = members.len(), root = %start, "hub component");
        groups.push(members);
    }

    let mut orphans: BTreeMap<GridCoord, DirectionSet> = BTreeMap::new();
    for (coord, dirs) in registry.terminals() {
        match anchor(registry, &component_of, coord, dirs) {
            Some(id) => groups[id].push((NodeKey::terminal(coord), dirs)),
            None => {
                orphans.insert(coord, dirs);
            }
        }
    }

    let mut seen: BTreeSet<GridCoord> = BTreeSet::new();
    for &start in orphans.keys() {
        if !seen.insert(start) {
            continue;
        }
        let mut members = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let key = NodeKey::terminal(current);
            if let Some(&dirs) = orphans.get(&current) {
                members.push((key, dirs));
            }
            for link in face_links(registry, key) {
                if link.role == Role::Terminal && orphans.contains_key(&link.coord) && seen.insert(link.coord) {
                    queue.push_back(link.coord);
                }
            }
        }

        trace!(terminals = members.len(), root = %start, "hub-less component");
        groups.push(members);
    }

    groups
        .into_iter()
        .map(|members| Component {
            registry: members.into_iter().collect(),
        })
        .collect()
}

/// Component id of the hub a terminal hangs off, if any.
fn anchor(
    registry: &NodeRegistry,
    component_of: &BTreeMap<GridCoord, usize>,
    coord: GridCoord,
    dirs: DirectionSet,
) -> Option<usize> {
    if let Some(&id) = component_of.get(&coord) {
        return Some(id);
    }
    dirs.iter().find_map(|d| {
        let neighbor = coord.step(d)?;
        let hub_dirs = registry.directions(NodeKey::hub(neighbor))?;
        if hub_dirs.contains(d.reverse()) {
            component_of.get(&neighbor).copied()
        } else {
            None
        }
    })
}

/// Number of face steps on the shortest path from `from` to `to`.
///
/// Only cells holding a hub relay, so a path never passes through a
/// terminal-only cell. Terminal-to-terminal steps are only taken in a
/// registry with no hub at all. Returns `None` if either cell is empty or no
/// path exists.
pub fn hop_distance(registry: &NodeRegistry, from: GridCoord, to: GridCoord) -> Option<usize> {
    if !registry.is_occupied(from) || !registry.is_occupied(to) {
        return None;
    }
    if from == to {
        return Some(0);
    }

    let terminals_link = !registry.has_hub();
    let mut visited: BTreeSet<GridCoord> = BTreeSet::new();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back((from, 0usize));

    while let Some((current, distance)) = queue.pop_front() {
        if current != from && !registry.contains(NodeKey::hub(current)) {
            continue;
        }
        for (key, _) in registry.roles_at(current) {
            for link in face_links(registry, key) {
                if key.role == Role::Terminal && link.role == Role::Terminal && !terminals_link {
                    continue;
                }
                if !visited.insert(link.coord) {
                    continue;
                }
                if link.coord == to {
                    return Some(distance + 1);
                }
                queue.push_back((link.coord, distance + 1));
            }
        }
    }

    None
}
