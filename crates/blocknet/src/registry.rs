//! Node registry: which roles sit at which coordinates, and which faces each
//! role links through.
//!
//! Hub and terminal records are kept in separate maps. A coordinate may hold
//! one of each; the two records are independent and are added and removed
//! independently. Maps are ordered so that every traversal, and therefore
//! every split result, is deterministic.

use std::collections::BTreeMap;

use blocknet_topology::{DirectionSet, GridCoord};

/// The part a block plays in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Networking node: relays between up to six neighbors.
    Hub,
    /// Leaf node: a single active link, never relays.
    Terminal,
}

impl Role {
    pub const BOTH: [Self; 2] = [Self::Hub, Self::Terminal];

    /// The other role.
    pub const fn other(self) -> Self {
        match self {
            Self::Hub => Self::Terminal,
            Self::Terminal => Self::Hub,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hub => f.write_str("hub"),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}

/// Identity of one role-record: a coordinate plus the role held there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeKey {
    pub coord: GridCoord,
    pub role: Role,
}

impl NodeKey {
    pub const fn new(coord: GridCoord, role: Role) -> Self {
        Self { coord, role }
    }

    pub const fn hub(coord: GridCoord) -> Self {
        Self::new(coord, Role::Hub)
    }

    pub const fn terminal(coord: GridCoord) -> Self {
        Self::new(coord, Role::Terminal)
    }

    /// The record for the other role at the same coordinate.
    pub const fn counterpart(&self) -> Self {
        Self::new(self.coord, self.role.other())
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.role, self.coord)
    }
}

/// Role-records of one network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRegistry {
    hubs: BTreeMap<GridCoord, DirectionSet>,
    terminals: BTreeMap<GridCoord, DirectionSet>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, role: Role) -> &BTreeMap<GridCoord, DirectionSet> {
        match role {
            Role::Hub => &self.hubs,
            Role::Terminal => &self.terminals,
        }
    }

    fn map_mut(&mut self, role: Role) -> &mut BTreeMap<GridCoord, DirectionSet> {
        match role {
            Role::Hub => &mut self.hubs,
            Role::Terminal => &mut self.terminals,
        }
    }

    /// Register a record, returning the directions it replaced, if any.
    pub fn insert(&mut self, key: NodeKey, directions: DirectionSet) -> Option<DirectionSet> {
        self.map_mut(key.role).insert(key.coord, directions)
    }

    /// Drop a record, returning its directions.
    pub fn remove(&mut self, key: NodeKey) -> Option<DirectionSet> {
        self.map_mut(key.role).remove(&key.coord)
    }

    pub fn directions(&self, key: NodeKey) -> Option<DirectionSet> {
        self.map(key.role).get(&key.coord).copied()
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.map(key.role).contains_key(&key.coord)
    }

    /// Whether any role is registered at `coord`.
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.hubs.contains_key(&coord) || self.terminals.contains_key(&coord)
    }

    /// Records registered at `coord`, hub first.
    pub fn roles_at(&self, coord: GridCoord) -> impl Iterator<Item = (NodeKey, DirectionSet)> + '_ {
        Role::BOTH.into_iter().filter_map(move |role| {
            let key = NodeKey::new(coord, role);
            self.directions(key).map(|dirs| (key, dirs))
        })
    }

    /// Distinct occupied coordinates. Dual-role coordinates count once.
    pub fn position_count(&self) -> usize {
        self.hubs.len()
            + self
                .terminals
                .keys()
                .filter(|coord| !self.hubs.contains_key(coord))
                .count()
    }

    /// Number of role-records. Dual-role coordinates count twice.
    pub fn record_count(&self) -> usize {
        self.hubs.len() + self.terminals.len()
    }

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn has_hub(&self) -> bool {
        !self.hubs.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty() && self.terminals.is_empty()
    }

    pub fn hubs(&self) -> impl Iterator<Item = (GridCoord, DirectionSet)> + '_ {
        self.hubs.iter().map(|(c, d)| (*c, *d))
    }

    pub fn terminals(&self) -> impl Iterator<Item = (GridCoord, DirectionSet)> + '_ {
        self.terminals.iter().map(|(c, d)| (*c, *d))
    }

    /// Every record, hubs before terminals, each in coordinate order.
    pub fn records(&self) -> impl Iterator<Item = (NodeKey, DirectionSet)> + '_ {
        self.hubs()
            .map(|(c, d)| (NodeKey::hub(c), d))
            .chain(self.terminals().map(|(c, d)| (NodeKey::terminal(c), d)))
    }

    /// Distinct occupied coordinates in ascending order.
    pub fn positions(&self) -> Vec<GridCoord> {
        let mut positions: Vec<GridCoord> = self.hubs.keys().chain(self.terminals.keys()).copied().collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

impl FromIterator<(NodeKey, DirectionSet)> for NodeRegistry {
    fn from_iter<I: IntoIterator<Item = (NodeKey, DirectionSet)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, dirs) in iter {
            registry.insert(key, dirs);
        }
        registry
    }
}
