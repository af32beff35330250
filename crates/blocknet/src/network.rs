//! The network façade: one connected component of hub and terminal blocks.
//!
//! A [`Network`] starts empty and grows one block at a time, each new block
//! linking to at least one existing node. Hub removal is the only operation
//! that can break connectivity; it reports whether the network survived in
//! place or must be replaced by a set of successor networks.

use blocknet_topology::{DirectionSet, GridCoord};
use tracing::debug;

use crate::adjacency::{can_connect, directions_compatible};
use crate::config::NetworkConfig;
use crate::connectivity::{self, Component};
use crate::error::{Error, Result};
use crate::registry::{NodeKey, NodeRegistry, Role};

/// Outcome of removing a hub.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Removal {
    /// The network is still one connected component and was updated in place.
    Unchanged,
    /// The network no longer exists as it was. The original instance has
    /// been emptied; these successors (possibly none) take its place.
    Replaced(Vec<Network>),
}

impl Removal {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Successor networks, or `None` if the network survived in place.
    pub fn into_networks(self) -> Option<Vec<Network>> {
        match self {
            Self::Unchanged => None,
            Self::Replaced(networks) => Some(networks),
        }
    }

    /// Successor networks; empty both when unchanged and when dissolved.
    pub fn networks(&self) -> &[Network] {
        match self {
            Self::Unchanged => &[],
            Self::Replaced(networks) => networks,
        }
    }
}

/// A connected set of hub and terminal nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    registry: NodeRegistry,
    config: NetworkConfig,
    degenerate: bool,
}

impl Network {
    /// An empty network awaiting its first hub.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A hub-less network of two linked terminals.
    ///
    /// This is the only way to build a network without a hub. The result is
    /// degenerate: it never accepts new blocks.
    pub fn create_degenerate_network(
        a: GridCoord,
        a_dirs: DirectionSet,
        b: GridCoord,
        b_dirs: DirectionSet,
    ) -> Result<Self> {
        Self::create_degenerate_network_with_config(a, a_dirs, b, b_dirs, NetworkConfig::default())
    }

    pub fn create_degenerate_network_with_config(
        a: GridCoord,
        a_dirs: DirectionSet,
        b: GridCoord,
        b_dirs: DirectionSet,
        config: NetworkConfig,
    ) -> Result<Self> {
        if a == b {
            return Err(Error::SameCoordinate { coord: a });
        }
        if !directions_compatible(a, a_dirs, b, b_dirs) {
            return Err(Error::NotAdjacent { a, b });
        }

        let mut registry = NodeRegistry::new();
        registry.insert(NodeKey::terminal(a), a_dirs);
        registry.insert(NodeKey::terminal(b), b_dirs);
        debug!(%a, %b, "created degenerate network");

        Ok(Self {
            registry,
            config,
            degenerate: true,
        })
    }

    /// Whether a block at `coord` linking through `directions` could join.
    ///
    /// False for an occupied coordinate and for a degenerate network. True
    /// for an empty network. Otherwise true iff some neighboring node links
    /// back and still has a free connection.
    pub fn can_add_block(&self, coord: GridCoord, directions: DirectionSet) -> bool {
        if self.degenerate || self.registry.is_occupied(coord) {
            return false;
        }
        self.registry.is_empty() || self.accepts_link(coord, directions)
    }

    /// Register a hub at `coord`.
    pub fn add_networking_block(&mut self, coord: GridCoord, directions: DirectionSet) -> Result<()> {
        self.add(NodeKey::hub(coord), directions)
    }

    /// Register a terminal at `coord`. Fails on an empty network.
    pub fn add_leaf_block(&mut self, coord: GridCoord, directions: DirectionSet) -> Result<()> {
        self.add(NodeKey::terminal(coord), directions)
    }

    fn add(&mut self, key: NodeKey, directions: DirectionSet) -> Result<()> {
        self.check_growth(key, directions)?;
        self.registry.insert(key, directions);
        debug!(node = %key, %directions, size = self.network_size(), "added block");
        Ok(())
    }

    fn check_growth(&self, key: NodeKey, directions: DirectionSet) -> Result<()> {
        if self.degenerate {
            return Err(Error::DegenerateNetwork { coord: key.coord });
        }
        if self.registry.contains(key) {
            return Err(Error::AlreadyPresent { key });
        }
        if self.registry.is_empty() {
            return match key.role {
                Role::Hub => Ok(()),
                Role::Terminal => Err(Error::EmptyNetwork { coord: key.coord }),
            };
        }
        let shares_cell = self.registry.contains(key.counterpart());
        let linked = match key.role {
            // Sharing a cell with a hub is a link in itself.
            Role::Terminal if shares_cell => true,
            // The terminal on this cell re-anchors to the new hub, which must
            // reach the rest of the network through another hub.
            Role::Hub if shares_cell => {
                self.accepts_link_from(key.coord, directions, |existing| existing.role == Role::Hub)
            }
            _ => self.accepts_link(key.coord, directions),
        };
        if linked {
            Ok(())
        } else {
            Err(Error::NotConnectable { key })
        }
    }

    fn accepts_link(&self, coord: GridCoord, directions: DirectionSet) -> bool {
        self.accepts_link_from(coord, directions, |_| true)
    }

    /// Whether some neighbor matching `from` would link to a block at `coord`.
    fn accepts_link_from(
        &self,
        coord: GridCoord,
        directions: DirectionSet,
        from: impl Fn(NodeKey) -> bool,
    ) -> bool {
        directions
            .iter()
            .filter_map(|d| coord.step(d))
            .any(|neighbor| {
                self.registry.roles_at(neighbor).any(|(existing, _)| {
                    from(existing) && can_connect(&self.registry, existing, coord, directions, &self.config)
                })
            })
    }

    /// Remove the hub at `coord` and work out what is left.
    ///
    /// A terminal sharing the cell stays behind. Hub-less components are
    /// dropped, except one that still holds that demoted terminal linked to
    /// at least one other block (see [`NetworkConfig::retain_demoted_terminals`]).
    /// Returns [`Removal::Unchanged`] if everything left is still one
    /// component; otherwise the surviving components as new networks.
    pub fn remove_networking_block(&mut self, coord: GridCoord) -> Result<Removal> {
        let key = NodeKey::hub(coord);
        if self.registry.remove(key).is_none() {
            return Err(Error::MissingNode { key });
        }

        let demoted = self.registry.contains(key.counterpart()).then_some(coord);
        let remaining = self.registry.record_count();
        let components = connectivity::analyze(&self.registry);
        let found = components.len();
        let survivors: Vec<Component> = components
            .into_iter()
            .filter(|c| self.is_viable(c, demoted))
            .collect();

        if let [only] = survivors.as_slice() {
            if only.record_count() == remaining {
                debug!(%coord, size = self.network_size(), "removed hub, network intact");
                return Ok(Removal::Unchanged);
            }
        }

        debug!(
            %coord,
            components = found,
            survivors = survivors.len(),
            "removed hub, network replaced"
        );
        self.registry = NodeRegistry::new();
        let networks = survivors
            .into_iter()
            .map(|c| Network {
                registry: c.into_registry(),
                config: self.config,
                degenerate: false,
            })
            .collect();
        Ok(Removal::Replaced(networks))
    }

    fn is_viable(&self, component: &Component, demoted: Option<GridCoord>) -> bool {
        if component.has_hub() {
            return true;
        }
        self.config.retain_demoted_terminals
            && component.position_count() >= 2
            && demoted.is_some_and(|coord| component.contains_position(coord))
    }

    /// Remove the terminal at `coord`.
    ///
    /// A terminal never relays, so this cannot split the network.
    pub fn remove_leaf_block(&mut self, coord: GridCoord) -> Result<()> {
        let key = NodeKey::terminal(coord);
        if self.registry.remove(key).is_none() {
            return Err(Error::MissingNode { key });
        }
        debug!(%coord, size = self.network_size(), "removed terminal");
        Ok(())
    }

    /// Number of distinct occupied coordinates.
    pub fn network_size(&self) -> usize {
        self.registry.position_count()
    }

    /// Whether this network came from [`Network::create_degenerate_network`].
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn has_networking_node(&self, coord: GridCoord) -> bool {
        self.registry.contains(NodeKey::hub(coord))
    }

    pub fn has_leaf_node(&self, coord: GridCoord) -> bool {
        self.registry.contains(NodeKey::terminal(coord))
    }

    pub fn networking_nodes(&self) -> impl Iterator<Item = (GridCoord, DirectionSet)> + '_ {
        self.registry.hubs()
    }

    pub fn leaf_nodes(&self) -> impl Iterator<Item = (GridCoord, DirectionSet)> + '_ {
        self.registry.terminals()
    }

    pub fn directions(&self, key: NodeKey) -> Option<DirectionSet> {
        self.registry.directions(key)
    }

    pub fn positions(&self) -> Vec<GridCoord> {
        self.registry.positions()
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Hops between two blocks of this network, if a path exists.
    pub fn distance(&self, from: GridCoord, to: GridCoord) -> Option<usize> {
        connectivity::hop_distance(&self.registry, from, to)
    }

    /// Whether `to` is reachable from `from` in at most `max` hops.
    pub fn is_in_distance(&self, from: GridCoord, to: GridCoord, max: usize) -> bool {
        self.distance(from, to).is_some_and(|d| d <= max)
    }
}
