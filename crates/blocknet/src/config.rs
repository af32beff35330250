//! Network configuration.

use crate::registry::Role;

/// Connection limits and removal policy for a network.
///
/// Successor networks produced by a split inherit the config of the network
/// they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Maximum simultaneous face links for a hub.
    /// Default: 6 (one per face).
    pub hub_connection_limit: usize,

    /// Maximum simultaneous links for a terminal outside a degenerate network.
    /// Default: 1.
    pub terminal_connection_limit: usize,

    /// Keep a terminal left behind when the hub sharing its coordinate is
    /// removed, as long as it still links to something.
    /// Default: true.
    pub retain_demoted_terminals: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hub_connection_limit: 6,
            terminal_connection_limit: 1,
            retain_demoted_terminals: true,
        }
    }
}

impl NetworkConfig {
    /// Connection limit for nodes of `role`.
    pub const fn limit(&self, role: Role) -> usize {
        match role {
            Role::Hub => self.hub_connection_limit,
            Role::Terminal => self.terminal_connection_limit,
        }
    }

    /// Set the hub connection limit.
    #[must_use]
    pub fn with_hub_connection_limit(mut self, limit: usize) -> Self {
        self.hub_connection_limit = limit;
        self
    }

    /// Set the terminal connection limit.
    #[must_use]
    pub fn with_terminal_connection_limit(mut self, limit: usize) -> Self {
        self.terminal_connection_limit = limit;
        self
    }

    /// Discard every hub-less component on hub removal, including one that
    /// only survives through a demoted dual-role coordinate.
    #[must_use]
    pub fn without_demoted_terminals(mut self) -> Self {
        self.retain_demoted_terminals = false;
        self
    }
}
