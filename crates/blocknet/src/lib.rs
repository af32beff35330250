//! Block Network Connectivity Engine
//!
//! Tracks how grid-aligned connector blocks link into networks as blocks are
//! placed and removed, keeping every [`Network`] a maximal connected
//! component.
//!
//! # Roles
//!
//! A block plays one of two roles, and a single cell may hold both:
//! - **Hub** (networking node): links on up to six faces and relays
//! - **Terminal** (leaf node): one active link, never relays
//!
//! Two nodes link when their cells share a face and each lists the direction
//! toward the other.
//!
//! # Invariants
//!
//! - A terminal holds at most one link, except inside a degenerate network.
//! - A degenerate network has no hub. It is built only as a linked pair of
//!   terminals via [`Network::create_degenerate_network`], may shrink, and
//!   never grows.
//! - Any other network needs a hub; hub-less leftovers of a removal are
//!   discarded.
//! - Every node of a network is reachable from every other.
//!
//! # Removal
//!
//! Adding a block never merges networks: it must link into the one it joins.
//! Removing a hub is the only way to break connectivity, so it re-runs the
//! [`connectivity`] analysis and returns a [`Removal`]: either the network
//! survived in place, or a list of successor networks replaces it.

pub mod adjacency;
pub mod config;
pub mod connectivity;
pub mod error;
mod network;
pub mod registry;

pub use blocknet_topology::{Direction, DirectionSet, GridCoord};
pub use config::NetworkConfig;
pub use error::{Error, ErrorKind, Result};
pub use network::{Network, Removal};
pub use registry::{NodeKey, NodeRegistry, Role};
