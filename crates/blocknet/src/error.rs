//! Error types for blocknet.

use blocknet_topology::GridCoord;
use thiserror::Error;

use crate::registry::NodeKey;

/// Result type for blocknet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request is well-formed but the network's state forbids it.
    InvalidOperation,
    /// The caller broke a documented precondition.
    PreconditionViolation,
}

/// Errors that can occur while mutating a network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A terminal cannot bootstrap an empty network.
    #[error("cannot add terminal at {coord}: network has no hub yet")]
    EmptyNetwork { coord: GridCoord },

    /// Degenerate networks never grow.
    #[error("cannot add block at {coord}: network is degenerate")]
    DegenerateNetwork { coord: GridCoord },

    /// No existing node would link to the new one.
    #[error("{key} does not connect to any node in the network")]
    NotConnectable { key: NodeKey },

    /// The role is already registered at that coordinate.
    #[error("{key} is already registered")]
    AlreadyPresent { key: NodeKey },

    /// The role is not registered at that coordinate.
    #[error("no {key} in this network")]
    MissingNode { key: NodeKey },

    /// The two nodes of a degenerate network must link to each other.
    #[error("nodes at {a} and {b} cannot connect to each other")]
    NotAdjacent { a: GridCoord, b: GridCoord },

    /// A degenerate network needs two distinct coordinates.
    #[error("degenerate network needs two distinct coordinates, got {coord} twice")]
    SameCoordinate { coord: GridCoord },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyNetwork { .. } | Self::DegenerateNetwork { .. } | Self::NotConnectable { .. } => {
                ErrorKind::InvalidOperation
            }
            Self::AlreadyPresent { .. }
            | Self::MissingNode { .. }
            | Self::NotAdjacent { .. }
            | Self::SameCoordinate { .. } => ErrorKind::PreconditionViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Role;

    #[test]
    fn kinds() {
        let coord = GridCoord::ORIGIN;
        let key = NodeKey::new(coord, Role::Hub);
        assert_eq!(Error::EmptyNetwork { coord }.kind(), ErrorKind::InvalidOperation);
        assert_eq!(Error::DegenerateNetwork { coord }.kind(), ErrorKind::InvalidOperation);
        assert_eq!(Error::NotConnectable { key }.kind(), ErrorKind::InvalidOperation);
        assert_eq!(Error::MissingNode { key }.kind(), ErrorKind::PreconditionViolation);
        assert_eq!(Error::AlreadyPresent { key }.kind(), ErrorKind::PreconditionViolation);
        assert_eq!(
            Error::NotAdjacent { a: coord, b: GridCoord::new(0, 0, 2) }.kind(),
            ErrorKind::PreconditionViolation
        );
    }

    #[test]
    fn messages_name_the_node() {
        let key = NodeKey::new(GridCoord::new(1, 2, 3), Role::Terminal);
        assert_eq!(
            Error::MissingNode { key }.to_string(),
            "no terminal at (1, 2, 3) in this network"
        );
    }
}
