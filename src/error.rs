//! Error types for control activation.
//!
//! The controls themselves have almost no failure modes; what can go wrong is
//! a violated precondition on a collaborator. Those preconditions are checked
//! explicitly rather than assumed: a control holds a non-owning reference to
//! its map view, and the 3D engine must be injected before the globe toggle
//! is first activated.

use thiserror::Error;

/// Errors surfaced by control activation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The map view this control was bound to has been dropped by the host.
    #[error("map view reference is no longer valid")]
    InvalidReference,

    /// No 3D globe engine was injected before the first globe activation.
    #[error("3D globe engine is not loaded")]
    DependencyUnavailable,
}
