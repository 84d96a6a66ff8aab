use serde::{Deserialize, Serialize};

/// Identifier for a node in a [`crate::network::Network`].
///
/// Ids are handed out sequentially by the caller (the seed triangle uses
/// `0`, `1` and `2`) and are only meaningful within a given network.
pub type NodeId = usize;

/// Lifecycle of a [`crate::growth::GrowthSimulator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No nodes yet; only seeding is allowed.
    Seeding,
    /// Seed triangle in place; nodes may be attached.
    Growing,
    /// Read-only; histogram and analysis only.
    Terminal,
}
