//! Preferential-attachment growth.
//!
//! A [`GrowthSimulator`] moves through three phases:
//! 1. [`Phase::Seeding`] — empty until [`GrowthSimulator::seed`] lays down
//!    the triangle `(0,1)`, `(1,2)`, `(2,0)`.
//! 2. [`Phase::Growing`] — each [`GrowthSimulator::attach_node`] adds one
//!    node and one edge to a target drawn with weight `degree + 1`.
//! 3. [`Phase::Terminal`] — after [`GrowthSimulator::finish`] the network
//!    is read-only.

use crate::{
    analysis::DegreeHistogram,
    error::GrowthError,
    network::Network,
    types::{NodeId, Phase},
};
use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ids of the seed triangle.
pub const SEED_NODES: [NodeId; 3] = [0, 1, 2];

/// Edges of the seed triangle.
pub const SEED_EDGES: [(NodeId, NodeId); 3] = [(0, 1), (1, 2), (2, 0)];

/// One growth step: `node` was added and joined to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub node: NodeId,
    pub target: NodeId,
}

/// Owns a [`Network`] and grows it by preferential attachment.
///
/// The random source is supplied by the caller, so a seeded
/// `rand::rngs::StdRng` makes every run reproducible.
#[derive(Debug)]
pub struct GrowthSimulator<R> {
    network: Network,
    rng: R,
    phase: Phase,
}

impl<R: Rng> GrowthSimulator<R> {
    /// Creates an unseeded simulator with an empty network.
    pub fn new(rng: R) -> Self {
        Self {
            network: Network::new(),
            rng,
            phase: Phase::Seeding,
        }
    }

    /// Creates a simulator that already holds the seed triangle.
    pub fn seeded(rng: R) -> Result<Self, GrowthError> {
        let mut sim = Self::new(rng);
        sim.seed()?;
        Ok(sim)
    }

    /// Lays down the seed triangle and enters [`Phase::Growing`].
    ///
    /// ### Errors
    /// [`GrowthError::AlreadySeeded`] unless the simulator is still in
    /// [`Phase::Seeding`].
    pub fn seed(&mut self) -> Result<(), GrowthError> {
        if self.phase != Phase::Seeding {
            return Err(GrowthError::AlreadySeeded);
        }
        let mut net = Network::new();
        for id in SEED_NODES {
            net.add_node(id)?;
        }
        for (a, b) in SEED_EDGES {
            net.add_edge(a, b)?;
        }
        self.network = net;
        self.phase = Phase::Growing;
        info!(nodes = 3, edges = 3, "seeded network");
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the current network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Consumes the simulator and returns its network.
    pub fn into_network(self) -> Network {
        self.network
    }

    /// Selection weight `degree + 1` for every node, in ascending id order.
    pub fn selection_weights(&self) -> Vec<(NodeId, usize)> {
        self.network.degrees().map(|(id, d)| (id, d + 1)).collect()
    }

    /// Draws one existing node with probability proportional to its
    /// selection weight. The network is not modified.
    ///
    /// ### Errors
    /// [`GrowthError::NoCandidates`] if the network is empty.
    pub fn pick_target(&mut self) -> Result<NodeId, GrowthError> {
        let weights = self.selection_weights();
        let dist = WeightedIndex::new(weights.iter().map(|&(_, w)| w))
            .map_err(|_| GrowthError::NoCandidates)?;
        Ok(weights[dist.sample(&mut self.rng)].0)
    }

    /// Adds `new_id` and joins it to a target chosen by preferential
    /// attachment.
    ///
    /// ### Parameters
    /// - `new_id` - Id of the node to add; must not be present yet.
    ///
    /// ### Returns
    /// The [`Attachment`] naming the new node and its chosen target.
    ///
    /// ### Errors
    /// - [`GrowthError::NotSeeded`] before [`Self::seed`].
    /// - [`GrowthError::Finished`] after [`Self::finish`].
    /// - [`GrowthError::DuplicateNode`] if `new_id` already exists.
    ///
    /// The network is unchanged whenever an error is returned.
    pub fn attach_node(&mut self, new_id: NodeId) -> Result<Attachment, GrowthError> {
        match self.phase {
            Phase::Seeding => return Err(GrowthError::NotSeeded),
            Phase::Terminal => return Err(GrowthError::Finished),
            Phase::Growing => {}
        }
        if self.network.contains(new_id) {
            return Err(GrowthError::DuplicateNode(new_id));
        }

        let target = self.pick_target()?;
        self.network.add_node(new_id)?;
        self.network.add_edge(new_id, target)?;

        debug!(node = new_id, to = target, "attached node");
        Ok(Attachment {
            node: new_id,
            target,
        })
    }

    /// Attaches one node using the next sequential id (highest id + 1).
    pub fn attach_next(&mut self) -> Result<Attachment, GrowthError> {
        let next = self.network.max_id().map_or(0, |id| id + 1);
        self.attach_node(next)
    }

    /// Calls [`Self::attach_next`] `count` times.
    ///
    /// Stops at the first error; nodes attached before it remain.
    pub fn grow(&mut self, count: usize) -> Result<Vec<Attachment>, GrowthError> {
        let mut out = Vec::new();
        for _ in 0..count {
            out.push(self.attach_next()?);
        }
        Ok(out)
    }

    /// Ends growth and enters [`Phase::Terminal`].
    ///
    /// ### Errors
    /// [`GrowthError::NotSeeded`] if called before seeding.
    pub fn finish(&mut self) -> Result<(), GrowthError> {
        if self.phase == Phase::Seeding {
            return Err(GrowthError::NotSeeded);
        }
        if self.phase == Phase::Growing {
            info!(
                nodes = self.network.node_count(),
                edges = self.network.edge_count(),
                "growth finished"
            );
        }
        self.phase = Phase::Terminal;
        Ok(())
    }

    /// Node with the highest degree and that degree.
    ///
    /// Ties go to the lowest id. `None` for an empty network.
    pub fn max_degree(&self) -> Option<(NodeId, usize)> {
        self.network
            .degrees()
            .fold(None, |best, (id, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((id, d)),
            })
    }

    /// Count of nodes per distinct degree.
    pub fn degree_histogram(&self) -> DegreeHistogram {
        DegreeHistogram::from_network(&self.network)
    }
}
