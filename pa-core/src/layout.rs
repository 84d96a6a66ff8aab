use crate::{growth::SEED_NODES, types::NodeId};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, f32::consts::TAU};

/// Fixed positions of the seed triangle, indexed like [`SEED_NODES`].
pub const SEED_POSITIONS: [Vec2; 3] = [
    Vec2::new(-2.0, 1.0),
    Vec2::new(2.0, 1.0),
    Vec2::new(0.0, -2.0),
];

/// 2-D positions for network nodes, for whoever draws them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Layout {
    pub positions: BTreeMap<NodeId, Vec2>,
}

impl Layout {
    /// Layout holding only the seed triangle.
    pub fn seeded() -> Self {
        let positions = SEED_NODES.into_iter().zip(SEED_POSITIONS).collect();
        Self { positions }
    }

    pub fn get(&self, id: NodeId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    /// Places `id` at a random angle on a ring around the origin.
    ///
    /// ### Parameters
    /// - `id` - Node to place; an existing position is overwritten.
    /// - `radius` - Mean distance from the origin.
    /// - `jitter` - Maximum deviation from `radius`.
    /// - `rng` - Random source for angle and distance.
    ///
    /// ### Returns
    /// The chosen position.
    ///
    /// ### Panics
    /// Panics if `jitter` is NaN or infinite; `Config::validate` rules
    /// this out for full runs.
    pub fn place_on_ring(
        &mut self,
        id: NodeId,
        radius: f32,
        jitter: f32,
        rng: &mut impl Rng,
    ) -> Vec2 {
        let angle = rng.random_range(0.0..TAU);
        let jitter = jitter.abs();
        let r = radius + rng.random_range(-jitter..=jitter);
        let pos = Vec2::from_angle(angle) * r;
        self.positions.insert(id, pos);
        pos
    }
}
