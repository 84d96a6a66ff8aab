//! End-to-end growth run: seed, grow, analyse.

use crate::{
    analysis::{DegreeHistogram, DegreeTier, PowerLawFit},
    config::Config,
    error::GrowthError,
    growth::{Attachment, GrowthSimulator},
    layout::Layout,
    types::NodeId,
};
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Offset applied to `Config::seed` for the layout RNG stream.
const LAYOUT_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Final state of one node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: NodeId,
    pub degree: usize,
    pub tier: DegreeTier,
    pub position: Vec2,
}

/// Highest-degree node after a growth step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxDegree {
    pub node: NodeId,
    pub degree: usize,
}

/// Everything a run produces, ready to print or serialise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub config: Config,
    pub node_count: usize,
    pub edge_count: usize,
    pub attachments: Vec<Attachment>,
    /// Max degree after each attachment, in step order.
    pub max_degree_trace: Vec<MaxDegree>,
    pub nodes: Vec<NodeSummary>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub histogram: DegreeHistogram,
    pub log_log_points: Vec<[f64; 2]>,
    pub fit: Option<PowerLawFit>,
}

impl RunReport {
    /// Highest degree at the end of the run.
    pub fn final_max_degree(&self) -> Option<MaxDegree> {
        self.max_degree_trace.last().copied()
    }
}

/// Seeds a network, grows `cfg.steps` nodes and summarises the result.
///
/// Attachment and layout draw from separate RNG streams derived from
/// `cfg.seed`, so changing layout parameters never changes the topology.
///
/// ### Errors
/// [`GrowthError::InvalidConfig`] if [`Config::validate`] rejects `cfg`;
/// nothing is grown in that case.
pub fn run(cfg: &Config) -> Result<RunReport, GrowthError> {
    cfg.validate()?;

    let mut sim = GrowthSimulator::seeded(StdRng::seed_from_u64(cfg.seed))?;
    let mut layout_rng = StdRng::seed_from_u64(cfg.seed ^ LAYOUT_STREAM);
    let mut layout = Layout::seeded();

    let mut attachments = Vec::new();
    let mut max_degree_trace = Vec::new();

    for _ in 0..cfg.steps {
        let a = sim.attach_next()?;
        layout.place_on_ring(a.node, cfg.ring_radius, cfg.ring_jitter, &mut layout_rng);
        attachments.push(a);

        if let Some((node, degree)) = sim.max_degree() {
            max_degree_trace.push(MaxDegree { node, degree });
        }
    }
    sim.finish()?;

    let histogram = sim.degree_histogram();
    let log_log_points = histogram.log_log_points();
    let fit = PowerLawFit::fit(&log_log_points);

    let net = sim.network();
    let nodes = net
        .degrees()
        .map(|(id, degree)| NodeSummary {
            id,
            degree,
            tier: DegreeTier::from_degree(degree),
            position: layout.get(id).unwrap_or(Vec2::ZERO),
        })
        .collect();

    let report = RunReport {
        config: *cfg,
        node_count: net.node_count(),
        edge_count: net.edge_count(),
        attachments,
        max_degree_trace,
        nodes,
        edges: net.edges().collect(),
        histogram,
        log_log_points,
        fit,
    };

    info!(
        seed = cfg.seed,
        nodes = report.node_count,
        edges = report.edge_count,
        max_degree = report.final_max_degree().map_or(0, |m| m.degree),
        "run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_grows_to_twenty_nodes() {
        let report = run(&Config::default()).unwrap();

        assert_eq!(report.node_count, 20);
        assert_eq!(report.edge_count, 20);
        assert_eq!(report.attachments.len(), 17);
        assert_eq!(report.max_degree_trace.len(), 17);
        assert_eq!(report.nodes.len(), 20);
        assert_eq!(report.histogram.total_nodes(), 20);

        let ids: Vec<_> = report.attachments.iter().map(|a| a.node).collect();
        assert_eq!(ids, (3..20).collect::<Vec<_>>());
    }

    #[test]
    fn degrees_sum_to_twice_the_edges() {
        let report = run(&Config {
            steps: 50,
            ..Config::default()
        })
        .unwrap();

        let sum: usize = report.nodes.iter().map(|n| n.degree).sum();
        assert_eq!(sum, 2 * report.edge_count);
        assert!(report.nodes.iter().all(|n| n.degree >= 1));
        assert!(
            report
                .nodes
                .iter()
                .all(|n| n.tier == DegreeTier::from_degree(n.degree))
        );
    }

    #[test]
    fn max_degree_never_decreases() {
        let report = run(&Config {
            seed: 7,
            steps: 60,
            ..Config::default()
        })
        .unwrap();

        assert!(
            report
                .max_degree_trace
                .windows(2)
                .all(|w| w[0].degree <= w[1].degree)
        );
        let last = report.final_max_degree().unwrap();
        let top = report.nodes.iter().map(|n| n.degree).max().unwrap();
        assert_eq!(last.degree, top);
    }

    #[test]
    fn same_seed_same_report() {
        let cfg = Config {
            seed: 42,
            ..Config::default()
        };
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();

        assert_eq!(a.attachments, b.attachments);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.histogram, b.histogram);
    }

    #[test]
    fn layout_parameters_do_not_change_topology() {
        let base = Config {
            seed: 3,
            ..Config::default()
        };
        let wide = Config {
            ring_radius: 10.0,
            ring_jitter: 0.0,
            ..base
        };

        let a = run(&base).unwrap();
        let b = run(&wide).unwrap();
        assert_eq!(a.attachments, b.attachments);
        assert!(
            b.nodes[3..]
                .iter()
                .all(|n| (n.position.length() - 10.0).abs() < 1e-3)
        );
    }

    #[test]
    fn oversized_step_count_is_rejected() {
        let err = run(&Config {
            steps: usize::MAX,
            ..Config::default()
        })
        .unwrap_err();

        assert!(matches!(err, GrowthError::InvalidConfig(_)));
    }

    #[test]
    fn non_finite_jitter_is_rejected() {
        for jitter in [f32::INFINITY, f32::NAN] {
            let err = run(&Config {
                ring_jitter: jitter,
                ..Config::default()
            })
            .unwrap_err();
            assert!(matches!(err, GrowthError::InvalidConfig(_)));
        }
    }

    #[test]
    fn negative_or_non_finite_radius_is_rejected() {
        for radius in [-1.0, f32::NEG_INFINITY, f32::NAN] {
            let err = run(&Config {
                ring_radius: radius,
                ..Config::default()
            })
            .unwrap_err();
            assert!(matches!(err, GrowthError::InvalidConfig(_)));
        }
    }

    #[test]
    fn negative_jitter_is_rejected() {
        let err = run(&Config {
            ring_jitter: -0.1,
            ..Config::default()
        })
        .unwrap_err();

        assert!(matches!(err, GrowthError::InvalidConfig(_)));
    }

    #[test]
    fn zero_steps_leaves_seed_triangle() {
        let report = run(&Config {
            steps: 0,
            ..Config::default()
        })
        .unwrap();

        assert_eq!(report.node_count, 3);
        assert!(report.attachments.is_empty());
        assert_eq!(report.final_max_degree(), None);
        assert_eq!(report.histogram.iter().collect::<Vec<_>>(), vec![(2, 3)]);
        assert_eq!(report.fit, None);
    }
}
