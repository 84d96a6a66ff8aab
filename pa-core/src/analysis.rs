//! Degree statistics for a grown network.
//!
//! - [`DegreeHistogram`] counts nodes per distinct degree.
//! - [`PowerLawFit`] is a least-squares line through the histogram in
//!   log-log space, the usual way to eyeball a power law.
//! - [`DegreeTier`] buckets a degree from "new node" up to "super hub".

use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from degree to the number of nodes with that degree.
///
/// Only degrees that occur are present; iteration is by ascending degree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeHistogram(BTreeMap<usize, usize>);

impl DegreeHistogram {
    pub fn from_network(network: &Network) -> Self {
        Self::from_degrees(network.degrees().map(|(_, d)| d))
    }

    pub fn from_degrees(degrees: impl IntoIterator<Item = usize>) -> Self {
        let mut counts = BTreeMap::new();
        for d in degrees {
            *counts.entry(d).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Number of nodes with degree `degree` (zero if absent).
    pub fn get(&self, degree: usize) -> usize {
        self.0.get(&degree).copied().unwrap_or(0)
    }

    /// `(degree, count)` pairs by ascending degree.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&d, &c)| (d, c))
    }

    /// Number of distinct degrees.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_nodes(&self) -> usize {
        self.0.values().sum()
    }

    /// `(ln degree, ln count)` for every entry with a positive degree and
    /// count.
    pub fn log_log_points(&self) -> Vec<[f64; 2]> {
        self.iter()
            .filter(|&(d, c)| d > 0 && c > 0)
            .map(|(d, c)| [(d as f64).ln(), (c as f64).ln()])
            .collect()
    }

    /// Least-squares fit over [`Self::log_log_points`].
    pub fn power_law_fit(&self) -> Option<PowerLawFit> {
        PowerLawFit::fit(&self.log_log_points())
    }
}

/// Line `y = slope * x + intercept` fitted by ordinary least squares.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    pub slope: f64,
    pub intercept: f64,
}

impl PowerLawFit {
    /// Fits a line through `points`.
    ///
    /// Returns `None` for fewer than two points or when every point has
    /// the same x, since the slope is undefined then.
    pub fn fit(points: &[[f64; 2]]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
            let dx = p[0] - mean_x;
            (sxy + dx * (p[1] - mean_y), sxx + dx * dx)
        });
        if sxx <= f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Influence bucket for a node's degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DegreeTier {
    NewNode,
    Moderate,
    GrowingInfluence,
    EmergingHub,
    HighlyInfluential,
    SuperHub,
}

impl DegreeTier {
    pub const ALL: [DegreeTier; 6] = [
        DegreeTier::NewNode,
        DegreeTier::Moderate,
        DegreeTier::GrowingInfluence,
        DegreeTier::EmergingHub,
        DegreeTier::HighlyInfluential,
        DegreeTier::SuperHub,
    ];

    /// Degree 6 and above is a super hub; 0 and 1 are new nodes.
    ///
    /// An isolated node counts as new, never as a hub.
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 | 1 => DegreeTier::NewNode,
            2 => DegreeTier::Moderate,
            3 => DegreeTier::GrowingInfluence,
            4 => DegreeTier::EmergingHub,
            5 => DegreeTier::HighlyInfluential,
            _ => DegreeTier::SuperHub,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DegreeTier::NewNode => "New Node",
            DegreeTier::Moderate => "Moderate",
            DegreeTier::GrowingInfluence => "Growing Influence",
            DegreeTier::EmergingHub => "Emerging Hub",
            DegreeTier::HighlyInfluential => "Highly Influential",
            DegreeTier::SuperHub => "Super Hub",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_each_distinct_degree() {
        let hist = DegreeHistogram::from_degrees([2, 3, 2, 1]);

        assert_eq!(hist.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_nodes(), 4);
        assert_eq!(hist.get(2), 2);
        assert_eq!(hist.get(7), 0);
    }

    #[test]
    fn log_log_points_skip_zero_degree() {
        let hist = DegreeHistogram::from_degrees([0, 1, 1, 2]);
        let points = hist.log_log_points();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], [0.0, 2f64.ln()]);
        assert_eq!(points[1], [2f64.ln(), 0.0]);
    }

    #[test]
    fn fit_recovers_exact_power_law() {
        // count = 64 * degree^-2
        let points: Vec<[f64; 2]> = [1.0f64, 2.0, 4.0, 8.0]
            .iter()
            .map(|&d| [d.ln(), (64.0 * d.powi(-2)).ln()])
            .collect();

        let fit = PowerLawFit::fit(&points).unwrap();
        assert!((fit.slope + 2.0).abs() < 1e-9);
        assert!((fit.intercept - 64f64.ln()).abs() < 1e-9);
        assert!((fit.predict(2f64.ln()) - 16f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn fit_needs_two_distinct_x_values() {
        assert_eq!(PowerLawFit::fit(&[]), None);
        assert_eq!(PowerLawFit::fit(&[[1.0, 2.0]]), None);
        assert_eq!(PowerLawFit::fit(&[[1.0, 2.0], [1.0, 3.0]]), None);
    }

    #[test]
    fn histogram_fit_on_single_degree_is_none() {
        let hist = DegreeHistogram::from_degrees([2, 2, 2]);
        assert_eq!(hist.power_law_fit(), None);
    }

    #[test]
    fn isolated_node_is_a_new_node_not_a_hub() {
        let mut net = Network::new();
        net.add_node(0).unwrap();

        let degree = net.degree(0).unwrap();
        assert_eq!(degree, 0);
        assert_eq!(DegreeTier::from_degree(degree), DegreeTier::NewNode);
        assert_ne!(DegreeTier::from_degree(degree), DegreeTier::SuperHub);
    }

    #[test]
    fn tiers_follow_degree_buckets() {
        let tiers: Vec<_> = (0..=8).map(DegreeTier::from_degree).collect();
        assert_eq!(
            tiers,
            vec![
                DegreeTier::NewNode,
                DegreeTier::NewNode,
                DegreeTier::Moderate,
                DegreeTier::GrowingInfluence,
                DegreeTier::EmergingHub,
                DegreeTier::HighlyInfluential,
                DegreeTier::SuperHub,
                DegreeTier::SuperHub,
                DegreeTier::SuperHub,
            ]
        );
        assert_eq!(DegreeTier::SuperHub.label(), "Super Hub");
        assert!(DegreeTier::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
