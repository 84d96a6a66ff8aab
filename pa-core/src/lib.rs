//! Preferential-attachment (scale-free) network growth.
//!
//! Main components:
//! - [`growth`] — the growth simulator: seeding and `attach_node`.
//! - [`network`] — petgraph-backed undirected network keyed by node id.
//! - [`analysis`] — degree histogram, log-log power-law fit, degree tiers.
//! - [`layout`] — 2-D positions for nodes.
//! - [`run`] — seed, grow and summarise in one call.
//! - [`config`] — parameters for a run.
//! - [`error`] — contract violations.
//! - [`types`] — shared ids and the lifecycle phase.

pub mod analysis;
pub mod config;
pub mod error;
pub mod growth;
pub mod layout;
pub mod network;
pub mod run;
pub mod types;

pub use analysis::{DegreeHistogram, DegreeTier, PowerLawFit};
pub use config::{Config, MAX_STEPS};
pub use error::GrowthError;
pub use growth::{Attachment, GrowthSimulator};
pub use network::Network;
pub use run::{RunReport, run};
pub use types::{NodeId, Phase};
