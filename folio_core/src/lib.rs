//! Folio core: renderer state machines for the portfolio app
//!
//! Hosts the two decorative renderers (the full-surface swarm field and the
//! hero globe network) as plain state machines. Each one computes a frame of
//! flat draw records in `tick` and owns no surface; the desktop crate paints
//! the records and drives the ticks.

pub mod geometry;
pub mod globe;
pub mod rng;
pub mod swarm;

pub use geometry::{Vec2, Vec3};
pub use globe::GlobeNetwork;
pub use rng::{ConstRandom, EntropyRandom, RandomSource, SeededRandom};
pub use swarm::SwarmField;
