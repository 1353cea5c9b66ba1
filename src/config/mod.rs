//! Generation-time feature flags and the CLI option catalog.
//!
//! Options arrive as a raw string map from the host pipeline. Resolution is a
//! pure function: raw options in, a fully derived [`FeatureConfig`] out. There
//! is no partially initialized state, and flag interactions (the Vert.x 5
//! future-mode gate) are applied inside the resolution step.

mod features;
mod options;

pub use features::*;
pub use options::*;
