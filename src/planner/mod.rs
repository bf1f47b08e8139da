pub mod builder;
pub mod calculations;
pub mod constants;
pub mod decoder;
pub mod model;
pub mod ranking;
pub mod sampler;
pub mod solve;

pub use builder::{ModelBuilder, QuboModel, Resource, log_encoding};
pub use calculations::{calculate_stats, diet_bonus, is_structurally_valid, randle_penalty};
pub use constants::*;
pub use decoder::{DecodedCandidates, Decoder};
pub use model::{BinaryQuadraticModel, LinearExpr};
pub use ranking::{Ranking, order_call, rank_candidates};
pub use sampler::{Sample, SampleSet, Sampler, SamplerConfig, SimulatedAnnealingSampler};
pub use solve::{Solver, solve};
