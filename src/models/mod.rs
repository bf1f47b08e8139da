pub mod item;
pub mod plan;
pub mod preferences;

pub use item::{Category, Item, SODIUM_SCALE, WeightGroup};
pub use plan::{CandidatePlan, PlanStats, RankedPlan, SolveResult};
pub use preferences::{
    MAX_SODIUM_LIMIT, PreferenceSliders, PreferenceWeights, ResourceLimits, slider_to_weight,
};
