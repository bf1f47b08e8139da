pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::{Catalog, default_catalog};
pub use error::{OrderError, Result};
pub use models::{Item, PlanStats, PreferenceSliders, ResourceLimits, SolveResult};
pub use planner::{Solver, solve};
