use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{PlanStats, PreferenceSliders, PreferenceWeights, ResourceLimits, SolveResult};
use crate::planner::builder::ModelBuilder;
use crate::planner::calculations::calculate_stats;
use crate::planner::decoder::Decoder;
use crate::planner::ranking::rank_candidates;
use crate::planner::sampler::{Sampler, SamplerConfig, SimulatedAnnealingSampler};

/// A catalog, a model builder, and a search strategy, ready to answer requests.
pub struct Solver<'c, S: Sampler> {
    catalog: &'c Catalog,
    builder: ModelBuilder,
    sampler: S,
}

impl<'c> Solver<'c, SimulatedAnnealingSampler> {
    /// Solver using simulated annealing with the given run parameters.
    pub fn annealing(catalog: &'c Catalog, config: SamplerConfig) -> Self {
        Self::new(catalog, SimulatedAnnealingSampler::new(config))
    }
}

impl<'c, S: Sampler> Solver<'c, S> {
    pub fn new(catalog: &'c Catalog, sampler: S) -> Self {
        Self {
            catalog,
            builder: ModelBuilder::new(),
            sampler,
        }
    }

    pub fn with_builder(mut self, builder: ModelBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Statistics for an arbitrary list of item names.
    pub fn evaluate_order<N: AsRef<str>>(
        &self,
        names: &[N],
        weights: &PreferenceWeights,
    ) -> Result<PlanStats> {
        let items = self.catalog.resolve(names)?;
        Ok(calculate_stats(&items, weights))
    }

    /// Run the full pipeline for one request.
    ///
    /// Configuration problems are returned as errors before any model is
    /// built. A search that yields no structurally valid order is
    /// `SolveResult::Infeasible`, not an error.
    pub fn solve(
        &self,
        limits: &ResourceLimits,
        sliders: &PreferenceSliders,
        usual_order: Option<&[String]>,
    ) -> Result<SolveResult> {
        limits.validate()?;
        let weights = PreferenceWeights::from_sliders(sliders)?;
        let usual = usual_order
            .map(|names| self.evaluate_order(names, &weights))
            .transpose()?;

        info!(
            budget = limits.budget,
            calories = limits.calories,
            sodium = limits.sodium,
            sampler = self.sampler.name(),
            "solving order"
        );

        let model = self.builder.build(self.catalog, &weights, limits)?;
        let samples = self.sampler.sample(&model.bqm);
        if let Some(best) = samples.first() {
            debug!(
                energy = best.energy,
                slack = ?model.slack_values(&best.state),
                "lowest-energy sample"
            );
        }

        let decoder = Decoder::new(self.catalog, &weights, limits);
        let decoded = decoder.decode(&samples);

        let Some(ranking) = rank_candidates(self.catalog, decoded) else {
            warn!(samples = samples.len(), "no structurally valid order found");
            return Ok(SolveResult::Infeasible);
        };

        if ranking.approximate {
            warn!("no plan meets every limit; returning closest compromise plans");
        }
        info!(
            plans = ranking.plans.len(),
            approximate = ranking.approximate,
            "solve finished"
        );

        Ok(SolveResult::Ok {
            plans: ranking.plans,
            approximate: ranking.approximate,
            usual,
        })
    }
}

/// Solve with the default annealing parameters.
pub fn solve(
    catalog: &Catalog,
    limits: &ResourceLimits,
    sliders: &PreferenceSliders,
    usual_order: Option<&[String]>,
) -> Result<SolveResult> {
    Solver::annealing(catalog, SamplerConfig::default()).solve(limits, sliders, usual_order)
}
