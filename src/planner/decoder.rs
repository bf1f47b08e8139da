use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{CandidatePlan, Item, PreferenceWeights, ResourceLimits};
use crate::planner::calculations::{calculate_stats, is_structurally_valid};
use crate::planner::sampler::SampleSet;

/// Structurally valid candidates, split by whether they honor every limit.
#[derive(Debug, Clone, Default)]
pub struct DecodedCandidates {
    pub feasible: Vec<CandidatePlan>,
    pub compromise: Vec<CandidatePlan>,
}

impl DecodedCandidates {
    /// True when nothing survived the structural filter.
    pub fn is_empty(&self) -> bool {
        self.feasible.is_empty() && self.compromise.is_empty()
    }

    pub fn len(&self) -> usize {
        self.feasible.len() + self.compromise.len()
    }
}

/// Turns raw assignments into validated candidate plans.
pub struct Decoder<'a> {
    catalog: &'a Catalog,
    weights: &'a PreferenceWeights,
    limits: &'a ResourceLimits,
}

impl<'a> Decoder<'a> {
    pub fn new(
        catalog: &'a Catalog,
        weights: &'a PreferenceWeights,
        limits: &'a ResourceLimits,
    ) -> Self {
        Self {
            catalog,
            weights,
            limits,
        }
    }

    /// Items switched on in an item selection.
    pub fn selected_items(&self, selection: &[bool]) -> Vec<&'a Item> {
        self.catalog
            .items()
            .iter()
            .zip(selection)
            .filter(|(_, on)| **on)
            .map(|(item, _)| item)
            .collect()
    }

    /// Build a candidate from an item selection, or `None` if the order is
    /// structurally invalid.
    pub fn decode_selection(&self, selection: &[bool], energy: f64) -> Option<CandidatePlan> {
        let selected = self.selected_items(selection);
        if !is_structurally_valid(&selected) {
            return None;
        }

        let stats = calculate_stats(&selected, self.weights);
        let feasible = self.limits.admits(&stats);

        Some(CandidatePlan {
            items: selected.iter().map(|i| i.name.clone()).collect(),
            stats,
            energy,
            feasible,
        })
    }

    /// Deduplicate, filter, and classify a whole sample set.
    ///
    /// Only the item variables identify a candidate; slack bits are ignored.
    /// States shorter than the catalog are counted as invalid.
    /// The first occurrence of each selection wins, which for an ordered
    /// sample set is its lowest energy.
    pub fn decode(&self, samples: &SampleSet) -> DecodedCandidates {
        let num_items = self.catalog.len();
        let mut seen: HashSet<&[bool]> = HashSet::new();
        let mut decoded = DecodedCandidates::default();
        let mut invalid = 0usize;

        for sample in samples.iter() {
            let Some(selection) = sample.state.get(..num_items) else {
                invalid += 1;
                continue;
            };
            if !seen.insert(selection) {
                continue;
            }

            match self.decode_selection(selection, sample.energy) {
                Some(plan) if plan.feasible => decoded.feasible.push(plan),
                Some(plan) => decoded.compromise.push(plan),
                None => invalid += 1,
            }
        }

        debug!(
            unique = seen.len(),
            invalid,
            feasible = decoded.feasible.len(),
            compromise = decoded.compromise.len(),
            "decoded samples"
        );
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::planner::sampler::Sample;

    fn state_for(names: &[&str], slack_bits: usize) -> Vec<bool> {
        let catalog = default_catalog();
        let mut state = vec![false; catalog.len() + slack_bits];
        for name in names {
            state[catalog.position(name).unwrap()] = true;
        }
        state
    }

    const BASIC: [&str; 5] = [
        "noodle-less-200g",
        "pork-standard",
        "vegetable-normal",
        "fat-none",
        "garlic-none",
    ];

    #[test]
    fn test_duplicate_samples_collapse() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::default();
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        let state = state_for(&BASIC, 4);
        let samples = SampleSet::from_samples(vec![
            Sample {
                state: state.clone(),
                energy: -100.0,
            },
            Sample {
                state,
                energy: -100.0,
            },
        ]);

        let decoded = decoder.decode(&samples);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.feasible.len(), 1);
    }

    #[test]
    fn test_slack_bits_ignored_for_dedup() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::default();
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        let low = state_for(&BASIC, 4);
        let mut high = low.clone();
        let last = high.len() - 1;
        high[last] = true;

        let samples = SampleSet::from_samples(vec![
            Sample {
                state: high,
                energy: 500.0,
            },
            Sample {
                state: low,
                energy: -200.0,
            },
        ]);

        let decoded = decoder.decode(&samples);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.feasible[0].energy, -200.0);
    }

    #[test]
    fn test_short_states_skipped() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::default();
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        let samples = SampleSet::from_samples(vec![
            Sample {
                state: vec![true; 5],
                energy: -500.0,
            },
            Sample {
                state: state_for(&BASIC, 0),
                energy: -100.0,
            },
        ]);

        let decoded = decoder.decode(&samples);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.feasible[0].energy, -100.0);
    }

    #[test]
    fn test_invalid_orders_dropped() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::default();
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        let no_noodle = state_for(&BASIC[1..], 0);
        let two_garlic = state_for(
            &[
                "noodle-less-200g",
                "pork-standard",
                "vegetable-normal",
                "fat-none",
                "garlic-none",
                "garlic-extra",
            ],
            0,
        );
        let samples = SampleSet::from_samples(vec![
            Sample {
                state: no_noodle,
                energy: -1000.0,
            },
            Sample {
                state: two_garlic,
                energy: -900.0,
            },
        ]);

        assert!(decoder.decode(&samples).is_empty());
    }

    #[test]
    fn test_over_limit_becomes_compromise() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::new(1000, 1800, 8.0);
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        // 700 + 250 = 950 yen fits, but 7.0 + 5.0 g of salt does not.
        let salty = state_for(
            &[
                "noodle-less-200g",
                "pork-double-8",
                "vegetable-normal",
                "fat-none",
                "garlic-none",
            ],
            0,
        );
        let plan = decoder.decode_selection(&salty, 0.0).unwrap();
        assert!(!plan.feasible);
        assert_eq!(plan.stats.price, 950);
    }

    #[test]
    fn test_budget_equal_to_price_is_feasible() {
        let weights = PreferenceWeights::default();
        let limits = ResourceLimits::new(700, 1800, 8.0);
        let decoder = Decoder::new(default_catalog(), &weights, &limits);

        let plan = decoder.decode_selection(&state_for(&BASIC, 0), 0.0).unwrap();
        assert_eq!(plan.stats.price, 700);
        assert!(plan.feasible);

        let tighter = ResourceLimits::new(699, 1800, 8.0);
        let decoder = Decoder::new(default_catalog(), &weights, &tighter);
        assert!(!decoder.decode_selection(&state_for(&BASIC, 0), 0.0).unwrap().feasible);
    }

    #[test]
    fn test_calorie_and_sodium_limits_inclusive() {
        let weights = PreferenceWeights::default();
        // noodle-less 700 kcal + vegetable-normal 40 kcal; 5.0 g salt
        let limits = ResourceLimits::new(1000, 740, 5.0);
        let decoder = Decoder::new(default_catalog(), &weights, &limits);
        let plan = decoder.decode_selection(&state_for(&BASIC, 0), 0.0).unwrap();
        assert!(plan.feasible);
    }
}
