use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{OrderError, Result};
use crate::models::{Category, Item, PreferenceWeights, ResourceLimits};
use crate::planner::constants::*;
use crate::planner::model::{BinaryQuadraticModel, LinearExpr};

/// A resource capped by a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Price,
    Calories,
    Sodium,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Price, Resource::Calories, Resource::Sodium];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Price => "price",
            Resource::Calories => "calories",
            Resource::Sodium => "sodium",
        }
    }

    /// Per-item usage in encoded units (sodium in tenths of a gram).
    fn usage(self, item: &Item) -> f64 {
        match self {
            Resource::Price => f64::from(item.price),
            Resource::Calories => item.calories,
            Resource::Sodium => item.sodium_tenths(),
        }
    }

    /// Limit and slack upper bound in encoded units.
    fn bounds(self, limits: &ResourceLimits) -> (f64, u64) {
        match self {
            Resource::Price => (f64::from(limits.budget), u64::from(limits.budget)),
            Resource::Calories => (
                f64::from(limits.calories),
                u64::from(limits.calories) + CALORIE_SLACK_MARGIN,
            ),
            Resource::Sodium => {
                let tenths = limits.sodium_tenths();
                (tenths, tenths as u64 + SODIUM_SLACK_MARGIN_TENTHS)
            }
        }
    }
}

/// Coefficients of a bounded logarithmic integer encoding of `[0, upper]`.
///
/// Powers of two up to the highest one below `upper`, then a final
/// coefficient sized so that all bits together sum to exactly `upper`.
pub fn log_encoding(upper: u64) -> Vec<u64> {
    if upper == 0 {
        return Vec::new();
    }
    let bits = 64 - upper.leading_zeros() as usize;
    let mut coeffs: Vec<u64> = (0..bits - 1).map(|k| 1u64 << k).collect();
    let low_sum = (1u64 << (bits - 1)) - 1;
    coeffs.push(upper - low_sum);
    coeffs
}

/// Slack integer backing one resource constraint.
#[derive(Debug, Clone)]
pub struct SlackEncoding {
    pub resource: Resource,
    /// `(variable, coefficient)` for each slack bit.
    pub bits: Vec<(usize, u64)>,
    pub upper: u64,
}

impl SlackEncoding {
    /// Integer value of the slack in an assignment. Bits past the end of
    /// `state` read as zero.
    pub fn value(&self, state: &[bool]) -> u64 {
        self.bits
            .iter()
            .filter(|(var, _)| state.get(*var).copied().unwrap_or(false))
            .map(|(_, c)| c)
            .sum()
    }
}

/// Compiled optimization model for one solve request.
#[derive(Debug, Clone)]
pub struct QuboModel {
    pub bqm: BinaryQuadraticModel,
    /// Item variables occupy indices `0..num_items`; slack bits follow.
    pub num_items: usize,
    pub penalty_strength: f64,
    pub slacks: Vec<SlackEncoding>,
}

impl QuboModel {
    /// Decoded slack integer per resource for an assignment.
    pub fn slack_values(&self, state: &[bool]) -> Vec<(Resource, u64)> {
        self.slacks
            .iter()
            .map(|slack| (slack.resource, slack.value(state)))
            .collect()
    }
}

/// Turns a catalog, preference weights, and limits into a quadratic model.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    penalty_strength: Option<f64>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed constraint strength instead of the adaptive one.
    pub fn with_penalty_strength(mut self, strength: f64) -> Self {
        self.penalty_strength = Some(strength);
        self
    }

    /// Constraint strength M for this request.
    pub fn penalty_strength(&self, catalog: &Catalog, weights: &PreferenceWeights) -> f64 {
        self.penalty_strength.unwrap_or_else(|| {
            PENALTY_STRENGTH_FLOOR.max(PENALTY_DOMINANCE * reward_bound(catalog, weights))
        })
    }

    pub fn build(
        &self,
        catalog: &Catalog,
        weights: &PreferenceWeights,
        limits: &ResourceLimits,
    ) -> Result<QuboModel> {
        limits.validate()?;
        let m = self.penalty_strength(catalog, weights);
        if !m.is_finite() || m <= 0.0 {
            return Err(OrderError::InvalidLimits(format!(
                "penalty strength must be positive, got {}",
                m
            )));
        }

        let mut bqm = BinaryQuadraticModel::new();
        for item in catalog.items() {
            let var = bqm.add_variable(item.name.clone());
            bqm.add_linear(var, -item.satisfaction * weights.for_category(item.category));
        }

        add_pair_terms(&mut bqm, catalog, HIGH_CARB_ITEMS, HIGH_FAT_ITEMS, RANDLE_PENALTY);
        add_pair_terms(
            &mut bqm,
            catalog,
            REDUCED_CARB_ITEMS,
            HIGH_VOLUME_VEGETABLES,
            -DIET_SYNERGY_BONUS,
        );

        for category in Category::MANDATORY {
            let mut expr = LinearExpr::with_constant(-1.0);
            for var in catalog.positions_in(category) {
                expr.add_term(var, 1.0);
            }
            bqm.add_squared_penalty(&expr, m);
        }

        let mut slacks = Vec::with_capacity(Resource::ALL.len());
        for resource in Resource::ALL {
            let (limit, upper) = resource.bounds(limits);
            let mut expr = LinearExpr::with_constant(-limit);
            for (var, item) in catalog.items().iter().enumerate() {
                expr.add_term(var, resource.usage(item));
            }

            let bits: Vec<(usize, u64)> = log_encoding(upper)
                .into_iter()
                .enumerate()
                .map(|(k, coeff)| {
                    let var = bqm.add_variable(format!("slack_{}[{}]", resource.label(), k));
                    expr.add_term(var, coeff as f64);
                    (var, coeff)
                })
                .collect();

            bqm.add_squared_penalty(&expr, m);
            slacks.push(SlackEncoding {
                resource,
                bits,
                upper,
            });
        }

        debug!(
            variables = bqm.num_variables(),
            interactions = bqm.num_interactions(),
            penalty_strength = m,
            "built quadratic model"
        );

        Ok(QuboModel {
            bqm,
            num_items: catalog.len(),
            penalty_strength: m,
            slacks,
        })
    }
}

/// Add `value * x_a * x_b` for every pair across two name sets present in the catalog.
fn add_pair_terms(
    bqm: &mut BinaryQuadraticModel,
    catalog: &Catalog,
    left: &[&str],
    right: &[&str],
    value: f64,
) {
    for a in left.iter().filter_map(|n| catalog.position(n)) {
        for b in right.iter().filter_map(|n| catalog.position(n)) {
            bqm.add_quadratic(a, b, value);
        }
    }
}

/// Largest objective magnitude any one-hot respecting order can reach.
fn reward_bound(catalog: &Catalog, weights: &PreferenceWeights) -> f64 {
    let weighted = |i: &Item| i.satisfaction * weights.for_category(i.category);

    let mandatory: f64 = Category::MANDATORY
        .iter()
        .map(|&c| catalog.items_in(c).map(weighted).fold(0.0, f64::max))
        .sum();
    let optional: f64 = catalog
        .items()
        .iter()
        .filter(|i| !i.category.is_mandatory_single())
        .map(weighted)
        .sum();

    let count = |set: &[&str]| set.iter().filter(|n| catalog.position(n).is_some()).count();
    let interactions = (count(HIGH_CARB_ITEMS) * count(HIGH_FAT_ITEMS)) as f64 * RANDLE_PENALTY
        + (count(REDUCED_CARB_ITEMS) * count(HIGH_VOLUME_VEGETABLES)) as f64
            * DIET_SYNERGY_BONUS;

    mandatory + optional + interactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use assert_float_eq::*;

    fn select(catalog: &Catalog, names: &[&str]) -> Vec<bool> {
        let mut selection = vec![false; catalog.len()];
        for name in names {
            selection[catalog.position(name).unwrap()] = true;
        }
        selection
    }

    /// Set slack bits to represent `value`, clamped to `[0, upper]`.
    fn write_slack(slack: &SlackEncoding, state: &mut [bool], value: u64) {
        let mut remaining = value.min(slack.upper);
        // The last coefficient is the irregular one; take it first when needed.
        if let Some((&(last_var, last_coeff), rest)) = slack.bits.split_last() {
            let rest_max: u64 = rest.iter().map(|(_, c)| c).sum();
            let take_last = remaining > rest_max;
            state[last_var] = take_last;
            if take_last {
                remaining -= last_coeff;
            }
            for &(var, coeff) in rest.iter().rev() {
                let on = remaining >= coeff;
                state[var] = on;
                if on {
                    remaining -= coeff;
                }
            }
        }
    }

    /// Extend an item selection with the slack values that zero every
    /// satisfiable resource penalty.
    fn complete_assignment(
        model: &QuboModel,
        catalog: &Catalog,
        limits: &ResourceLimits,
        selection: &[bool],
    ) -> Vec<bool> {
        let mut state = vec![false; model.bqm.num_variables()];
        state[..model.num_items].copy_from_slice(selection);

        for slack in &model.slacks {
            let (limit, _) = slack.resource.bounds(limits);
            let used: f64 = catalog
                .items()
                .iter()
                .zip(selection)
                .filter(|(_, on)| **on)
                .map(|(item, _)| slack.resource.usage(item))
                .sum();
            let headroom = (limit - used).max(0.0).round() as u64;
            write_slack(slack, &mut state, headroom);
        }
        state
    }

    fn midpoint_model() -> QuboModel {
        ModelBuilder::new()
            .build(
                default_catalog(),
                &PreferenceWeights::default(),
                &ResourceLimits::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_log_encoding_sums_to_upper() {
        assert!(log_encoding(0).is_empty());
        assert_eq!(log_encoding(1), vec![1]);
        assert_eq!(log_encoding(2), vec![1, 1]);
        assert_eq!(log_encoding(7), vec![1, 2, 4]);
        let coeffs = log_encoding(1000);
        assert_eq!(coeffs.len(), 10);
        assert_eq!(coeffs.iter().sum::<u64>(), 1000);
        assert_eq!(*coeffs.last().unwrap(), 489);
    }

    #[test]
    fn test_slack_write_covers_full_range() {
        let mut bqm = BinaryQuadraticModel::new();
        let bits = log_encoding(85)
            .into_iter()
            .map(|c| (bqm.add_variable("s"), c))
            .collect();
        let slack = SlackEncoding {
            resource: Resource::Sodium,
            bits,
            upper: 85,
        };

        let mut state = vec![false; bqm.num_variables()];
        for value in 0..=85 {
            write_slack(&slack, &mut state, value);
            assert_eq!(slack.value(&state), value);
        }
        write_slack(&slack, &mut state, 500);
        assert_eq!(slack.value(&state), 85);
    }

    #[test]
    fn test_item_variables_come_first() {
        let model = midpoint_model();
        let catalog = default_catalog();
        assert_eq!(model.num_items, catalog.len());
        assert_eq!(model.bqm.label(0), "noodle-regular-300g");
        assert!(model.bqm.label(model.num_items).starts_with("slack_price"));
        assert_eq!(model.slacks.len(), 3);
    }

    #[test]
    fn test_slack_values_read_back_headroom() {
        let catalog = default_catalog();
        let limits = ResourceLimits::default();
        let model = midpoint_model();
        let selection = select(
            catalog,
            &["noodle-less-200g", "pork-standard", "vegetable-normal", "fat-none", "garlic-none"],
        );
        let state = complete_assignment(&model, catalog, &limits, &selection);

        // 700 yen, 740 kcal, 50 tenths of salt used.
        assert!(
            model
                .slack_values(&selection)
                .iter()
                .all(|(_, value)| *value == 0)
        );
        assert_eq!(
            model.slack_values(&state),
            vec![
                (Resource::Price, 300),
                (Resource::Calories, 1060),
                (Resource::Sodium, 30),
            ]
        );
    }

    #[test]
    fn test_interaction_terms() {
        let model = midpoint_model();
        let catalog = default_catalog();
        let carb = catalog.position("noodle-regular-300g").unwrap();
        let fat = catalog.position("fat-extra-extra").unwrap();
        let low = catalog.position("noodle-half-150g").unwrap();
        let vege = catalog.position("vegetable-extra-extra").unwrap();
        let m = model.penalty_strength;

        // Both pairs also share resource penalties; strip those to isolate the term.
        let resource_cross = |a: &Item, b: &Item| {
            2.0 * m
                * (f64::from(a.price) * f64::from(b.price)
                    + a.calories * b.calories
                    + a.sodium_tenths() * b.sodium_tenths())
        };
        let items = catalog.items();
        assert_float_absolute_eq!(
            model.bqm.quadratic(carb, fat) - resource_cross(&items[carb], &items[fat]),
            RANDLE_PENALTY,
            1e-3
        );
        assert_float_absolute_eq!(
            model.bqm.quadratic(low, vege) - resource_cross(&items[low], &items[vege]),
            -DIET_SYNERGY_BONUS,
            1e-3
        );
    }

    #[test]
    fn test_valid_order_energy_is_objective_only() {
        let catalog = default_catalog();
        let model = midpoint_model();
        let selection = select(
            catalog,
            &[
                "noodle-half-150g",
                "pork-standard",
                "vegetable-extra-extra",
                "fat-none",
                "garlic-normal",
            ],
        );
        let state = complete_assignment(&model, catalog, &ResourceLimits::default(), &selection);

        // Midpoint sliders give every category a weight of 1.25.
        let expected = -(80.0 + 50.0 + 90.0 + 0.0 + 50.0) * 1.25 - DIET_SYNERGY_BONUS;
        assert_float_absolute_eq!(model.bqm.energy(&state), expected, 1e-3);
    }

    #[test]
    fn test_missing_category_costs_penalty_strength() {
        let catalog = default_catalog();
        let model = midpoint_model();
        let valid = select(
            catalog,
            &["noodle-less-200g", "pork-standard", "vegetable-normal", "fat-none", "garlic-none"],
        );
        let mut no_garlic = valid.clone();
        no_garlic[catalog.position("garlic-none").unwrap()] = false;

        let limits = ResourceLimits::default();
        let e_valid = model.bqm.energy(&complete_assignment(&model, catalog, &limits, &valid));
        let e_missing =
            model.bqm.energy(&complete_assignment(&model, catalog, &limits, &no_garlic));
        assert_float_absolute_eq!(e_missing - e_valid, model.penalty_strength, 1e-3);
    }

    #[test]
    fn test_over_budget_is_penalized() {
        let catalog = default_catalog();
        let limits = ResourceLimits::new(800, 3000, 20.0);
        let model = ModelBuilder::new()
            .with_penalty_strength(PENALTY_STRENGTH_FLOOR)
            .build(catalog, &PreferenceWeights::default(), &limits)
            .unwrap();

        // 700 + 250 = 950 yen against an 800 budget: 150 over, slack at zero.
        let selection = select(
            catalog,
            &["noodle-less-200g", "pork-double-8", "vegetable-normal", "fat-none", "garlic-none"],
        );
        let state = complete_assignment(&model, catalog, &limits, &selection);
        let objective = -(100.0 + 160.0 + 40.0) * 1.25;
        assert_float_absolute_eq!(
            model.bqm.energy(&state),
            objective + PENALTY_STRENGTH_FLOOR * 150.0 * 150.0,
            1e-2
        );
    }

    #[test]
    fn test_adaptive_strength_dominates_objective() {
        let catalog = default_catalog();
        let weights = PreferenceWeights::default();
        let strength = ModelBuilder::new().penalty_strength(catalog, &weights);
        assert!(strength >= PENALTY_STRENGTH_FLOOR);
        assert!(strength >= PENALTY_DOMINANCE * reward_bound(catalog, &weights));

        let fixed = ModelBuilder::new()
            .with_penalty_strength(1234.0)
            .penalty_strength(catalog, &weights);
        assert_eq!(fixed, 1234.0);
    }

    #[test]
    fn test_invalid_limits_fail_before_build() {
        let result = ModelBuilder::new().build(
            default_catalog(),
            &PreferenceWeights::default(),
            &ResourceLimits::new(0, 1800, 8.0),
        );
        assert!(matches!(result, Err(OrderError::InvalidLimits(_))));

        let result = ModelBuilder::new().build(
            default_catalog(),
            &PreferenceWeights::default(),
            &ResourceLimits::new(1000, 1800, 1e20),
        );
        assert!(matches!(result, Err(OrderError::InvalidLimits(_))));
    }
}
