use serde::{Deserialize, Serialize};

use crate::error::{OrderError, Result};
use crate::models::item::{Category, SODIUM_SCALE, WeightGroup};
use crate::models::plan::PlanStats;

/// Slope of the slider-to-weight transform.
pub const WEIGHT_SLOPE: f64 = 1.5;

/// Weight at slider position 0.0.
pub const WEIGHT_FLOOR: f64 = 0.5;

/// Largest accepted sodium limit in grams.
pub const MAX_SODIUM_LIMIT: f64 = 1000.0;

/// Map a slider in [0, 1] to a satisfaction multiplier in [0.5, 2.0].
#[inline]
pub fn slider_to_weight(slider: f64) -> f64 {
    WEIGHT_SLOPE * slider + WEIGHT_FLOOR
}

/// Raw preference sliders, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSliders {
    pub noodle: f64,
    pub pork: f64,
    pub vegetable: f64,
    /// Shared by fat and garlic.
    pub punch: f64,
    /// Shared by toppings and soup options.
    pub topping: f64,
}

impl PreferenceSliders {
    /// All sliders at the same position.
    pub fn uniform(value: f64) -> Self {
        Self {
            noodle: value,
            pork: value,
            vegetable: value,
            punch: value,
            topping: value,
        }
    }

    fn by_group(&self) -> [(WeightGroup, f64); WeightGroup::COUNT] {
        [
            (WeightGroup::Noodle, self.noodle),
            (WeightGroup::Pork, self.pork),
            (WeightGroup::Vegetable, self.vegetable),
            (WeightGroup::Punch, self.punch),
            (WeightGroup::Topping, self.topping),
        ]
    }
}

impl Default for PreferenceSliders {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Resolved satisfaction multipliers, one per weight group.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceWeights {
    weights: [f64; WeightGroup::COUNT],
}

impl PreferenceWeights {
    /// Validate sliders and apply the affine transform.
    pub fn from_sliders(sliders: &PreferenceSliders) -> Result<Self> {
        let mut weights = [0.0; WeightGroup::COUNT];
        for (group, value) in sliders.by_group() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OrderError::InvalidPreference(format!(
                    "{:?} slider must be within [0, 1], got {}",
                    group, value
                )));
            }
            weights[group.index()] = slider_to_weight(value);
        }
        Ok(Self { weights })
    }

    /// Weight for a slider group.
    #[inline]
    pub fn group(&self, group: WeightGroup) -> f64 {
        self.weights[group.index()]
    }

    /// Weight for an item category, resolved through its weight group.
    #[inline]
    pub fn for_category(&self, category: Category) -> f64 {
        self.group(category.weight_group())
    }

    /// Largest weight across all groups.
    pub fn max(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            weights: [slider_to_weight(0.5); WeightGroup::COUNT],
        }
    }
}

/// Per-order resource caps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Budget in yen.
    pub budget: u32,
    /// Calorie cap in kcal.
    pub calories: u32,
    /// Salt cap in grams.
    pub sodium: f64,
}

impl ResourceLimits {
    pub fn new(budget: u32, calories: u32, sodium: f64) -> Self {
        Self {
            budget,
            calories,
            sodium,
        }
    }

    /// Reject limits that would produce a degenerate model.
    pub fn validate(&self) -> Result<()> {
        if self.budget == 0 {
            return Err(OrderError::InvalidLimits(
                "budget must be positive".to_string(),
            ));
        }
        if self.calories == 0 {
            return Err(OrderError::InvalidLimits(
                "calorie limit must be positive".to_string(),
            ));
        }
        if !self.sodium.is_finite() || self.sodium <= 0.0 {
            return Err(OrderError::InvalidLimits(format!(
                "sodium limit must be a positive number, got {}",
                self.sodium
            )));
        }
        if self.sodium > MAX_SODIUM_LIMIT {
            return Err(OrderError::InvalidLimits(format!(
                "sodium limit must be at most {} g, got {}",
                MAX_SODIUM_LIMIT, self.sodium
            )));
        }
        Ok(())
    }

    /// Sodium cap in whole tenths of a gram (truncated).
    pub fn sodium_tenths(&self) -> f64 {
        (self.sodium * SODIUM_SCALE).floor()
    }

    /// Whether a plan stays within every limit. Limits are inclusive.
    pub fn admits(&self, stats: &PlanStats) -> bool {
        stats.price <= u64::from(self.budget)
            && stats.calories <= f64::from(self.calories)
            && stats.sodium <= self.sodium
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::new(1000, 1800, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_transform_range() {
        assert_eq!(slider_to_weight(0.0), 0.5);
        assert_eq!(slider_to_weight(0.5), 1.25);
        assert_eq!(slider_to_weight(1.0), 2.0);
    }

    #[test]
    fn test_weights_resolve_through_groups() {
        let sliders = PreferenceSliders {
            noodle: 0.0,
            pork: 0.2,
            vegetable: 0.4,
            punch: 1.0,
            topping: 0.6,
        };
        let weights = PreferenceWeights::from_sliders(&sliders).unwrap();

        assert_eq!(weights.for_category(Category::Noodle), 0.5);
        assert_eq!(weights.for_category(Category::Fat), 2.0);
        assert_eq!(weights.for_category(Category::Garlic), 2.0);
        assert_eq!(
            weights.for_category(Category::Topping),
            weights.for_category(Category::SoupOption)
        );
        assert_eq!(weights.max(), 2.0);
    }

    #[test]
    fn test_slider_out_of_range_rejected() {
        let mut sliders = PreferenceSliders::default();
        sliders.pork = 1.5;
        assert!(matches!(
            PreferenceWeights::from_sliders(&sliders),
            Err(OrderError::InvalidPreference(_))
        ));

        sliders.pork = f64::NAN;
        assert!(PreferenceWeights::from_sliders(&sliders).is_err());
    }

    #[test]
    fn test_limits_validation() {
        assert!(ResourceLimits::default().validate().is_ok());
        assert!(ResourceLimits::new(0, 1800, 8.0).validate().is_err());
        assert!(ResourceLimits::new(1000, 0, 8.0).validate().is_err());
        assert!(ResourceLimits::new(1000, 1800, 0.0).validate().is_err());
        assert!(ResourceLimits::new(1000, 1800, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_huge_sodium_limit_rejected() {
        assert!(ResourceLimits::new(1000, 1800, MAX_SODIUM_LIMIT).validate().is_ok());
        assert!(matches!(
            ResourceLimits::new(1000, 1800, 1e20).validate(),
            Err(OrderError::InvalidLimits(_))
        ));
    }

    #[test]
    fn test_sodium_tenths_truncates() {
        assert_eq!(ResourceLimits::new(1000, 1800, 8.0).sodium_tenths(), 80.0);
        assert_eq!(ResourceLimits::new(1000, 1800, 7.55).sodium_tenths(), 75.0);
    }
}
