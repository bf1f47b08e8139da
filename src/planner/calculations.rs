use crate::models::{Category, Item, PlanStats, PreferenceWeights};
use crate::planner::constants::*;

/// Whether any selected item is listed in `set`.
fn contains_any(selected: &[&Item], set: &[&str]) -> bool {
    selected.iter().any(|i| name_in(&i.name, set))
}

/// Randle penalty: applies once when any high-carb item meets any high-fat item.
pub fn randle_penalty(selected: &[&Item]) -> f64 {
    if contains_any(selected, HIGH_CARB_ITEMS) && contains_any(selected, HIGH_FAT_ITEMS) {
        RANDLE_PENALTY
    } else {
        0.0
    }
}

/// Diet bonus: applies once when a reduced-carb item meets a high-volume vegetable.
pub fn diet_bonus(selected: &[&Item]) -> f64 {
    if contains_any(selected, REDUCED_CARB_ITEMS) && contains_any(selected, HIGH_VOLUME_VEGETABLES)
    {
        DIET_SYNERGY_BONUS
    } else {
        0.0
    }
}

/// Sum of satisfaction times each item's resolved category weight.
pub fn weighted_satisfaction(selected: &[&Item], weights: &PreferenceWeights) -> f64 {
    selected
        .iter()
        .map(|i| i.satisfaction * weights.for_category(i.category))
        .sum()
}

/// Compute plan statistics for a set of items.
///
/// This is the only place scores are computed; sampled plans and the caller's
/// usual order both go through it.
pub fn calculate_stats(selected: &[&Item], weights: &PreferenceWeights) -> PlanStats {
    let calories: f64 = selected.iter().map(|i| i.calories).sum();
    let sodium: f64 = selected.iter().map(|i| i.sodium).sum();
    let price: u64 = selected.iter().map(|i| u64::from(i.price)).sum();

    let weighted_satisfaction = weighted_satisfaction(selected, weights);
    let randle_penalty = randle_penalty(selected);
    let diet_bonus = diet_bonus(selected);

    PlanStats {
        calories,
        sodium,
        price,
        weighted_satisfaction,
        randle_penalty,
        diet_bonus,
        final_score: weighted_satisfaction + diet_bonus - randle_penalty,
    }
}

/// Number of selected items in a category.
pub fn count_in(selected: &[&Item], category: Category) -> usize {
    selected.iter().filter(|i| i.category == category).count()
}

/// Exactly one item per mandatory category, and a noodle among them.
pub fn is_structurally_valid(selected: &[&Item]) -> bool {
    count_in(selected, Category::Noodle) > 0
        && Category::MANDATORY
            .iter()
            .all(|&c| count_in(selected, c) == 1)
}
