use crate::catalog::Catalog;
use crate::models::{CandidatePlan, Category, RankedPlan};
use crate::planner::constants::*;
use crate::planner::decoder::DecodedCandidates;

/// Top plans of the preferred class.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub plans: Vec<RankedPlan>,
    /// True when the plans come from the compromise class.
    pub approximate: bool,
}

/// Sort by energy, lowest first. Stable, so equal energies keep their order.
pub fn sort_by_energy(plans: &mut [CandidatePlan]) {
    plans.sort_by(|a, b| a.energy.total_cmp(&b.energy));
}

/// Rank decoded candidates.
///
/// Feasible plans win as a class; compromise plans are only used when no
/// feasible plan exists. Returns `None` when there is nothing to rank.
pub fn rank_candidates(catalog: &Catalog, decoded: DecodedCandidates) -> Option<Ranking> {
    let (mut pool, approximate) = if !decoded.feasible.is_empty() {
        (decoded.feasible, false)
    } else if !decoded.compromise.is_empty() {
        (decoded.compromise, true)
    } else {
        return None;
    };

    sort_by_energy(&mut pool);
    pool.truncate(MAX_PLANS);

    let plans = pool
        .into_iter()
        .enumerate()
        .map(|(i, plan)| RankedPlan {
            rank: i + 1,
            call: order_call(catalog, &plan.items),
            plan,
        })
        .collect();

    Some(Ranking { plans, approximate })
}

/// First selected item of a category.
fn pick<'n>(catalog: &Catalog, items: &'n [String], category: Category) -> Option<&'n str> {
    items
        .iter()
        .find(|n| catalog.get_item(n).is_some_and(|i| i.category == category))
        .map(String::as_str)
}

fn matches_any(name: Option<&str>, fragments: &[&str]) -> bool {
    name.is_some_and(|n| fragments.iter().any(|f| n.contains(f)))
}

/// Spoken phrase for one category's choice, if it deviates from the default.
fn call_phrase(category: Category, name: &str) -> Option<&'static str> {
    CALL_PHRASES
        .iter()
        .find(|(c, fragment, _)| *c == category && name.contains(fragment))
        .map(|(_, _, phrase)| *phrase)
}

/// Build the counter call for a plan.
///
/// The house default (no garlic, normal vegetables, normal or no fat) is a
/// single phrase; anything else lists the deviating levels in the order
/// garlic, vegetables, fat.
pub fn order_call(catalog: &Catalog, items: &[String]) -> String {
    let garlic = pick(catalog, items, Category::Garlic);
    let vegetable = pick(catalog, items, Category::Vegetable);
    let fat = pick(catalog, items, Category::Fat);

    let is_default = matches_any(garlic, DEFAULT_GARLIC)
        && matches_any(vegetable, DEFAULT_VEGETABLE)
        && matches_any(fat, DEFAULT_FAT);
    if is_default {
        return DEFAULT_CALL.to_string();
    }

    let parts: Vec<&str> = CALL_CATEGORIES
        .iter()
        .filter_map(|&c| pick(catalog, items, c).and_then(|name| call_phrase(c, name)))
        .collect();

    if parts.is_empty() {
        DEFAULT_CALL.to_string()
    } else {
        parts.join(" ")
    }
}
