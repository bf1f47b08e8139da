use crate::catalog::Catalog;
use crate::models::{Category, PlanStats, RankedPlan, ResourceLimits, SolveResult};

/// Display the outcome of a solve.
pub fn display_solve_result(result: &SolveResult, limits: &ResourceLimits) {
    let (plans, approximate, usual) = match result {
        SolveResult::Ok {
            plans,
            approximate,
            usual,
        } => (plans, *approximate, usual.as_ref()),
        SolveResult::Infeasible => {
            println!("No valid order found. Try relaxing your limits.");
            return;
        }
    };

    println!();
    println!("=== Optimized Orders ===");
    if approximate {
        println!();
        println!("! No order meets every limit. Showing the closest compromises.");
    }

    for plan in plans {
        display_plan(plan, limits, usual);
    }

    if let Some(usual) = usual {
        println!("--- Your Usual Order ---");
        display_stats(usual, limits);
        println!();
    }
}

fn display_plan(plan: &RankedPlan, limits: &ResourceLimits, usual: Option<&PlanStats>) {
    let label = if plan.rank == 1 { " (best)" } else { "" };
    let letter = char::from(b'A' + (plan.rank - 1).min(25) as u8);

    println!();
    println!("--- Plan {}{} ---", letter, label);
    println!("Call: \"{}\"", plan.call);
    println!("Items: {}", plan.plan.items.join(", "));
    display_stats(&plan.plan.stats, limits);

    if let Some(pct) = usual.and_then(|u| plan.plan.stats.score_change_pct(u)) {
        println!("Versus usual: {:+.1}%", pct);
    }
    if plan.plan.stats.randle_penalty > 0.0 {
        println!(
            "  [Carb x fat penalty -{:.0}]",
            plan.plan.stats.randle_penalty
        );
    }
    if plan.plan.stats.diet_bonus > 0.0 {
        println!("  [Diet synergy bonus +{:.0}]", plan.plan.stats.diet_bonus);
    }
    println!("Model energy: {:.2}", plan.plan.energy);
}

fn over(flag: bool) -> &'static str {
    if flag { " (over)" } else { "" }
}

fn display_stats(stats: &PlanStats, limits: &ResourceLimits) {
    println!(
        "Price: {:>5} / {} yen{}",
        stats.price,
        limits.budget,
        over(stats.price > u64::from(limits.budget))
    );
    println!(
        "Calories: {:>5.0} / {} kcal{}",
        stats.calories,
        limits.calories,
        over(stats.calories > f64::from(limits.calories))
    );
    println!(
        "Salt: {:>5.1} / {:.1} g{}",
        stats.sodium,
        limits.sodium,
        over(stats.sodium > limits.sodium)
    );
    println!("Score: {:.1}", stats.final_score);
}

/// Display the catalog grouped by category.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Menu ({} items) ===", catalog.len());

    let width = catalog
        .items()
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for category in Category::ALL {
        let items: Vec<_> = catalog.items_in(category).collect();
        if items.is_empty() {
            continue;
        }
        let kind = if category.is_mandatory_single() {
            "pick one"
        } else {
            "optional"
        };
        println!();
        println!("[{}] ({})", category, kind);
        for item in items {
            println!(
                "  {:<width$}  {:>5.0} kcal  {:>4.1} g  {:>4} yen  sat {:.0}",
                item.name,
                item.calories,
                item.sodium,
                item.price,
                item.satisfaction,
                width = width
            );
        }
    }
    println!();
}
