use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{PlanStats, RankedPlan};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write ranked plans to a CSV file, one row per plan.
pub fn write_plans_csv(plans: &[RankedPlan], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "call",
        "items",
        "price",
        "calories",
        "sodium",
        "weighted_satisfaction",
        "randle_penalty",
        "diet_bonus",
        "final_score",
        "energy",
        "feasible",
    ])?;

    for plan in plans {
        let stats = &plan.plan.stats;
        wtr.write_record([
            plan.rank.to_string(),
            plan.call.clone(),
            plan.plan.items.join(" "),
            stats.price.to_string(),
            format!("{:.0}", stats.calories),
            format!("{:.1}", stats.sodium),
            format!("{:.2}", stats.weighted_satisfaction),
            format!("{:.0}", stats.randle_penalty),
            format!("{:.0}", stats.diet_bonus),
            format!("{:.2}", stats.final_score),
            format!("{:.3}", plan.plan.energy),
            plan.plan.feasible.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write ranked plans and the approximate flag to a JSON file.
pub fn write_plans_json(
    plans: &[RankedPlan],
    approximate: bool,
    usual: Option<&PlanStats>,
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "approximate": approximate,
        "plans": plans.iter().map(|p| {
            serde_json::json!({
                "rank": p.rank,
                "call": p.call,
                "items": p.plan.items,
                "feasible": p.plan.feasible,
                "energy": truncate(p.plan.energy, 3),
                "stats": p.plan.stats,
                "vs_usual_pct": usual
                    .and_then(|u| p.plan.stats.score_change_pct(u))
                    .map(|pct| truncate(pct, 1)),
            })
        }).collect::<Vec<_>>(),
        "usual": usual,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
