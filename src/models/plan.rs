use serde::Serialize;

/// Aggregate figures for a set of selected items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanStats {
    pub calories: f64,
    pub sodium: f64,
    pub price: u64,
    /// Sum of satisfaction times the resolved category weight.
    pub weighted_satisfaction: f64,
    pub randle_penalty: f64,
    pub diet_bonus: f64,
    /// weighted_satisfaction + diet_bonus - randle_penalty
    pub final_score: f64,
}

impl PlanStats {
    /// Percent change of this score against a baseline order.
    ///
    /// Undefined when the baseline score is not positive.
    pub fn score_change_pct(&self, baseline: &PlanStats) -> Option<f64> {
        if baseline.final_score > 0.0 {
            Some((self.final_score - baseline.final_score) / baseline.final_score * 100.0)
        } else {
            None
        }
    }
}

/// A decoded, structurally valid order.
#[derive(Debug, Clone, Serialize)]
pub struct CandidatePlan {
    /// Selected item names, in catalog order.
    pub items: Vec<String>,
    pub stats: PlanStats,
    /// Model energy of the sample this plan was decoded from.
    pub energy: f64,
    /// Whether every resource limit holds.
    pub feasible: bool,
}

/// A plan that made the final cut, with its counter call.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlan {
    /// 1-based position.
    pub rank: usize,
    /// Phrase to say at the counter.
    pub call: String,
    #[serde(flatten)]
    pub plan: CandidatePlan,
}

/// Outcome of one optimization request.
#[derive(Debug, Clone)]
pub enum SolveResult {
    Ok {
        plans: Vec<RankedPlan>,
        /// Set when no plan honored every limit and compromise plans were returned.
        approximate: bool,
        /// Statistics of the caller's usual order, if one was given.
        usual: Option<PlanStats>,
    },
    /// No sample produced a structurally valid order.
    Infeasible,
}

impl SolveResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, SolveResult::Ok { .. })
    }

    /// Ranked plans, empty when infeasible.
    pub fn plans(&self) -> &[RankedPlan] {
        match self {
            SolveResult::Ok { plans, .. } => plans,
            SolveResult::Infeasible => &[],
        }
    }
}
