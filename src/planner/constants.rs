use crate::models::Category;

// ─────────────────────────────────────────────────────────────────────────────
// Interaction terms
// ─────────────────────────────────────────────────────────────────────────────

/// Penalty when a high-carb item meets a high-fat item (Randle effect).
pub const RANDLE_PENALTY: f64 = 50.0;

/// Bonus when a reduced-carb item meets a high-volume vegetable item.
pub const DIET_SYNERGY_BONUS: f64 = 30.0;

pub const HIGH_CARB_ITEMS: &[&str] = &["noodle-regular-300g"];
pub const HIGH_FAT_ITEMS: &[&str] = &["fat-extra", "fat-extra-extra"];
pub const REDUCED_CARB_ITEMS: &[&str] = &["noodle-half-150g"];
pub const HIGH_VOLUME_VEGETABLES: &[&str] = &["vegetable-extra", "vegetable-extra-extra"];

// ─────────────────────────────────────────────────────────────────────────────
// Constraint encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum constraint penalty strength (M).
pub const PENALTY_STRENGTH_FLOOR: f64 = 5000.0;

/// M is at least this multiple of the largest reachable objective magnitude.
pub const PENALTY_DOMINANCE: f64 = 10.0;

/// Extra calorie slack headroom above the limit.
pub const CALORIE_SLACK_MARGIN: u64 = 100;

/// Extra sodium slack headroom above the limit, in tenths of a gram.
pub const SODIUM_SLACK_MARGIN_TENTHS: u64 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Sampler defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_NUM_READS: usize = 1000;
pub const DEFAULT_NUM_SWEEPS: usize = 1000;
pub const DEFAULT_BETA_RANGE: (f64, f64) = (0.1, 5.0);

// ─────────────────────────────────────────────────────────────────────────────
// Ranking
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum number of plans returned.
pub const MAX_PLANS: usize = 3;

/// Call used when garlic, vegetables, and fat are all at the house default.
pub const DEFAULT_CALL: &str = "Sonomama de";

/// Categories that appear in the counter call, in speaking order.
pub const CALL_CATEGORIES: [Category; 3] = [Category::Garlic, Category::Vegetable, Category::Fat];

/// Item-name fragment to spoken phrase. Within a category the first match wins,
/// so longer fragments come first.
pub const CALL_PHRASES: &[(Category, &str, &str)] = &[
    (Category::Garlic, "less", "Ninniku sukuname"),
    (Category::Garlic, "normal", "Ninniku"),
    (Category::Garlic, "extra", "Ninniku mashi"),
    (Category::Vegetable, "less", "Yasai sukuname"),
    (Category::Vegetable, "extra-extra", "Yasai mashimashi"),
    (Category::Vegetable, "extra", "Yasai"),
    (Category::Fat, "extra-extra", "Abura mashimashi"),
    (Category::Fat, "extra", "Abura"),
];

/// Name fragments that make up the house default order.
pub const DEFAULT_GARLIC: &[&str] = &["none"];
pub const DEFAULT_VEGETABLE: &[&str] = &["normal"];
pub const DEFAULT_FAT: &[&str] = &["normal", "none"];

/// Whether an item name belongs to one of the listed interaction sets.
pub fn name_in(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(name))
}
