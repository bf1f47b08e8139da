use std::fmt;

use serde::{Deserialize, Serialize};

/// Sodium is encoded in tenths of a gram.
pub const SODIUM_SCALE: f64 = 10.0;

/// Menu category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noodle,
    Pork,
    Vegetable,
    Fat,
    Garlic,
    Topping,
    SoupOption,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Noodle,
        Category::Pork,
        Category::Vegetable,
        Category::Fat,
        Category::Garlic,
        Category::Topping,
        Category::SoupOption,
    ];

    /// Categories that need exactly one selection in a valid order.
    pub const MANDATORY: [Category; 5] = [
        Category::Noodle,
        Category::Pork,
        Category::Vegetable,
        Category::Fat,
        Category::Garlic,
    ];

    /// Whether exactly one item of this category must be chosen.
    pub const fn is_mandatory_single(self) -> bool {
        !matches!(self, Category::Topping | Category::SoupOption)
    }

    /// Preference slider that scales satisfaction for this category.
    ///
    /// Toppings and soup options share the topping slider; fat and garlic share
    /// the punch slider.
    pub const fn weight_group(self) -> WeightGroup {
        match self {
            Category::Noodle => WeightGroup::Noodle,
            Category::Pork => WeightGroup::Pork,
            Category::Vegetable => WeightGroup::Vegetable,
            Category::Fat | Category::Garlic => WeightGroup::Punch,
            Category::Topping | Category::SoupOption => WeightGroup::Topping,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Noodle => "noodle",
            Category::Pork => "pork",
            Category::Vegetable => "vegetable",
            Category::Fat => "fat",
            Category::Garlic => "garlic",
            Category::Topping => "topping",
            Category::SoupOption => "soup_option",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user-facing preference slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightGroup {
    Noodle,
    Pork,
    Vegetable,
    Punch,
    Topping,
}

impl WeightGroup {
    pub const COUNT: usize = 5;

    pub(crate) const fn index(self) -> usize {
        match self {
            WeightGroup::Noodle => 0,
            WeightGroup::Pork => 1,
            WeightGroup::Vegetable => 2,
            WeightGroup::Punch => 3,
            WeightGroup::Topping => 4,
        }
    }
}

/// A menu item with its resource costs and base satisfaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub calories: f64,
    /// Salt content in grams.
    pub sodium: f64,
    /// Price in yen.
    pub price: u32,
    pub satisfaction: f64,
}

impl Item {
    pub fn new(
        name: &str,
        category: Category,
        calories: f64,
        sodium: f64,
        price: u32,
        satisfaction: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            calories,
            sodium,
            price,
            satisfaction,
        }
    }

    /// Basic validation: finite, non-negative values.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.sodium, self.satisfaction]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
            && !self.name.trim().is_empty()
    }

    /// Sodium in tenths of a gram, the unit used by the slack encoding.
    #[inline]
    pub fn sodium_tenths(&self) -> f64 {
        (self.sodium * SODIUM_SCALE).round()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
