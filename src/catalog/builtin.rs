use std::sync::LazyLock;

use crate::catalog::Catalog;
use crate::models::{Category, Item};

/// The shop's menu, built once on first use.
pub static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(default_items()).expect("built-in catalog is well formed")
});

/// The built-in catalog.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Raw item list behind the built-in catalog.
pub fn default_items() -> Vec<Item> {
    use Category::*;

    vec![
        // Noodles
        Item::new("noodle-regular-300g", Noodle, 1000.0, 6.0, 700, 150.0),
        Item::new("noodle-less-200g", Noodle, 700.0, 5.0, 700, 100.0),
        Item::new("noodle-half-150g", Noodle, 550.0, 4.5, 700, 80.0),
        // Pork
        Item::new("pork-standard", Pork, 0.0, 0.0, 0, 50.0),
        Item::new("pork-extra-5", Pork, 500.0, 3.5, 150, 100.0),
        Item::new("pork-double-8", Pork, 1000.0, 7.0, 250, 160.0),
        // Vegetables
        Item::new("vegetable-less", Vegetable, 20.0, 0.0, 0, 20.0),
        Item::new("vegetable-normal", Vegetable, 40.0, 0.0, 0, 40.0),
        Item::new("vegetable-extra", Vegetable, 60.0, 0.0, 0, 60.0),
        Item::new("vegetable-extra-extra", Vegetable, 100.0, 0.0, 0, 90.0),
        // Back fat
        Item::new("fat-none", Fat, 0.0, 0.0, 0, 0.0),
        Item::new("fat-normal", Fat, 100.0, 0.2, 0, 30.0),
        Item::new("fat-extra", Fat, 270.0, 0.5, 0, 70.0),
        Item::new("fat-extra-extra", Fat, 500.0, 1.0, 0, 100.0),
        // Garlic
        Item::new("garlic-none", Garlic, 0.0, 0.0, 0, 0.0),
        Item::new("garlic-less", Garlic, 5.0, 0.0, 0, 20.0),
        Item::new("garlic-normal", Garlic, 20.0, 0.0, 0, 50.0),
        Item::new("garlic-extra", Garlic, 40.0, 0.0, 0, 80.0),
        // Options
        Item::new("soup-finish", SoupOption, 600.0, 8.0, 0, 120.0),
        Item::new("topping-raw-egg", Topping, 80.0, 0.0, 50, 20.0),
        Item::new("topping-quail-eggs-5", Topping, 100.0, 0.5, 150, 30.0),
    ]
}
