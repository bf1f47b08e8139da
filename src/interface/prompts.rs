use dialoguer::{Confirm, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{OrderError, Result};
use crate::models::Category;

/// Minimum similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest catalog item name to an unknown input, if any is close enough.
pub fn suggest_item_name<'c>(catalog: &'c Catalog, input: &str) -> Option<&'c str> {
    let needle = input.to_lowercase();
    catalog
        .items()
        .iter()
        .map(|i| (i.name.as_str(), jaro_winkler(&i.key(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

/// Parse a comma-separated usual order, resolving names case-insensitively.
///
/// Unknown names fail with a "did you mean" hint when a close match exists.
pub fn parse_usual_order(catalog: &Catalog, input: &str) -> Result<Vec<String>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| match catalog.get_item(name) {
            Some(item) => Ok(item.name.clone()),
            None => Err(OrderError::ItemNotFound(match suggest_item_name(catalog, name) {
                Some(hint) => format!("{} (did you mean '{}'?)", name, hint),
                None => name.to_string(),
            })),
        })
        .collect()
}

/// Ask for the usual order: one pick per mandatory category, then any options.
pub fn prompt_usual_order(catalog: &Catalog) -> Result<Vec<String>> {
    let mut order = Vec::new();

    for category in Category::MANDATORY {
        let names: Vec<&str> = catalog.items_in(category).map(|i| i.name.as_str()).collect();
        let selection = Select::new()
            .with_prompt(format!("Your usual {}", category))
            .items(&names)
            .default(0)
            .interact()?;
        order.push(names[selection].to_string());
    }

    let options: Vec<&str> = catalog
        .items()
        .iter()
        .filter(|i| !i.category.is_mandatory_single())
        .map(|i| i.name.as_str())
        .collect();

    if !options.is_empty() {
        let picked = MultiSelect::new()
            .with_prompt("Your usual options (space to toggle)")
            .items(&options)
            .interact()?;
        order.extend(picked.into_iter().map(|i| options[i].to_string()));
    }

    Ok(order)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
