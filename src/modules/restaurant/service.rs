use crate::modules::menu::repository::MenuItem;
use itertools::Itertools;

/// Distinct non-empty categories of the given items, in first-appearance order.
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.trim())
        .filter(|category| !category.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}
