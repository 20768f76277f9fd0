//! Available-options derivation for select-style filters.
//!
//! Options always come from the *unfiltered* collection: narrowing the
//! catalog by one criterion must not shrink the choices offered for
//! another.

use std::collections::BTreeSet;

use model::Meal;

/// Distinct categories present in the catalog, sorted ascending.
pub fn available_categories(meals: &[Meal]) -> Vec<String> {
    distinct(meals.iter().map(|meal| meal.category.as_str()))
}

/// Distinct origins present in the catalog, sorted ascending.
pub fn available_origins(meals: &[Meal]) -> Vec<String> {
    distinct(meals.iter().map(|meal| meal.origin.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, category: &str, origin: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: format!("Meal {id}"),
            category: category.to_string(),
            origin: origin.to_string(),
            ingredients: Vec::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_categories_are_sorted_and_deduplicated() {
        let meals = vec![
            meal("1", "Seafood", "American"),
            meal("2", "Beverage", "American"),
            meal("3", "Seafood", "Japanese"),
        ];

        assert_eq!(available_categories(&meals), ["Beverage", "Seafood"]);
        assert_eq!(available_origins(&meals), ["American", "Japanese"]);
    }

    #[test]
    fn test_empty_catalog_yields_no_options() {
        assert!(available_categories(&[]).is_empty());
        assert!(available_origins(&[]).is_empty());
    }
}
