//! Filters over the meal catalog.

use crate::traits::Filter;
use model::Meal;

/// Free-text search over a meal's name and ingredient list.
///
/// Case-insensitive substring match; a meal passes if the query occurs in
/// its name or in any single ingredient.
pub struct MealSearchFilter {
    query: String,
}

impl MealSearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl Filter<Meal> for MealSearchFilter {
    fn name(&self) -> &str {
        "MealSearchFilter"
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    fn matches(&self, meal: &Meal) -> bool {
        meal.name.to_lowercase().contains(&self.query)
            || meal
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&self.query))
    }
}

/// Exact, case-sensitive match on a meal's category.
pub struct MealCategoryFilter {
    category: String,
}

impl MealCategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter<Meal> for MealCategoryFilter {
    fn name(&self) -> &str {
        "MealCategoryFilter"
    }

    fn is_active(&self) -> bool {
        !self.category.is_empty()
    }

    fn matches(&self, meal: &Meal) -> bool {
        meal.category == self.category
    }
}

/// Exact, case-sensitive match on a meal's origin.
pub struct MealOriginFilter {
    origin: String,
}

impl MealOriginFilter {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl Filter<Meal> for MealOriginFilter {
    fn name(&self) -> &str {
        "MealOriginFilter"
    }

    fn is_active(&self) -> bool {
        !self.origin.is_empty()
    }

    fn matches(&self, meal: &Meal) -> bool {
        meal.origin == self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, name: &str, category: &str, origin: &str, ingredients: &[&str]) -> Meal {
        Meal {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            origin: origin.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            image_url: None,
        }
    }

    fn catalog() -> Vec<Meal> {
        vec![
            meal("1", "Krabby Patty", "Seafood", "American", &["Bun", "Patty", "Secret Sauce"]),
            meal("2", "Kelp Shake", "Beverage", "American", &["Kelp", "Ice"]),
            meal("3", "Coral Bits", "Side", "Bikini Bottom", &["Coral", "Salt"]),
        ]
    }

    #[test]
    fn test_search_matches_name() {
        let filtered = MealSearchFilter::new("krabby").apply(catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_search_matches_any_ingredient() {
        let filtered = MealSearchFilter::new("secret sauce").apply(catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filtered = MealSearchFilter::new("KELP").apply(catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let exact = MealCategoryFilter::new("Seafood").apply(catalog());
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id, "1");

        let wrong_case = MealCategoryFilter::new("seafood").apply(catalog());
        assert!(wrong_case.is_empty(), "category equality is case-sensitive");
    }

    #[test]
    fn test_origin_match_is_exact() {
        let filtered = MealOriginFilter::new("American").apply(catalog());
        assert_eq!(filtered.len(), 2);

        let none = MealOriginFilter::new("Ameri").apply(catalog());
        assert!(none.is_empty(), "origin is not a substring match");
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert_eq!(MealSearchFilter::new("").apply(catalog()).len(), 3);
        assert_eq!(MealCategoryFilter::new("").apply(catalog()).len(), 3);
        assert_eq!(MealOriginFilter::new("").apply(catalog()).len(), 3);
    }
}
