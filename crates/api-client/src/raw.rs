//! Wire shapes of the two remote APIs and their normalization.
//!
//! Nothing outside this crate sees these types: `From` impls turn them into
//! the domain records in `model` at the client boundary.

use serde::Deserialize;

use model::config::DEFAULT_RESIDENT_EMOJI;
use model::{Meal, Resident};

// =============================================================================
// User-directory API
// =============================================================================

/// A user record as returned by the directory API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub address: RawAddress,
    pub company: RawCompany,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAddress {
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCompany {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

impl From<RawUser> for Resident {
    fn from(user: RawUser) -> Self {
        Resident {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            city: user.address.city,
            company: user.company.name,
            catchphrase: user.company.catch_phrase,
            business: user.company.bs,
            image_url: None,
            emoji: Some(DEFAULT_RESIDENT_EMOJI.to_string()),
        }
    }
}

// =============================================================================
// Recipe-search API
// =============================================================================

/// Top-level search response. `meals` is `null` when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub meals: Option<Vec<RawMeal>>,
}

/// A meal record as returned by the recipe API.
///
/// Ingredients arrive as twenty positional fields, any of which may be
/// missing, null, empty, or whitespace-only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id_meal: String,
    #[serde(rename = "strMeal")]
    pub str_meal: String,
    #[serde(rename = "strCategory")]
    pub str_category: String,
    #[serde(rename = "strArea")]
    pub str_area: String,
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: Option<String>,
    #[serde(rename = "strIngredient1")]
    pub str_ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub str_ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub str_ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub str_ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub str_ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub str_ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub str_ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub str_ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub str_ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub str_ingredient10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub str_ingredient11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub str_ingredient12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub str_ingredient13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub str_ingredient14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub str_ingredient15: Option<String>,
    #[serde(rename = "strIngredient16")]
    pub str_ingredient16: Option<String>,
    #[serde(rename = "strIngredient17")]
    pub str_ingredient17: Option<String>,
    #[serde(rename = "strIngredient18")]
    pub str_ingredient18: Option<String>,
    #[serde(rename = "strIngredient19")]
    pub str_ingredient19: Option<String>,
    #[serde(rename = "strIngredient20")]
    pub str_ingredient20: Option<String>,
}

impl RawMeal {
    /// Collapse the positional ingredient fields into an ordered list,
    /// trimming whitespace and dropping empties.
    pub fn ingredients(&self) -> Vec<String> {
        [
            &self.str_ingredient1,
            &self.str_ingredient2,
            &self.str_ingredient3,
            &self.str_ingredient4,
            &self.str_ingredient5,
            &self.str_ingredient6,
            &self.str_ingredient7,
            &self.str_ingredient8,
            &self.str_ingredient9,
            &self.str_ingredient10,
            &self.str_ingredient11,
            &self.str_ingredient12,
            &self.str_ingredient13,
            &self.str_ingredient14,
            &self.str_ingredient15,
            &self.str_ingredient16,
            &self.str_ingredient17,
            &self.str_ingredient18,
            &self.str_ingredient19,
            &self.str_ingredient20,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
    }
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let ingredients = raw.ingredients();
        Meal {
            id: raw.id_meal,
            name: raw.str_meal,
            category: raw.str_category,
            origin: raw.str_area,
            ingredients,
            image_url: raw.str_meal_thumb.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn krabby_patty_json() -> &'static str {
        r#"{
            "idMeal": "12345",
            "strMeal": "Krabby Patty",
            "strCategory": "Seafood",
            "strArea": "American",
            "strMealThumb": "https://example.com/krabby.jpg",
            "strIngredient1": "Bun",
            "strIngredient2": "Patty",
            "strIngredient3": "Lettuce",
            "strIngredient4": "Cheese",
            "strIngredient5": "Pickles",
            "strIngredient6": "Secret Sauce",
            "strIngredient7": "",
            "strIngredient8": null
        }"#
    }

    #[test]
    fn test_meal_normalization_maps_every_field() {
        let raw: RawMeal = serde_json::from_str(krabby_patty_json()).unwrap();
        let meal = Meal::from(raw);

        assert_eq!(meal.id, "12345");
        assert_eq!(meal.name, "Krabby Patty");
        assert_eq!(meal.category, "Seafood");
        assert_eq!(meal.origin, "American");
        assert_eq!(meal.image_url.as_deref(), Some("https://example.com/krabby.jpg"));
        assert_eq!(
            meal.ingredients,
            ["Bun", "Patty", "Lettuce", "Cheese", "Pickles", "Secret Sauce"]
        );
    }

    #[test]
    fn test_ingredients_drop_empty_and_whitespace_slots() {
        let raw: RawMeal = serde_json::from_str(
            r#"{
                "idMeal": "1",
                "strMeal": "Test Meal",
                "strCategory": "Test",
                "strArea": "Test",
                "strMealThumb": null,
                "strIngredient1": "Bun",
                "strIngredient2": "",
                "strIngredient3": "   ",
                "strIngredient4": "Patty"
            }"#,
        )
        .unwrap();

        assert_eq!(raw.ingredients(), ["Bun", "Patty"]);
    }

    #[test]
    fn test_ingredients_are_trimmed() {
        let raw = RawMeal {
            str_ingredient1: Some("  Bun  ".to_string()),
            str_ingredient2: Some(" Patty ".to_string()),
            str_ingredient3: Some("Lettuce".to_string()),
            ..RawMeal::default()
        };

        assert_eq!(raw.ingredients(), ["Bun", "Patty", "Lettuce"]);
    }

    #[test]
    fn test_all_twenty_ingredient_slots_are_read_in_order() {
        let mut fields = vec![
            r#""idMeal": "1""#.to_string(),
            r#""strMeal": "Super Meal""#.to_string(),
            r#""strCategory": "Main""#.to_string(),
            r#""strArea": "International""#.to_string(),
        ];
        for i in 1..=20 {
            fields.push(format!(r#""strIngredient{i}": "Ingredient{i}""#));
        }
        let json = format!("{{{}}}", fields.join(","));

        let raw: RawMeal = serde_json::from_str(&json).unwrap();
        let ingredients = raw.ingredients();

        assert_eq!(ingredients.len(), 20);
        assert_eq!(ingredients[0], "Ingredient1");
        assert_eq!(ingredients[19], "Ingredient20");
    }

    #[test]
    fn test_null_meals_decodes_to_none() {
        let body: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(body.meals.is_none());
    }

    #[test]
    fn test_user_normalization_stringifies_id_and_renames_company_fields() {
        let raw: RawUser = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "SpongeBob SquarePants",
                "email": "spongebob@bikinibottom.com",
                "username": "spongebob",
                "address": { "city": "Bikini Bottom" },
                "company": {
                    "name": "Krusty Krab",
                    "catchPhrase": "I'm ready!",
                    "bs": "fry cooking"
                }
            }"#,
        )
        .unwrap();

        let resident = Resident::from(raw);

        assert_eq!(resident.id, "1");
        assert_eq!(resident.name, "SpongeBob SquarePants");
        assert_eq!(resident.city, "Bikini Bottom");
        assert_eq!(resident.company, "Krusty Krab");
        assert_eq!(resident.catchphrase, "I'm ready!");
        assert_eq!(resident.business, "fry cooking");
        assert_eq!(resident.emoji.as_deref(), Some("🧑"));
        assert!(resident.image_url.is_none());
    }
}
