//! Example: Filter and paginate a small meal catalog
//!
//! Run with: cargo run --package pipeline --example filter_catalog
//!
//! This example shows how to:
//! 1. Build a FilterPipeline from criteria
//! 2. Derive the available select options
//! 3. Compute a pagination window over the filtered result

use model::Meal;
use pipeline::filters::{MealCategoryFilter, MealSearchFilter};
use pipeline::pagination::page_window;
use pipeline::{FilterPipeline, available_categories, available_origins};

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

fn main() {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let catalog = vec![
        meal("1", "Krabby Patty", "Seafood", "American", &["Bun", "Patty", "Secret Sauce"]),
        meal("2", "Kelp Shake", "Beverage", "American", &["Kelp", "Ice"]),
        meal("3", "Coral Bits", "Side", "American", &["Coral", "Salt"]),
        meal("4", "Kelp Fries", "Side", "American", &["Kelp", "Oil"]),
        meal("5", "Seaberry Pie", "Dessert", "American", &["Seaberry", "Crust"]),
    ];

    println!("Categories: {:?}", available_categories(&catalog));
    println!("Origins:    {:?}\n", available_origins(&catalog));

    let pipeline = FilterPipeline::new()
        .add_filter(MealSearchFilter::new("kelp"))
        .add_filter(MealCategoryFilter::new("Side"));

    let filtered = pipeline.apply(catalog);
    println!("Matches for search='kelp' category='Side':");
    for meal in &filtered {
        println!("  - {} ({})", meal.name, meal.category);
    }

    match page_window(1, filtered.len(), 6) {
        Some(window) => println!("\nShowing {} to {} of {}", window.start_item, window.end_item, window.total_items),
        None => println!("\nSingle page, no pagination controls."),
    }
}
