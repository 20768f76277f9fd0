//! Integration tests for the pipeline.
//!
//! These tests verify that filtering, option derivation, memoization, and
//! pagination work together in a realistic scenario.

use model::Meal;
use pipeline::filters::*;
use pipeline::pagination::page_window;
use pipeline::{CachedView, FilterPipeline, available_categories, available_origins};

fn create_test_catalog() -> Vec<Meal> {
    let mut catalog = Vec::new();

    // A mix of categories and origins, 60 meals total so pagination has
    // something to chew on.
    for i in 0..60 {
        let (category, origin) = match i % 4 {
            0 => ("Seafood", "American"),
            1 => ("Beverage", "American"),
            2 => ("Side", "Japanese"),
            _ => ("Dessert", "Unknown"),
        };
        catalog.push(Meal {
            id: i.to_string(),
            name: if i % 2 == 0 {
                format!("Krabby Special {i}")
            } else {
                format!("Galley Grub {i}")
            },
            category: category.to_string(),
            origin: origin.to_string(),
            ingredients: vec!["Kelp".to_string(), format!("Ingredient {}", i % 5)],
            image_url: None,
        });
    }

    catalog
}

#[test]
fn test_filtered_result_is_a_subset_by_id() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::new()
        .add_filter(MealSearchFilter::new("krabby"))
        .add_filter(MealCategoryFilter::new("Seafood"));

    let filtered = pipeline.apply(catalog.clone());

    assert!(!filtered.is_empty());
    for meal in &filtered {
        assert!(
            catalog.iter().any(|m| m.id == meal.id),
            "filtered item {} must come from the input",
            meal.id
        );
    }
}

#[test]
fn test_all_empty_criteria_keep_the_whole_catalog() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::new()
        .add_filter(MealSearchFilter::new(""))
        .add_filter(MealCategoryFilter::new(""))
        .add_filter(MealOriginFilter::new(""));

    let filtered = pipeline.apply(catalog.clone());
    assert_eq!(filtered, catalog);
}

#[test]
fn test_options_come_from_the_unfiltered_catalog() {
    let catalog = create_test_catalog();

    assert_eq!(
        available_categories(&catalog),
        ["Beverage", "Dessert", "Seafood", "Side"]
    );
    assert_eq!(available_origins(&catalog), ["American", "Japanese", "Unknown"]);
}

#[test]
fn test_memoized_view_with_pagination_over_the_filtered_set() {
    let catalog = create_test_catalog();
    let mut view: CachedView<Meal> = CachedView::new();
    let mut computations = 0;

    let criteria = ["krabby", "", ""];
    let compute = |computations: &mut usize, catalog: &[Meal]| {
        *computations += 1;
        FilterPipeline::new()
            .add_filter(MealSearchFilter::new("krabby"))
            .apply(catalog.to_vec())
    };

    let filtered = view.get_or_compute(1, &criteria, || compute(&mut computations, &catalog));
    assert_eq!(filtered.len(), 30, "every even-numbered meal is a Krabby Special");

    // 30 filtered items at 6 per page: 5 pages, the third spans 13..18.
    let window = page_window(3, filtered.len(), 6).expect("five pages need controls");
    assert_eq!(window.total_pages, 5);
    assert_eq!(window.start_item, 13);
    assert_eq!(window.end_item, 18);
    let page: Vec<&Meal> = filtered[window.slice_range()].iter().collect();
    assert_eq!(page.len(), 6);

    // Unchanged inputs: the pipeline must not run again.
    let again = view.get_or_compute(1, &criteria, || compute(&mut computations, &catalog));
    assert_eq!(computations, 1);
    assert!(std::sync::Arc::ptr_eq(&filtered, &again));
}

#[test]
fn test_search_and_selects_compose() {
    let catalog = create_test_catalog();

    // "krabby" keeps even ids; Seafood keeps i % 4 == 0. Intersection:
    // multiples of 4.
    let filtered = FilterPipeline::new()
        .add_filter(MealSearchFilter::new("krabby"))
        .add_filter(MealCategoryFilter::new("Seafood"))
        .add_filter(MealOriginFilter::new("American"))
        .apply(catalog);

    assert_eq!(filtered.len(), 15);
    assert!(filtered.iter().all(|meal| meal.category == "Seafood"));
    assert!(filtered.iter().all(|meal| meal.name.contains("Krabby")));
}
