//! Dashboard aggregations.
//!
//! Pure functions over the task list and the resolved favorite meals; the
//! portal assembles them into one [`Dashboard`] snapshot.

use std::collections::BTreeSet;
use std::collections::HashMap;

use chrono::NaiveDate;

use model::{Meal, Task};

/// Task counts for the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn summarize_tasks(tasks: &[Task]) -> TaskSummary {
    let completed = tasks.iter().filter(|task| task.is_finished()).count();
    TaskSummary {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
    }
}

/// One slice of the favorites breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Group favorite meals by category, largest slice first; ties break
/// alphabetically so the chart is stable across runs.
pub fn favorite_meals_by_category(favorite_meals: &[Meal]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for meal in favorite_meals {
        *counts.entry(meal.category.as_str()).or_insert(0) += 1;
    }

    let mut breakdown: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    breakdown
}

/// The days that carry at least one task (for calendar markers).
pub fn task_days(tasks: &[Task]) -> BTreeSet<NaiveDate> {
    tasks.iter().map(|task| task.date.date_naive()).collect()
}

/// Tasks scheduled on the given day, in store order.
pub fn tasks_on_day(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.date.date_naive() == day)
        .cloned()
        .collect()
}

/// Everything the dashboard shows at once.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: TaskSummary,
    pub favorite_categories: Vec<CategoryCount>,
    pub favorite_meal_count: usize,
    pub total_meal_count: usize,
    pub task_days: BTreeSet<NaiveDate>,
    pub selected_day: NaiveDate,
    pub tasks_for_day: Vec<Task>,
}
