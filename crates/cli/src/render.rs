//! Terminal rendering helpers.

use colored::Colorize;

use app::{CollectionPage, Portal};
use model::{Meal, Resident, Task};
use pipeline::{PageButton, PageWindow};

/// One resident, card style.
pub fn resident_card(resident: &Resident, is_favorite: bool) {
    let heart = if is_favorite { "♥".red().to_string() } else { String::new() };
    println!(
        "{} {} {} {}",
        resident.emoji.as_deref().unwrap_or("🧑"),
        resident.name.bold(),
        format!("<{}>", resident.email).dimmed(),
        heart
    );
    println!("   {} — {} ({})", resident.city, resident.company, resident.business);
    if !resident.catchphrase.is_empty() {
        println!("   {}", format!("\"{}\"", resident.catchphrase).italic().dimmed());
    }
}

/// One resident, single line.
pub fn resident_line(resident: &Resident) {
    println!(
        "  {} {} — {}, {}",
        format!("[{}]", resident.id).dimmed(),
        resident.name.bold(),
        resident.company,
        resident.city
    );
}

/// One meal, card style.
pub fn meal_card(meal: &Meal, is_favorite: bool) {
    let heart = if is_favorite { "♥".red().to_string() } else { String::new() };
    println!(
        "{} {} {} {}",
        format!("[{}]", meal.id).dimmed(),
        meal.name.bold(),
        format!("({} · {})", meal.category, meal.origin).cyan(),
        heart
    );
    if !meal.ingredients.is_empty() {
        println!("   {}", meal.ingredients.join(", ").dimmed());
    }
}

/// One meal, single line.
pub fn meal_line(meal: &Meal) {
    println!(
        "  {} {} — {} ({})",
        format!("[{}]", meal.id).dimmed(),
        meal.name.bold(),
        meal.category,
        meal.origin
    );
}

/// One task table row.
pub fn task_row(portal: &Portal, task: &Task) {
    let status = if task.is_finished() {
        "✓".green().to_string()
    } else {
        "○".yellow().to_string()
    };
    let finished = match task.date_finished {
        Some(when) => format!(" (finished {})", portal.format_date(when)),
        None => String::new(),
    };
    println!(
        "  {} {} {} — due {}{}",
        status,
        format!("[{}]", task.id).dimmed(),
        task.name.bold(),
        portal.format_date(task.date),
        finished.dimmed()
    );
    if let Some(description) = &task.description {
        println!("      {}", description.dimmed());
    }
}

/// A full resident page: fetch state, cards, pagination footer.
pub fn resident_page(portal: &Portal, view: &CollectionPage<Resident>) {
    if let Some(error) = &view.error {
        println!("{} {}", "✗".red(), error);
        return;
    }
    if view.total_items == 0 {
        println!("No residents match the current filters.");
        return;
    }
    for resident in &view.items {
        resident_card(resident, portal.favorites().is_favorite(&resident.id));
        println!();
    }
    if let Some(window) = &view.window {
        page_footer(window);
    }
}

/// A full meal page: fetch state, cards, pagination footer.
pub fn meal_page(portal: &Portal, view: &CollectionPage<Meal>) {
    if let Some(error) = &view.error {
        println!("{} {}", "✗".red(), error);
        return;
    }
    if view.total_items == 0 {
        println!("No meals match the current filters.");
        return;
    }
    for meal in &view.items {
        meal_card(meal, portal.favorites().is_favorite(&meal.id));
    }
    println!();
    if let Some(window) = &view.window {
        page_footer(window);
    }
}

/// "Showing X to Y of Z" plus the compressed page-button row.
pub fn page_footer(window: &PageWindow) {
    println!(
        "Showing {} to {} of {} items",
        window.start_item.to_string().bold(),
        window.end_item.to_string().bold(),
        window.total_items.to_string().bold()
    );

    let mut row = String::new();
    row.push_str(if window.has_prev { "« " } else { "  " });
    for button in &window.buttons {
        match button {
            PageButton::Page(page) if *page == window.current_page => {
                row.push_str(&format!("[{}] ", page.to_string().bold()));
            }
            PageButton::Page(page) => {
                row.push_str(&format!("{page} "));
            }
            PageButton::Ellipsis => row.push_str("… "),
        }
    }
    row.push_str(if window.has_next { "»" } else { " " });
    println!("{row}");
}
