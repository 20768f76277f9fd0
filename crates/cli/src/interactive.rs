//! Interactive debounced search.
//!
//! Reads queries from stdin line by line and feeds them through the
//! pipeline debouncer, so pasting or rapid typing triggers one recompute
//! per quiet period instead of one per line.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use app::Portal;
use pipeline::{DEFAULT_DEBOUNCE, Debouncer};

use crate::render;

pub async fn resident_search(portal: Arc<Portal>) -> Result<()> {
    portal.load_residents().await;
    if let Some(error) = portal.residents().error() {
        println!("{} {}", "✗".red(), error);
        return Ok(());
    }

    println!(
        "{}",
        "Live resident search — type a query, blank line clears, Ctrl-D quits.".dimmed()
    );
    render::resident_page(&portal, &portal.resident_page(Some(1)));

    let initial = portal.resident_filters().criteria().search_text;
    let debouncer = Debouncer::new(initial, DEFAULT_DEBOUNCE);
    let mut updates = debouncer.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => debouncer.update(line.trim().to_string()),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let query = updates.borrow_and_update().clone();
                portal.resident_filters().set_search_text(query)?;
                render::resident_page(&portal, &portal.resident_page(Some(1)));
            }
        }
    }

    Ok(())
}

pub async fn meal_search(portal: Arc<Portal>) -> Result<()> {
    portal.load_meals().await;
    if let Some(error) = portal.meals().error() {
        println!("{} {}", "✗".red(), error);
        return Ok(());
    }

    println!(
        "{}",
        "Live meal search — type a query, blank line clears, Ctrl-D quits.".dimmed()
    );
    render::meal_page(&portal, &portal.meal_page(Some(1)));

    let initial = portal.meal_filters().criteria().search_text;
    let debouncer = Debouncer::new(initial, DEFAULT_DEBOUNCE);
    let mut updates = debouncer.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => debouncer.update(line.trim().to_string()),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let query = updates.borrow_and_update().clone();
                portal.meal_filters().set_search_text(query)?;
                render::meal_page(&portal, &portal.meal_page(Some(1)));
            }
        }
    }

    Ok(())
}
