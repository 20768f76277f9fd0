use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use api_client::PortalClient;
use app::{Portal, RemoteSources};
use model::config::TABLE_ITEMS_PER_PAGE;
use model::{SortDirection, Task, TaskPatch, TaskSortKey, Theme};
use pipeline::page_window;
use stores::FileStorage;

mod interactive;
mod render;

/// Bikini Bottom Portal - resident directory, meal catalog, tasks, favorites
#[derive(Parser)]
#[command(name = "bb-portal")]
#[command(about = "Command-line client for the Bikini Bottom Portal", long_about = None)]
struct Cli {
    /// Directory where portal state is persisted
    #[arg(long, default_value = ".bb-portal")]
    data_dir: PathBuf,

    /// User-directory endpoint
    #[arg(long, default_value = api_client::DIRECTORY_ENDPOINT)]
    directory_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the resident directory
    Residents {
        /// Search name, city, and email
        #[arg(long)]
        search: Option<String>,

        /// Filter by company or line of business
        #[arg(long)]
        role: Option<String>,

        /// Page to show
        #[arg(long)]
        page: Option<usize>,

        /// Live debounced search reading queries from stdin
        #[arg(long)]
        interactive: bool,
    },

    /// Browse the meal catalog
    Meals {
        /// Search meal names and ingredients
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact category
        #[arg(long)]
        category: Option<String>,

        /// Filter by exact origin
        #[arg(long)]
        origin: Option<String>,

        /// Page to show
        #[arg(long)]
        page: Option<usize>,

        /// Live debounced search reading queries from stdin
        #[arg(long)]
        interactive: bool,
    },

    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    /// Manage the task list
    Tasks {
        #[command(subcommand)]
        command: TasksCommand,
    },

    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    /// Task summary, calendar, and favorites breakdown
    Dashboard {
        /// Day to inspect (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        day: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorite meals and residents
    List,
    /// Add or remove an id from the favorites
    Toggle { id: String },
    /// Remove every favorite
    Clear,
}

#[derive(Subcommand)]
enum TasksCommand {
    /// List tasks
    List {
        /// Sort key: name, date, or finished
        #[arg(long, default_value = "date")]
        sort: TaskSortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page to show
        #[arg(long)]
        page: Option<usize>,
    },
    /// Add a task
    Add {
        /// Task name
        #[arg(long, value_parser = non_blank)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Due day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark a task finished
    Done { id: String },
    /// Reopen a finished task
    Reopen { id: String },
    /// Edit a task's name, description, or date
    Edit {
        id: String,

        #[arg(long, value_parser = non_blank)]
        name: Option<String>,

        /// New description (pass an empty string to clear it)
        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a task
    Remove { id: String },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the active theme
    Show,
    /// Flip cupcake <-> aqua
    Toggle,
    /// Set the theme explicitly
    Set { theme: Theme },
}

/// Inline validation: a task name must contain something visible.
fn non_blank(value: &str) -> std::result::Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be blank".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let client = PortalClient::with_directory_url(&cli.directory_url)
        .context("Failed to build the HTTP client")?;
    let sources = Arc::new(RemoteSources::new(client));
    let storage = Arc::new(FileStorage::new(&cli.data_dir));
    let portal = Arc::new(Portal::new(sources.clone(), sources, storage));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Residents {
            search,
            role,
            page,
            interactive,
        } => handle_residents(portal, search, role, page, interactive).await?,
        Commands::Meals {
            search,
            category,
            origin,
            page,
            interactive,
        } => handle_meals(portal, search, category, origin, page, interactive).await?,
        Commands::Favorites { command } => handle_favorites(portal, command).await?,
        Commands::Tasks { command } => handle_tasks(&portal, command)?,
        Commands::Theme { command } => handle_theme(&portal, command)?,
        Commands::Dashboard { day } => handle_dashboard(portal, day).await?,
    }

    Ok(())
}

/// Handle the 'residents' command
async fn handle_residents(
    portal: Arc<Portal>,
    search: Option<String>,
    role: Option<String>,
    page: Option<usize>,
    interactive: bool,
) -> Result<()> {
    if let Some(search) = search {
        portal.resident_filters().set_search_text(search)?;
    }
    if let Some(role) = role {
        portal.resident_filters().set_role_filter(role)?;
    }

    if interactive {
        return interactive::resident_search(portal).await;
    }

    portal.load_residents().await;
    let view = portal.resident_page(page);
    render::resident_page(&portal, &view);
    Ok(())
}

/// Handle the 'meals' command
async fn handle_meals(
    portal: Arc<Portal>,
    search: Option<String>,
    category: Option<String>,
    origin: Option<String>,
    page: Option<usize>,
    interactive: bool,
) -> Result<()> {
    if let Some(search) = search {
        portal.meal_filters().set_search_text(search)?;
    }
    if let Some(category) = category {
        portal.meal_filters().set_category_filter(category)?;
    }
    if let Some(origin) = origin {
        portal.meal_filters().set_origin_filter(origin)?;
    }

    if interactive {
        return interactive::meal_search(portal).await;
    }

    portal.load_meals().await;

    let options = portal.meal_filter_options();
    if !options.categories.is_empty() {
        println!(
            "{} {}",
            "Categories:".dimmed(),
            options.categories.join(", ").dimmed()
        );
        println!(
            "{} {}\n",
            "Origins:   ".dimmed(),
            options.origins.join(", ").dimmed()
        );
    }

    let view = portal.meal_page(page);
    render::meal_page(&portal, &view);
    Ok(())
}

/// Handle the 'favorites' command
async fn handle_favorites(portal: Arc<Portal>, command: FavoritesCommand) -> Result<()> {
    match command {
        FavoritesCommand::List => {
            portal.load_meals().await;
            portal.load_residents().await;

            let meals = portal.favorite_meals();
            let residents = portal.favorite_residents();

            if meals.is_empty() && residents.is_empty() {
                println!("No favorites yet. Add some with 'bb-portal favorites toggle <id>'.");
                return Ok(());
            }

            if !meals.is_empty() {
                println!("{}", "Favorite meals".bold());
                for meal in &meals {
                    render::meal_line(meal);
                }
            }
            if !residents.is_empty() {
                println!("{}", "Favorite residents".bold());
                for resident in &residents {
                    render::resident_line(resident);
                }
            }
            println!(
                "\n{} favorite(s) total",
                portal.favorites().count().to_string().bold()
            );
        }
        FavoritesCommand::Toggle { id } => {
            let now_favorite = portal.favorites().toggle(&id)?;
            if now_favorite {
                println!("{} {} added to favorites", "♥".red(), id.bold());
            } else {
                println!("{} {} removed from favorites", "♡".dimmed(), id.bold());
            }
        }
        FavoritesCommand::Clear => {
            portal.favorites().clear()?;
            println!("Favorites cleared.");
        }
    }
    Ok(())
}

/// Handle the 'tasks' command
fn handle_tasks(portal: &Portal, command: TasksCommand) -> Result<()> {
    match command {
        TasksCommand::List { sort, desc, page } => {
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let tasks = portal.tasks().sorted(sort, direction);

            if tasks.is_empty() {
                println!("No tasks. Add one with 'bb-portal tasks add --name ...'.");
                return Ok(());
            }

            let window = page_window(page.unwrap_or(1), tasks.len(), TABLE_ITEMS_PER_PAGE);
            let rows = match &window {
                Some(window) => &tasks[window.slice_range()],
                None => &tasks[..],
            };
            for task in rows {
                render::task_row(portal, task);
            }
            if let Some(window) = &window {
                render::page_footer(window);
            }
        }
        TasksCommand::Add {
            name,
            description,
            date,
        } => {
            let due = date
                .unwrap_or_else(|| Utc::now().date_naive())
                .and_time(NaiveTime::MIN)
                .and_utc();
            let task = Task {
                id: mint_task_id(),
                name,
                description: description.filter(|d| !d.trim().is_empty()),
                date: due,
                date_finished: None,
            };
            let id = task.id.clone();
            portal.tasks().add_task(task)?;
            println!("{} Added task {}", "✓".green(), id.bold());
        }
        TasksCommand::Done { id } => {
            if !portal.tasks().set_finished(&id, Some(Utc::now()))? {
                bail!("Task {} not found", id);
            }
            println!("{} Task {} finished", "✓".green(), id.bold());
        }
        TasksCommand::Reopen { id } => {
            if !portal.tasks().set_finished(&id, None)? {
                bail!("Task {} not found", id);
            }
            println!("Task {} reopened", id.bold());
        }
        TasksCommand::Edit {
            id,
            name,
            description,
            date,
        } => {
            if name.is_none() && description.is_none() && date.is_none() {
                bail!("Nothing to change: pass --name, --description, or --date");
            }
            let patch = TaskPatch {
                name,
                description,
                date: date.map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            };
            if !portal.tasks().update_task(&id, patch)? {
                bail!("Task {} not found", id);
            }
            println!("{} Task {} updated", "✓".green(), id.bold());
        }
        TasksCommand::Remove { id } => {
            if !portal.tasks().remove_task(&id)? {
                bail!("Task {} not found", id);
            }
            println!("Task {} removed", id.bold());
        }
    }
    Ok(())
}

/// Handle the 'theme' command
fn handle_theme(portal: &Portal, command: ThemeCommand) -> Result<()> {
    match command {
        ThemeCommand::Show => println!("Theme: {}", portal.theme().theme().to_string().bold()),
        ThemeCommand::Toggle => {
            let theme = portal.theme().toggle()?;
            println!("Theme is now {}", theme.to_string().bold());
        }
        ThemeCommand::Set { theme } => {
            portal.theme().set(theme)?;
            println!("Theme set to {}", theme.to_string().bold());
        }
    }
    Ok(())
}

/// Handle the 'dashboard' command
async fn handle_dashboard(portal: Arc<Portal>, day: Option<NaiveDate>) -> Result<()> {
    portal.load_meals().await;
    let dashboard = portal.dashboard(day);

    println!("{}", "📊 Task Summary".bold());
    println!("  {} Total:     {}", "•".cyan(), dashboard.summary.total);
    println!("  {} Completed: {}", "•".green(), dashboard.summary.completed);
    println!("  {} Pending:   {}", "•".yellow(), dashboard.summary.pending);

    println!("\n{}", "❤️ Favorite Meals".bold());
    if dashboard.favorite_categories.is_empty() {
        println!("  No favorite meals yet. Add some from the menu!");
    } else {
        println!(
            "  {} out of {} total meals",
            dashboard.favorite_meal_count, dashboard.total_meal_count
        );
        for slice in &dashboard.favorite_categories {
            println!("  {} {}: {}", "•".red(), slice.category, slice.count);
        }
    }

    println!(
        "\n{} {}",
        "🗓".bold(),
        portal.format_date(
            dashboard
                .selected_day
                .and_time(chrono::NaiveTime::MIN)
                .and_utc()
        )
    );
    if dashboard.tasks_for_day.is_empty() {
        println!("  Nothing scheduled.");
    } else {
        for task in &dashboard.tasks_for_day {
            render::task_row(&portal, task);
        }
    }

    let marked: Vec<String> = dashboard
        .task_days
        .iter()
        .map(|day| day.to_string())
        .collect();
    if !marked.is_empty() {
        println!("\n{} {}", "Days with tasks:".dimmed(), marked.join(", ").dimmed());
    }

    Ok(())
}

/// Mint a unique task id: creation time plus a random suffix.
fn mint_task_id() -> String {
    format!(
        "{}-{:04x}",
        Utc::now().timestamp_millis(),
        rand::random::<u16>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_rejects_whitespace_only_names() {
        assert!(non_blank("Flip patties").is_ok());
        assert!(non_blank("").is_err());
        assert!(non_blank("   ").is_err());
    }

    #[test]
    fn test_cli_parses_nested_subcommands() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
