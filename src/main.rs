// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use creature_dex::{
    Browser, BrowserConfig, Catalog, CategoryFilter, CategoryRegistry, CreatureDetail,
    Generation, SearchResetPolicy, SortDirection,
};

#[derive(Parser, Debug)]
#[command(name = "creature-dex", version, about = "Browse the creature catalog")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding gen1..gen9 partitions (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Clear the search text whenever the category changes
    #[arg(long, global = true)]
    clear_search_on_category: bool,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive card grid (default)
    Browse,
    /// Print the visible list for a filter/search/sort combination
    List {
        /// Category id or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// Name search (hiragana or katakana)
        #[arg(long, default_value = "")]
        search: String,
        /// Sort by number, highest first
        #[arg(long)]
        desc: bool,
    },
    /// Print the detail view for one creature
    Show { id: u32 },
    /// Print the category list
    Categories,
    /// Creature counts per generation
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let browser = load_browser(&config)?;

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => run_ui_mode(browser, config),
        Command::List {
            category,
            search,
            desc,
        } => run_list(browser, &category, &search, desc),
        Command::Show { id } => run_show(&browser, &config, id),
        Command::Categories => {
            run_categories(&browser);
            Ok(())
        }
        Command::Stats => {
            run_stats(&browser);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout and the TUI stay clean
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<BrowserConfig> {
    let mut config = match &cli.config {
        Some(path) => BrowserConfig::load(path)?,
        None => BrowserConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if cli.clear_search_on_category {
        config.search_reset = SearchResetPolicy::ClearOnCategoryChange;
    }

    Ok(config)
}

fn load_browser(config: &BrowserConfig) -> Result<Browser> {
    let categories = CategoryRegistry::with_defaults();
    let catalog = Catalog::load_dir(&config.data_dir, &categories)
        .with_context(|| format!("Failed to load catalog from {}", config.data_dir.display()))?;

    Ok(Browser::new(catalog, categories)
        .with_search_reset(config.search_reset)
        .with_initial_sort(config.initial_sort))
}

fn run_list(mut browser: Browser, category: &str, search: &str, desc: bool) -> Result<()> {
    browser.set_active_category(CategoryFilter::parse(category))?;
    browser.set_search_text(search);
    if desc {
        browser.set_sort_direction(SortDirection::Descending);
    }

    let visible = browser.visible_list();
    let registry = browser.category_registry();

    println!("📖 {} / {} creatures", visible.len(), browser.catalog().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if visible.is_empty() {
        println!("  (no matches)");
        return Ok(());
    }

    for creature in visible {
        let types: Vec<String> = creature.types().iter().map(|t| registry.label_for(t)).collect();
        println!(
            "  {}  {}  [{}]  {}",
            creature.dex_number(),
            creature.name(),
            types.join(" "),
            creature.generation_label()
        );
    }

    Ok(())
}

fn run_show(browser: &Browser, config: &BrowserConfig, id: u32) -> Result<()> {
    let creature = browser
        .get_entity_by_id(id)
        .with_context(|| format!("No creature with number {}", id))?;
    let detail = CreatureDetail::new(creature, browser.category_registry(), &config.links);

    println!("{}", detail.info_line);
    println!("{}", detail.name);
    println!("{}", detail.type_labels.join(" "));
    println!();
    println!("🖼️  {}", detail.image_url);
    println!("🔍 {}", detail.search_url);
    println!("📚 {}", detail.wiki_url);
    println!("▶️  {}", detail.video_url);

    Ok(())
}

fn run_categories(browser: &Browser) {
    for category in browser.categories() {
        println!("  {:<10} {}", category.id, category.display_label());
    }
}

fn run_stats(browser: &Browser) {
    let catalog = browser.catalog();

    println!("📊 Catalog: {} creatures", catalog.len());
    for generation in Generation::ALL {
        let creatures = catalog.by_generation(generation);
        let range = match (creatures.first(), creatures.last()) {
            (Some(first), Some(last)) => format!("{} - {}", first.dex_number(), last.dex_number()),
            _ => "-".to_string(),
        };
        println!(
            "  {}（{}）: {:>4}  {}",
            generation.label(),
            generation.region(),
            creatures.len(),
            range
        );
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(browser: Browser, config: BrowserConfig) -> Result<()> {
    let mut app = ui::App::new(browser, config.links);
    ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_browser: Browser, _config: BrowserConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: creature-dex list");
    std::process::exit(1);
}
