// Creature Dex - Core Library
// Catalog store, query normalizer and view-state reducer, shared by the
// TUI browser, the CLI subcommands and the tests.

pub mod entities;
pub mod catalog;
pub mod normalize;
pub mod view_state;
pub mod detail;
pub mod config;

// Re-export commonly used types
pub use entities::{
    Category, CategoryRegistry,
    Creature, Generation, RawCreature,
};
pub use catalog::{
    Catalog, CatalogBuilder,
    load_json_partition, load_csv_partition,
    parse_json_partition, parse_csv_partition,
};
pub use normalize::{normalize, is_hiragana};
pub use view_state::{
    Browser, CategoryFilter, RenderSink, SearchResetPolicy, SortDirection, ViewState,
    derive_visible_list,
};
pub use detail::{CreatureDetail, LinkTemplates};
pub use config::BrowserConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
