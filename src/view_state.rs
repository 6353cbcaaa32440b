// 🔎 View-State Reducer - category + search + sort → visible list
//
// ViewState is three independent fields. Any combination is legal and maps
// to a defined (possibly empty) visible list:
//
//   catalog ──► category filter ──► name search (normalized) ──► stable sort
//
// `derive_visible_list` is pure. `Browser` owns the single ViewState for a
// session, applies mutations, and hands the new list to a render sink.

use crate::catalog::Catalog;
use crate::entities::{Category, CategoryRegistry, Creature};
use crate::normalize::normalize;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// STATE TYPES
// ============================================================================

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter control value: "all" or a category id
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => creature.has_type(id),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(id) => id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short label for the sort control
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "No. ↑",
            SortDirection::Descending => "No. ↓",
        }
    }
}

/// What a category change does to the current search text.
///
/// Older builds of the browser cleared the search box whenever a category
/// was picked; later builds compose the two. Both are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResetPolicy {
    #[default]
    Preserve,
    ClearOnCategoryChange,
}

/// The whole mutable session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub category: CategoryFilter,
    /// Raw user text; normalized at query time, never at storage time
    pub search_text: String,
    pub sort: SortDirection,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortDirection) -> Self {
        ViewState {
            sort,
            ..Self::default()
        }
    }

    /// True when nothing narrows the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && normalize(&self.search_text).is_empty()
    }
}

// ============================================================================
// DERIVATION
// ============================================================================

/// Derive the visible, ordered subset of `catalog` for `state`.
///
/// Returns a fresh list of references; `catalog` is never reordered.
pub fn derive_visible_list<'a>(catalog: &'a [Creature], state: &ViewState) -> Vec<&'a Creature> {
    let query = normalize(&state.search_text);

    let mut visible: Vec<&Creature> = catalog
        .iter()
        .filter(|c| state.category.matches(c))
        .filter(|c| query.is_empty() || c.name().contains(query.as_str()))
        .collect();

    // sort_by is stable
    match state.sort {
        SortDirection::Ascending => visible.sort_by(|a, b| a.id().cmp(&b.id())),
        SortDirection::Descending => visible.sort_by(|a, b| b.id().cmp(&a.id())),
    }

    visible
}

// ============================================================================
// RENDER BOUNDARY
// ============================================================================

/// Receives the freshly derived list after every successful mutation.
pub trait RenderSink {
    fn render(&mut self, state: &ViewState, visible: &[&Creature]);
}

// ============================================================================
// BROWSER (controller)
// ============================================================================

/// Owns the catalog, the category list and the session's ViewState.
pub struct Browser {
    catalog: Catalog,
    categories: CategoryRegistry,
    state: ViewState,
    initial_state: ViewState,
    search_reset: SearchResetPolicy,
    sink: Option<Box<dyn RenderSink>>,
}

impl Browser {
    pub fn new(catalog: Catalog, categories: CategoryRegistry) -> Self {
        Browser {
            catalog,
            categories,
            state: ViewState::new(),
            initial_state: ViewState::new(),
            search_reset: SearchResetPolicy::default(),
            sink: None,
        }
    }

    pub fn with_search_reset(mut self, policy: SearchResetPolicy) -> Self {
        self.search_reset = policy;
        self
    }

    /// Start (and reset back to) the given sort direction
    pub fn with_initial_sort(mut self, sort: SortDirection) -> Self {
        self.initial_state = ViewState::with_sort(sort);
        self.state = self.initial_state.clone();
        self
    }

    /// Attach a render sink; it receives the current list immediately.
    pub fn with_sink(mut self, sink: Box<dyn RenderSink>) -> Self {
        self.sink = Some(sink);
        self.notify();
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn visible_list(&self) -> Vec<&Creature> {
        derive_visible_list(self.catalog.all(), &self.state)
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.all()
    }

    pub fn category_registry(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn get_entity_by_id(&self, id: u32) -> Option<&Creature> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_reset_policy(&self) -> SearchResetPolicy {
        self.search_reset
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Switch the category filter. Unknown category ids are rejected and
    /// leave the state untouched.
    pub fn set_active_category(&mut self, filter: CategoryFilter) -> Result<()> {
        if let CategoryFilter::Only(id) = &filter {
            if !self.categories.contains(id) {
                bail!("Unknown category: {}", id);
            }
        }

        debug!(category = %filter, "category changed");
        self.state.category = filter;

        if self.search_reset == SearchResetPolicy::ClearOnCategoryChange {
            self.state.search_text.clear();
        }

        self.notify();
        Ok(())
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        debug!(search = %self.state.search_text, "search text changed");
        self.notify();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.state.sort = direction;
        debug!(sort = ?direction, "sort direction changed");
        self.notify();
    }

    pub fn toggle_sort(&mut self) {
        self.set_sort_direction(self.state.sort.toggled());
    }

    /// Back to the initial state ("all", empty search, initial sort)
    pub fn reset(&mut self) {
        self.state = self.initial_state.clone();
        debug!("view state reset");
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            let visible = derive_visible_list(self.catalog.all(), &self.state);
            sink.render(&self.state, &visible);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
