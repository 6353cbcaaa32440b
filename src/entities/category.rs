// 🏷️ Category Entity - the 18 fixed creature types
//
// "Category id is IDENTITY (used for filtering), label is a VALUE (used for display)"
//
// Used in two places:
// - Filter controls (one button per category, plus "all")
// - Detail view (resolve a creature's type ids into human-readable chips)

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

/// One filterable type a creature may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g., "grass") - referenced by creature records
    pub id: String,

    /// Display name (e.g., "くさ")
    pub name: String,

    /// Icon shown in front of the name (e.g., "🌿")
    pub icon: String,

    /// Chip color for UI (e.g., "#78C850")
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Button/chip text: icon followed by name ("🌿くさ")
    pub fn display_label(&self) -> String {
        format!("{}{}", self.icon, self.name)
    }

    /// Parse `color` ("#RRGGBB") into RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

// ============================================================================
// CATEGORY REGISTRY
// ============================================================================

/// Registry of all known categories.
///
/// Fixed at process start and read-only afterwards. Order is the order the
/// filter controls are shown in.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        CategoryRegistry {
            categories: Vec::new(),
        }
    }

    /// Create registry with the 18 default types pre-loaded
    pub fn with_defaults() -> Self {
        let mut registry = CategoryRegistry::new();
        registry.register_default_categories();
        registry
    }

    fn register_default_categories(&mut self) {
        let defaults = [
            ("grass", "くさ", "🌿", "#78C850"),
            ("fire", "ほのお", "🔥", "#F08030"),
            ("water", "みず", "💧", "#6890F0"),
            ("electric", "でんき", "⚡", "#F8D030"),
            ("normal", "ノーマル", "⚪", "#A8A878"),
            ("ice", "こおり", "❄️", "#98D8D8"),
            ("fighting", "かくとう", "👊", "#C03028"),
            ("poison", "どく", "☠️", "#A040A0"),
            ("ground", "じめん", "⛰️", "#E0C068"),
            ("flying", "ひこう", "🕊️", "#A890F0"),
            ("psychic", "エスパー", "🔮", "#F85888"),
            ("bug", "むし", "🐞", "#A8B820"),
            ("rock", "いわ", "💎", "#B8A038"),
            ("ghost", "ゴースト", "👻", "#705898"),
            ("dragon", "ドラゴン", "🐲", "#7038F8"),
            ("dark", "あく", "🌙", "#705848"),
            ("steel", "はがね", "⚙️", "#B8B8D0"),
            ("fairy", "フェアリー", "✨", "#EE99AC"),
        ];

        for (id, name, icon, color) in defaults {
            self.register(Category::new(id, name, icon, color));
        }
    }

    /// Register a category. Re-registering an existing id replaces it in place.
    pub fn register(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// Find category by id
    pub fn find_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Display label for a type id, falling back to the raw id when unknown
    pub fn label_for(&self, id: &str) -> String {
        self.find_by_id(id)
            .map(Category::display_label)
            .unwrap_or_else(|| id.to_string())
    }

    /// All categories in display order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn count(&self) -> usize {
        self.categories.len()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_label() {
        let category = Category::new("fire", "ほのお", "🔥", "#F08030");
        assert_eq!(category.display_label(), "🔥ほのお");
    }

    #[test]
    fn test_category_rgb() {
        let category = Category::new("fire", "ほのお", "🔥", "#F08030");
        assert_eq!(category.rgb(), Some((0xF0, 0x80, 0x30)));

        let broken = Category::new("x", "x", "", "red");
        assert_eq!(broken.rgb(), None);
    }

    #[test]
    fn test_category_registry_initialization() {
        let registry = CategoryRegistry::with_defaults();

        assert_eq!(registry.count(), 18);

        let ids: Vec<&str> = registry.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"grass"));
        assert_eq!(ids.last(), Some(&"fairy"));
        assert!(ids.contains(&"electric"));
        assert!(ids.contains(&"dragon"));
    }

    #[test]
    fn test_category_registry_find() {
        let registry = CategoryRegistry::with_defaults();

        let psychic = registry.find_by_id("psychic");
        assert!(psychic.is_some());
        assert_eq!(psychic.unwrap().name, "エスパー");

        assert!(registry.find_by_id("shadow").is_none());
        assert!(!registry.contains("shadow"));
    }

    #[test]
    fn test_label_for_falls_back_to_raw_id() {
        let registry = CategoryRegistry::with_defaults();

        assert_eq!(registry.label_for("ghost"), "👻ゴースト");
        assert_eq!(registry.label_for("stellar"), "stellar");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = CategoryRegistry::with_defaults();
        registry.register(Category::new("fire", "炎", "🔥", "#FF0000"));

        assert_eq!(registry.count(), 18);
        assert_eq!(registry.find_by_id("fire").unwrap().name, "炎");
        assert_eq!(registry.all()[1].id, "fire");
    }
}
