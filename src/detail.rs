// 🪪 Detail View - everything the detail overlay shows for one creature
//
// Header line, type chips, sprite URL and three outbound reference links.
// Pure string formatting; nothing here can fail.

use crate::entities::{CategoryRegistry, Creature};
use serde::{Deserialize, Serialize};

/// Base URLs for outbound links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTemplates {
    /// Sprite images, `{sprite_base}/{id}.png`
    pub sprite_base: String,
    /// Web search, query appended
    pub search_base: String,
    /// Wiki page, `{wiki_base}/{name}`
    pub wiki_base: String,
    /// Video search, query appended
    pub video_search_base: String,
    /// Extra words added to the web search
    pub search_suffix: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        LinkTemplates {
            sprite_base: "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon"
                .to_string(),
            search_base: "https://www.google.com/search?q=".to_string(),
            wiki_base: "https://wiki.ポケモン.com/wiki".to_string(),
            video_search_base: "https://www.youtube.com/results?search_query=".to_string(),
            search_suffix: " アニポケ 登場回".to_string(),
        }
    }
}

impl LinkTemplates {
    pub fn image_url(&self, creature: &Creature) -> String {
        format!("{}/{}.png", self.sprite_base.trim_end_matches('/'), creature.id())
    }

    pub fn search_url(&self, creature: &Creature) -> String {
        let query = format!("{}{}", creature.name(), self.search_suffix);
        format!("{}{}", self.search_base, urlencoding::encode(&query))
    }

    pub fn wiki_url(&self, creature: &Creature) -> String {
        let name = urlencoding::encode(creature.name());
        format!(
            "{}/{}#アニメにおける{}",
            self.wiki_base.trim_end_matches('/'),
            name,
            name
        )
    }

    pub fn video_url(&self, creature: &Creature) -> String {
        format!(
            "{}アニポケ+{}",
            self.video_search_base,
            urlencoding::encode(creature.name())
        )
    }
}

/// Resolved detail overlay content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    /// "第1世代（カントー地方） No.0025"
    pub info_line: String,
    pub type_ids: Vec<String>,
    pub type_labels: Vec<String>,
    pub image_url: String,
    pub search_url: String,
    pub wiki_url: String,
    pub video_url: String,
}

impl CreatureDetail {
    pub fn new(creature: &Creature, categories: &CategoryRegistry, links: &LinkTemplates) -> Self {
        CreatureDetail {
            id: creature.id(),
            name: creature.name().to_string(),
            info_line: info_line(creature),
            type_ids: creature.types().to_vec(),
            type_labels: creature
                .types()
                .iter()
                .map(|t| categories.label_for(t))
                .collect(),
            image_url: links.image_url(creature),
            search_url: links.search_url(creature),
            wiki_url: links.wiki_url(creature),
            video_url: links.video_url(creature),
        }
    }
}

pub fn info_line(creature: &Creature) -> String {
    format!(
        "{}（{}） {}",
        creature.generation_label(),
        creature.region(),
        creature.dex_number()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::entities::{Generation, RawCreature};

    fn detail_for(raw: RawCreature, generation: Generation) -> CreatureDetail {
        let categories = CategoryRegistry::with_defaults();
        let mut builder = CatalogBuilder::new(&categories);
        let id = raw.id;
        builder.add_partition(generation, vec![raw]).unwrap();
        let catalog = builder.build().unwrap();
        CreatureDetail::new(catalog.get(id).unwrap(), &categories, &LinkTemplates::default())
    }

    #[test]
    fn test_info_line_zero_pads() {
        let detail = detail_for(RawCreature::new(25, "ピカチュウ", &["electric"]), Generation::Gen1);
        assert_eq!(detail.info_line, "第1世代（カントー地方） No.0025");

        let detail = detail_for(RawCreature::new(1007, "コライドン", &["fighting", "dragon"]), Generation::Gen9);
        assert_eq!(detail.info_line, "第9世代（パルデア地方） No.1007");
    }

    #[test]
    fn test_type_labels() {
        let detail = detail_for(RawCreature::new(1, "フシギダネ", &["grass", "poison"]), Generation::Gen1);
        assert_eq!(detail.type_labels, vec!["🌿くさ".to_string(), "☠️どく".to_string()]);
        assert_eq!(detail.type_ids, vec!["grass".to_string(), "poison".to_string()]);
    }

    #[test]
    fn test_links_are_encoded() {
        let detail = detail_for(RawCreature::new(25, "ピカチュウ", &["electric"]), Generation::Gen1);

        assert_eq!(
            detail.image_url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
        );

        let encoded_name = "%E3%83%94%E3%82%AB%E3%83%81%E3%83%A5%E3%82%A6";
        assert!(detail.search_url.starts_with("https://www.google.com/search?q="));
        assert!(detail.search_url.contains(encoded_name));
        assert!(!detail.search_url.contains(' '));
        assert_eq!(
            detail.wiki_url,
            format!("https://wiki.ポケモン.com/wiki/{0}#アニメにおける{0}", encoded_name)
        );
        assert_eq!(
            detail.video_url,
            format!("https://www.youtube.com/results?search_query=アニポケ+{}", encoded_name)
        );
    }

    #[test]
    fn test_custom_sprite_base_trailing_slash() {
        let categories = CategoryRegistry::with_defaults();
        let mut builder = CatalogBuilder::new(&categories);
        builder
            .add_partition(Generation::Gen1, vec![RawCreature::new(4, "ヒトカゲ", &["fire"])])
            .unwrap();
        let catalog = builder.build().unwrap();

        let links = LinkTemplates {
            sprite_base: "https://sprites.example/".to_string(),
            ..LinkTemplates::default()
        };
        assert_eq!(links.image_url(catalog.get(4).unwrap()), "https://sprites.example/4.png");
    }
}
