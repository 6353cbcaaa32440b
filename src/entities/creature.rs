// 🐾 Creature Entity - one collectible creature record
//
// Identity: `id` (the dex number, unique across all generations)
// Provenance: `generation` - assigned ONCE by the catalog builder from the
// partition the record was loaded from, never changed afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// GENERATION (provenance group)
// ============================================================================

/// Source partition a creature was loaded from.
///
/// Region and generation label are both derived from the variant, so the
/// two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generation {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
    Gen8,
    Gen9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Gen1,
        Generation::Gen2,
        Generation::Gen3,
        Generation::Gen4,
        Generation::Gen5,
        Generation::Gen6,
        Generation::Gen7,
        Generation::Gen8,
        Generation::Gen9,
    ];

    /// 1-based generation number
    pub fn number(&self) -> u8 {
        match self {
            Generation::Gen1 => 1,
            Generation::Gen2 => 2,
            Generation::Gen3 => 3,
            Generation::Gen4 => 4,
            Generation::Gen5 => 5,
            Generation::Gen6 => 6,
            Generation::Gen7 => 7,
            Generation::Gen8 => 8,
            Generation::Gen9 => 9,
        }
    }

    /// Generation label ("第1世代")
    pub fn label(&self) -> &'static str {
        match self {
            Generation::Gen1 => "第1世代",
            Generation::Gen2 => "第2世代",
            Generation::Gen3 => "第3世代",
            Generation::Gen4 => "第4世代",
            Generation::Gen5 => "第5世代",
            Generation::Gen6 => "第6世代",
            Generation::Gen7 => "第7世代",
            Generation::Gen8 => "第8世代",
            Generation::Gen9 => "第9世代",
        }
    }

    /// Provenance group ("カントー地方")
    pub fn region(&self) -> &'static str {
        match self {
            Generation::Gen1 => "カントー地方",
            Generation::Gen2 => "ジョウト地方",
            Generation::Gen3 => "ホウエン地方",
            Generation::Gen4 => "シンオウ地方",
            Generation::Gen5 => "イッシュ地方",
            Generation::Gen6 => "カロス地方",
            Generation::Gen7 => "アローラ地方",
            Generation::Gen8 => "ガラル・ヒスイ地方",
            Generation::Gen9 => "パルデア地方",
        }
    }

    /// Partition file stem ("gen1")
    pub fn partition_name(&self) -> String {
        format!("gen{}", self.number())
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// RAW RECORD (as found in a source partition)
// ============================================================================

/// Record shape of the source data files, before provenance is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCreature {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
}

impl RawCreature {
    pub fn new(id: u32, name: &str, types: &[&str]) -> Self {
        RawCreature {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }
}

// ============================================================================
// CREATURE ENTITY
// ============================================================================

/// Immutable, provenance-tagged creature.
///
/// Only the catalog builder constructs these; fields are read through
/// accessors so nothing outside this crate can retag a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    id: u32,
    name: String,
    types: Vec<String>,
    generation: Generation,
}

impl Creature {
    pub(crate) fn tagged(raw: RawCreature, generation: Generation) -> Self {
        Creature {
            id: raw.id,
            name: raw.name,
            types: raw.types,
            generation,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type ids in source order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn has_type(&self, category_id: &str) -> bool {
        self.types.iter().any(|t| t == category_id)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn generation_label(&self) -> &'static str {
        self.generation.label()
    }

    pub fn region(&self) -> &'static str {
        self.generation.region()
    }

    /// Zero-padded dex number ("No.0025")
    pub fn dex_number(&self) -> String {
        format!("No.{:04}", self.id)
    }
}
