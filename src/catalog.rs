// 📚 Catalog Store - merge the nine generation partitions into one list
//
// Load-time transform:
//   partition file → RawCreature → validated, provenance-tagged Creature
//
// Every record is checked here (unique id, non-empty name, known types) so
// nothing downstream has to second-guess the data.

use crate::entities::{CategoryRegistry, Creature, Generation, RawCreature};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

/// Separator for the `types` column in CSV partitions ("grass|poison")
pub const CSV_TYPE_SEPARATOR: char = '|';

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable, merged list of creatures in load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    creatures: Vec<Creature>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Empty catalog (valid - renders as "no results")
    pub fn empty() -> Self {
        Catalog {
            creatures: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Load `gen1`..`gen9` partitions from a directory.
    ///
    /// Each partition is `genN.json` or `genN.csv`. Missing partitions are
    /// treated as empty.
    pub fn load_dir(dir: &Path, categories: &CategoryRegistry) -> Result<Self> {
        if !dir.is_dir() {
            bail!("Catalog directory not found: {}", dir.display());
        }

        let mut builder = CatalogBuilder::new(categories);

        for generation in Generation::ALL {
            let stem = generation.partition_name();
            let json_path = dir.join(format!("{}.json", stem));
            let csv_path = dir.join(format!("{}.csv", stem));

            let records = if json_path.is_file() {
                load_json_partition(&json_path)?
            } else if csv_path.is_file() {
                load_csv_partition(&csv_path)?
            } else {
                warn!(partition = %stem, dir = %dir.display(), "partition file missing, treating as empty");
                Vec::new()
            };

            builder.add_partition(generation, records)?;
        }

        builder.build()
    }

    /// All creatures in load order
    pub fn all(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.index.get(&id).map(|&i| &self.creatures[i])
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn by_generation(&self, generation: Generation) -> Vec<&Creature> {
        self.creatures
            .iter()
            .filter(|c| c.generation() == generation)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// CATALOG BUILDER
// ============================================================================

/// Validating assembler: add one partition per generation, then `build()`.
#[derive(Debug)]
pub struct CatalogBuilder<'a> {
    categories: &'a CategoryRegistry,
    creatures: Vec<Creature>,
    seen: HashMap<u32, Generation>,
    partitions: Vec<Generation>,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(categories: &'a CategoryRegistry) -> Self {
        CatalogBuilder {
            categories,
            creatures: Vec::new(),
            seen: HashMap::new(),
            partitions: Vec::new(),
        }
    }

    /// Tag and validate every record of one partition.
    ///
    /// Fails on the first invalid record; records of the failing partition
    /// are not kept.
    pub fn add_partition(
        &mut self,
        generation: Generation,
        records: Vec<RawCreature>,
    ) -> Result<&mut Self> {
        if self.partitions.contains(&generation) {
            bail!("Partition {} added twice", generation.partition_name());
        }

        let mut staged = Vec::with_capacity(records.len());
        let mut staged_ids = HashSet::new();

        for raw in records {
            self.validate(&raw, generation)?;
            if !staged_ids.insert(raw.id) {
                bail!(
                    "Duplicate creature id {} within partition {}",
                    raw.id,
                    generation.partition_name()
                );
            }
            staged.push(Creature::tagged(raw, generation));
        }

        debug!(
            partition = %generation.partition_name(),
            count = staged.len(),
            "partition tagged"
        );

        for creature in &staged {
            self.seen.insert(creature.id(), generation);
        }
        self.creatures.extend(staged);
        self.partitions.push(generation);

        Ok(self)
    }

    fn validate(&self, raw: &RawCreature, generation: Generation) -> Result<()> {
        let partition = generation.partition_name();

        if raw.id == 0 {
            bail!("Creature id must be positive (partition {})", partition);
        }

        if let Some(other) = self.seen.get(&raw.id) {
            bail!(
                "Duplicate creature id {} in partitions {} and {}",
                raw.id,
                other.partition_name(),
                partition
            );
        }

        if raw.name.trim().is_empty() {
            bail!("Creature {} has an empty name (partition {})", raw.id, partition);
        }

        if raw.types.is_empty() {
            bail!("Creature {} ({}) has no types", raw.id, raw.name);
        }

        for (i, type_id) in raw.types.iter().enumerate() {
            if !self.categories.contains(type_id) {
                bail!(
                    "Creature {} ({}) has unknown type '{}'",
                    raw.id,
                    raw.name,
                    type_id
                );
            }
            if raw.types[..i].contains(type_id) {
                bail!(
                    "Creature {} ({}) lists type '{}' twice",
                    raw.id,
                    raw.name,
                    type_id
                );
            }
        }

        Ok(())
    }

    pub fn build(self) -> Result<Catalog> {
        let index = self
            .creatures
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), i))
            .collect();

        info!(
            creatures = self.creatures.len(),
            partitions = self.partitions.len(),
            "catalog assembled"
        );

        Ok(Catalog {
            creatures: self.creatures,
            index,
        })
    }
}

// ============================================================================
// PARTITION LOADERS
// ============================================================================

/// JSON partition: array of `{ "id", "name", "types" }`
pub fn load_json_partition(path: &Path) -> Result<Vec<RawCreature>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read partition {}", path.display()))?;

    parse_json_partition(&content)
        .with_context(|| format!("Failed to parse partition {}", path.display()))
}

pub fn parse_json_partition(content: &str) -> Result<Vec<RawCreature>> {
    let records: Vec<RawCreature> = serde_json::from_str(content)?;
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    types: String,
}

impl From<CsvRow> for RawCreature {
    fn from(row: CsvRow) -> Self {
        RawCreature {
            id: row.id,
            name: row.name,
            types: row
                .types
                .split(CSV_TYPE_SEPARATOR)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// CSV partition: header `id,name,types`, types separated by `|`
pub fn load_csv_partition(path: &Path) -> Result<Vec<RawCreature>> {
    let rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV partition {}", path.display()))?;

    read_csv_rows(rdr).with_context(|| format!("Failed to parse partition {}", path.display()))
}

pub fn parse_csv_partition(content: &str) -> Result<Vec<RawCreature>> {
    read_csv_rows(csv::Reader::from_reader(content.as_bytes()))
}

fn read_csv_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<RawCreature>> {
    let mut records = Vec::new();

    for (line, result) in rdr.deserialize::<CsvRow>().enumerate() {
        // +2: header line, 1-based
        let row = result.with_context(|| format!("Failed to deserialize row at line {}", line + 2))?;
        records.push(row.into());
    }

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
