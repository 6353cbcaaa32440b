// Entity Models
//
// - Category: the 18 fixed types (filter controls + detail chips)
// - Creature: one catalog record, tagged with its generation at load time

pub mod category;
pub mod creature;

pub use category::{Category, CategoryRegistry};
pub use creature::{Creature, Generation, RawCreature};
