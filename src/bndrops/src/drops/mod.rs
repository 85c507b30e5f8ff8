//! Enemy drop data model
//!
//! An item's locations map each enemy to the drop entries read for it. An
//! entry pairs a set of HP-percent labels with a set of ranks. Folding
//! merges entries whose ranks match so the wiki text lists each rank range
//! once.

mod types;

pub use types::{DropEntry, EnemyDrop, InvalidRank, ItemDropLocations, UNBANDED};
