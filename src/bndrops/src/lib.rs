//! # bndrops
//!
//! Mega Man Battle Network enemy drop tables: parsing, HP-band folding, and
//! reconciliation of paired game versions into wiki chip-location text.
//!
//! ## Example
//!
//! ```no_run
//! use bndrops::{GameDropTable, GamesConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let games = GamesConfig::presets();
//! let bn6 = GameDropTable::from_config(games.get("bn6")?, Path::new("data"))?;
//!
//! if let Some(text) = bn6.find_chip("Cannon", "A")? {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cursor;
pub mod drops;
pub mod error;
pub mod game;
pub mod rank;
pub mod table;

#[doc(inline)]
pub use config::{GameConfig, GamesConfig, TableConfig};
#[doc(inline)]
pub use cursor::LineCursor;
#[doc(inline)]
pub use drops::{DropEntry, EnemyDrop, ItemDropLocations, UNBANDED};
#[doc(inline)]
pub use error::{DropTableError, Result};
#[doc(inline)]
pub use game::{GameDropTable, HpBandNames, HpBandPreset, VersionedTable};
#[doc(inline)]
pub use table::{enemy_roster, DropTable, EnemyRoster, IgnoredEnemies};
