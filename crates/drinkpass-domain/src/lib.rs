//! drinkpass-domain
//!
//! Pure domain models (CruiseConfig, DrinkEntry, JournalEntry, Rating, ViewTab).
//! No I/O, no CLI, no storage. Only data types and clamping helpers.

pub mod common;
pub mod cruise;
pub mod drink;
pub mod journal;

pub use common::*;
pub use cruise::*;
pub use drink::*;
pub use journal::*;
