//! drinkpass-core
//!
//! The day ledger engine: per-day drink ledgers, derived package-value figures,
//! and the drink journal. Depends on drinkpass-domain. No CLI, no terminal I/O.

pub mod derivation;
pub mod error;
pub mod format;
pub mod journal_store;
pub mod ledger_store;
pub mod prompt;
pub mod tracker;

pub use derivation::*;
pub use error::CoreError;
pub use journal_store::JournalStore;
pub use ledger_store::{DaySnapshot, LedgerStore};
pub use prompt::{Confirmation, Notifier};
pub use tracker::DrinkTracker;
