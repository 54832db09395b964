#![doc(test(attr(deny(warnings))))]

//! drinkpass answers one question for a cruise passenger: did the drink
//! package pay for itself today? It wires the day ledger engine to a
//! line-oriented shell and keeps a journal of drinks worth remembering.

pub mod cli;
pub mod config;
pub mod currency;
pub mod utils;

pub use drinkpass_core as engine;
pub use drinkpass_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("drinkpass tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
