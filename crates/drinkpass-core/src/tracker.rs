//! Session facade that routes user actions to the stores.

use drinkpass_domain::{
    normalize_length, normalize_price, CruiseConfig, JournalDraft, JournalEntry, Rating, ViewTab,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    derivation::{summarize_cruise, summarize_day, CruiseSummary, DaySummary},
    journal_store::JournalStore,
    ledger_store::{DaySnapshot, LedgerStore},
    prompt::{Confirmation, Notifier},
    CoreError,
};

pub const MISSING_PACKAGE_PRICE: &str = "Set your daily package price first!";
pub const MISSING_DRINK_PRICE: &str = "Set your typical drink price first!";

/// One tracking session: cruise setup, both stores, and the navigation state.
pub struct DrinkTracker {
    config: CruiseConfig,
    ledger: LedgerStore,
    journal: JournalStore,
    current_day: usize,
    active_tab: ViewTab,
    confirmation: Box<dyn Confirmation>,
    notifier: Box<dyn Notifier>,
}

impl DrinkTracker {
    pub fn new(
        config: CruiseConfig,
        confirmation: Box<dyn Confirmation>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            ledger: LedgerStore::with_length(config.length_days()),
            journal: JournalStore::new(),
            current_day: 1,
            active_tab: ViewTab::default(),
            config,
            confirmation,
            notifier,
        }
    }

    /// Swaps the confirmation gate, e.g. when the user turns reset prompts off.
    pub fn set_confirmation(&mut self, confirmation: Box<dyn Confirmation>) {
        self.confirmation = confirmation;
    }

    pub fn config(&self) -> &CruiseConfig {
        &self.config
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn current_day(&self) -> usize {
        self.current_day
    }

    pub fn length_days(&self) -> usize {
        self.config.length_days()
    }

    /// Applies a raw length request. Never fails; returns the stored length.
    pub fn set_cruise_length(&mut self, raw: f64) -> usize {
        let length = normalize_length(raw);
        self.config.set_length_days(length);
        if self.current_day > length {
            self.current_day = length;
        }
        self.ledger.resize(length);
        debug!(length, current_day = self.current_day, "cruise length updated");
        length
    }

    pub fn set_package_price(&mut self, raw: f64) -> f64 {
        self.config.package_price_per_day = normalize_price(raw);
        self.config.package_price_per_day
    }

    pub fn set_drink_price(&mut self, raw: f64) -> f64 {
        self.config.default_drink_price = normalize_price(raw);
        self.config.default_drink_price
    }

    /// Moves to `day`, clamped into the cruise.
    pub fn set_current_day(&mut self, day: usize) -> usize {
        self.current_day = day.clamp(1, self.length_days());
        self.current_day
    }

    pub fn next_day(&mut self) -> usize {
        self.set_current_day(self.current_day.saturating_add(1))
    }

    pub fn previous_day(&mut self) -> usize {
        self.set_current_day(self.current_day.saturating_sub(1))
    }

    /// Logs a drink at the typical drink price on the current day.
    pub fn log_drink(&mut self) -> Result<Uuid, CoreError> {
        let price = self.config.default_drink_price;
        self.log_drink_at(price)
    }

    /// Logs a drink at `price` on the current day. Both the package price and
    /// `price` must be positive; otherwise the user is alerted and nothing
    /// changes.
    pub fn log_drink_at(&mut self, price: f64) -> Result<Uuid, CoreError> {
        if !self.config.has_package_price() {
            return Err(self.reject(MISSING_PACKAGE_PRICE));
        }
        if !(price.is_finite() && price > 0.0) {
            return Err(self.reject(MISSING_DRINK_PRICE));
        }
        self.ledger.resize(self.length_days());
        self.ledger.add_drink(self.current_day, price)
    }

    /// Clears the current day after the user confirms. Returns whether the
    /// reset happened.
    pub fn reset_current_day(&mut self) -> Result<bool, CoreError> {
        let day = self.current_day;
        let prompt = format!("Reset all drinks for Day {}?", day);
        if !self.confirmation.confirm(&prompt) {
            debug!(day, "reset declined");
            return Ok(false);
        }
        self.ledger.resize(self.length_days());
        self.ledger.reset_day(day)?;
        Ok(true)
    }

    pub fn drinks_today(&self) -> DaySnapshot {
        self.ledger.drinks_for(self.current_day)
    }

    pub fn today(&self) -> DaySummary {
        summarize_day(self.current_day, &self.drinks_today(), &self.config)
    }

    pub fn day_summary(&self, day: usize) -> DaySummary {
        summarize_day(day, &self.ledger.drinks_for(day), &self.config)
    }

    pub fn cruise_summary(&self) -> CruiseSummary {
        summarize_cruise(&self.ledger, &self.config)
    }

    /// Saves a journal entry from raw form input.
    pub fn add_journal_entry(
        &mut self,
        name: &str,
        rating: Rating,
        notes: &str,
    ) -> Result<Uuid, CoreError> {
        self.journal.add_entry(name, rating, notes).map_err(|err| {
            if let CoreError::Validation(message) = &err {
                warn!(%message, "journal entry rejected");
                self.notifier.alert(message);
            }
            err
        })
    }

    /// Saves the form fields and clears them on success. A rejected draft is
    /// left as typed.
    pub fn save_journal_draft(&mut self, draft: &mut JournalDraft) -> Result<Uuid, CoreError> {
        let id = self.add_journal_entry(&draft.name, draft.rating, &draft.notes)?;
        *draft = JournalDraft::default();
        Ok(id)
    }

    pub fn journal(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    pub fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    pub fn switch_tab(&mut self, tab: ViewTab) {
        self.active_tab = tab;
    }

    fn reject(&self, message: &str) -> CoreError {
        warn!(%message, "drink rejected");
        self.notifier.alert(message);
        CoreError::Validation(message.to_string())
    }
}
