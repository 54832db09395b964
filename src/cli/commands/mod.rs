pub mod config;
pub mod journal;
pub mod system;
pub mod tracker;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in system::definitions()
        .into_iter()
        .chain(tracker::definitions())
        .chain(journal::definitions())
        .chain(config::definitions())
    {
        registry.register(entry);
    }
}
