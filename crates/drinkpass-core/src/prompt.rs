//! Collaborators the engine calls into for user-facing decisions.
//!
//! Both calls are synchronous: the triggering operation waits for the answer
//! and mutates nothing until it returns.

/// Yes/no gate for destructive actions.
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Fire-and-forget channel for validation messages.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Confirms every request. Useful for scripted sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Drops alerts on the floor; the returned error still carries the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn alert(&self, _message: &str) {}
}
