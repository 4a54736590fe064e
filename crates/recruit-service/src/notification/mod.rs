//! Confirmation mail side effect.

pub mod notifier;

pub use notifier::ConfirmationNotifier;
