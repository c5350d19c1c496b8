// Profile edits and onboarding.
// Profile updates share insight generation with the insights module.

pub mod handlers;
pub mod models;
pub mod onboarding;
pub mod updater;
