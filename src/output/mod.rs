//! Terminal output formatting
//!
//! The core emits structured results; everything the player actually
//! reads is rendered here, colored and localized.

pub mod display;
pub mod formatters;
