//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, event cards and route guards while reading
//! shared state from Leptos context providers.

pub mod event_card;
pub mod footer;
pub mod guards;
pub mod header;
