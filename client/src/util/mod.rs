//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod color;
pub mod debounce;
pub mod format;
pub mod guards;
pub mod navigation;
pub mod routes;
pub mod storage;
pub mod time;
