//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control lives in the router, not in the pages.

pub mod admin;
pub mod auth;
pub mod auth_callback;
pub mod contact;
pub mod events;
pub mod locations;
pub mod profile;
