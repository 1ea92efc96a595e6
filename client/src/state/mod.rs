//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the pure session/privilege state machine and `auth_store` the
//! reactive store around it. `events` and `likes` back the home page.

pub mod auth;
pub mod auth_store;
pub mod events;
pub mod likes;
