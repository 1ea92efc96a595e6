//! Networking modules for the backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the event backend, `identity` wraps the hosted identity
//! provider, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
