//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and identity-aware components; written only by the
//! auth store when the identity provider reports a session change.
//!
//! DESIGN
//! ======
//! Privilege is resolved asynchronously after a session arrives. Every session
//! change bumps `epoch`, and a resolution is applied only while the state is
//! still `Pending` for that same epoch, so a slow claim refresh for an earlier
//! session can never leak into a later one. While pending, `is_privileged`
//! stays `false`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Whether the privilege claim for the current session is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrivilegeStatus {
    /// Known (or irrelevant because nobody is signed in).
    #[default]
    Resolved,
    /// A claim refresh for the given epoch is in flight.
    Pending(u64),
}

/// Authentication state tracking the current user, privilege, and startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_privileged: bool,
    /// `true` until the first session-change notification arrives.
    pub initializing: bool,
    pub privilege: PrivilegeStatus,
    epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, is_privileged: false, initializing: true, privilege: PrivilegeStatus::Resolved, epoch: 0 }
    }
}

impl AuthState {
    /// Startup done and privilege known: guards may decide.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.initializing && self.privilege == PrivilegeStatus::Resolved
    }

    /// Whether privilege-gated UI may be shown right now.
    #[must_use]
    pub fn shows_admin(&self) -> bool {
        self.is_settled() && self.user.is_some() && self.is_privileged
    }

    /// Record a session for `user` and mark its privilege as pending.
    ///
    /// Returns the epoch the caller must quote when resolving privilege.
    pub fn session_started(&mut self, user: User) -> u64 {
        self.epoch += 1;
        self.user = Some(user);
        self.is_privileged = false;
        self.initializing = false;
        self.privilege = PrivilegeStatus::Pending(self.epoch);
        self.epoch
    }

    /// Clear the session. Any in-flight privilege resolution becomes stale.
    pub fn signed_out(&mut self) {
        self.epoch += 1;
        self.user = None;
        self.is_privileged = false;
        self.initializing = false;
        self.privilege = PrivilegeStatus::Resolved;
    }

    /// Apply a resolved privilege claim for `epoch`.
    ///
    /// Returns `false` (and changes nothing) when the resolution is stale.
    pub fn privilege_resolved(&mut self, epoch: u64, granted: bool) -> bool {
        if self.privilege != PrivilegeStatus::Pending(epoch) || self.user.is_none() {
            return false;
        }
        self.is_privileged = granted;
        self.privilege = PrivilegeStatus::Resolved;
        true
    }
}
