//! Session state for the signed-in user.
//!
//! There is no real authentication backend: a single hard-coded credential
//! pair signs in the demo user. Everything downstream receives the user
//! identity explicitly rather than reading ambient state.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
}

#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: RwSignal<Option<SessionUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// Validate credentials. Only the demo pair succeeds.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        if email == "test@example.com" && password == "password" {
            self.user.set(Some(SessionUser {
                id: "mock-user".to_string(),
                name: "Test User".to_string(),
                email: email.to_string(),
                image: String::new(),
            }));
            Ok(())
        } else {
            Err("Invalid email or password".to_string())
        }
    }

    pub fn sign_out(&self) {
        self.user.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Snapshot of the current user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.get()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_state() {
    provide_context(SessionState::new());
}

pub fn use_session_state() -> SessionState {
    expect_context::<SessionState>()
}
