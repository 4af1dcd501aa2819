use std::sync::Arc;

use reqwest::{header::HeaderMap, Client};
use reqwest_cookie_store::CookieStoreMutex;
use serde::Serialize;

use crate::config::Config;

pub mod login;

const USER_VAR: &str = "VIAC_USER";
const PASSWORD_VAR: &str = "VIAC_PASSWORD";

/// Login credentials, serialized as the JSON body of the password check.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `VIAC_USER` / `VIAC_PASSWORD`. Both must be
    /// set and non-empty; this fails before any network call is made.
    pub fn from_env() -> eyre::Result<Self> {
        let username = std::env::var(USER_VAR).unwrap_or_default();
        let password = std::env::var(PASSWORD_VAR).unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            eyre::bail!(
                "not all VIAC credentials passed in env ({}, {})",
                USER_VAR,
                PASSWORD_VAR
            );
        }
        Ok(Self { username, password })
    }
}

/// An authenticated session: the client, its cookie store, and the headers
/// carried on every request. Built by [`login::Login::login`], discarded at
/// the end of the run.
#[derive(Debug)]
pub struct Session {
    pub(crate) client: Client,
    pub(crate) cookie_store: Arc<CookieStoreMutex>,
    pub(crate) headers: HeaderMap,
    pub(crate) config: Config,
}

impl Session {
    /// Names of the unexpired cookies currently bound to the session.
    pub fn cookie_names(&self) -> Vec<String> {
        let cookie_store = self.cookie_store.lock().unwrap();
        cookie_store
            .iter_unexpired()
            .map(|c| c.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_both_vars() {
        // Single test so the env mutations don't race each other.
        std::env::set_var(USER_VAR, "user@example.com");
        std::env::set_var(PASSWORD_VAR, "hunter2");
        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.username, "user@example.com");
        assert_eq!(creds.password, "hunter2");

        std::env::remove_var(PASSWORD_VAR);
        assert!(Credentials::from_env().is_err());

        std::env::set_var(PASSWORD_VAR, "hunter2");
        std::env::set_var(USER_VAR, "");
        assert!(Credentials::from_env().is_err());

        std::env::remove_var(USER_VAR);
        std::env::remove_var(PASSWORD_VAR);
    }

    #[test]
    fn serializes_as_login_body() {
        let creds = Credentials::new("u", "p");
        let body = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "u", "password": "p"})
        );
    }
}
