use std::sync::Arc;

use fake_user_agent::get_safari_rua;
use reqwest::{
    header::{HeaderMap, HeaderName},
    Client, StatusCode,
};
use reqwest_cookie_store::CookieStoreMutex;

use super::{Credentials, Session};
use crate::config::Config;

const LOGIN_PATH: &str = "/external-login/public/authentication/password/check/";

/// Cookies whose values must be echoed back in a request header, with the
/// exact header name the server expects. Further site quirks are one row
/// each.
const CSRF_COOKIE_HEADERS: &[(&str, &str)] = &[("CSRFT759-S", "x-csrft759")];

/// The session bootstrapper: collects initial cookies, then exchanges
/// credentials for an authenticated cookie set via the CSRF-protected
/// password check.
pub struct Login {
    client: Client,
    headers: HeaderMap,
    cookie_store: Arc<CookieStoreMutex>,
    credentials: Credentials,
    config: Config,
}

impl Login {
    pub fn new(credentials: Credentials, config: Config) -> eyre::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, get_safari_rua().parse()?);
        headers.insert(reqwest::header::CONTENT_TYPE, "application/json".parse()?);
        let cookie_store = Arc::new(CookieStoreMutex::default());
        let client = Client::builder()
            .cookie_provider(cookie_store.clone())
            .build()?;
        Ok(Self {
            client,
            headers,
            cookie_store,
            credentials,
            config,
        })
    }

    /// GET the base URL so the server hands out initial session cookies.
    /// Unsolicited auth POSTs are rejected without them.
    async fn fetch_session_cookies(&self) -> eyre::Result<()> {
        let response = self
            .client
            .get(self.config.base_url())
            .headers(self.headers.clone())
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("could not GET cookies: bad status ({}): {}", status.as_u16(), body);
        }
        log::debug!("fetched initial session cookies");
        Ok(())
    }

    /// Copy each mapped cookie's value into its request header. A missing
    /// cookie is not an error: the header is omitted and the server decides
    /// whether to accept the request.
    fn apply_csrf_headers(&mut self) -> eyre::Result<()> {
        let cookie_store = self.cookie_store.lock().unwrap();
        for &(cookie_name, header_name) in CSRF_COOKIE_HEADERS {
            let Some(cookie) = cookie_store
                .iter_unexpired()
                .find(|c| c.name() == cookie_name)
            else {
                log::debug!("no {} cookie, skipping {} header", cookie_name, header_name);
                continue;
            };
            self.headers
                .insert(HeaderName::from_static(header_name), cookie.value().parse()?);
        }
        Ok(())
    }

    async fn check_password(&self) -> eyre::Result<()> {
        let response = self
            .client
            .post(self.config.url(LOGIN_PATH))
            .headers(self.headers.clone())
            .header("X-Same-Domain", "1")
            .json(&self.credentials)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("failed auth: bad status ({}): {}", status.as_u16(), body);
        }
        Ok(())
    }

    /// Run the handshake. On success the returned [`Session`] carries the
    /// updated cookie set from the password check.
    pub async fn login(mut self) -> eyre::Result<Session> {
        self.fetch_session_cookies().await?;
        self.apply_csrf_headers()?;
        self.check_password().await?;
        log::info!("authenticated against {}", self.config.base_url());
        Ok(Session {
            client: self.client,
            cookie_store: self.cookie_store,
            headers: self.headers,
            config: self.config,
        })
    }
}
