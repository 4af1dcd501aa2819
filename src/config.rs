const DEFAULT_BASE_URL: &str = "https://app.viac.ch";

/// Endpoint configuration. Injected into [`crate::session::login::Login`]
/// so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
