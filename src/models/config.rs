//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::page::DEFAULT_PAGE_SIZE;
use crate::domain::types::PageSize;

fn default_avatar_base_url() -> String {
    "http://localhost:3005/".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Cookie signing key for flash messages; at least 64 bytes.
    pub secret: String,
    /// Base URL of the remote user API, e.g. `http://localhost:3005`.
    pub api_base_url: String,
    /// Bearer token sent with every backend request.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Prefix prepended to relative avatar paths.
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Ask for confirmation before freezing an account.
    #[serde(default)]
    pub confirm_freeze: bool,
}

impl ServerConfig {
    /// Configured default page size; zero falls back to the built-in default.
    pub fn default_page_size(&self) -> PageSize {
        PageSize::new(self.default_page_size)
            .or_else(|_| PageSize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(PageSize::MIN)
    }

    /// Page sizes offered by the pager, always including the default one.
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|size| *size > 0)
            .collect();
        options.push(self.default_page_size().get());
        options.sort_unstable();
        options.dedup();
        options
    }
}
