use anyhow::{anyhow, bail};
use async_trait::async_trait;
use dioxus::logger::tracing::info;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;

use crate::api::{Member, ShortcutApi, Story, StoryQuery, StorySearchResponse};

pub const DEFAULT_API_URL: &str = "https://api.app.shortcut.com/api/v3";

const PAGE_SIZE: u32 = 25;

/// Thin client for the Shortcut REST API (v3).
#[derive(Debug, Clone)]
pub struct ShortcutClient {
    api_url: String,
    api_token: Option<String>,
}

impl ShortcutClient {
    pub fn new(api_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: api_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        info!("GET {path}");
        _get(&self.url(path), path, self.api_token.as_deref()).await
    }
}

impl Default for ShortcutClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

/// Path and query for the story search endpoint.
///
/// Without an owner the query is left empty and the search is unscoped.
pub fn stories_search_path(owner: Option<&str>) -> String {
    let query = owner.map(|o| format!("owner:{o}")).unwrap_or_default();
    let query = utf8_percent_encode(&query, NON_ALPHANUMERIC);
    format!("/search/stories?page_size={PAGE_SIZE}&query={query}")
}

#[async_trait(?Send)]
impl ShortcutApi for ShortcutClient {
    async fn get_users(&self) -> anyhow::Result<Vec<Member>> {
        self.get("/members").await
    }

    async fn fetch_stories(&self, query: StoryQuery) -> anyhow::Result<Vec<Story>> {
        let path = stories_search_path(query.owner.as_deref());
        let res: StorySearchResponse = self.get(&path).await?;
        Ok(res.data)
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn _get<T: DeserializeOwned>(
    url: &str,
    path: &str,
    token: Option<&str>,
) -> anyhow::Result<T> {
    let mut req = reqwest::Client::new()
        .get(url)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        req = req.header("Shortcut-Token", token);
    }
    let res = req.send().await?;
    let status = res.status();
    if !status.is_success() {
        bail!("Shortcut request to {path} failed: {status}");
    }
    res.json::<T>().await.map_err(|e| anyhow!("Invalid response from {path}: {e}"))
}

#[cfg(target_arch = "wasm32")]
async fn _get<T: DeserializeOwned>(
    url: &str,
    path: &str,
    token: Option<&str>,
) -> anyhow::Result<T> {
    use gloo_net::http::Request;

    let mut req = Request::get(url).header("Content-Type", "application/json");
    if let Some(token) = token {
        req = req.header("Shortcut-Token", token);
    }
    let res = req.send().await.map_err(|e| anyhow!("{e}"))?;
    if !res.ok() {
        bail!(
            "Shortcut request to {path} failed: {} {}",
            res.status(),
            res.status_text()
        );
    }
    res.json::<T>()
        .await
        .map_err(|e| anyhow!("Invalid response from {path}: {e}"))
}
