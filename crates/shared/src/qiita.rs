use anyhow::{Context, Result};
use reqwest::Client;

use crate::models::ArticleSummary;

const QIITA_API_BASE: &str = "https://qiita.com/api/v2";

// The site shows everything on one page; 100 covers the account for now
const PER_PAGE: u32 = 100;
const PAGE: u32 = 1;

/// Qiita account names are ASCII alphanumerics plus '-' and '_'
pub fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub struct QiitaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl QiitaClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(QIITA_API_BASE, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub async fn fetch_articles(&self, user_id: &str) -> Result<Vec<ArticleSummary>> {
        if !is_valid_user_id(user_id) {
            anyhow::bail!("Invalid Qiita user id: {:?}", user_id);
        }

        let url = format!(
            "{}/users/{}/items?per_page={}&page={}",
            self.base_url,
            urlencoding::encode(user_id),
            PER_PAGE,
            PAGE
        );

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request
            .send()
            .await
            .context("Failed to fetch article list from Qiita")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Qiita API returned error: {} - {}", status, error_text);
        }

        response
            .json::<Vec<ArticleSummary>>()
            .await
            .context("Failed to parse Qiita API response")
    }
}
