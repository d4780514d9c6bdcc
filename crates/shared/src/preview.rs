use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

// Checked in priority order; Qiita serves both but og:image is the canonical one
const META_SELECTORS: [&str; 2] = [
    r#"meta[property="og:image"]"#,
    r#"meta[name="twitter:image"]"#,
];

/// Pull a social preview image URL out of a page body.
///
/// Returns the content of the first matching meta tag that is non-empty
/// and parses as a URL, or None when the page advertises nothing usable.
pub fn extract_preview_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector_str in META_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        let candidate = document
            .select(&selector)
            .filter_map(|element| element.value().attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty());

        if let Some(content) = candidate {
            if Url::parse(content).is_ok() {
                return Some(content.to_string());
            }
        }
    }

    None
}

pub struct PreviewResolver {
    client: Client,
}

impl PreviewResolver {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (compatible; QiitaScraper/1.0)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch an article page and resolve its preview image.
    ///
    /// Any failure (network, HTTP status, missing tags) degrades to None
    /// so one broken article never takes down the whole run.
    pub async fn fetch_preview_image(&self, article_url: &str) -> Option<String> {
        match self.try_fetch(article_url).await {
            Ok(image) => image,
            Err(e) => {
                eprintln!("⚠ Failed to resolve preview image for {}: {:#}", article_url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, article_url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(article_url)
            .send()
            .await
            .context("Failed to send HTTP request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error: {}", status);
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(extract_preview_image(&html))
    }
}
