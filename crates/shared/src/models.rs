use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One article as returned by the Qiita listing API
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub user: ArticleAuthor,
    pub tags: Vec<ArticleTag>,
    pub likes_count: u32,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleAuthor {
    pub id: String,
    pub profile_image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleTag {
    pub name: String,
}

/// Flat record written to the data file consumed by the site build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub user_id: String,
    pub user_icon: String,
    pub tags: Vec<String>,
    pub likes_count: u32,
    #[serde(rename = "ogImage")]
    pub og_image: Option<String>,
    pub body: String,
}

impl EnrichedArticle {
    pub fn from_summary(summary: ArticleSummary, og_image: Option<String>) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            url: summary.url,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
            user_id: summary.user.id,
            user_icon: summary.user.profile_image_url,
            tags: summary.tags.into_iter().map(|t| t.name).collect(),
            likes_count: summary.likes_count,
            og_image,
            body: summary.body,
        }
    }
}
