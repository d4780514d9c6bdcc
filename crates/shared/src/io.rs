use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::EnrichedArticle;

/// Where the site build expects the article data to land
pub fn default_output_path() -> PathBuf {
    PathBuf::from("src/data/qiita-articles.json")
}

/// Write the full article set to disk, replacing any previous export.
///
/// Returns the number of records written. Duplicate ids are dropped
/// (first occurrence wins) so the data file never carries the same
/// article twice.
pub fn save_articles(articles: &[EnrichedArticle], filepath: &Path) -> Result<usize> {
    let mut seen_ids = HashSet::new();
    let mut deduped: Vec<&EnrichedArticle> = Vec::with_capacity(articles.len());

    for article in articles {
        if seen_ids.insert(article.id.as_str()) {
            deduped.push(article);
        } else {
            eprintln!("⚠ Skipping duplicate article id: {}", article.id);
        }
    }

    if let Some(parent) = filepath.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let json = serde_json::to_string_pretty(&deduped).context("Failed to serialize articles")?;

    fs::write(filepath, json)
        .with_context(|| format!("Failed to write article data to {}", filepath.display()))?;

    Ok(deduped.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSummary;
    use tempfile::TempDir;

    fn summary(id: &str, tags: &[&str]) -> ArticleSummary {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Article {}", id),
            "url": format!("https://qiita.com/tasukuwatanabe/items/{}", id),
            "created_at": "2024-05-01T10:00:00+09:00",
            "updated_at": "2024-05-02T10:00:00+09:00",
            "user": {
                "id": "tasukuwatanabe",
                "profile_image_url": "https://example.com/icon.png"
            },
            "tags": tags.iter().map(|t| serde_json::json!({"name": t})).collect::<Vec<_>>(),
            "likes_count": 1,
            "body": "body"
        }))
        .unwrap()
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("src").join("data").join("out.json");

        let articles = vec![EnrichedArticle::from_summary(summary("aaa", &["go"]), None)];
        let count = save_articles(&articles, &filepath).unwrap();

        assert_eq!(count, 1);
        assert!(filepath.exists());
    }

    #[test]
    fn test_save_writes_two_space_indented_array() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let articles = vec![EnrichedArticle::from_summary(summary("aaa", &["go"]), None)];
        save_articles(&articles, &filepath).unwrap();

        let written = fs::read_to_string(&filepath).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": \"aaa\""));
    }

    #[test]
    fn test_save_empty_collection_writes_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let count = save_articles(&[], &filepath).unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read_to_string(&filepath).unwrap(), "[]");
    }

    #[test]
    fn test_save_overwrites_previous_export() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let first = vec![
            EnrichedArticle::from_summary(summary("aaa", &[]), None),
            EnrichedArticle::from_summary(summary("bbb", &[]), None),
        ];
        save_articles(&first, &filepath).unwrap();

        let second = vec![EnrichedArticle::from_summary(summary("ccc", &[]), None)];
        save_articles(&second, &filepath).unwrap();

        let parsed: Vec<EnrichedArticle> =
            serde_json::from_str(&fs::read_to_string(&filepath).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, "ccc");
    }

    #[test]
    fn test_save_drops_duplicate_ids_keeping_first() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let mut duplicate = EnrichedArticle::from_summary(summary("aaa", &[]), None);
        duplicate.title = "Duplicate of aaa".to_string();
        let articles = vec![
            EnrichedArticle::from_summary(summary("aaa", &[]), None),
            duplicate,
            EnrichedArticle::from_summary(summary("bbb", &[]), None),
        ];

        let count = save_articles(&articles, &filepath).unwrap();
        assert_eq!(count, 2);

        let parsed: Vec<EnrichedArticle> =
            serde_json::from_str(&fs::read_to_string(&filepath).unwrap()).unwrap();
        assert_eq!(parsed[0].title, "Article aaa");
        assert_eq!(parsed[1].id, "bbb");
    }

    #[test]
    fn test_save_is_byte_stable_across_runs() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let articles = vec![
            EnrichedArticle::from_summary(
                summary("aaa", &["go", "rust"]),
                Some("https://img.example.com/og.png".to_string()),
            ),
            EnrichedArticle::from_summary(summary("bbb", &[]), None),
        ];

        save_articles(&articles, &filepath).unwrap();
        let first_run = fs::read_to_string(&filepath).unwrap();

        save_articles(&articles, &filepath).unwrap();
        let second_run = fs::read_to_string(&filepath).unwrap();

        assert_eq!(first_run, second_run);
    }

    #[test]
    fn test_mixed_preview_results_export_null_and_url() {
        let temp_dir = TempDir::new().unwrap();
        let filepath = temp_dir.path().join("out.json");

        let articles = vec![
            EnrichedArticle::from_summary(
                summary("aaa", &["go"]),
                Some("https://img.example.com/og.png".to_string()),
            ),
            EnrichedArticle::from_summary(summary("bbb", &[]), None),
        ];
        save_articles(&articles, &filepath).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&filepath).unwrap()).unwrap();
        assert_eq!(parsed[0]["ogImage"], "https://img.example.com/og.png");
        assert!(parsed[1]["ogImage"].is_null());
    }
}
