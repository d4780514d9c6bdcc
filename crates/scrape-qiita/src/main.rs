use anyhow::{Context, Result};
use shared::{Config, EnrichedArticle, PreviewResolver, QiitaClient};
use std::io::{self as stdio, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    println!("📚 Fetching Qiita articles for {}...", config.user_id);
    let qiita_client = QiitaClient::new(config.api_key.clone())?;
    let summaries = match qiita_client.fetch_articles(&config.user_id).await {
        Ok(summaries) => summaries,
        Err(e) => {
            eprintln!(
                "⚠ Listing failed for {}, exporting empty set: {:#}",
                config.user_id, e
            );
            Vec::new()
        }
    };
    println!("✓ Found {} articles", summaries.len());

    println!("🌐 Resolving preview images...");
    let resolver = PreviewResolver::new()?;

    let mut articles: Vec<EnrichedArticle> = Vec::with_capacity(summaries.len());
    // One request at a time; Qiita throttles page fetches that arrive in bursts
    for summary in summaries {
        let og_image = resolver.fetch_preview_image(&summary.url).await;
        articles.push(EnrichedArticle::from_summary(summary, og_image));
        eprint!(".");
        let _ = stdio::stderr().flush();
    }
    eprintln!();

    let resolved_count = articles.iter().filter(|a| a.og_image.is_some()).count();
    println!(
        "✓ Resolved preview images for {}/{} articles",
        resolved_count,
        articles.len()
    );

    let output_path = shared::default_output_path();
    let saved_count = shared::save_articles(&articles, &output_path)
        .context("Failed to export article data")?;

    println!(
        "✅ Saved {} Qiita articles to {}",
        saved_count,
        output_path.display()
    );

    Ok(())
}
