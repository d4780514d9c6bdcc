// Public modules
pub mod config;
pub mod io;
pub mod models;
pub mod preview;
pub mod qiita;

// Re-export commonly used types
pub use config::Config;
pub use io::{default_output_path, save_articles};
pub use models::{ArticleSummary, EnrichedArticle};
pub use preview::{extract_preview_image, PreviewResolver};
pub use qiita::QiitaClient;
