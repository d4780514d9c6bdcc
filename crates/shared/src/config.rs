use std::env;

/// Default Qiita account to scrape when QIITA_USER_ID is not set
pub const DEFAULT_USER_ID: &str = "tasukuwatanabe";

#[derive(Debug, Clone)]
pub struct Config {
    pub user_id: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let user_id = env::var("QIITA_USER_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        // Unauthenticated requests work too, they just get a lower rate limit
        let api_key = env::var("QIITA_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self { user_id, api_key }
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/scrape-qiita/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("scrape-qiita").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
