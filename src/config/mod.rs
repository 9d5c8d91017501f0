// src/config/mod.rs
// All values load from the environment (.env supported), with defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AulaConfig {
    // ── Gemini Configuration
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub gemini_api_key: String,
    pub gemini_timeout: u64,

    // ── Chat Settings
    pub chat_history_cap: usize,

    // ── Dashboard Profile
    pub user_first_name: String,
    pub user_last_name: String,

    // ── Content Configuration
    pub content_path: Option<String>,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing inline comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl AulaConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com".to_string(),
            ),
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-2.5-flash".to_string()),
            // Absence is not validated here: a missing key surfaces as a failed
            // service call, collapsed at the completion boundary.
            gemini_api_key: env_var_or("GEMINI_API_KEY", String::new()),
            gemini_timeout: env_var_or("AULA_GEMINI_TIMEOUT", 60),
            chat_history_cap: env_var_or("AULA_CHAT_HISTORY_CAP", 64),
            user_first_name: env_var_or("AULA_USER_FIRST_NAME", "Docente".to_string()),
            user_last_name: env_var_or("AULA_USER_LAST_NAME", "UNPilar".to_string()),
            content_path: std::env::var("AULA_CONTENT_PATH").ok(),
            host: env_var_or("AULA_HOST", "0.0.0.0".to_string()),
            port: env_var_or("AULA_PORT", 3001),
            cors_origin: env_var_or("AULA_CORS_ORIGIN", "http://localhost:3000".to_string()),
            log_level: env_var_or("AULA_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full URL of the Gemini generateContent endpoint for the configured model
    pub fn gemini_generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.gemini_base_url, self.gemini_model
        )
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<AulaConfig> = Lazy::new(AulaConfig::from_env);
