use std::env;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PHRASE_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_KAKAO_BASE_URL: &str = "https://dapi.kakao.com";

/// Settings for the phrase server, read from the process environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub openai_endpoint: String,
    pub openai_api_key: String,
    pub phrase_max_tokens: Option<u32>,

    pub kakao_api_key: Option<String>,
    pub kakao_base_url: Option<String>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn phrase_max_tokens(&self) -> u32 {
        self.phrase_max_tokens.unwrap_or(DEFAULT_PHRASE_MAX_TOKENS)
    }

    pub fn kakao_base_url(&self) -> &str {
        self.kakao_base_url
            .as_deref()
            .unwrap_or(DEFAULT_KAKAO_BASE_URL)
    }
}

/// The subset of settings the one-shot request issuer needs.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuerEnvy {
    pub openai_endpoint: String,
    pub openai_api_key: String,
}

/// Loads `.env.<APP_ENV>` (if present) into the environment before parsing.
pub fn from_env<T>() -> Result<T, ::envy::Error>
where
    T: serde::de::DeserializeOwned,
{
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    if let Err(e) = dotenvy::from_filename(format!(".env.{}", app_env)) {
        tracing::debug!(%e, "no dotenv file for {}", app_env);
    }

    ::envy::from_env::<T>()
}
