// region:    --- Imports
use crate::error::ConfigError;
use crate::query::engine::SearchConfig;
use std::time::Duration;

// endregion: --- Imports

// region:    --- App Config
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MARKETPLACE_BASE_URL: &str = "https://marketplace.example.com";
const DEFAULT_LISTING_COUNT: usize = 24;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

/// 애플리케이션 설정 (환경 변수)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub listing_count: usize,
    pub mock_seed: Option<u64>,
    /// None이면 주기적 갱신 비활성화
    pub refresh_interval: Option<Duration>,
    pub marketplace_base_url: String,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            listing_count: DEFAULT_LISTING_COUNT,
            mock_seed: None,
            refresh_interval: Some(Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)),
            marketplace_base_url: DEFAULT_MARKETPLACE_BASE_URL.to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정 읽기
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 조회 함수로부터 설정 읽기
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(count) = lookup("MOCK_LISTING_COUNT") {
            config.listing_count = parse_value("MOCK_LISTING_COUNT", &count)?;
        }
        if let Some(seed) = lookup("MOCK_SEED") {
            config.mock_seed = Some(parse_value("MOCK_SEED", &seed)?);
        }
        if let Some(secs) = lookup("REFRESH_INTERVAL_SECS") {
            let secs: u64 = parse_value("REFRESH_INTERVAL_SECS", &secs)?;
            config.refresh_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(url) = lookup("MARKETPLACE_BASE_URL") {
            config.marketplace_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = lookup("SEARCH_CATEGORY_FALLBACK") {
            config.search.category_fallback = parse_bool("SEARCH_CATEGORY_FALLBACK", &flag)?;
        }
        if let Some(terms) = lookup("SEARCH_CATEGORY_TERMS") {
            config.search.category_terms = terms
                .split(',')
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect();
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

// endregion: --- App Config
