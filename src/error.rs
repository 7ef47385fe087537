// region:    --- Imports
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors

/// 상품 정규화 중 발생하는 오류
/// 배치 처리 중에는 모두 로컬에서 복구된다 (할인율 생략, 종료 처리)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListingError {
    #[error("Invalid price data: current_price={current_price}, msrp={msrp}")]
    InvalidPriceData { current_price: f64, msrp: f64 },

    #[error("Malformed end date: '{0}'")]
    MalformedDate(String),
}

/// 상품 공급원(업스트림) 오류
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Upstream source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid listing payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// 환경 변수 설정 오류
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

// endregion: --- Errors
