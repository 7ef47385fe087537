//! 상품 공급원 (업스트림 피드)
//! 실제 크롤링 없이 스냅샷 단위로 원본 레코드를 제공한다.
// region:    --- Imports
use crate::error::SourceError;
use crate::listing::RawListing;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Modules
pub mod catalog;
pub mod mock;

pub use catalog::Catalog;
pub use mock::MockListingSource;
// endregion: --- Modules

// region:    --- Listing Source Trait
/// 상품 공급원 트레이트
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// 완전히 구체화된 스냅샷 반환
    async fn fetch_snapshot(&self) -> Result<Vec<RawListing>, SourceError>;
}

/// 고정된 레코드를 돌려주는 공급원 (JSON 스냅샷)
#[derive(Debug, Clone, Default)]
pub struct StaticListingSource {
    listings: Vec<RawListing>,
}

impl StaticListingSource {
    pub fn new(listings: Vec<RawListing>) -> Self {
        Self { listings }
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let listings: Vec<RawListing> = serde_json::from_str(json)?;
        Ok(Self { listings })
    }
}

#[async_trait]
impl ListingSource for StaticListingSource {
    async fn fetch_snapshot(&self) -> Result<Vec<RawListing>, SourceError> {
        Ok(self.listings.clone())
    }
}
// endregion: --- Listing Source Trait
