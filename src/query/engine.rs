//! 검색 엔진
//! 입력 컬렉션에 대한 순수 함수로, 내부 상태를 갖지 않는다.
// region:    --- Imports
use super::sort::{sort, SortDirection, SortKey};
use crate::listing::AuctionItem;
use serde::Deserialize;
use tracing::debug;

// endregion: --- Imports

// region:    --- Search Config
/// 상품 내용과 무관하게 전체 결과를 돌려주는 광범위 카테고리 검색어
pub const DEFAULT_CATEGORY_TERMS: [&str; 6] = [
    "all",
    "auction",
    "auctions",
    "deals",
    "liquidation",
    "general merchandise",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub category_fallback: bool,
    pub category_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            category_fallback: true,
            category_terms: DEFAULT_CATEGORY_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
        }
    }
}

impl SearchConfig {
    fn is_category_term(&self, query: &str) -> bool {
        self.category_fallback
            && self
                .category_terms
                .iter()
                .any(|term| term.trim().to_lowercase() == query)
    }
}
// endregion: --- Search Config

// region:    --- Item Query
/// 검색 요청 (검색어 + 선택적 정렬)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ItemQuery {
    #[serde(default)]
    pub q: String,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
}
// endregion: --- Item Query

// region:    --- Query Engine
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: SearchConfig,
}

impl QueryEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// 검색: 제목 또는 설명에 대한 대소문자 무시 부분 문자열 일치
    pub fn search(&self, items: &[AuctionItem], query: &str) -> Vec<AuctionItem> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return items.to_vec();
        }

        if self.config.is_category_term(&query) {
            debug!("{:<12} --> 카테고리 검색어 '{}': 전체 반환", "Query", query);
            return items.to_vec();
        }

        items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// 정렬
    pub fn sort(
        &self,
        items: &[AuctionItem],
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<AuctionItem> {
        sort(items, key, direction)
    }

    /// 검색 후 정렬
    pub fn run(&self, items: &[AuctionItem], query: &ItemQuery) -> Vec<AuctionItem> {
        let found = self.search(items, &query.q);
        let result = match query.sort {
            Some(key) => sort(&found, key, query.direction.unwrap_or_default()),
            None => found,
        };
        debug!(
            "{:<12} --> 검색 '{}' 정렬 {:?}: {}/{}건",
            "Query",
            query.q,
            query.sort,
            result.len(),
            items.len()
        );
        result
    }
}

/// 기본 설정의 검색
pub fn search(items: &[AuctionItem], query: &str) -> Vec<AuctionItem> {
    QueryEngine::default().search(items, query)
}
// endregion: --- Query Engine
