// region:    --- Imports
use super::ListingSource;
use crate::error::SourceError;
use crate::listing::{AuctionItem, Normalizer};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// endregion: --- Imports

// region:    --- Catalog
/// 현재 상품 스냅샷
/// 조회 측은 Arc를 복제해 불변 스냅샷만 보며, 갱신은 통째로 교체한다.
#[derive(Debug, Default)]
pub struct Catalog {
    snapshot: RwLock<Arc<Vec<AuctionItem>>>,
}

impl Catalog {
    pub fn new(items: Vec<AuctionItem>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(items)),
        }
    }

    /// 현재 스냅샷 가져오기
    pub async fn snapshot(&self) -> Arc<Vec<AuctionItem>> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// 스냅샷 교체
    pub async fn replace(&self, items: Vec<AuctionItem>) -> usize {
        let count = items.len();
        *self.snapshot.write().await = Arc::new(items);
        count
    }

    /// 공급원에서 다시 가져와 정규화 후 교체
    /// 실패 시 이전 스냅샷을 유지한다.
    pub async fn refresh(
        &self,
        source: &dyn ListingSource,
        normalizer: &Normalizer,
    ) -> Result<usize, SourceError> {
        let raws = source.fetch_snapshot().await?;
        let items = normalizer.normalize_batch(raws);
        let count = self.replace(items).await;
        info!("{:<12} --> 스냅샷 갱신 완료: {}건", "Catalog", count);
        Ok(count)
    }
}
// endregion: --- Catalog
