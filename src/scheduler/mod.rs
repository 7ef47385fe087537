//! 상품 스냅샷 갱신 스케줄러
//! 실제 배포에서는 업스트림 피드가 별도로 있다고 가정하고, 주기적으로 새 스냅샷을 받아 교체한다.
//! 갱신에 실패하면 이전 스냅샷을 그대로 유지한다.
// region:    --- Imports
use crate::listing::Normalizer;
use crate::source::{Catalog, ListingSource};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error};

// endregion: --- Imports

// region:    --- Catalog Refresher
/// 상품 스냅샷 갱신 스케줄러
pub struct CatalogRefresher {
    catalog: Arc<Catalog>,
    source: Arc<dyn ListingSource>,
    normalizer: Normalizer,
    period: Duration,
}

impl CatalogRefresher {
    /// 상품 스냅샷 갱신 스케줄러 생성
    pub fn new(
        catalog: Arc<Catalog>,
        source: Arc<dyn ListingSource>,
        normalizer: Normalizer,
        period: Duration,
    ) -> Self {
        Self {
            catalog,
            source,
            normalizer,
            period,
        }
    }

    /// 상품 스냅샷 갱신 스케줄러 시작
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // 첫 tick은 즉시 완료되므로 건너뛴다 (시작 시 이미 적재됨)
            interval.tick().await;
            loop {
                interval.tick().await;
                match self
                    .catalog
                    .refresh(self.source.as_ref(), &self.normalizer)
                    .await
                {
                    Ok(count) => debug!("{:<12} --> 주기적 갱신 완료: {}건", "Scheduler", count),
                    Err(e) => error!(
                        "{:<12} --> 스냅샷 갱신 중 오류 발생: {:?}",
                        "Scheduler", e
                    ),
                }
            }
        })
    }
}
// endregion: --- Catalog Refresher
