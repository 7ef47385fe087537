// region:    --- Imports
use auction_browser::config::AppConfig;
use auction_browser::handlers::{self, AppState};
use auction_browser::listing::Normalizer;
use auction_browser::query::QueryEngine;
use auction_browser::scheduler::CatalogRefresher;
use auction_browser::source::{Catalog, ListingSource, MockListingSource};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 읽기
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 읽기 실패: {}", "Main", e);
            return Err(e.into());
        }
    };
    info!("{:<12} --> 설정: {:?}", "Main", config);

    // 모의 업스트림 피드 (실제 크롤링 없음)
    let source: Arc<dyn ListingSource> = Arc::new(MockListingSource::new(
        config.listing_count,
        config.mock_seed,
        config.marketplace_base_url.clone(),
    ));
    let normalizer = Normalizer::default();

    // 초기 스냅샷 적재
    let catalog = Arc::new(Catalog::default());
    if let Err(e) = catalog.refresh(source.as_ref(), &normalizer).await {
        error!("{:<12} --> 초기 스냅샷 적재 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 초기 스냅샷 적재 성공", "Main");

    // 주기적 스냅샷 갱신
    if let Some(period) = config.refresh_interval {
        CatalogRefresher::new(
            Arc::clone(&catalog),
            Arc::clone(&source),
            normalizer.clone(),
            period,
        )
        .start();
    }

    let state = AppState::new(
        catalog,
        QueryEngine::new(config.search.clone()),
        source,
        normalizer,
    );
    let routes_all = handlers::routes(state);

    // 리스너 생성
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
