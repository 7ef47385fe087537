//! 화면 계층이 호출하는 HTTP 어댑터
//! 요청마다 현재 시각을 한 번 읽어 남은 시간 계산에 넘긴다.
// region:    --- Imports
use crate::listing::{ItemView, Normalizer};
use crate::query::{ItemQuery, QueryEngine};
use crate::source::{Catalog, ListingSource};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- App State
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: Arc<QueryEngine>,
    pub source: Arc<dyn ListingSource>,
    pub normalizer: Normalizer,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        engine: QueryEngine,
        source: Arc<dyn ListingSource>,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            catalog,
            engine: Arc::new(engine),
            source,
            normalizer,
        }
    }
}

/// 라우터 설정
pub fn routes(state: AppState) -> Router {
    // 프론트엔드 개발 서버를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/items", get(handle_get_items))
        .route("/items/refresh", post(handle_refresh))
        .route("/items/:id", get(handle_get_item))
        .layer(cors)
        .with_state(state)
}
// endregion: --- App State

// region:    --- Query Handlers

/// 상품 검색 및 정렬
pub async fn handle_get_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Response {
    info!(
        "{:<12} --> 상품 검색 q: '{}', sort: {:?}, direction: {:?}",
        "HandlerQuery", query.q, query.sort, query.direction
    );
    let now = Utc::now();
    let snapshot = state.catalog.snapshot().await;
    let items = state.engine.run(&snapshot, &query);

    let views: Vec<ItemView> = items.iter().map(|item| ItemView::new(item, now)).collect();
    Json(views).into_response()
}

/// 상품 조회
pub async fn handle_get_item(State(state): State<AppState>, Path(item_id): Path<String>) -> Response {
    info!("{:<12} --> 상품 조회 id: {}", "HandlerQuery", item_id);
    let now = Utc::now();
    let snapshot = state.catalog.snapshot().await;

    match snapshot.iter().find(|item| item.id == item_id) {
        Some(item) => Json(ItemView::new(item, now)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Item not found: {}", item_id),
                "code": "NOT_FOUND"
            })),
        )
            .into_response(),
    }
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 스냅샷 갱신
pub async fn handle_refresh(State(state): State<AppState>) -> Response {
    info!("{:<12} --> 스냅샷 갱신 요청", "Handler");
    match state
        .catalog
        .refresh(state.source.as_ref(), &state.normalizer)
        .await
    {
        Ok(count) => (StatusCode::OK, Json(serde_json::json!({ "count": count }))).into_response(),
        Err(e) => {
            error!("{:<12} --> 스냅샷 갱신 실패: {:?}", "Handler", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "code": "UPSTREAM_UNAVAILABLE"
                })),
            )
                .into_response()
        }
    }
}

// endregion: --- Command Handlers
