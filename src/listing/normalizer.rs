//! 상품 정규화
//! 1. 식별자 부여
//! 2. 할인율 계산
//! 3. 남은 시간 계산
//! 4. 상태 등급 분류
// region:    --- Imports
use super::model::{AuctionItem, ConditionTier, RawListing};
use crate::error::ListingError;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Id Generator
/// 고유 식별자 생성 트레이트
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// uuid v4 기반 식별자 (하이픈 없는 hex, URL-safe)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// 순차 식별자 (테스트용 결정적 생성기)
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
// endregion: --- Id Generator

// region:    --- Derived Fields

/// 할인율 계산: round(100 * (msrp - current_price) / msrp)
pub fn compute_discount_percent(current_price: f64, msrp: f64) -> Result<i64, ListingError> {
    if !msrp.is_finite() || msrp <= 0.0 || !current_price.is_finite() || current_price < 0.0 {
        return Err(ListingError::InvalidPriceData {
            current_price,
            msrp,
        });
    }

    let percent = (100.0 * (msrp - current_price) / msrp).round();
    Ok(percent as i64)
}

/// 남은 시간 문자열 계산
pub fn compute_time_left(end_date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if end_date <= now {
        return "Ended".to_string();
    }

    let remaining = end_date - now;
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    if days >= 1 {
        format!("{}d {}h", days, hours)
    } else if hours >= 1 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// 종료 시각 파싱 (RFC 3339, UTC로 변환)
pub fn parse_end_date(raw: &str) -> Result<DateTime<Utc>, ListingError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ListingError::MalformedDate(raw.to_string()))
}

/// 상태 라벨 분류
pub fn classify_condition(label: &str) -> ConditionTier {
    let label = label.trim();
    ConditionTier::KNOWN
        .into_iter()
        .find(|tier| tier.label().eq_ignore_ascii_case(label))
        .unwrap_or(ConditionTier::Unrecognized)
}

// endregion: --- Derived Fields

// region:    --- Normalizer
/// 원본 레코드를 AuctionItem으로 변환
#[derive(Clone)]
pub struct Normalizer {
    id_generator: Arc<dyn IdGenerator>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

impl Normalizer {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { id_generator }
    }

    /// 식별자 부여
    pub fn assign_identifier(&self, _raw: &RawListing) -> String {
        self.id_generator.generate()
    }

    /// 할인율 계산 (실패를 그대로 반환)
    pub fn try_discount(&self, raw: &RawListing) -> Result<i64, ListingError> {
        compute_discount_percent(raw.current_price, raw.msrp)
    }

    /// 상품 정규화
    /// 잘못된 가격은 할인율 생략, 잘못된 날짜는 종료 상품으로 처리한다.
    pub fn normalize(&self, raw: RawListing) -> AuctionItem {
        let id = self.assign_identifier(&raw);

        let discount_percent = match self.try_discount(&raw) {
            Ok(percent) => Some(percent),
            Err(e) => {
                warn!("{:<12} --> 할인율 생략 id: {}, {}", "Normalizer", id, e);
                None
            }
        };

        let end_date = match parse_end_date(&raw.end_date) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("{:<12} --> 종료 처리 id: {}, {}", "Normalizer", id, e);
                None
            }
        };

        let condition = classify_condition(&raw.condition);
        if condition == ConditionTier::Unrecognized {
            debug!(
                "{:<12} --> 알 수 없는 상태 라벨 id: {}, label: {}",
                "Normalizer", id, raw.condition
            );
        }

        AuctionItem {
            id,
            title: raw.title,
            description: raw.description,
            current_price: raw.current_price,
            msrp: raw.msrp,
            location: raw.location,
            facility: raw.facility,
            state: raw.state,
            end_date,
            condition,
            condition_label: raw.condition,
            image_url: raw.image_url,
            auction_url: raw.auction_url,
            amazon_search_url: raw.amazon_search_url,
            discount_percent,
        }
    }

    /// 배치 정규화 (한 레코드의 오류가 전체를 중단시키지 않음)
    pub fn normalize_batch(&self, raws: Vec<RawListing>) -> Vec<AuctionItem> {
        let items: Vec<AuctionItem> = raws.into_iter().map(|raw| self.normalize(raw)).collect();
        debug!("{:<12} --> {}개 상품 정규화 완료", "Normalizer", items.len());
        items
    }
}
// endregion: --- Normalizer
