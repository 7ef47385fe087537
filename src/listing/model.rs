// region:    --- Imports
use super::normalizer::compute_time_left;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Raw Listing
/// 업스트림에서 전달되는 원본 상품 레코드
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub current_price: f64,
    pub msrp: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub state: String,
    /// RFC 3339 문자열
    pub end_date: String,
    pub condition: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub auction_url: String,
    #[serde(default)]
    pub amazon_search_url: String,
}
// endregion: --- Raw Listing

// region:    --- Condition
/// 상품 상태 등급
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConditionTier {
    #[serde(rename = "Brand New")]
    BrandNew,
    #[serde(rename = "New/Like New")]
    NewLikeNew,
    #[serde(rename = "Good Condition")]
    GoodCondition,
    #[serde(rename = "As Is")]
    AsIs,
    #[serde(rename = "Unrecognized")]
    Unrecognized,
}

/// 상태 뱃지 스타일
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Solid,
    Secondary,
    Muted,
    Outline,
}

impl ConditionTier {
    pub const KNOWN: [ConditionTier; 4] = [
        ConditionTier::BrandNew,
        ConditionTier::NewLikeNew,
        ConditionTier::GoodCondition,
        ConditionTier::AsIs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConditionTier::BrandNew => "Brand New",
            ConditionTier::NewLikeNew => "New/Like New",
            ConditionTier::GoodCondition => "Good Condition",
            ConditionTier::AsIs => "As Is",
            ConditionTier::Unrecognized => "Unrecognized",
        }
    }

    /// 인식되지 않은 상태는 outline(무스타일)로 표시
    pub fn badge_style(self) -> BadgeStyle {
        match self {
            ConditionTier::BrandNew | ConditionTier::NewLikeNew => BadgeStyle::Solid,
            ConditionTier::GoodCondition => BadgeStyle::Secondary,
            ConditionTier::AsIs => BadgeStyle::Muted,
            ConditionTier::Unrecognized => BadgeStyle::Outline,
        }
    }
}
// endregion: --- Condition

// region:    --- Auction Item
/// 정규화된 경매 상품
/// 생성 이후 불변이며, 남은 시간은 저장하지 않고 조회 시점마다 다시 계산한다.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub current_price: f64,
    pub msrp: f64,
    pub location: String,
    pub facility: String,
    pub state: String,
    /// 날짜 파싱 실패 시 None (종료된 상품으로 취급)
    pub end_date: Option<DateTime<Utc>>,
    pub condition: ConditionTier,
    pub condition_label: String,
    pub image_url: String,
    pub auction_url: String,
    pub amazon_search_url: String,
    /// 가격 데이터가 잘못된 경우 None
    pub discount_percent: Option<i64>,
}

impl AuctionItem {
    /// 남은 시간 문자열
    pub fn time_left(&self, now: DateTime<Utc>) -> String {
        match self.end_date {
            Some(end_date) => compute_time_left(end_date, now),
            None => "Ended".to_string(),
        }
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.end_date.is_some_and(|end_date| end_date > now)
    }
}
// endregion: --- Auction Item

// region:    --- Item View
/// 응답용 상품 뷰 (조회 시점의 남은 시간 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView<'a> {
    #[serde(flatten)]
    pub item: &'a AuctionItem,
    pub time_left: String,
    pub badge_style: BadgeStyle,
}

impl<'a> ItemView<'a> {
    pub fn new(item: &'a AuctionItem, now: DateTime<Utc>) -> Self {
        Self {
            item,
            time_left: item.time_left(now),
            badge_style: item.condition.badge_style(),
        }
    }
}
// endregion: --- Item View
