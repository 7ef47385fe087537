use auction_browser::error::ListingError;
use auction_browser::listing::{
    classify_condition, compute_discount_percent, compute_time_left, parse_end_date,
    BadgeStyle, ConditionTier, IdGenerator, Normalizer, RawListing, SequentialIdGenerator,
    UuidIdGenerator,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::Arc;

/// 고정 시각
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// 테스트용 원본 레코드 생성
fn raw_listing(title: &str, current_price: f64, msrp: f64, end_date: &str) -> RawListing {
    RawListing {
        title: title.to_string(),
        description: format!("{} 설명", title),
        current_price,
        msrp,
        location: "Cincinnati".to_string(),
        facility: "Broadwell Road Warehouse".to_string(),
        state: "OH".to_string(),
        end_date: end_date.to_string(),
        condition: "Good Condition".to_string(),
        image_url: String::new(),
        auction_url: String::new(),
        amazon_search_url: String::new(),
    }
}

fn test_normalizer() -> Normalizer {
    Normalizer::new(Arc::new(SequentialIdGenerator::new("item")))
}

/// 할인율 계산
#[test]
fn test_discount_percent_rounds() {
    assert_eq!(compute_discount_percent(24.50, 89.99), Ok(73));
    assert_eq!(compute_discount_percent(50.0, 100.0), Ok(50));
    assert_eq!(compute_discount_percent(100.0, 100.0), Ok(0));
    assert_eq!(compute_discount_percent(0.0, 100.0), Ok(100));
}

/// 유효한 가격의 할인율은 0..=100 범위
#[test]
fn test_discount_percent_in_range_for_valid_prices() {
    let msrps = [0.01, 1.0, 19.99, 89.99, 250.0, 1199.0];
    for msrp in msrps {
        for step in 1..=20 {
            let current_price = msrp * step as f64 / 20.0;
            let percent = compute_discount_percent(current_price, msrp).unwrap();
            assert!(
                (0..=100).contains(&percent),
                "current_price: {}, msrp: {}, percent: {}",
                current_price,
                msrp,
                percent
            );
        }
    }
}

/// 잘못된 MSRP는 InvalidPriceData
#[test]
fn test_discount_percent_invalid_msrp() {
    for msrp in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            compute_discount_percent(10.0, msrp),
            Err(ListingError::InvalidPriceData { .. })
        ));
    }
    assert!(matches!(
        compute_discount_percent(f64::NAN, 10.0),
        Err(ListingError::InvalidPriceData { .. })
    ));
}

/// 현재가가 MSRP보다 높아도 실패하지 않는다
#[test]
fn test_discount_percent_price_above_msrp() {
    assert_eq!(compute_discount_percent(120.0, 100.0), Ok(-20));
}

/// 남은 시간 문자열
#[test]
fn test_time_left_formats() {
    let now = fixed_now();
    assert_eq!(compute_time_left(now - Duration::milliseconds(1), now), "Ended");
    assert_eq!(compute_time_left(now, now), "Ended");
    assert_eq!(compute_time_left(now + Duration::minutes(90), now), "1h 30m");
    assert_eq!(compute_time_left(now + Duration::hours(25), now), "1d 1h");
    assert_eq!(compute_time_left(now + Duration::minutes(45), now), "45m");
    assert_eq!(compute_time_left(now + Duration::seconds(30), now), "0m");
    assert_eq!(
        compute_time_left(now + Duration::days(3) + Duration::hours(4) + Duration::minutes(59), now),
        "3d 4h"
    );
}

/// 날짜 파싱
#[test]
fn test_parse_end_date() {
    let parsed = parse_end_date("2024-05-01T14:00:00+02:00").unwrap();
    assert_eq!(parsed, fixed_now());
    assert_eq!(
        parse_end_date("next tuesday"),
        Err(ListingError::MalformedDate("next tuesday".to_string()))
    );
}

/// 상태 분류
#[test]
fn test_classify_condition() {
    assert_eq!(classify_condition("Brand New"), ConditionTier::BrandNew);
    assert_eq!(classify_condition("new/like new"), ConditionTier::NewLikeNew);
    assert_eq!(classify_condition(" Good Condition "), ConditionTier::GoodCondition);
    assert_eq!(classify_condition("As Is"), ConditionTier::AsIs);
    assert_eq!(classify_condition("Refurbished"), ConditionTier::Unrecognized);
    assert_eq!(classify_condition(""), ConditionTier::Unrecognized);
    assert_eq!(
        ConditionTier::Unrecognized.badge_style(),
        BadgeStyle::Outline
    );
}

/// 식별자 생성기
#[test]
fn test_id_generators_do_not_collide() {
    let sequential = SequentialIdGenerator::new("lot");
    assert_eq!(sequential.generate(), "lot-1");
    assert_eq!(sequential.generate(), "lot-2");

    let uuid = UuidIdGenerator;
    let ids: HashSet<String> = (0..1000).map(|_| uuid.generate()).collect();
    assert_eq!(ids.len(), 1000);
    assert!(ids
        .iter()
        .all(|id| id.chars().all(|c| c.is_ascii_alphanumeric())));
}

/// 정규화: 잘못된 가격과 날짜는 복구된다
#[test]
fn test_normalize_recovers_bad_records() {
    let normalizer = test_normalizer();
    let now = fixed_now();

    let good = normalizer.normalize(raw_listing("Office Chair", 24.50, 89.99, "2024-05-01T13:30:00Z"));
    assert_eq!(good.id, "item-1");
    assert_eq!(good.discount_percent, Some(73));
    assert_eq!(good.condition, ConditionTier::GoodCondition);
    assert_eq!(good.time_left(now), "1h 30m");
    assert!(good.is_live(now));

    let free = normalizer.normalize(raw_listing("Mystery Box", 0.0, 0.0, "2024-05-02T13:00:00Z"));
    assert_eq!(free.id, "item-2");
    assert_eq!(free.discount_percent, None);
    assert_eq!(free.time_left(now), "1d 1h");

    let undated = normalizer.normalize(raw_listing("Lamp", 5.0, 20.0, "soon"));
    assert_eq!(undated.end_date, None);
    assert_eq!(undated.time_left(now), "Ended");
    assert!(!undated.is_live(now));
}

/// 엄격한 할인율 조회는 오류를 그대로 반환
#[test]
fn test_try_discount_surfaces_error() {
    let normalizer = test_normalizer();
    let raw = raw_listing("Mystery Box", 0.0, 0.0, "2024-05-02T13:00:00Z");
    assert!(matches!(
        normalizer.try_discount(&raw),
        Err(ListingError::InvalidPriceData { .. })
    ));
}

/// 남은 시간은 저장되지 않고 조회 시점마다 다시 계산된다
#[test]
fn test_time_left_recomputed_per_read() {
    let normalizer = test_normalizer();
    let item = normalizer.normalize(raw_listing("Drill", 40.0, 160.0, "2024-05-01T12:10:00Z"));
    let now = fixed_now();
    assert_eq!(item.time_left(now), "10m");
    assert_eq!(item.time_left(now + Duration::minutes(5)), "5m");
    assert_eq!(item.time_left(now + Duration::minutes(10)), "Ended");
}

/// 배치 정규화는 한 레코드 오류로 중단되지 않는다
#[test]
fn test_normalize_batch_keeps_every_record() {
    let normalizer = test_normalizer();
    let items = normalizer.normalize_batch(vec![
        raw_listing("A", 24.50, 89.99, "2024-05-01T13:00:00Z"),
        raw_listing("B", 0.0, 0.0, "broken"),
        raw_listing("C", 1.0, f64::NAN, "2024-05-01T13:00:00Z"),
    ]);
    assert_eq!(items.len(), 3);
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
    assert_eq!(items[0].discount_percent, Some(73));
    assert_eq!(items[1].discount_percent, None);
    assert_eq!(items[2].discount_percent, None);
}

/// 직렬화 시 할인율이 없으면 null (NaN 아님)
#[test]
fn test_serialized_item_has_null_discount() {
    let normalizer = test_normalizer();
    let item = normalizer.normalize(raw_listing("B", 0.0, 0.0, "2024-05-01T13:00:00Z"));
    let value = serde_json::to_value(&item).unwrap();
    assert!(value["discountPercent"].is_null());
    assert_eq!(value["condition"], "Good Condition");
    assert_eq!(value["id"], "item-1");
}
