//! 업스트림 피드를 대신하는 모의 상품 생성기
// region:    --- Imports
use super::ListingSource;
use crate::error::SourceError;
use crate::listing::{ConditionTier, RawListing};
use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

// endregion: --- Imports

// region:    --- Mock Data
/// (제목, 설명, 기준 MSRP)
const PRODUCTS: [(&str, &str, f64); 16] = [
    ("Ergonomic Office Chair", "Mesh back task chair with adjustable lumbar support", 249.99),
    ("Wooden Dining Chair Set (4)", "Solid oak dining chairs, minor scuffs on legs", 399.00),
    ("Cordless Drill Kit 20V", "Brushless drill with two batteries and charger", 159.99),
    ("65\" 4K Smart TV", "Ultra HD LED television with built-in streaming apps", 649.99),
    ("Stand Mixer 5 Qt", "Tilt-head kitchen mixer with dough hook and whisk", 329.95),
    ("Robot Vacuum Cleaner", "Self-charging vacuum with app control and mapping", 279.00),
    ("Queen Memory Foam Mattress", "12 inch cooling gel mattress, compressed in box", 499.00),
    ("Patio Conversation Set", "Four piece wicker outdoor furniture with cushions", 589.99),
    ("Air Fryer 6 Qt", "Digital air fryer with eight cooking presets", 89.99),
    ("Bluetooth Headphones", "Over-ear noise cancelling wireless headphones", 199.99),
    ("Adjustable Standing Desk", "Electric sit-stand desk with memory presets", 429.00),
    ("Kids Bicycle 16\"", "Steel frame bike with training wheels", 139.99),
    ("Pressure Washer 2000 PSI", "Electric pressure washer with four nozzle tips", 219.00),
    ("Espresso Machine", "15 bar pump espresso maker with milk frother", 299.99),
    ("Mechanical Tool Set 200pc", "Socket and wrench set in rolling case", 179.99),
    ("Gaming Laptop 15.6\"", "Laptop with dedicated graphics, open box return", 1199.00),
];

/// (위치, 시설, 주 코드)
const FACILITIES: [(&str, &str, &str); 6] = [
    ("Cincinnati", "Broadwell Road Warehouse", "OH"),
    ("Columbus", "Groveport Distribution Center", "OH"),
    ("Louisville", "Fern Valley Facility", "KY"),
    ("Indianapolis", "Park 100 Depot", "IN"),
    ("Nashville", "Antioch Liquidation Hub", "TN"),
    ("Pittsburgh", "Robinson Township Yard", "PA"),
];

const AMAZON_SEARCH_URL: &str = "https://www.amazon.com/s?k=";
const MIN_REMAINING_MINUTES: i64 = 5;
const MAX_REMAINING_MINUTES: i64 = 6 * 24 * 60;
// endregion: --- Mock Data

// region:    --- Mock Listing Source
/// 모의 상품 공급원
/// 시드가 주어지면 같은 시각에 대해 항상 같은 레코드를 생성한다.
#[derive(Debug, Clone)]
pub struct MockListingSource {
    count: usize,
    seed: Option<u64>,
    base_url: String,
}

impl MockListingSource {
    pub fn new(count: usize, seed: Option<u64>, base_url: impl Into<String>) -> Self {
        Self {
            count,
            seed,
            base_url: base_url.into(),
        }
    }

    /// 주어진 시각 기준으로 레코드 생성
    pub fn generate(&self, now: DateTime<Utc>) -> Vec<RawListing> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        (0..self.count)
            .map(|_| self.generate_one(&mut rng, now))
            .collect()
    }

    fn generate_one(&self, rng: &mut StdRng, now: DateTime<Utc>) -> RawListing {
        let (title, description, base_msrp) = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
        let (location, facility, state) = FACILITIES[rng.random_range(0..FACILITIES.len())];
        let condition = ConditionTier::KNOWN
            .choose(rng)
            .copied()
            .unwrap_or(ConditionTier::AsIs);

        let msrp = round_cents(base_msrp * rng.random_range(0.9..1.1));
        let current_price = round_cents(msrp * rng.random_range(0.05..0.85));

        let remaining = rng.random_range(MIN_REMAINING_MINUTES..=MAX_REMAINING_MINUTES);
        let end_date = now + Duration::minutes(remaining);
        let lot: u32 = rng.random_range(100_000..1_000_000);

        RawListing {
            title: title.to_string(),
            description: description.to_string(),
            current_price,
            msrp,
            location: location.to_string(),
            facility: facility.to_string(),
            state: state.to_string(),
            end_date: end_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            condition: condition.label().to_string(),
            image_url: format!("{}/images/lots/{}.jpg", self.base_url, lot),
            auction_url: format!("{}/auctions/lots/{}", self.base_url, lot),
            amazon_search_url: format!("{}{}", AMAZON_SEARCH_URL, urlencoding::encode(title)),
        }
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch_snapshot(&self) -> Result<Vec<RawListing>, SourceError> {
        let listings = self.generate(Utc::now());
        info!("{:<12} --> 모의 상품 {}건 생성", "MockSource", listings.len());
        Ok(listings)
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
// endregion: --- Mock Listing Source
