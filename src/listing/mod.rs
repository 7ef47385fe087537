pub mod model;
pub mod normalizer;

pub use model::{AuctionItem, BadgeStyle, ConditionTier, ItemView, RawListing};
pub use normalizer::{
    classify_condition, compute_discount_percent, compute_time_left, parse_end_date,
    IdGenerator, Normalizer, SequentialIdGenerator, UuidIdGenerator,
};
