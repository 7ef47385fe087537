pub mod engine;
pub mod sort;

pub use engine::{search, ItemQuery, QueryEngine, SearchConfig};
pub use sort::{sort, SortDirection, SortKey, SortState};
