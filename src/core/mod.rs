// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod phone;
pub mod ranking;

pub use filters::{filter_by_location, group_by_city, group_by_state, matches_location, CityBuckets, StateBuckets};
pub use matcher::{matches_terms, CategoryMatch, CategoryMatcher, MatchFields};
pub use phone::normalize_phone;
pub use ranking::{compare_records, rank, rank_and_limit, DEFAULT_LIMIT};
