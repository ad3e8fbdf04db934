//! Listings module - remote feed records and the build-time fetch

mod fetch;
mod record;

pub use fetch::{FeedError, ListingFetcher};
pub use record::Listing;
