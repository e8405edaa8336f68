pub mod feed;
pub mod source;

pub use feed::{DecodedFeed, FeedKind, FeedMagnitude, FeedMetadata, FeedPeriod, QuakeFeed, RawEvent};
pub use source::{FeedSource, HttpFeedSource, StaticFeedSource};
