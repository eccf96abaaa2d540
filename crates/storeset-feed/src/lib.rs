pub mod client;
pub mod error;
pub mod load;
pub mod parse;

pub use client::FeedClient;
pub use error::FeedError;
pub use load::load_catalog;
pub use parse::parse_catalog;
