//! Weld-Fetch: download-to-disk page cache
//!
//! Scraped documentation pages are the raw input of the binding generator.
//! This crate downloads them concurrently into a cache directory, one file
//! per page, so generation can run offline afterwards.
//!
//! ```rust,ignore
//! use weld_fetch::{PageCache, PageRequest};
//!
//! let cache = PageCache::new(".cache/html")?;
//! cache
//!     .download_missing(&[PageRequest::new("button", "https://mui.com/api/button/")?])
//!     .await?;
//! let html = cache.read("button").await?;
//! ```

pub mod cache;
pub mod error;

pub use cache::{PageCache, PageRequest};
pub use error::FetchError;
