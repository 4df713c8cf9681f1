//! shopscout: product search over scraped storefront pages.
//!
//! This crate exposes a small JSON HTTP API on top of
//! [`shopscout_scrape`]:
//!
//! - **Search**: `GET /api/search?q=...` scrapes the storefront's results page
//! - **Detail**: `GET /api/product/{id}` scrapes one product page
//!
//! Scraping failures degrade to sample products instead of errors; see
//! [`shopscout_scrape::service`] for the exact rules.

pub mod api;
pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
