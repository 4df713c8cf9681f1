//! Core types for scraped products and storefront identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single product listing scraped from a storefront (or served from the
/// fallback sample set).
///
/// Every field is best-effort text taken from markup. No numeric parsing
/// or currency normalisation is applied. The optional fields are omitted
/// from JSON output when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storefront identifier, possibly derived from the product link.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Image URL.
    pub image: String,
    /// Display name of the store the product came from.
    pub store_name: String,
    /// Price text as displayed by the storefront.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
    /// Rating text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rating: String,
    /// Review count text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub review_count: String,
    /// Seller name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub seller: String,
    /// Link to the product detail page.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Long-form description (detail pages only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detailed_description: String,
}

/// An ordered collection of products for one search query.
///
/// Order follows the document order of matched elements; no ranking is
/// applied and duplicate ids are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Products in extraction order.
    pub products: Vec<Product>,
    /// Number of products in `products`.
    pub total_count: usize,
    /// The query that produced these results.
    pub query: String,
}

impl SearchResults {
    /// Wrap `products` for `query`, recording the count.
    pub fn new(query: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            total_count: products.len(),
            products,
            query: query.into(),
        }
    }
}

/// Storefronts whose page layouts the extractor knows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storefront {
    /// Daraz Nepal, served by default.
    #[default]
    Daraz,
    /// Amazon US, a single card family.
    Amazon,
}

impl Storefront {
    /// Returns the display name used as [`Product::store_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daraz => "Daraz",
            Self::Amazon => "Amazon",
        }
    }
}

impl fmt::Display for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which kind of storefront page a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A search-results listing with many product cards.
    Search,
    /// A single product's detail page.
    Detail,
}
