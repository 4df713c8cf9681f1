//! Amazon US: a single card family keyed by ASIN.
//!
//! Amazon cards carry their id in `data-asin`; cards without an ASIN or a
//! title are sponsored slots or placeholders and are skipped.

use super::{CardFamily, DetailRules, FieldRule, KeepRule, StoreLayout};

/// Amazon selector tables and URL templates.
pub static LAYOUT: StoreLayout = StoreLayout {
    default_base_url: "https://www.amazon.com",
    search_path: "/s?k={query}",
    detail_path: "/dp/{id}",
    search_families: &SEARCH_FAMILIES,
    detail: DETAIL,
};

static SEARCH_FAMILIES: [CardFamily; 1] = [CardFamily {
    container: "div.s-result-item[data-asin]",
    id_attr: Some("data-asin"),
    link: None,
    title: FieldRule::text("h2 a span"),
    price: FieldRule::text("span.a-price span.a-offscreen"),
    image: FieldRule::attr("img.s-image", "src"),
    rating: None,
    seller: None,
    keep: KeepRule::IdAndTitle,
    canonical_link: false,
    synthesize_review_count: false,
}];

const DETAIL: DetailRules = DetailRules {
    container: "div#dp-container",
    title: FieldRule::text("#productTitle"),
    price: FieldRule::text(".a-price .a-offscreen"),
    image: FieldRule::attr("#landingImage", "src"),
    rating: None,
    review_count: None,
    description: None,
    record_page_url: false,
};
