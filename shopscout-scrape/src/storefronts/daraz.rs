//! Daraz Nepal selector tables.
//!
//! Daraz ships two search-result layouts: the `data-qa-locator` markup and
//! an older hashed-class card grid. Both families are tried against every
//! search page and their matches are concatenated.

use super::{CardFamily, DetailRules, FieldRule, KeepRule, StoreLayout};

/// Daraz selector tables and URL templates.
pub static LAYOUT: StoreLayout = StoreLayout {
    default_base_url: "https://www.daraz.com.np",
    search_path: "/catalog/?q={query}",
    detail_path: "/products/i{id}.html",
    search_families: &SEARCH_FAMILIES,
    detail: DETAIL,
};

static SEARCH_FAMILIES: [CardFamily; 2] = [
    CardFamily {
        container: "div[data-qa-locator='product-item']",
        id_attr: Some("data-item-id"),
        link: Some("a"),
        title: FieldRule::text("div[data-qa-locator='product-name']").or("div.title--wFj93"),
        price: FieldRule::text("span[data-qa-locator='product-price']").or("div.price--NVB62"),
        image: FieldRule::attr("img", "src").or("img.image--WOyuZ"),
        rating: Some(FieldRule::text("div.rating__stars")),
        seller: Some(FieldRule::text("div.seller-name__detail")),
        keep: KeepRule::TitleOrPrice,
        canonical_link: true,
        synthesize_review_count: true,
    },
    CardFamily {
        container: "div.box--pRqdD",
        id_attr: None,
        link: Some("a"),
        title: FieldRule::text("div.title--wFj93"),
        price: FieldRule::text("div.price--NVB62"),
        image: FieldRule::attr("img.image--WOyuZ", "src"),
        rating: None,
        seller: None,
        keep: KeepRule::TitleOrPrice,
        canonical_link: false,
        synthesize_review_count: false,
    },
];

const DETAIL: DetailRules = DetailRules {
    container: "div.pdp-block",
    title: FieldRule::text("h1.pdp-title"),
    price: FieldRule::text("div.pdp-price"),
    image: FieldRule::attr("img.gallery-preview-panel__image", "src").or("img.pdp-mod-common-image"),
    rating: Some(FieldRule::text("div.review-summary__rating")),
    review_count: Some(FieldRule::text("div.review-summary__count")),
    description: Some(FieldRule::text("div.pdp-product-detail").or("div.html-content")),
    record_page_url: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn all_selectors() -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut push = |rule: &FieldRule| {
            out.push(rule.primary);
            out.extend(rule.fallback);
        };
        for family in LAYOUT.search_families {
            push(&family.title);
            push(&family.price);
            push(&family.image);
            family.rating.iter().for_each(&mut push);
            family.seller.iter().for_each(&mut push);
        }
        let detail = &LAYOUT.detail;
        push(&detail.title);
        push(&detail.price);
        push(&detail.image);
        detail.rating.iter().for_each(&mut push);
        detail.review_count.iter().for_each(&mut push);
        detail.description.iter().for_each(&mut push);
        for family in LAYOUT.search_families {
            out.push(family.container);
            out.extend(family.link);
        }
        out.push(detail.container);
        out
    }

    #[test]
    fn every_selector_compiles() {
        for sel in all_selectors() {
            assert!(Selector::parse(sel).is_ok(), "selector failed to parse: {sel}");
        }
    }

    #[test]
    fn layout_families_in_order() {
        assert_eq!(
            LAYOUT.search_families[0].container,
            "div[data-qa-locator='product-item']"
        );
        assert_eq!(LAYOUT.search_families[1].container, "div.box--pRqdD");
    }
}
