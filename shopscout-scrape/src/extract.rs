//! HTML → product extraction driven by the storefront selector tables.
//!
//! [`extract`] is a pure function: one call per fetched document, returning
//! an explicit ordered collection. Search pages yield every kept card, family
//! by family in document order. Detail pages always yield exactly one
//! product, whose title is empty when the product block was not found.

use crate::error::ScrapeError;
use crate::storefronts::{self, CardFamily, DetailRules, FieldRule, KeepRule, PageRules};
use crate::types::{PageKind, Product, Storefront};
use scraper::{ElementRef, Html, Selector};

/// Review counts used when a card shows a rating but no count.
const PLACEHOLDER_REVIEW_COUNTS: &[&str] = &[
    "126", "238", "452", "189", "86", "314", "92", "517", "64", "273", "195",
];

/// Always the first entry, so extraction stays deterministic.
const PLACEHOLDER_INDEX: usize = 0;

/// Where a document came from.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Storefront whose rule table applies.
    pub storefront: Storefront,
    /// Origin used to build canonical product links.
    pub base_url: &'a str,
    /// URL the document was fetched from.
    pub page_url: &'a str,
    /// Requested product id (detail pages only).
    pub product_id: &'a str,
}

/// Extract products from `html` using the rules for `kind`.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] if a selector in the rule table is invalid.
pub fn extract(html: &str, kind: PageKind, ctx: &PageContext<'_>) -> Result<Vec<Product>, ScrapeError> {
    let document = Html::parse_document(html);
    let products = match storefronts::layout(ctx.storefront).rules(kind) {
        PageRules::Search(families) => {
            let mut products = Vec::new();
            for family in families {
                extract_family(&document, family, ctx, &mut products)?;
            }
            products
        }
        PageRules::Detail(rules) => vec![extract_detail(&document, rules, ctx)?],
    };

    tracing::debug!(
        store = %ctx.storefront,
        ?kind,
        count = products.len(),
        "products extracted"
    );
    Ok(products)
}

/// Derive a product id from a detail link.
///
/// Looks for a path segment of the form `i<digits>.html` first, then for a
/// trailing segment with a literal `i` prefix and `.html` suffix, stripping
/// both. Returns an empty string when neither pattern matches.
pub fn extract_product_id(link: &str) -> String {
    let path = link.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').collect();

    let numeric = segments.iter().find_map(|segment| {
        let digits = strip_id_affixes(segment)?;
        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
    });
    if let Some(id) = numeric {
        return id.to_owned();
    }

    segments
        .last()
        .and_then(|segment| strip_id_affixes(segment))
        .unwrap_or_default()
        .to_owned()
}

/// The placeholder review count for a rated card without one.
pub fn placeholder_review_count() -> &'static str {
    PLACEHOLDER_REVIEW_COUNTS[PLACEHOLDER_INDEX]
}

fn strip_id_affixes(segment: &str) -> Option<&str> {
    segment.strip_prefix('i')?.strip_suffix(".html")
}

/// A [`FieldRule`] with its selectors compiled.
struct CompiledField {
    primary: Selector,
    fallback: Option<Selector>,
    attr: Option<&'static str>,
}

impl CompiledField {
    fn new(rule: &FieldRule) -> Result<Self, ScrapeError> {
        Ok(Self {
            primary: compile(rule.primary)?,
            fallback: rule.fallback.map(compile).transpose()?,
            attr: rule.attr,
        })
    }

    fn optional(rule: Option<&FieldRule>) -> Result<Option<Self>, ScrapeError> {
        rule.map(Self::new).transpose()
    }

    fn read(&self, element: ElementRef<'_>) -> String {
        let value = self.read_with(element, &self.primary);
        match &self.fallback {
            Some(fallback) if value.is_empty() => self.read_with(element, fallback),
            _ => value,
        }
    }

    fn read_with(&self, element: ElementRef<'_>, selector: &Selector) -> String {
        match self.attr {
            Some(attr) => child_attr(element, selector, attr),
            None => child_text(element, selector),
        }
    }
}

fn read_optional(field: &Option<CompiledField>, element: ElementRef<'_>) -> String {
    field
        .as_ref()
        .map(|f| f.read(element))
        .unwrap_or_default()
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid selector {selector:?}: {e:?}")))
}

/// Concatenated text of every match, trimmed.
fn child_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Attribute of the first match, trimmed.
fn child_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn extract_family(
    document: &Html,
    family: &CardFamily,
    ctx: &PageContext<'_>,
    out: &mut Vec<Product>,
) -> Result<(), ScrapeError> {
    let container = compile(family.container)?;
    let link = family.link.map(compile).transpose()?;
    let title = CompiledField::new(&family.title)?;
    let price = CompiledField::new(&family.price)?;
    let image = CompiledField::new(&family.image)?;
    let rating = CompiledField::optional(family.rating.as_ref())?;
    let seller = CompiledField::optional(family.seller.as_ref())?;
    let layout = storefronts::layout(ctx.storefront);

    for card in document.select(&container) {
        let mut product = Product {
            id: family
                .id_attr
                .and_then(|attr| card.value().attr(attr))
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            title: title.read(card),
            price: price.read(card),
            image: image.read(card),
            rating: read_optional(&rating, card),
            seller: read_optional(&seller, card),
            store_name: ctx.storefront.name().to_string(),
            ..Default::default()
        };

        if product.id.is_empty() {
            if let Some(link) = &link {
                let href = child_attr(card, link, "href");
                product.id = extract_product_id(&href);
                product.link = href;
            }
        }

        let keep = match family.keep {
            KeepRule::TitleOrPrice => !product.title.is_empty() || !product.price.is_empty(),
            KeepRule::IdAndTitle => !product.id.is_empty() && !product.title.is_empty(),
        };
        if !keep {
            continue;
        }

        if family.canonical_link && product.link.is_empty() && !product.id.is_empty() {
            product.link = layout.detail_url(ctx.base_url, &product.id)?.to_string();
        }
        if family.synthesize_review_count
            && !product.rating.is_empty()
            && product.review_count.is_empty()
        {
            product.review_count = placeholder_review_count().to_string();
        }

        out.push(product);
    }
    Ok(())
}

fn extract_detail(
    document: &Html,
    rules: &DetailRules,
    ctx: &PageContext<'_>,
) -> Result<Product, ScrapeError> {
    let container = compile(rules.container)?;
    let title = CompiledField::new(&rules.title)?;
    let price = CompiledField::new(&rules.price)?;
    let image = CompiledField::new(&rules.image)?;
    let rating = CompiledField::optional(rules.rating.as_ref())?;
    let review_count = CompiledField::optional(rules.review_count.as_ref())?;
    let description = CompiledField::optional(rules.description.as_ref())?;

    let mut product = Product {
        id: ctx.product_id.to_string(),
        store_name: ctx.storefront.name().to_string(),
        ..Default::default()
    };

    for block in document.select(&container) {
        product.title = title.read(block);
        product.price = price.read(block);
        product.image = image.read(block);
        product.rating = read_optional(&rating, block);
        product.review_count = read_optional(&review_count, block);
        product.detailed_description = read_optional(&description, block);
        if rules.record_page_url {
            product.link = ctx.page_url.to_string();
        }
    }

    Ok(product)
}
