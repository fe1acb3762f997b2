// src/specs/listing.rs

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::element_text;
use crate::error::EntryError;
use crate::records::RawRecord;

/// Literal written to `Rating_Text` when an entry carries no rating.
pub const NO_RATING: &str = "None";

/// Extraction rule for one catalogue page layout.
pub trait ListingSpec {
    /// Matches one listing entry.
    fn entry_selector(&self) -> &Selector;

    /// Turn one entry element into a record.
    fn parse_entry(&self, entry: ElementRef<'_>) -> Result<RawRecord, EntryError>;

    /// Every entry on the page, in document order.
    fn parse_page(&self, html: &str) -> Vec<Result<RawRecord, EntryError>> {
        let doc = Html::parse_document(html);
        doc.select(self.entry_selector())
            .map(|entry| self.parse_entry(entry))
            .collect()
    }

    /// Parse a standalone fragment holding a single entry.
    fn parse_fragment(&self, html: &str) -> Result<RawRecord, EntryError> {
        let frag = Html::parse_fragment(html);
        let entry = frag
            .select(self.entry_selector())
            .next()
            .ok_or(EntryError::NoEntry)?;
        self.parse_entry(entry)
    }
}

/// `article.product_pod` blocks as laid out on books.toscrape.com:
///
/// ```text
/// <article class="product_pod">
///   <p class="star-rating Three"></p>
///   <h3><a href="..." title="Full Title">Full Ti...</a></h3>
///   <div class="product_price">
///     <p class="price_color">£51.77</p>
///     <p class="instock availability"><i class="icon-ok"></i> In stock</p>
///   </div>
/// </article>
/// ```
pub struct BookPodSpec {
    entry: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
    availability: Selector,
}

impl BookPodSpec {
    pub fn new() -> Self {
        Self {
            entry: selector("article.product_pod"),
            title: selector("h3 > a"),
            price: selector("p.price_color"),
            rating: selector("p.star-rating"),
            availability: selector("p.instock.availability"),
        }
    }
}

impl Default for BookPodSpec {
    fn default() -> Self { Self::new() }
}

impl ListingSpec for BookPodSpec {
    fn entry_selector(&self) -> &Selector { &self.entry }

    fn parse_entry(&self, entry: ElementRef<'_>) -> Result<RawRecord, EntryError> {
        let title = entry
            .select(&self.title)
            .next()
            .and_then(|a| a.value().attr("title"))
            .map(str::to_string)
            .ok_or(EntryError::MissingField { field: "title" })?;

        let price_raw = entry
            .select(&self.price)
            .next()
            .map(element_text)
            .ok_or(EntryError::MissingField { field: "price" })?;

        let rating_text = entry
            .select(&self.rating)
            .next()
            .and_then(|p| p.value().classes().find(|c| *c != "star-rating"))
            .map(str::to_string)
            .unwrap_or_else(|| s!(NO_RATING));

        let availability = entry
            .select(&self.availability)
            .next()
            .map(element_text)
            .ok_or(EntryError::MissingField { field: "availability" })?;

        Ok(RawRecord { title, price_raw, rating_text, availability })
    }
}

/* ---------- helpers ---------- */

fn selector(css: &'static str) -> Selector {
    // Literal selectors; a parse failure is a typo caught by the tests below.
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}
