//! HTML helpers shared by the site extractors.
//!
//! Extraction never fails on missing markup: an absent anchor yields `None`.

use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

#[inline]
pub fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

/// Every descendant text node trimmed, empty ones dropped, the rest joined without a separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Collapses empty text into a missing field.
#[inline]
pub fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Stripped text of the first element in `doc` matching `selector`.
pub fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector).next().map(stripped_text).and_then(non_empty)
}

/// Stripped text of the `n`-th (zero based) descendant of `element` matching `selector`.
pub fn nth_text(element: ElementRef<'_>, selector: &Selector, n: usize) -> Option<String> {
    element.select(selector).nth(n).map(stripped_text).and_then(non_empty)
}

/// `href` values of every element matching `selector` that start with `prefix`, in document order.
pub fn hrefs_with_prefix<'a>(
    elements: impl Iterator<Item = ElementRef<'a>>,
    prefix: &str,
) -> Vec<String> {
    elements
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with(prefix))
        .map(str::to_owned)
        .collect()
}
