//! proionic webshop (`proionic.com`).
//!
//! Product pages show every field as a div of spans, the value in the second span:
//! `<div class="cas"><span>CAS:</span><span>174501-65-6</span></div>`.

use scraper::{Html, Selector};

use super::{Catalogue, ProductPage};
use crate::parse::{create_selector, hrefs_with_prefix, nth_text};
use crate::{Result, PROIONIC_URL};

const LIST_PATH: &str = "/ionic-liquids/webshop.php";
const PRODUCT_PREFIX: &str = "/bestseller/";

#[derive(Debug, Clone)]
pub struct Proionic {
    base_url: String,
}

impl Default for Proionic {
    fn default() -> Self {
        Self::new(PROIONIC_URL)
    }
}

impl Proionic {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Catalogue for Proionic {
    fn list_url(&self) -> String {
        format!("{}{LIST_PATH}", self.base_url)
    }

    fn product_url(&self, link: &str) -> String {
        format!("{}{link}", self.base_url)
    }

    fn product_links(html: &str) -> Result<Vec<String>> {
        let doc = Html::parse_document(html);
        let link_selector = create_selector("a[href]")?;
        Ok(hrefs_with_prefix(doc.select(&link_selector), PRODUCT_PREFIX))
    }

    fn product_page(html: &str) -> Result<ProductPage> {
        let doc = Html::parse_document(html);
        let span_selector = create_selector("span")?;

        let field = |class: &str| -> Result<Option<String>> {
            let selector = create_selector(&format!("div.{class}"))?;
            Ok(second_span_text(&doc, &selector, &span_selector))
        };

        Ok(ProductPage {
            name: field("name")?,
            cas: field("cas")?,
            product_number: field("ordernumber")?,
        })
    }
}

/// Text of the second span inside the first `div` matched by `div_selector`.
fn second_span_text(doc: &Html, div_selector: &Selector, span_selector: &Selector) -> Option<String> {
    let div = doc.select(div_selector).next()?;
    nth_text(div, span_selector, 1)
}
