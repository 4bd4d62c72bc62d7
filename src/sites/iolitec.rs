//! IoLiTec catalogue (`iolitec.de`).
//!
//! Product pages carry the name in the `<h1>` and the details in a `detail-fields-box`
//! list, one `<li>` per field with a `field-label` div followed by the value:
//! ```html
//! <div class="detail-fields-box"><ul>
//!   <li><div class="field-label">Produkt Nr.:</div> IL-0214-HP</li>
//!   <li><div class="field-label">CAS Nr.:</div><div>[841251-37-4]</div></li>
//! </ul></div>
//! ```

use scraper::Html;

use super::{Catalogue, ProductPage};
use crate::parse::{create_selector, first_text, hrefs_with_prefix, non_empty, stripped_text};
use crate::{Result, IOLITEC_URL};

const LIST_PATH: &str = "/index.php/products/list";
const PRODUCT_PREFIX: &str = "/index.php/products/";

const PRODUCT_NR_LABEL: &str = "Produkt Nr.";
const CAS_NR_LABEL: &str = "CAS Nr.";

#[derive(Debug, Clone)]
pub struct Iolitec {
    base_url: String,
}

impl Default for Iolitec {
    fn default() -> Self {
        Self::new(IOLITEC_URL)
    }
}

impl Iolitec {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Catalogue for Iolitec {
    fn list_url(&self) -> String {
        format!("{}{LIST_PATH}", self.base_url)
    }

    fn product_url(&self, link: &str) -> String {
        format!("{}{link}", self.base_url)
    }

    /// First link of every `div.product`, when it points into the product tree.
    fn product_links(html: &str) -> Result<Vec<String>> {
        let doc = Html::parse_document(html);
        let product_selector = create_selector("div.product")?;
        let link_selector = create_selector("a[href]")?;

        let first_links = doc
            .select(&product_selector)
            .filter_map(|div| div.select(&link_selector).next());
        Ok(hrefs_with_prefix(first_links, PRODUCT_PREFIX))
    }

    fn product_page(html: &str) -> Result<ProductPage> {
        let doc = Html::parse_document(html);
        let name_selector = create_selector("h1")?;
        let box_selector = create_selector("div.detail-fields-box")?;
        let item_selector = create_selector("li")?;
        let label_selector = create_selector("div.field-label")?;

        let mut page = ProductPage {
            name: first_text(&doc, &name_selector),
            ..Default::default()
        };

        let Some(fields_box) = doc.select(&box_selector).next() else {
            return Ok(page);
        };

        for item in fields_box.select(&item_selector) {
            let Some(label) = item.select(&label_selector).next() else {
                continue;
            };
            let label = stripped_text(label);
            let value = field_value(&stripped_text(item), &label);

            if label.starts_with(PRODUCT_NR_LABEL) {
                page.product_number = non_empty(value);
            } else if label.starts_with(CAS_NR_LABEL) {
                page.cas = non_empty(value.trim_matches(['[', ']']).to_owned());
            }
        }
        Ok(page)
    }
}

/// Item text with its label removed, e.g. `"CAS Nr.:[841251-37-4]"` -> `"[841251-37-4]"`.
fn field_value(item_text: &str, label: &str) -> String {
    let without_label = if label.is_empty() {
        item_text.to_owned()
    } else {
        item_text.replace(label, "")
    };
    without_label
        .trim_matches([' ', ':', '\n', '\t'])
        .to_owned()
}
