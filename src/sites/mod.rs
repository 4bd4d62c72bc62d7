//! Site specific extraction rules.
//!
//! Each catalogue site knows where its product list lives, which links on it are products and
//! where the name and CAS number sit on a product page. Everything else (fetching, ordering,
//! writing) is done by [`crate::process`].

use serde::{Deserialize, Serialize};

use crate::table::Row;
use crate::Result;

pub mod iolitec;
pub mod kegg;
pub mod proionic;

pub use iolitec::Iolitec;
pub use kegg::{CompoundListing, EntryFormat, KeggApi};
pub use proionic::Proionic;

/// One catalogue product as written to the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub cas: Option<String>,
    pub url: String,
}

impl Row for ProductRecord {
    const HEADER: &'static [&'static str] = &["name", "cas", "url"];
}

/// Fields found on a product page. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPage {
    pub name: Option<String>,
    pub cas: Option<String>,
    pub product_number: Option<String>,
}

impl ProductPage {
    pub fn into_record(self, url: impl Into<String>) -> ProductRecord {
        ProductRecord {
            name: self.name,
            cas: self.cas,
            url: url.into(),
        }
    }
}

/// A vendor catalogue: a list page linking to one page per product.
///
/// Parsing functions take no `self` so they can run on the blocking pool.
pub trait Catalogue {
    /// Page listing every product.
    fn list_url(&self) -> String;

    /// Absolute URL of a product link found on the list page.
    fn product_url(&self, link: &str) -> String;

    /// Product links on the list page, in document order.
    fn product_links(html: &str) -> Result<Vec<String>>;

    /// Fields of a single product page.
    fn product_page(html: &str) -> Result<ProductPage>;
}
