//! Scrapers for compound and ionic liquid catalogues.
//!
//! Three pipelines share this crate, each run by its own binary:
//! - `kegg-download`: KEGG compound list, flat entries and MOL files.
//! - `scrape-iolitec`: IoLiTec ionic liquid catalogue.
//! - `scrape-proionic`: proionic webshop.
//!
//! Every pipeline is sequential and fail-fast: the first failed request aborts the run.

mod error;
#[doc(hidden)]
pub mod macros;

pub mod batch;
pub mod parse;
pub mod process;
pub mod request;
pub mod sites;
pub mod table;

pub use error::{Error, Result};

/// Number of identifiers KEGG accepts in a single `get` request.
pub const BATCH_SIZE: usize = 10;
/// Cell delimiter of every table written by the crate.
pub const DELIMITER: u8 = b'\t';

pub const KEGG_API_URL: &str = "https://rest.kegg.jp";
pub const IOLITEC_URL: &str = "https://iolitec.de";
pub const PROIONIC_URL: &str = "https://proionic.com";

pub const COMPOUND_LIST_PATH: &str = "data/compounds-list.tsv";
pub const COMPOUND_ENTRIES_PATH: &str = "data/compounds.kegg";
pub const COMPOUND_MOL_PATH: &str = "data/compounds.mol";
pub const IOLITEC_PATH: &str = "data/iolitec-raw.tsv";
pub const PROIONIC_PATH: &str = "data/proionic-raw.tsv";
