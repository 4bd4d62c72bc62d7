//! KEGG REST API: compound list and batched entry retrieval.

use serde::{Deserialize, Serialize};

use crate::table::{ResultTable, Row};
use crate::KEGG_API_URL;

/// A row of `list/cpd`: the compound id and its `;`-separated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundListing {
    pub kegg_id: String,
    pub name: Option<String>,
}

impl Row for CompoundListing {
    const HEADER: &'static [&'static str] = &["kegg_id", "name"];
}

/// Representation requested from `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    /// Flat file database entry.
    Entry,
    /// MDL MOL file.
    Mol,
}

impl EntryFormat {
    pub fn label(self) -> &'static str {
        match self {
            EntryFormat::Entry => "entries",
            EntryFormat::Mol => "MOL files",
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeggApi {
    base_url: String,
}

impl Default for KeggApi {
    fn default() -> Self {
        Self::new(KEGG_API_URL)
    }
}

impl KeggApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}/list/cpd", self.base_url)
    }

    /// `get` URL for a batch. KEGG answers in the order the ids are joined.
    pub fn get_url(&self, ids: &[String], format: EntryFormat) -> String {
        let joined = ids.join("+");
        match format {
            EntryFormat::Entry => format!("{}/get/{joined}", self.base_url),
            EntryFormat::Mol => format!("{}/get/{joined}/mol", self.base_url),
        }
    }
}

/// Parses the tab separated body of `list/cpd`.
/// A line without a tab is kept as an id with no name.
pub fn parse_compound_list(body: &str) -> ResultTable<CompoundListing> {
    body.lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((id, name)) => CompoundListing {
                kegg_id: id.to_owned(),
                name: (!name.is_empty()).then(|| name.to_owned()),
            },
            None => CompoundListing {
                kegg_id: line.to_owned(),
                name: None,
            },
        })
        .collect()
}
