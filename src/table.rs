//! In-memory result tables and their tab-delimited serialization.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::{Error, Result, DELIMITER};

/// A fixed-shape output row. Field order must match `HEADER`.
pub trait Row: Serialize + DeserializeOwned {
    const HEADER: &'static [&'static str];
}

/// Ordered rows, written once with a fixed header. No dedup, no resorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable<R> {
    rows: Vec<R>,
}

impl<R> Default for ResultTable<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Row> ResultTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the header and every row. Missing fields become empty cells.
    pub fn to_tsv(&self) -> Result<Vec<u8>> {
        let mut wtr = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(Vec::new());

        // Written by hand so an empty table still gets its header.
        wtr.write_record(R::HEADER)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.into_inner()
            .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.to_string())))
    }

    /// Writes the table to `path`, creating parent directories and overwriting any old file.
    pub async fn write_tsv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        create_parent(path).await?;
        fs::write(path, self.to_tsv()?).await?;
        Ok(())
    }

    /// Parses a table written by `to_tsv`. The header must match exactly.
    pub fn from_tsv(rdr: impl Read) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .from_reader(rdr);

        let found = rdr.headers()?;
        if found.iter().ne(R::HEADER.iter().copied()) {
            return Err(Error::TableHeader {
                expected: R::HEADER.iter().map(|h| h.to_string()).collect(),
                found: found.iter().map(str::to_owned).collect(),
            });
        }

        let rows = rdr.deserialize().collect::<csv::Result<Vec<R>>>()?;
        Ok(Self { rows })
    }

    pub async fn read_tsv(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path).await?;
        Self::from_tsv(bytes.as_slice())
    }
}

pub(crate) async fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}

impl<R> FromIterator<R> for ResultTable<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<R> IntoIterator for ResultTable<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
