//! The pipelines: discover, fetch one request at a time, extract, write.
//!
//! Nothing here retries. The first error is returned and the run ends, leaving whatever was
//! already written on disk.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::{fs::File, io::AsyncWriteExt, task::spawn_blocking};

use crate::batch::{batch_count, batches};
use crate::request::Fetcher;
use crate::sites::kegg::parse_compound_list;
use crate::sites::{Catalogue, EntryFormat, KeggApi, ProductRecord};
use crate::table::{create_parent, ResultTable};
use crate::{
    info_time, Result, BATCH_SIZE, COMPOUND_ENTRIES_PATH, COMPOUND_LIST_PATH, COMPOUND_MOL_PATH,
};

/// Output files of the KEGG pipeline.
#[derive(Debug, Clone)]
pub struct KeggOutputs {
    pub list: PathBuf,
    pub entries: PathBuf,
    pub mol: PathBuf,
}

impl Default for KeggOutputs {
    fn default() -> Self {
        Self {
            list: COMPOUND_LIST_PATH.into(),
            entries: COMPOUND_ENTRIES_PATH.into(),
            mol: COMPOUND_MOL_PATH.into(),
        }
    }
}

impl KeggOutputs {
    /// Same file names, placed in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let name = |p: &str| dir.join(Path::new(p).file_name().unwrap_or_default());
        Self {
            list: name(COMPOUND_LIST_PATH),
            entries: name(COMPOUND_ENTRIES_PATH),
            mol: name(COMPOUND_MOL_PATH),
        }
    }

    fn for_format(&self, format: EntryFormat) -> &Path {
        match format {
            EntryFormat::Entry => &self.entries,
            EntryFormat::Mol => &self.mol,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeggSummary {
    pub compounds: usize,
    /// Requests made per format.
    pub batches: usize,
}

/// Downloads the compound list, then every compound's flat entry and MOL file in batches.
pub async fn process_kegg(
    api: &KeggApi,
    fetcher: &Fetcher,
    outputs: &KeggOutputs,
) -> Result<KeggSummary> {
    let start_time = Local::now();
    info_time!("Started KEGG download");

    let body = fetcher.fetch_text(&api.list_url()).await?;
    let compounds = off_thread(move || parse_compound_list(&body)).await?;
    compounds.write_tsv(&outputs.list).await?;
    info_time!(
        start_time,
        "Listed {} compounds, wrote {}",
        compounds.len(),
        outputs.list.display()
    );

    let ids = compounds
        .into_iter()
        .map(|c| c.kegg_id)
        .collect::<Vec<_>>();

    for format in [EntryFormat::Entry, EntryFormat::Mol] {
        stream_batches(api, fetcher, &ids, format, outputs.for_format(format)).await?;
    }

    info_time!(start_time, "Finished KEGG download");
    Ok(KeggSummary {
        compounds: ids.len(),
        batches: batch_count(ids.len(), BATCH_SIZE),
    })
}

/// Appends the response for every batch of `ids` to `path`, in batch order.
async fn stream_batches(
    api: &KeggApi,
    fetcher: &Fetcher,
    ids: &[String],
    format: EntryFormat,
    path: &Path,
) -> Result<()> {
    let start_time = Local::now();
    let total = batch_count(ids.len(), BATCH_SIZE);

    create_parent(path).await?;
    let mut file = File::create(path).await?;

    for (i, batch) in batches(ids, BATCH_SIZE)?.enumerate() {
        let body = fetcher.fetch_text(&api.get_url(batch, format)).await?;
        file.write_all(body.as_bytes()).await?;
        info_time!("Retrieved {} batch {}/{}", format.label(), i + 1, total);
    }
    file.flush().await?;

    info_time!(start_time, "Wrote {} {} to {}", ids.len(), format.label(), path.display());
    Ok(())
}

/// Scrapes every product linked from the catalogue's list page and writes `name`, `cas`, `url`.
pub async fn process_catalogue<C>(
    site: &C,
    fetcher: &Fetcher,
    output: impl AsRef<Path>,
) -> Result<ResultTable<ProductRecord>>
where
    C: Catalogue + 'static,
{
    let output = output.as_ref();
    let start_time = Local::now();
    let list_url = site.list_url();
    info_time!("Started scraping {list_url}");

    let html = fetcher.fetch_text(&list_url).await?;
    let links = off_thread(move || C::product_links(&html)).await??;
    info_time!(start_time, "Found {} product links", links.len());

    let mut table = ResultTable::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        let url = site.product_url(link);
        let html = fetcher.fetch_text(&url).await?;
        let page = off_thread(move || C::product_page(&html)).await??;

        info_time!(
            "Product {}/{}: {}",
            i + 1,
            links.len(),
            page.name.as_deref().unwrap_or("<no name>")
        );
        table.push(page.into_record(url));
    }

    table.write_tsv(output).await?;
    info_time!(start_time, "Wrote {} products to {}", table.len(), output.display());
    Ok(table)
}

/// Runs HTML parsing on the blocking pool; `scraper::Html` can't be held across an await.
async fn off_thread<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(spawn_blocking(f).await?)
}
