use chemscrape::process::{process_kegg, KeggOutputs};
use chemscrape::request::Fetcher;
use chemscrape::sites::KeggApi;
use chemscrape::{info_time, Result};
use chrono::Local;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let summary = process_kegg(&KeggApi::default(), &Fetcher::new(), &KeggOutputs::default()).await?;
    info_time!(
        start_time,
        "Full program time: {} compounds in {} batches",
        summary.compounds,
        summary.batches
    );

    Ok(())
}
