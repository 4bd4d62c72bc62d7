use chemscrape::process::process_catalogue;
use chemscrape::request::Fetcher;
use chemscrape::sites::Iolitec;
use chemscrape::{info_time, Result, IOLITEC_PATH};
use chrono::Local;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    process_catalogue(&Iolitec::default(), &Fetcher::new(), IOLITEC_PATH).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
