use chemscrape::process::process_catalogue;
use chemscrape::request::Fetcher;
use chemscrape::sites::Proionic;
use chemscrape::{info_time, Result, PROIONIC_PATH};
use chrono::Local;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    process_catalogue(&Proionic::default(), &Fetcher::new(), PROIONIC_PATH).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
