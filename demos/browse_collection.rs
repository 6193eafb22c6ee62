//! Page through a user's collection, sorted by artist.
//!
//! Usage: DISCOGS_USER_NAME=... DISCOGS_API_TOKEN=... \
//!     cargo run --example browse_collection

use discogs_rs::api::PageQuery;
use discogs_rs::DiscogsClient;

#[tokio::main]
async fn main() -> discogs_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = DiscogsClient::new()?;

    let folders = client.collection().folders().await?;
    for folder in &folders.folders {
        println!("folder {}: {} ({} releases)", folder.id, folder.name, folder.count);
    }

    let mut page_number = 1;
    loop {
        let page = client
            .collection()
            .list(Some(PageQuery::default().sort("artist").page(page_number)))
            .await?;

        for item in &page.releases {
            let info = &item.basic_information;
            let artist = info
                .artists
                .first()
                .map(|a| a.name.as_str())
                .unwrap_or("Unknown");
            println!("{} - {} ({})", artist, info.title, info.year.unwrap_or(0));
        }

        match page.pagination.next_page() {
            Some(next) => page_number = next,
            None => break,
        }
    }

    Ok(())
}
