//! Fetch a release and its community rating.
//!
//! Usage: DISCOGS_API_TOKEN=... cargo run --example fetch_release

use discogs_rs::{DiscogsClient, ReleaseId};

#[tokio::main]
async fn main() -> discogs_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = DiscogsClient::new()?;
    let id = ReleaseId::new(249504);

    let release = client.releases().get(id).await?;
    println!("{} ({})", release.title, release.year.unwrap_or(0));
    for track in &release.tracklist {
        println!("  {} {} [{}]", track.position, track.title, track.duration);
    }

    let rating = client.releases().community_rating(id).await?;
    println!(
        "Community: {:.2} across {} ratings",
        rating.rating.average, rating.rating.count
    );

    let snapshot = client.rate_limit();
    println!(
        "Rate limit: {}/{} used, {} remaining",
        snapshot.used, snapshot.limit, snapshot.remaining
    );

    Ok(())
}
