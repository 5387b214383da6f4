use anyhow::Context;
use retry_get::{Fetcher, DEFAULT_URL};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when no URL argument is given.
const URL_ENV: &str = "RETRY_GET_URL";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn target_url() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(URL_ENV).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_URL.to_owned())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let url = target_url();
    tracing::debug!(%url, "fetching");

    let report = Fetcher::new()
        .fetch(&url)
        .await
        .context("error handling request")?;

    println!("Received {} bytes of data", report.bytes);
    println!("Successfully completed request");
    Ok(())
}
