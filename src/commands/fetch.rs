use crate::core::{config::Config, feed::FeedManifest, fetch::Fetcher};
use crate::error::Result;
use std::path::PathBuf;

/// Download the feed archive and extract it into the target directory.
///
/// `url` and `dir` override the configured defaults for this invocation
/// without rewriting the config file.
pub fn fetch_feed(url: Option<&str>, dir: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    let feed_url = url.unwrap_or(&config.feed_url);
    let target_dir = dir.map(PathBuf::from).unwrap_or(config.target_dir);

    let fetcher = Fetcher::new();
    let report = fetcher.fetch_and_extract(feed_url, &target_dir)?;

    let manifest = FeedManifest::new(feed_url, report.files);
    manifest.save(&target_dir)?;

    println!(
        "✅ Extracted {} feed files ({} bytes) into {}",
        manifest.files.len(),
        report.bytes_downloaded,
        report.target_dir.display()
    );
    if report.skipped_entries > 0 {
        println!(
            "⚠️  Skipped {} archive entries with unsafe paths",
            report.skipped_entries
        );
    }

    Ok(())
}
