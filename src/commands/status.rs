use crate::core::{config::Config, feed::FeedManifest};
use crate::error::Result;
use std::path::PathBuf;

pub fn show_status(dir: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let target_dir = dir.map(PathBuf::from).unwrap_or(config.target_dir);

    let manifest = match FeedManifest::load(&target_dir)? {
        Some(manifest) => manifest,
        None => {
            println!("No feed fetched into {} yet.", target_dir.display());
            println!();
            println!("To fetch the configured feed, run:");
            println!("  gtfsget fetch");
            return Ok(());
        }
    };

    println!("Feed directory: {}", target_dir.display());
    println!("Source URL:     {}", manifest.source_url);
    println!(
        "Fetched at:     {}",
        manifest.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Files:          {}", manifest.files.len());

    Ok(())
}
