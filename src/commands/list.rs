use crate::core::{config::Config, feed};
use crate::error::Result;
use crate::utils::fs;
use std::path::PathBuf;

pub fn list_files(dir: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let target_dir = dir.map(PathBuf::from).unwrap_or(config.target_dir);

    if !target_dir.exists() {
        println!("Feed directory {} does not exist.", target_dir.display());
        println!();
        println!("To fetch the configured feed, run:");
        println!("  gtfsget fetch");
        return Ok(());
    }

    let files: Vec<_> = fs::list_files(&target_dir)?
        .into_iter()
        .filter(|(name, _)| name.as_os_str() != feed::MANIFEST_FILE)
        .collect();

    if files.is_empty() {
        println!("No feed files in {}.", target_dir.display());
        println!();
        println!("To fetch the configured feed, run:");
        println!("  gtfsget fetch");
        return Ok(());
    }

    println!("Feed files in {}:", target_dir.display());
    println!();
    for (name, size) in files {
        println!("  {} ({size} bytes)", name.display());
    }

    Ok(())
}
