use anyhow::Result;
use clap::{Parser, Subcommand};

// Use the library modules
use gtfsget::commands;

#[derive(Parser)]
#[clap(name = "gtfsget")]
#[clap(about = "GTFS transit feed fetcher")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the feed archive and extract it (default command)
    Fetch {
        /// Feed archive URL (overrides the configured default)
        #[clap(long)]
        url: Option<String>,
        /// Directory to extract into (overrides the configured default)
        #[clap(long)]
        dir: Option<String>,
    },
    /// Show when and from where the feed was last fetched
    Status {
        /// Feed directory to inspect
        #[clap(long)]
        dir: Option<String>,
    },
    /// List the extracted feed files
    List {
        /// Feed directory to inspect
        #[clap(long)]
        dir: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Bare `gtfsget` behaves like `gtfsget fetch`
    let command = cli.command.unwrap_or(Commands::Fetch {
        url: None,
        dir: None,
    });

    let result = match command {
        Commands::Fetch { url, dir } => commands::fetch::fetch_feed(url.as_deref(), dir.as_deref())
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Status { dir } => {
            commands::status::show_status(dir.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List { dir } => {
            commands::list::list_files(dir.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
