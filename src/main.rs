//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Reads portfolio content (blog, projects, research) from markdown", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items of a category, newest first
    #[command(alias = "ls")]
    List {
        /// Category to list (blog, projects, research)
        category: String,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the route of every item in a category
    Paths {
        /// Category (blog, projects, research)
        category: String,
    },

    /// Print one item, with rendered HTML, as JSON
    Show {
        /// Category (blog, projects, research)
        category: String,

        /// Item id (file name without .md)
        id: String,
    },

    /// Show featured content for a page
    Featured {
        /// Page (home, blog, research)
        #[arg(default_value = "home")]
        page: String,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the reading time of a markdown file
    ReadingTime {
        /// Markdown file
        file: PathBuf,
    },

    /// Write all content as JSON data files into the public folder
    Export,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { category, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &category, json)?;
        }

        Commands::Paths { category } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::paths(&folio, &category)?;
        }

        Commands::Show { category, id } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::show(&folio, &category, &id)?;
        }

        Commands::Featured { page, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::featured(&folio, &page, json)?;
        }

        Commands::ReadingTime { file } => {
            let file = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            folio_rs::commands::list::reading_time(&file)?;
        }

        Commands::Export => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Exporting content from {:?}", folio.content_dir);
            let out_dir = folio_rs::commands::export::run(&folio)?;
            println!("Exported to {:?}", out_dir);
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
