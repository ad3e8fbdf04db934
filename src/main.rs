//! CLI entry point for estatic

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "estatic")]
#[command(version)]
#[command(about = "A static site generator for real-estate content sites", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new article
    New {
        /// Title of the new article
        title: String,

        /// Category directory to place it in
        #[arg(long)]
        category: Option<String>,
    },

    /// Build the site into the public directory
    #[command(alias = "b")]
    Build {
        /// Watch for file changes and rebuild
        #[arg(short, long)]
        watch: bool,

        /// Build without reading the listings feed
        #[arg(long)]
        skip_listings: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Serve without file watching or live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the public directory
    Clean,

    /// List site information
    List {
        /// Type of content to list (posts, categories, tags, listings)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "estatic=debug,info"
    } else {
        "estatic=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            estatic::commands::init::init_site(&target_dir)?;
            println!("Initialized new site in {:?}", target_dir);
        }

        Commands::New { title, category } => {
            let site = estatic::Estatic::new(&base_dir)?;
            tracing::info!("Creating new article: {}", title);
            estatic::commands::new::run(&site, &title, category.as_deref())?;
        }

        Commands::Build {
            watch,
            skip_listings,
        } => {
            let site = estatic::Estatic::new(&base_dir)?;
            tracing::info!("Building site...");

            estatic::commands::build::run(&site, skip_listings).await?;
            println!("Generated successfully!");

            if watch {
                estatic::commands::build::watch(&site, skip_listings).await?;
            }
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = estatic::Estatic::new(&base_dir)?;

            // Build first so the server has something to serve
            tracing::info!("Building site...");
            estatic::commands::build::run(&site, false).await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            estatic::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = estatic::Estatic::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = estatic::Estatic::new(&base_dir)?;
            estatic::commands::list::run(&site, &r#type).await?;
        }

        Commands::Version => {
            println!("estatic version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
