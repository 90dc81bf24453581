//! Landing CLI
//!
//! Generates the home page of a framework documentation site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Landing.
#[derive(Parser)]
#[command(
    name = "landing",
    version,
    about = "Home page generator for framework documentation sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the home page and copy static files
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override site base URL (e.g., /my-docs/)
        #[arg(long)]
        base_url: Option<String>,
        /// Also write the page layout as index.json
        #[arg(long)]
        layout: bool,
    },
    /// Serve a live-rendered preview
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Base URL to mount the preview under (e.g., /my-docs/)
        #[arg(long, default_value = "/")]
        base_url: String,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Validate configuration and showcase icons
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    landing::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            base_url,
            layout,
        } => {
            landing::cmd::build::run(
                &cli.config,
                output.as_deref(),
                base_url.as_deref(),
                layout,
            )?;
        }
        Commands::Serve {
            port,
            base_url,
            open,
        } => {
            landing::cmd::serve::run(&cli.config, port, &base_url, open).await?;
        }
        Commands::Check { strict } => {
            landing::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
