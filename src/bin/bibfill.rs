//! CLI binary for the DOI backfill tool.
//!
//! Usage: bibfill [path/to/publications.json]

#[cfg(feature = "cli")]
mod cli {
    use bibfill::CrossrefClient;
    use clap::Parser;
    use std::path::PathBuf;
    use std::process::ExitCode;

    /// Input file used when no path is given on the command line.
    const DEFAULT_INPUT: &str = "assets/data/publications.json";

    #[derive(Parser)]
    #[command(
        name = "bibfill",
        about = "Backfill missing DOI links in a publications JSON file via Crossref",
        version
    )]
    struct Cli {
        /// Path to the publications JSON file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    }

    pub async fn run() -> ExitCode {
        colog::init();
        let cli = Cli::parse();

        if !cli.input.exists() {
            eprintln!("Not found: {}", cli.input.display());
            return ExitCode::from(2);
        }

        let client = CrossrefClient::new();
        match bibfill::run::run(&cli.input, &client).await {
            Ok(summary) => {
                println!(
                    "\nDone. Updated {} missing links. Still missing {}.",
                    summary.updated, summary.still_missing
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    cli::run().await
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with: cargo build --features cli");
    std::process::exit(1);
}
