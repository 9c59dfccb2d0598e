/// Groove Player - terminal front end
use clap::{Parser, Subcommand};
use groove_cli::{build_session, load_catalog, AppConfig, TerminalPresenter};
use groove_library::{filter_catalog, SearchResult};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "groove")]
#[command(about = "Groove Player in the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./groove.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON file, overriding the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Play,
    /// List the catalog
    Tracks,
    /// Search the catalog by title or artist
    Search {
        /// Text to match
        query: String,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr keeps the prompt on stdout clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groove=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    config.validate()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play(&config)?,
        Commands::Tracks => {
            let catalog = load_catalog(&config)?;
            for (i, track) in catalog.iter().enumerate() {
                println!("{:>3}. {} - {}", i + 1, track.title, track.artist);
            }
        }
        Commands::Search { query } => {
            let catalog = load_catalog(&config)?;
            match filter_catalog(&query, &catalog) {
                SearchResult::NotSearched => println!("Type something to search"),
                SearchResult::NoMatches => println!("No results for \"{query}\""),
                SearchResult::Matches(hits) => {
                    for hit in hits {
                        println!(
                            "{:>3}. {} - {}",
                            hit.index + 1,
                            hit.track.title,
                            hit.track.artist
                        );
                    }
                }
            }
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn play(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    tracing::info!(tracks = catalog.len(), "Starting Groove session");

    let (mut session, clock) = build_session(config, catalog.clone())?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout(), clock, catalog);
    if interactive {
        println!("Type `help` for commands.");
    } else {
        presenter = presenter.without_prompt();
    }

    groove_session::run(&mut session, &mut presenter);

    tracing::info!("Session ended");
    Ok(())
}
