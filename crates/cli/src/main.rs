use clap::{Parser, Subcommand};
use directory_core::{specialty_universe, suggest, CoreConfig, ListingSession, MemoryLocation};
use directory_feed::{DoctorSource, HttpDoctorSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Doctor directory CLI")]
struct Cli {
    /// Feed endpoint (overrides DIRECTORY_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List doctors for a listing query string
    List {
        /// Query string, e.g. "search=john&sort=fees"
        #[arg(long, default_value = "")]
        query: String,
        /// Print the matching doctors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest up to three doctor names for a search term
    Suggest {
        /// Partial doctor name
        term: String,
    },
    /// List every specialty in the directory
    Specialties,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("directory=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = CoreConfig::from_values(
        cli.endpoint
            .or_else(|| std::env::var("DIRECTORY_ENDPOINT").ok()),
        std::env::var("DIRECTORY_FETCH_TIMEOUT_SECS").ok(),
        std::env::var("DIRECTORY_BASE_PATH").ok(),
    )?;
    let source = HttpDoctorSource::new(cfg.endpoint().clone(), cfg.fetch_timeout())?;
    tracing::info!("reading doctor feed from {}", source.endpoint());

    match cli.command {
        Some(Commands::List { query, json }) => {
            let mut session =
                ListingSession::new(MemoryLocation::with_query(cfg.base_path(), &query));
            session.mount(&source).await;

            let view = session.view();
            if let Some(error) = view.error {
                anyhow::bail!(error.message);
            }

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(session.controller().display())?
                );
            } else {
                if let Some(header) = &view.header {
                    println!("{header}");
                }
                for card in &view.cards {
                    println!(
                        "{} | {} | {} | {} | {} {}",
                        card.name,
                        card.specialties,
                        card.experience,
                        card.fee,
                        card.clinic_name,
                        card.location
                    );
                }
                if let Some(empty) = &view.empty_state {
                    println!("{}. {}", empty.title, empty.hint);
                }
            }
            println!("URL: {}", session.location().href());
        }
        Some(Commands::Suggest { term }) => {
            let doctors = source.fetch().await;
            let suggestions = suggest(&term, &doctors);
            if suggestions.is_empty() {
                println!("No matching doctors.");
            }
            for suggestion in suggestions {
                println!("{}", suggestion.name);
            }
        }
        Some(Commands::Specialties) => {
            let doctors = source.fetch().await;
            for specialty in specialty_universe(&doctors) {
                println!("{specialty}");
            }
        }
        None => {
            println!("Use 'directory --help' for commands");
        }
    }

    Ok(())
}
