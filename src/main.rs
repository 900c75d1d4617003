use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_core::{CoreConfig, ListingSession, MemoryLocation};
use directory_feed::HttpDoctorSource;

mod render;
mod repl;

use repl::Command;

/// Main entry point for the interactive directory session
///
/// Fetches the doctor feed once, seeds the filters from the query string given as the
/// first argument (e.g. `"search=smith&sort=fees"`), then reads one command per line
/// from stdin. The view and the current address are printed after every command.
///
/// # Environment Variables
/// - `DIRECTORY_ENDPOINT`: doctor feed URL
/// - `DIRECTORY_FETCH_TIMEOUT_SECS`: feed request timeout (default: 10)
/// - `DIRECTORY_BASE_PATH`: path part of the listing address (default: "/")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("directory=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = CoreConfig::from_values(
        std::env::var("DIRECTORY_ENDPOINT").ok(),
        std::env::var("DIRECTORY_FETCH_TIMEOUT_SECS").ok(),
        std::env::var("DIRECTORY_BASE_PATH").ok(),
    )?;
    let query = std::env::args().nth(1).unwrap_or_default();

    tracing::info!("++ Starting doctor directory against {}", cfg.endpoint());

    let source = HttpDoctorSource::new(cfg.endpoint().clone(), cfg.fetch_timeout())?;
    let mut session = ListingSession::new(MemoryLocation::with_query(cfg.base_path(), &query));
    session.mount(&source).await;
    print!("{}", render::page(&session.view(), &session.location().href())?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", repl::HELP),
            Command::Url => println!("{}", session.location().href()),
            command => {
                repl::apply(&mut session, &source, command).await;
                print!("{}", render::page(&session.view(), &session.location().href())?);
            }
        }
    }

    session.teardown();
    Ok(())
}
