//! Campus Connector
//!
//! Main application entry point

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, error};

use CampusConnector::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    state::AppContext,
    handlers::{handle_command, Command},
    CampusError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", CampusConnector::info());
    info!(backend = %settings.backend.base_url, "Initializing services...");

    let services = ServiceFactory::new(&settings)?;
    let mut ctx = AppContext::from_factory(services);

    let mut stdout = tokio::io::stdout();

    // Equivalent of the app mounting: resolve the session straight away
    let reply = handle_command(&mut ctx, Command::Start).await;
    write_reply(&mut stdout, reply).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                write_reply(&mut stdout, Err(e)).await?;
                continue;
            }
        };

        let quit = command == Command::Quit;
        let reply = handle_command(&mut ctx, command).await;
        write_reply(&mut stdout, reply).await?;

        if quit {
            break;
        }
    }

    ctx.teardown().await;
    info!("Campus Connector has been shut down.");

    Ok(())
}

/// Print a handler result, turning failures into a short user-facing message
async fn write_reply(
    stdout: &mut tokio::io::Stdout,
    reply: Result<String, CampusError>,
) -> std::io::Result<()> {
    let text = match reply {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Command failed");
            format!("! {}", e.user_message())
        }
    };

    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await
}
