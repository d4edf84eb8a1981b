use std::process::ExitCode;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_server::cache::CacheConfig;
use transit_server::requests::{LoadError, RequestHandler, process_document, read_document};
use transit_server::web::{AppState, ServerConfig, create_router};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write response: {0}")]
    Output(#[source] std::io::Error),

    #[error("invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("usage: transit-server [serve <document.json>]")]
    Usage,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the response document.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => run_batch().await,
        [cmd, path] if cmd == "serve" => serve(path).await,
        _ => Err(CliError::Usage),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Read one document from stdin and print the responses to stdout.
async fn run_batch() -> Result<(), CliError> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(LoadError::Io)?;

    let responses = process_document(&input, &CacheConfig::default())?;
    let output = serde_json::to_string_pretty(&responses).map_err(LoadError::Json)?;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(output.as_bytes())
        .await
        .map_err(CliError::Output)?;
    stdout.write_all(b"\n").await.map_err(CliError::Output)?;
    stdout.flush().await.map_err(CliError::Output)?;
    Ok(())
}

/// Load the document's network once, then answer queries over HTTP.
async fn serve(path: &str) -> Result<(), CliError> {
    let config = ServerConfig::from_env()?;

    let doc = read_document(path).await?;
    let handler = RequestHandler::from_document(&doc, &CacheConfig::default())?;
    let app = create_router(AppState::new(handler));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(CliError::Server)?;
    info!(addr = %config.addr, "transit server listening");
    info!("  GET  /health  - Health check");
    info!("  POST /stat    - Answer stat requests");
    info!("  GET  /map     - Network map (SVG)");

    axum::serve(listener, app).await.map_err(CliError::Server)
}
