//! High score server entry point
//!
//! Configuration comes from command line flags, falling back to environment
//! variables (a `.env` file in the working directory is loaded first).

use clap::Parser;
use shared::logging;
use tokio::signal;

use highscore_server::services::JsonFileStorage;
use highscore_server::{Args, ServerConfig, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // Already-set variables win over .env entries
    let _ = dotenv::dotenv();

    let args = Args::parse();
    let config = ServerConfig::try_from(args)?;

    logging::init_tracing(Some(&config.log_level));
    logging::log_startup(&format!("high score server on {}", config.bind_address));

    let storage = JsonFileStorage::new(&config.scores_file);
    let webserver = WebServer::new(config, storage);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
            Err(err) => logging::log_error("Signal handling", &err),
        }
    };

    if let Err(e) = webserver.run(shutdown).await {
        logging::log_error("Web server", &e);
        return Err(e);
    }

    logging::log_success("WebServer stopped gracefully");
    Ok(())
}
