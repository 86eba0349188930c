//! Command line and environment configuration

use clap::Parser;
use shared::ScoreLimits;
use shared::ranking::{DEFAULT_CAPACITY, DEFAULT_TOP_N};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{WebServerError, WebServerResult};

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug, Clone)]
#[command(name = "highscore-server")]
#[command(about = "Serves the game page and its high score API")]
pub struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file holding the persisted high scores
    #[arg(long, env = "HIGHSCORES_FILE", default_value = "highscores.json")]
    pub scores_file: PathBuf,

    /// Static assets directory, served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Directory containing index.html
    #[arg(long, env = "TEMPLATES_DIR", default_value = "./templates")]
    pub templates_dir: PathBuf,

    /// Number of scores kept after each submission
    #[arg(long, env = "HIGHSCORES_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Number of scores returned by the listing endpoint
    #[arg(long = "top", env = "HIGHSCORES_TOP", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub scores_file: PathBuf,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub limits: ScoreLimits,
    pub log_level: String,
}

impl ServerConfig {
    /// Defaults suitable for tests: loopback, ephemeral port
    pub fn for_scores_file(scores_file: impl Into<PathBuf>) -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
            scores_file: scores_file.into(),
            static_dir: PathBuf::from("./static"),
            templates_dir: PathBuf::from("./templates"),
            limits: ScoreLimits::default(),
            log_level: "info".to_string(),
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = WebServerError;

    fn try_from(args: Args) -> WebServerResult<Self> {
        let host: IpAddr = args
            .host
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {}", args.host, e)))?;

        let limits = ScoreLimits::new(args.capacity, args.top_n)?;

        Ok(Self {
            bind_address: SocketAddr::new(host, args.port),
            scores_file: args.scores_file,
            static_dir: args.static_dir,
            templates_dir: args.templates_dir,
            limits,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["highscore-server"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_arguments() {
        let args = parse(&[
            "--host", "127.0.0.1",
            "--port", "8080",
            "--scores-file", "/tmp/scores.json",
            "--capacity", "30",
            "--top", "5",
        ]);

        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.scores_file, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.limits, ScoreLimits { capacity: 30, top_n: 5 });
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let args = parse(&["--host", "not-an-ip"]);

        let result = ServerConfig::try_from(args);

        assert!(matches!(result, Err(WebServerError::Config(_))));
    }

    #[test]
    fn test_top_larger_than_capacity_is_rejected() {
        let args = parse(&["--capacity", "5", "--top", "10"]);

        assert!(ServerConfig::try_from(args).is_err());
    }
}
