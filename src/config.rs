//! Configuration loading.
//!
//! The backend base URL is configuration, not protocol: the default targets
//! a local-development backend, and reverse-proxy deployments pass an
//! explicit path-prefixed URL instead. Layering, lowest to highest
//! precedence: built-in defaults, optional YAML file, `RAGCHAT_`-prefixed
//! environment variables, CLI flags.

use std::env;
use std::time::Duration;

use clap::Parser;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default backend origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Config file looked up in the working directory when none is given.
const CWD_CONFIG_FILE: &str = "ragchat.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal chat client for a RAG document-QA backend")]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Backend base URL (e.g. http://127.0.0.1:8000 or https://host/api)
    #[arg(long, env = "RAGCHAT_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "RAGCHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Resolved application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Backend endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root under which `upload`, `ask` and `clearDB` are joined.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(env::args())
    }

    /// Load configuration from explicit arguments (testable entry point).
    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.request_timeout_secs", DEFAULT_TIMEOUT_SECS)?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        } else if std::path::Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::new(CWD_CONFIG_FILE, FileFormat::Yaml));
        }

        // E.g. RAGCHAT_API__BASE_URL=https://rag.example.com/api
        builder = builder.add_source(
            Environment::with_prefix("RAGCHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags win; clap's `env` fallbacks make the unprefixed
        // RAGCHAT_BASE_URL / RAGCHAT_TIMEOUT_SECS variables land here too.
        if let Some(base_url) = cli.base_url {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Some(secs) = cli.timeout_secs {
            builder = builder.set_override("api.request_timeout_secs", secs)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
