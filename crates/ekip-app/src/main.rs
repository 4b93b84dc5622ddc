mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use ekip_client::HttpKnowledgeClient;
use ekip_common::EkipError;
use ekip_config::{EkipConfig, LogLevel};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Existing variables win over file entries.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/ekip-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            let unset = parse_dotenv(&contents)
                .into_iter()
                .filter(|(key, _)| std::env::var_os(key).is_none());
            for (key, value) in unset {
                std::env::set_var(key, value);
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .collect()
}

/// Filter directive: `--log-level` first, then the configured level.
///
/// A flag that is not a plain level name is passed through as a raw
/// directive (e.g. `ekip_client=trace,reqwest=debug`).
fn log_directive(flag: Option<&str>, config: &EkipConfig) -> String {
    match flag {
        Some(flag) => LogLevel::parse(flag)
            .map(|level| level.directive().to_string())
            .unwrap_or_else(|| flag.to_string()),
        None => config.logging.level.directive().to_string(),
    }
}

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            let fallback = LogLevel::default().directive();
            eprintln!("invalid log directive {directive:?} ({e}), using {fallback}");
            EnvFilter::new(fallback)
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    // Before the runtime starts, while this is the only thread.
    load_dotenv();

    let args = cli::parse();

    // Loaded before logging so the configured level applies; failures are
    // reported once the subscriber is up.
    let loaded = ekip_config::load_config(args.config.as_deref().map(Path::new));
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&log_directive(args.log_level.as_deref(), &config));
    tracing::info!("ekip v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(url) = args.api_url {
        tracing::info!("Using API URL override: {url}");
        config.server.base_url = url;
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(&config, args.email)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("ekip stopped: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &EkipConfig, email: Option<String>) -> ekip_common::Result<()> {
    let client = HttpKnowledgeClient::new(&config.server)
        .map_err(|e| EkipError::Client(e.to_string()))?;
    tracing::info!(base_url = client.base_url(), "knowledge service client ready");

    let app = app_state::EkipApp::new(Arc::new(client), config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    app.run(stdin, email).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_lines() {
        let parsed = parse_dotenv(
            "# comment\n\nEKIP_API_URL=\"http://kb/api\"\n EKIP_LOG_LEVEL = debug \nnot a pair\n",
        );
        assert_eq!(
            parsed,
            vec![("EKIP_API_URL", "http://kb/api"), ("EKIP_LOG_LEVEL", "debug")]
        );
    }

    #[test]
    fn dotenv_quotes_and_blank_values() {
        let parsed = parse_dotenv("A='single'\nB=\nC = \"x=y\"\n");
        assert_eq!(parsed, vec![("A", "single"), ("B", ""), ("C", "x=y")]);
    }

    #[test]
    fn flag_level_wins_over_config() {
        let mut config = EkipConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(Some("debug"), &config), "ekip=debug");
        assert_eq!(log_directive(None, &config), "ekip=warn");
    }

    #[test]
    fn raw_directive_passes_through() {
        let config = EkipConfig::default();
        assert_eq!(
            log_directive(Some("ekip_client=trace"), &config),
            "ekip_client=trace"
        );
    }
}
