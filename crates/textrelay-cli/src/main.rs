//! TextRelay CLI - scrape configured pages and forward their text

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use textrelay::{extract_visible_text, run, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// TextRelay - web page text extraction and webhook delivery
#[derive(Parser, Debug)]
#[command(name = "textrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process the target list: fetch, extract, and deliver each page
    Run {
        /// Target URL, repeatable; replaces the built-in target list
        #[arg(long = "url")]
        urls: Vec<String>,

        /// Override the webhook endpoint (also settable via WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,
    },
    /// Extract visible text from a local HTML file ("-" reads stdin)
    Extract {
        /// HTML file to normalize
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Some(Commands::Extract { file }) => run_extract(&file),
        Some(Commands::Run { urls, webhook_url }) => {
            run_pipeline(build_config(urls, webhook_url)).await;
        }
        None => run_pipeline(Config::from_env()).await,
    }
}

/// Apply CLI overrides on top of the environment configuration
fn build_config(urls: Vec<String>, webhook_url: Option<String>) -> Config {
    let mut config = Config::from_env();
    if !urls.is_empty() {
        config.target_urls = urls;
    }
    if let Some(url) = webhook_url {
        config.webhook_url = url;
    }
    config
}

async fn run_pipeline(config: Config) {
    match run(&config).await {
        Ok(summary) => {
            info!(
                attempted = summary.attempted,
                delivered = summary.delivered,
                failed = summary.failed,
                "run complete"
            );
            // Per-URL failures are reported above and are not fatal
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_extract(file: &PathBuf) {
    match read_input(file) {
        Ok(html) => writeln_safe(&extract_visible_text(&html)),
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}

/// Read an HTML document from a file, or from stdin when the path is "-"
fn read_input(file: &PathBuf) -> io::Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_config_overrides() {
        let config = build_config(
            vec!["https://one.example/".to_string()],
            Some("https://hooks.example/ingest".to_string()),
        );
        assert_eq!(config.target_urls, vec!["https://one.example/"]);
        assert_eq!(config.webhook_url, "https://hooks.example/ingest");
    }

    #[test]
    fn test_build_config_keeps_defaults_without_overrides() {
        let config = build_config(Vec::new(), None);
        assert!(!config.target_urls.is_empty());
    }
}
