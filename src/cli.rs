//! CLI mode implementation
//!
//! Provides the command-line interface for the photo search session

use crate::config::{Config, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::error::ConfigError;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// unsplash-search CLI
#[derive(Parser, Debug)]
#[command(name = "unsplash-search")]
#[command(about = "Search Unsplash photos from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search and print the results
    Search(SearchArgs),
    /// Read search terms from stdin, one per line
    Interactive,
    /// Print the Unsplash API documentation
    Docs,
}

/// Connection settings shared by every command
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Unsplash access key
    #[arg(long, global = true, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "UNSPLASH_API_BASE", hide = true)]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    /// Validate the settings into a `Config`
    pub fn to_config(&self, page_size: Option<u32>) -> Result<Config, ConfigError> {
        let config = Config::new(self.access_key.as_deref(), self.api_base.as_deref())?
            .with_timeout(Duration::from_secs(self.timeout_secs.max(1)));
        Ok(config.with_page_size(page_size.unwrap_or(DEFAULT_PAGE_SIZE)))
    }
}

/// Search command arguments
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search term (3-250 characters)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Results per page (default 20, max 30)
    #[arg(short = 'l', long)]
    pub limit: Option<u32>,

    /// Print the session state as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from([
            "unsplash-search",
            "search",
            "-q",
            "mountains",
            "-l",
            "10",
            "--access-key",
            "abc",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.query, "mountains");
                assert_eq!(args.limit, Some(10));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.api.access_key.as_deref(), Some("abc"));
        assert_eq!(cli.api.timeout_secs, 30);
    }

    #[test]
    fn test_parse_docs_and_flags() {
        let cli = Cli::try_parse_from(["unsplash-search", "--verbose", "docs"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Docs)));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["unsplash-search", "search"]).is_err());
    }

    #[test]
    fn test_api_args_to_config() {
        let api = ApiArgs {
            access_key: Some("key".to_string()),
            api_base: Some("http://127.0.0.1:9999".to_string()),
            timeout_secs: 5,
        };
        let config = api.to_config(Some(50)).unwrap();
        assert_eq!(config.page_size, 30);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.search_endpoint().as_str(),
            "http://127.0.0.1:9999/search/photos"
        );

        let api = ApiArgs {
            access_key: None,
            api_base: None,
            timeout_secs: 30,
        };
        assert!(matches!(api.to_config(None), Err(ConfigError::MissingApiKey)));
    }
}
