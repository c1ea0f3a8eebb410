//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use summary_domain::{ConfigOverrides, FetchStrategy, OutputFormat, SessionContext};

/// Output format for the rendered summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Formatted console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for session-summary
#[derive(Parser, Debug)]
#[command(name = "session-summary")]
#[command(author, version, about = "Show the clarifier answers and conflicts recorded for a session")]
#[command(long_about = r#"
Session Summary fetches what the clarifier and the conflict resolver recorded
for one session and prints it.

Both --session-id and --user-id are needed to fetch anything. Without them the
summary stays in its loading state.

Configuration files are loaded from (in priority order):
1. SESSION_SUMMARY_* environment variables
2. --config <path>     Explicit config file
3. ./summary.toml      Project-level config
4. ~/.config/session-summary/config.toml   Global config

Example:
  session-summary --session-id s1 --user-id u1 --idea "A travel planner"
  session-summary --session-id s1 --user-id u1 -o json
  session-summary --session-id s1 --user-id u1 --base-url http://localhost:5000
"#)]
pub struct Cli {
    /// Session to summarize
    #[arg(long, value_name = "ID")]
    pub session_id: Option<String>,

    /// User the session belongs to
    #[arg(long, value_name = "ID")]
    pub user_id: Option<String>,

    /// The user's idea, shown in the session header
    #[arg(long, value_name = "TEXT")]
    pub idea: Option<String>,

    /// Backend base URL (overrides backend.base_url)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Fetch clarifiers and conflicts at the same time
    #[arg(long)]
    pub concurrent: bool,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (SESSION_SUMMARY_* variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The session context described by the arguments.
    pub fn session_context(&self) -> SessionContext {
        SessionContext::new(
            self.session_id.clone(),
            self.user_id.clone(),
            self.idea.clone(),
        )
    }

    /// The configuration settings overridden by flags.
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            strategy: self.concurrent.then_some(FetchStrategy::Concurrent),
            format: self.output.map(OutputFormat::from),
            no_color: self.no_color,
        }
    }
}
