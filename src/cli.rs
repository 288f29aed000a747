use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Team rankings by points per game
    Stats,
    /// Live scoreboard
    Scoreboard,
}

/// True when the arguments ask for a configuration operation instead of reports.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_base_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// EuroBasket team rankings and live scoreboard.
///
/// Looks up the current endpoints from the EuroBasket API, then prints the team
/// ranking by points per game followed by the live scoreboard.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print only one report instead of both.
    #[arg(long = "only", value_enum, help_heading = "Report Options")]
    pub only: Option<ReportKind>,

    /// Resolve the endpoint links once and reuse them for both reports.
    /// By default each report looks up the links on its own.
    #[arg(long = "share-links", help_heading = "Report Options")]
    pub share_links: bool,

    /// API base URL for this run, overriding config and environment.
    #[arg(long = "base-url", help_heading = "Connection")]
    pub base_url: Option<String>,

    /// Root resource path for this run (for example /eurobasket/2025/today.json).
    #[arg(long = "root-path", help_heading = "Connection")]
    pub root_path: Option<String>,

    /// HTTP timeout in seconds for this run.
    #[arg(long = "timeout", help_heading = "Connection")]
    pub timeout: Option<u64>,

    /// Save a new API base URL to the config file.
    #[arg(long = "set-base-url", help_heading = "Configuration", value_name = "URL")]
    pub new_base_url: Option<String>,

    /// Save a custom log file path to the config file.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Reports to print, in order.
    pub fn reports(&self) -> Vec<ReportKind> {
        match self.only {
            Some(kind) => vec![kind],
            None => vec![ReportKind::Stats, ReportKind::Scoreboard],
        }
    }
}
