//! EuroBasket statistics client library
//!
//! Discovers the current EuroBasket API endpoints from a root resource and
//! renders two console reports from them: team rankings by points per game
//! and the live scoreboard.
//!
//! # Examples
//!
//! ```rust,no_run
//! use eurobasket_stats::data_fetcher::{Fetcher, get_links};
//! use eurobasket_stats::report::report_stats;
//! use eurobasket_stats::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let fetcher = Fetcher::from_config(&config)?;
//!
//!     let links = get_links(&fetcher, &config.root_path).await?;
//!     report_stats(&fetcher, &links, &mut std::io::stdout()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod document;
pub mod error;
pub mod logging;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{Fetcher, LinkMap, get_links};
pub use error::AppError;
pub use report::{ReportOutcome, report_scoreboard, report_stats};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
