use crate::cli::{Args, ReportKind};
use crate::config::{Config, normalize_base_url};
use crate::data_fetcher::{Fetcher, LinkMap};
use crate::error::AppError;
use crate::report::{ReportOutcome, report_scoreboard, report_stats, resolve_links};
use std::io::Write;
use tracing::{info, instrument};

/// Heading written before each report.
pub fn report_banner(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Stats => "Fetching EuroBasket Team Stats:",
        ReportKind::Scoreboard => "Fetching EuroBasket Scoreboard:",
    }
}

/// Applies per-run command line overrides on top of the loaded config.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(base_url) = &args.base_url {
        config.api_base_url = normalize_base_url(base_url);
    }
    if let Some(root_path) = &args.root_path {
        config.root_path = root_path.clone();
    }
    if let Some(timeout) = args.timeout {
        config.http_timeout_seconds = timeout;
    }
    config.validate()
}

/// Runs `reports` in order, writing everything to `out`.
///
/// Each report resolves the link map on its own unless `share_links` is set,
/// in which case the first resolution (successful or not) is reused. A failed
/// report never stops the ones after it.
#[instrument(skip(fetcher, out))]
pub async fn run_reports<W: Write>(
    fetcher: &Fetcher,
    root_path: &str,
    reports: &[ReportKind],
    share_links: bool,
    out: &mut W,
) -> Result<Vec<ReportOutcome>, AppError> {
    let mut shared: Option<Option<LinkMap>> = None;
    let mut outcomes = Vec::with_capacity(reports.len());

    for (i, kind) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", report_banner(*kind))?;
        writeln!(out)?;

        let links = match &shared {
            Some(links) => links.clone(),
            None => {
                let links = resolve_links(fetcher, root_path, out).await?;
                if share_links {
                    shared = Some(links.clone());
                }
                links
            }
        };

        let outcome = match links {
            None => ReportOutcome::FetchFailed,
            Some(links) => match kind {
                ReportKind::Stats => report_stats(fetcher, &links, out).await?,
                ReportKind::Scoreboard => report_scoreboard(fetcher, &links, out).await?,
            },
        };

        info!("{kind:?} report finished: {outcome:?}");
        outcomes.push(outcome);
    }

    out.flush()?;
    Ok(outcomes)
}

/// Handles the default command: print the selected reports to stdout.
///
/// Reports are rendered into a buffer and written out once finished, so no
/// stdout lock is held while requests are in flight.
pub async fn handle_report_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let fetcher = Fetcher::from_config(config)?;
    let mut buffer = Vec::new();

    run_reports(
        &fetcher,
        &config.root_path,
        &args.reports(),
        args.share_links,
        &mut buffer,
    )
    .await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(&Config::get_config_path(), args).await?;
    if args.clear_log_file_path && args.new_log_file_path.is_none() {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the requested settings to the config file at `path` and saves it.
///
/// Environment overrides are not persisted. A file that exists but cannot be
/// parsed is left untouched and the parse error is returned.
pub async fn update_config_at(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_file_or_default(path).await?;

    if let Some(new_base_url) = &args.new_base_url {
        config.api_base_url = normalize_base_url(new_base_url);
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}
