//! Console reports built from linked API documents.
//!
//! Both reports follow the same two-hop pattern: look up a named link, fetch
//! the document behind it, render it. Soft failures (missing link, failed
//! fetch) are written to the output as a single line and reported back as a
//! [`ReportOutcome`]; only console write errors propagate.

pub mod scoreboard;
pub mod stats;

use serde_json::Value;
use std::io::Write;
use tracing::{error, warn};

use crate::data_fetcher::{Fetcher, LinkMap, get_links};
use crate::error::AppError;

pub use scoreboard::{Game, TeamScore, render_scoreboard, report_scoreboard};
pub use stats::{TeamStat, rank_teams, render_rankings, report_stats};

/// How a report run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The document was fetched and `entries` rows were written.
    Rendered { entries: usize },
    /// The link map had no entry for `key`; nothing was fetched.
    MissingLink { key: String },
    /// A request failed; its diagnostic line was written.
    FetchFailed,
    /// The linked document came back empty; nothing was written.
    NoData,
}

/// Result of following one named link.
pub(crate) enum Linked {
    Document(Value),
    Skipped(ReportOutcome),
}

/// Writes the diagnostic line for a failed fetch of `endpoint`.
pub fn write_fetch_error<W: Write>(
    out: &mut W,
    endpoint: &str,
    err: &AppError,
) -> Result<(), AppError> {
    writeln!(out, "Error fetching data from {endpoint}: {err}")?;
    Ok(())
}

/// Fetches the root resource, writing a diagnostic line on failure.
pub async fn resolve_links<W: Write>(
    fetcher: &Fetcher,
    root_path: &str,
    out: &mut W,
) -> Result<Option<LinkMap>, AppError> {
    match get_links(fetcher, root_path).await {
        Ok(links) => Ok(Some(links)),
        Err(e) if e.is_api_error() => {
            error!("Link resolution failed: {e}");
            write_fetch_error(out, root_path, &e)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Follows link `key`, writing `missing_message` when the link is absent and
/// a diagnostic line when the fetch fails.
pub(crate) async fn fetch_linked<W: Write>(
    fetcher: &Fetcher,
    links: &LinkMap,
    key: &str,
    missing_message: &str,
    out: &mut W,
) -> Result<Linked, AppError> {
    let Some(endpoint) = links.get(key) else {
        warn!("Link '{key}' not present in link map");
        writeln!(out, "{missing_message}")?;
        return Ok(Linked::Skipped(ReportOutcome::MissingLink {
            key: key.to_string(),
        }));
    };

    match fetcher.fetch(endpoint).await {
        Ok(document) if is_empty_document(&document) => {
            warn!("Document behind '{key}' is empty, skipping report");
            Ok(Linked::Skipped(ReportOutcome::NoData))
        }
        Ok(document) => Ok(Linked::Document(document)),
        Err(e) if e.is_api_error() => {
            write_fetch_error(out, endpoint, &e)?;
            Ok(Linked::Skipped(ReportOutcome::FetchFailed))
        }
        Err(e) => Err(e),
    }
}

/// `null`, `{}`, `[]` and `""` carry nothing to render.
fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_documents() {
        assert!(is_empty_document(&json!(null)));
        assert!(is_empty_document(&json!({})));
        assert!(is_empty_document(&json!([])));
        assert!(is_empty_document(&json!("")));
        assert!(!is_empty_document(&json!({"games": []})));
        assert!(!is_empty_document(&json!(0)));
    }
}
