use serde_json::Value;
use std::io::Write;
use tracing::{info, instrument};

use super::{Linked, ReportOutcome, fetch_linked};
use crate::constants::defaults::{NOT_AVAILABLE, UNKNOWN};
use crate::constants::links::CURRENT_SCOREBOARD;
use crate::data_fetcher::{Fetcher, LinkMap};
use crate::document::{array_at, display_at};
use crate::error::AppError;

pub const SEPARATOR: &str = "------------------------------------------";

const MISSING_LINK_MESSAGE: &str = "Error: Unable to find scoreboard endpoint.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    pub score: String,
}

impl TeamScore {
    /// Reads the team stored under `side` (`homeTeam` or `awayTeam`).
    fn from_game(game: &Value, side: &str) -> Self {
        Self {
            name: display_at(game, &[side, "name"], UNKNOWN),
            score: display_at(game, &[side, "score"], NOT_AVAILABLE),
        }
    }
}

/// One scoreboard entry. Missing fields fall back to placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub home: TeamScore,
    pub away: TeamScore,
    pub clock: String,
    pub period: String,
}

impl Game {
    pub fn from_value(game: &Value) -> Self {
        Self {
            home: TeamScore::from_game(game, "homeTeam"),
            away: TeamScore::from_game(game, "awayTeam"),
            clock: display_at(game, &["clock"], NOT_AVAILABLE),
            period: display_at(game, &["period", "current"], NOT_AVAILABLE),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "{} vs {}", self.home.name, self.away.name)?;
        writeln!(out, "{} - {}", self.home.score, self.away.score)?;
        writeln!(out, "{} - Period {}", self.clock, self.period)
    }
}

/// Renders every entry of the document's `games` list in input order and
/// returns how many were written.
pub fn render_scoreboard<W: Write>(document: &Value, out: &mut W) -> std::io::Result<usize> {
    let games = array_at(document, &["games"]);
    for game in games {
        Game::from_value(game).write_to(out)?;
    }
    Ok(games.len())
}

/// Follows the `currentScoreboard` link and renders the live scoreboard.
#[instrument(skip_all)]
pub async fn report_scoreboard<W: Write>(
    fetcher: &Fetcher,
    links: &LinkMap,
    out: &mut W,
) -> Result<ReportOutcome, AppError> {
    let document =
        match fetch_linked(fetcher, links, CURRENT_SCOREBOARD, MISSING_LINK_MESSAGE, out).await? {
            Linked::Document(document) => document,
            Linked::Skipped(outcome) => return Ok(outcome),
        };

    let entries = render_scoreboard(&document, out)?;
    info!("Rendered {entries} scoreboard entries");
    Ok(ReportOutcome::Rendered { entries })
}
