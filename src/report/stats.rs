use serde_json::Value;
use std::io::Write;
use tracing::{debug, info, instrument};

use super::{Linked, ReportOutcome, fetch_linked};
use crate::constants::PLACEHOLDER_TEAM_NAME;
use crate::constants::defaults::{NOT_AVAILABLE, UNKNOWN};
use crate::constants::links::TEAM_STATS_LEADERS;
use crate::data_fetcher::{Fetcher, LinkMap};
use crate::document::{array_at, display_at, integer_at, lookup};
use crate::error::AppError;

pub const RANKINGS_HEADER: &str = "EuroBasket Team Rankings by Points Per Game:";

const MISSING_LINK_MESSAGE: &str = "Error: Unable to find team stats endpoint.";

const TEAMS_PATH: [&str; 4] = ["league", "standard", "regularSeason", "teams"];

/// A team's points-per-game standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStat {
    pub name: String,
    pub nickname: String,
    /// Sort key; `None` when the API gave no usable rank.
    pub ppg_rank: Option<i64>,
    pub ppg_avg: String,
}

impl TeamStat {
    pub fn from_value(team: &Value) -> Self {
        Self {
            name: display_at(team, &["name"], UNKNOWN),
            nickname: display_at(team, &["nickname"], UNKNOWN),
            ppg_rank: integer_at(team, &["ppg", "rank"]),
            ppg_avg: display_at(team, &["ppg", "avg"], NOT_AVAILABLE),
        }
    }
}

fn is_placeholder(team: &Value) -> bool {
    lookup(team, &["name"]).and_then(Value::as_str) == Some(PLACEHOLDER_TEAM_NAME)
}

/// Teams from `league.standard.regularSeason.teams`, without the placeholder
/// row, ordered by ascending PPG rank.
///
/// The sort is stable. Teams without a usable rank keep their relative order
/// after every ranked team.
pub fn rank_teams(document: &Value) -> Vec<TeamStat> {
    let mut teams: Vec<TeamStat> = array_at(document, &TEAMS_PATH)
        .iter()
        .filter(|team| !is_placeholder(team))
        .map(TeamStat::from_value)
        .collect();

    let unranked = teams.iter().filter(|t| t.ppg_rank.is_none()).count();
    if unranked > 0 {
        debug!("{unranked} teams have no usable PPG rank");
    }

    teams.sort_by_key(|team| (team.ppg_rank.is_none(), team.ppg_rank));
    teams
}

/// Writes the ranking table and returns the number of rows.
pub fn render_rankings<W: Write>(teams: &[TeamStat], out: &mut W) -> std::io::Result<usize> {
    writeln!(out, "{RANKINGS_HEADER}")?;
    writeln!(out)?;
    for (i, team) in teams.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {} - {} PPG",
            i + 1,
            team.name,
            team.nickname,
            team.ppg_avg
        )?;
    }
    Ok(teams.len())
}

/// Follows the `teamStatsLeaders` link and renders the PPG ranking.
#[instrument(skip_all)]
pub async fn report_stats<W: Write>(
    fetcher: &Fetcher,
    links: &LinkMap,
    out: &mut W,
) -> Result<ReportOutcome, AppError> {
    let document =
        match fetch_linked(fetcher, links, TEAM_STATS_LEADERS, MISSING_LINK_MESSAGE, out).await? {
            Linked::Document(document) => document,
            Linked::Skipped(outcome) => return Ok(outcome),
        };

    let teams = rank_teams(&document);
    let entries = render_rankings(&teams, out)?;
    info!("Rendered {entries} ranked teams");
    Ok(ReportOutcome::Rendered { entries })
}
