//! Application-wide constants and configuration values

/// Default base URL of the FIBA API
pub const DEFAULT_API_BASE_URL: &str = "https://www.fiba.basketball/api";

/// Well-known root resource whose response carries the link map
pub const DEFAULT_ROOT_PATH: &str = "/eurobasket/2025/today.json";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Name of the log file written under the log directory
pub const LOG_FILE_NAME: &str = "eurobasket_stats.log";

/// Link map keys the reports depend on
pub mod links {
    /// Key of the live scoreboard endpoint
    pub const CURRENT_SCOREBOARD: &str = "currentScoreboard";

    /// Key of the team statistics leaders endpoint
    pub const TEAM_STATS_LEADERS: &str = "teamStatsLeaders";
}

/// Placeholder values used when a field is missing from a response
pub mod defaults {
    pub const UNKNOWN: &str = "Unknown";
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// Team name the API uses for its placeholder row in the stats table
pub const PLACEHOLDER_TEAM_NAME: &str = "Team";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "EUROBASKET_API_BASE_URL";

    /// Environment variable for root resource path override
    pub const ROOT_PATH: &str = "EUROBASKET_ROOT_PATH";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "EUROBASKET_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "EUROBASKET_HTTP_TIMEOUT";
}
