//! Runtime settings for a report run.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the WAQI access token.
pub const TOKEN_VAR: &str = "WAQI_TOKEN";

/// Settings for the `report` command, assembled from CLI flags and the
/// environment by the binary.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub pacing: Duration,
    pub chart_path: PathBuf,
}

/// Reads the token from `value`, rejecting absent or blank values.
pub fn token_from(value: Option<String>) -> Option<String> {
    value
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Help text printed when the token is missing.
pub fn missing_token_message() -> String {
    format!(
        "ERROR: {TOKEN_VAR} environment variable not set.\n\
         Get a free token from https://aqicn.org/data-platform/token/ and set it, e.g.:\n  \
         export {TOKEN_VAR}=\"YOUR_TOKEN\"\n\
         or add {TOKEN_VAR}=YOUR_TOKEN to a .env file in the working directory."
    )
}
