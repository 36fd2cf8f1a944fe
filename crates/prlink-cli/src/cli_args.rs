use std::path::PathBuf;

use clap::Parser;

use crate::validation::{parse_positive_u64, parse_positive_usize};

#[derive(Debug, Parser)]
#[command(
    name = "prlink-action",
    about = "Comment a tracker issue link, derived from the head branch, on a pull request",
    version
)]
pub struct Cli {
    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "Token used to authenticate GitHub API requests"
    )]
    pub github_token: String,

    #[arg(
        long = "event-path",
        env = "GITHUB_EVENT_PATH",
        help = "Path to the pull_request event payload written by the Actions runner"
    )]
    pub event_path: PathBuf,

    #[arg(
        long,
        help = "Issue tracker domain, e.g. example.atlassian.net. Falls back to the `domain` action input (INPUT_DOMAIN)"
    )]
    pub domain: Option<String>,

    #[arg(
        long = "github-api-base",
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        help = "GitHub REST API base URL"
    )]
    pub github_api_base: String,

    #[arg(
        long = "request-timeout-ms",
        env = "PRLINK_REQUEST_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = parse_positive_u64,
        help = "Timeout for each GitHub API request in milliseconds"
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long = "retry-max-attempts",
        env = "PRLINK_RETRY_MAX_ATTEMPTS",
        default_value_t = 1,
        value_parser = parse_positive_usize,
        help = "Attempts per GitHub API request; values above 1 retry rate limits and server errors"
    )]
    pub retry_max_attempts: usize,

    #[arg(
        long = "retry-base-delay-ms",
        env = "PRLINK_RETRY_BASE_DELAY_MS",
        default_value_t = 500,
        value_parser = parse_positive_u64,
        help = "Base delay for exponential retry backoff in milliseconds"
    )]
    pub retry_base_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn unit_cli_parses_explicit_flags_and_defaults() {
        let cli = Cli::try_parse_from([
            "prlink-action",
            "--github-token",
            "token",
            "--event-path",
            "/tmp/event.json",
            "--domain",
            "tracker.co",
        ])
        .expect("cli");
        assert_eq!(cli.github_token, "token");
        assert_eq!(cli.event_path, PathBuf::from("/tmp/event.json"));
        assert_eq!(cli.domain.as_deref(), Some("tracker.co"));
        assert_eq!(cli.request_timeout_ms, 30_000);
        assert_eq!(cli.retry_max_attempts, 1);
        assert_eq!(cli.retry_base_delay_ms, 500);
    }

    #[test]
    fn regression_cli_rejects_zero_retry_attempts() {
        let error = Cli::try_parse_from([
            "prlink-action",
            "--github-token",
            "token",
            "--event-path",
            "/tmp/event.json",
            "--retry-max-attempts",
            "0",
        ])
        .expect_err("zero attempts should fail");
        assert!(error.to_string().contains("greater than 0"));
    }
}
