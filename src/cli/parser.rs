use crate::config::is_valid_repository;

/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Fetch, summarize and notify. `None` falls back to `GITHUB_REPO`.
    Digest { repository: Option<String> },
    Help,
    Unknown(String),
}

pub const USAGE: &str = "\
Usage:
  issue-digest                     Digest the repository named by GITHUB_REPO
  issue-digest digest [owner/name] Digest the given repository
  issue-digest help                Show this message

Environment:
  GITHUB_REPO     Repository to digest, as <owner>/<name>
  GITHUB_TOKEN    Optional API token
  GITHUB_API_URL  API base URL (default https://api.github.com)";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Digest { repository: None },
        2 => match args[1].as_str() {
            "digest" => Command::Digest { repository: None },
            "help" | "--help" | "-h" => Command::Help,
            cmd => Command::Unknown(cmd.to_string()),
        },
        3 => match (args[1].as_str(), args[2].as_str()) {
            ("digest", repo) => {
                if is_valid_repository(repo) {
                    Command::Digest {
                        repository: Some(repo.to_string()),
                    }
                } else {
                    Command::Unknown(
                        "Invalid repository format. Please use <owner>/<name>.".to_string(),
                    )
                }
            }
            (cmd, _) => Command::Unknown(cmd.to_string()),
        },
        _ => Command::Unknown(args[1..].join(" ")),
    }
}
