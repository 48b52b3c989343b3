use crate::cli;
use crate::config::{self, Config, ConfigKey};
use crate::github::client::GitHubClient;
use crate::github::fetch;
use crate::notify::Notifier;
use crate::output;
use crate::report;
use std::collections::HashMap;

/// Executes one invocation.
///
/// `lookup` resolves settings by environment variable name, `notifier` receives the
/// rollup, and everything printed to stdout is also written to `stdout_additional`.
pub async fn run<F>(
    args: Vec<String>,
    lookup: F,
    notifier: &dyn Notifier,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Digest { repository } => {
            let mut updates = HashMap::new();
            if let Some(repo) = repository {
                updates.insert(ConfigKey::Repository, repo);
            }
            let settings = config::update_settings(&config::read_settings(lookup), &updates);
            let config = Config::from_settings(&settings)?;
            digest(&config, notifier, &mut stdout_additional).await?;
        }
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(message) => {
            return Err(anyhow::anyhow!(
                "Unknown command or arguments: {message}. Use `issue-digest help` for usage."
            ));
        }
    }
    Ok(())
}

/// Fetches every issue of the configured repository, prints the listing and sends the rollup.
pub async fn digest(
    config: &Config,
    notifier: &dyn Notifier,
    stdout_additional: &mut Option<&mut dyn std::io::Write>,
) -> anyhow::Result<()> {
    let client = GitHubClient::new(config)?;
    tracing::info!(repository = %config.repository, "fetching issues");
    let issues = fetch::fetch_github_issues(&client).await?;

    let summaries = report::summarize_issues(&issues);
    output::println(
        &report::format_listing(&config.repository, &summaries),
        stdout_additional,
    )?;

    notifier.send(&report::format_rollup(&config.repository, &summaries));
    Ok(())
}
