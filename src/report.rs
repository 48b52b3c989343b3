use crate::github::issues::Issue;
use crate::summarize::summarize;

/// Issues included in the notification rollup.
pub const ROLLUP_LIMIT: usize = 5;
const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct IssueSummary<'a> {
    pub issue: &'a Issue,
    pub summary: String,
}

pub fn summarize_issues(issues: &[Issue]) -> Vec<IssueSummary<'_>> {
    issues
        .iter()
        .map(|issue| IssueSummary {
            issue,
            summary: summarize(&issue.body),
        })
        .collect()
}

fn display_title(issue: &Issue) -> &str {
    if issue.title.trim().is_empty() {
        "(no title)"
    } else {
        &issue.title
    }
}

/// Human-readable listing of every fetched issue.
pub fn format_listing(repository: &str, summaries: &[IssueSummary<'_>]) -> String {
    let noun = if summaries.len() == 1 { "issue" } else { "issues" };
    let mut listing = format!("Fetched {} {noun} from {repository}\n", summaries.len());
    for entry in summaries {
        listing.push_str(&format!(
            "\n#{} {}\nSummary: {}\n{}",
            entry.issue.number,
            display_title(entry.issue),
            entry.summary,
            "-".repeat(SEPARATOR_WIDTH)
        ));
    }
    listing
}

/// Rollup message for the notifier: a header and one block per issue, up to [`ROLLUP_LIMIT`].
pub fn format_rollup(repository: &str, summaries: &[IssueSummary<'_>]) -> String {
    let header = format!("*GitHub issue summaries for {repository}*");
    if summaries.is_empty() {
        return format!("{header}\n\nNo issues found.");
    }

    let mut blocks: Vec<String> = summaries
        .iter()
        .take(ROLLUP_LIMIT)
        .enumerate()
        .map(|(i, entry)| {
            let mut block = format!(
                "*{}. {}*\n{}",
                i + 1,
                display_title(entry.issue),
                entry.summary
            );
            if !entry.issue.url.is_empty() {
                block.push_str(&format!(
                    "\n<{}|View issue #{}>",
                    entry.issue.url, entry.issue.number
                ));
            }
            block
        })
        .collect();

    if summaries.len() > ROLLUP_LIMIT {
        blocks.push(format!("_and {} more_", summaries.len() - ROLLUP_LIMIT));
    }

    format!("{header}\n\n{}", blocks.join("\n\n"))
}
