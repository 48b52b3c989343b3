use crate::error::Result;
use crate::github::issues::Issue;
use serde_json::Value;

/// Records requested per page; a shorter page marks the end of the listing.
pub const PAGE_SIZE: u32 = 100;

/// A source of raw issue-listing pages.
#[allow(async_fn_in_trait)]
pub trait IssuePageSource {
    /// Returns the raw records of 1-based `page`, pull requests included.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Value>>;
}

/// Drops pull requests and projects the remaining records to [`Issue`].
///
/// A record is a pull request when it carries a `pull_request` key, whatever its value.
/// Missing or null `title`, `body` and `html_url` become empty strings. Records without
/// an integer `number` are skipped.
pub fn parse_github_issues(records: &[Value]) -> Vec<Issue> {
    records
        .iter()
        .filter(|record| record.get("pull_request").is_none())
        .filter_map(|record| {
            let Some(number) = record.get("number").and_then(Value::as_u64) else {
                tracing::warn!(record = %record, "skipping issue record without a number");
                return None;
            };
            Some(Issue {
                number,
                title: string_field(record, "title"),
                body: string_field(record, "body"),
                url: string_field(record, "html_url"),
            })
        })
        .collect()
}

fn string_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Walks the listing from page 1 until a page comes back shorter than [`PAGE_SIZE`].
pub async fn fetch_github_issues<S>(source: &S) -> Result<Vec<Issue>>
where
    S: IssuePageSource,
{
    let mut all_issues = Vec::new();
    let mut page = 1;

    loop {
        let records = source.fetch_page(page, PAGE_SIZE).await?;
        let parsed_issues = parse_github_issues(&records);
        tracing::debug!(
            page,
            records = records.len(),
            issues = parsed_issues.len(),
            "fetched issue page"
        );
        all_issues.extend(parsed_issues);

        if records.len() < PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }

    tracing::info!(issues = all_issues.len(), pages = page, "finished fetching issues");
    Ok(all_issues)
}
