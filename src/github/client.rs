use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::fetch::IssuePageSource;
use serde::Deserialize;
use serde_json::Value;

const USER_AGENT: &str = "issue-digest";

/// Error payload GitHub attaches to non-success responses.
#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

/// Issue listing client for one repository.
pub struct GitHubClient {
    http: reqwest::Client,
    issues_url: String,
    repository: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        if config.token.is_none() {
            tracing::warn!("GITHUB_TOKEN is not set; using unauthenticated rate limits");
        }

        Ok(GitHubClient {
            http,
            issues_url: format!("{}/repos/{}/issues", config.api_url, config.repository),
            repository: config.repository.clone(),
            token: config.token.clone(),
        })
    }

    pub fn issues_url(&self) -> &str {
        &self.issues_url
    }

    fn status_error(&self, status: reqwest::StatusCode, body: &str) -> Error {
        let api_message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|e| format!(" ({})", e.message))
            .unwrap_or_default();
        let hint = if self.token.is_some() {
            "Check that GITHUB_REPO names an existing repository and that GITHUB_TOKEN is valid."
        } else {
            "Check that GITHUB_REPO names an existing public repository, or set GITHUB_TOKEN."
        };
        Error::Transport {
            status: Some(status.as_u16()),
            message: format!(
                "GitHub API returned HTTP {status}{api_message} for {}. {hint}",
                self.repository
            ),
        }
    }
}

/// Parses a listing response body, which must be a JSON array.
pub fn parse_page_body(body: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Protocol(format!("response body is not valid JSON: {e}")))?;
    match value {
        Value::Array(records) => Ok(records),
        other => Err(Error::Protocol(format!(
            "expected a JSON array of issues, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl IssuePageSource for GitHubClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Value>> {
        let page = page.to_string();
        let per_page = per_page.to_string();
        let mut request = self
            .http
            .get(&self.issues_url)
            .query(&[
                ("state", "all"),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %self.issues_url, page = %page, "requesting issue page");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(self.status_error(status, &body));
        }
        parse_page_body(&body)
    }
}
