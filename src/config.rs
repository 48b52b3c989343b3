use crate::error::{Error, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Repository,
    Token,
    ApiUrl,
}

impl ConfigKey {
    /// Environment variable the key is read from.
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigKey::Repository => "GITHUB_REPO",
            ConfigKey::Token => "GITHUB_TOKEN",
            ConfigKey::ApiUrl => "GITHUB_API_URL",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::Repository, ConfigKey::Token, ConfigKey::ApiUrl]
    }
}

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings resolved once at startup and handed to the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `owner/name` of the repository to digest.
    pub repository: String,
    /// Bearer token; `None` means unauthenticated requests.
    pub token: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

/// Returns true when `repo` has the `<owner>/<name>` shape with both parts non-empty.
pub fn is_valid_repository(repo: &str) -> bool {
    let parts: Vec<&str> = repo.split('/').collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Reads every known key through `lookup`.
///
/// Values are trimmed; keys whose value is unset or blank are left out of the map,
/// so an empty `GITHUB_TOKEN=` behaves exactly like an absent one.
pub fn read_settings<F>(lookup: F) -> HashMap<ConfigKey, String>
where
    F: Fn(&str) -> Option<String>,
{
    ConfigKey::all()
        .iter()
        .filter_map(|key| {
            lookup(key.env_var())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value))
        })
        .collect()
}

/// Merges `updates` into `base_settings` and returns a new settings map.
///
/// - Keys from `updates` are added to a clone of `base_settings`.
/// - If a key exists in both, the value from `updates` wins.
pub fn update_settings(
    base_settings: &HashMap<ConfigKey, String>,
    updates: &HashMap<ConfigKey, String>,
) -> HashMap<ConfigKey, String> {
    let mut new_settings = base_settings.clone();
    for (key, value) in updates {
        new_settings.insert(*key, value.clone());
    }
    new_settings
}

impl Config {
    /// Builds the run configuration from resolved settings.
    ///
    /// Fails with [`Error::Configuration`] when the repository is missing or is not
    /// of the form `<owner>/<name>`.
    pub fn from_settings(settings: &HashMap<ConfigKey, String>) -> Result<Self> {
        let repository = settings.get(&ConfigKey::Repository).ok_or_else(|| {
            Error::Configuration(format!(
                "{} is not set. Set it to <owner>/<name> or pass the repository as an argument.",
                ConfigKey::Repository.env_var()
            ))
        })?;

        if !is_valid_repository(repository) {
            return Err(Error::Configuration(format!(
                "Invalid repository '{repository}'. Please use <owner>/<name>."
            )));
        }

        let api_url = settings
            .get(&ConfigKey::ApiUrl)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            repository: repository.clone(),
            token: settings.get(&ConfigKey::Token).cloned(),
            api_url,
            timeout: REQUEST_TIMEOUT,
        })
    }
}
