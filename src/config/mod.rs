#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::github::DEFAULT_API_URL;
use crate::adapters::http::DEFAULT_CATALOG_URL;
use crate::core::section::SectionPolicy;
use crate::domain::model::TableMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BadgeError, Result};
use crate::utils::validation::{self, Validate};
use std::env;

pub const DEFAULT_COMMIT_MESSAGE: &str = "Updated README with the latest tech stack";
pub const DEFAULT_BADGE_SIZE: u32 = 110;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = BadgeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(BadgeError::InvalidConfigValueError {
                field: "log_format".to_string(),
                value: other.to_string(),
                reason: "Expected 'compact' or 'json'".to_string(),
            }),
        }
    }
}

/// Settings for one run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub repository: String,
    pub gh_token: String,
    pub gh_api_url: String,
    pub commit_message: String,
    /// Accepted for compatibility; badge markdown already carries its own size.
    pub badge_size: u32,
    pub badges: Vec<String>,
    pub catalog_url: String,
    pub export_catalog: Option<String>,
    pub strict: bool,
    pub dry_run: bool,
    pub log_format: LogFormat,
}

/// Splits the badge list with shell quoting rules, e.g. `Python 'GitHub Actions'`.
pub fn parse_badge_list(raw: &str) -> Result<Vec<String>> {
    shell_words::split(raw).map_err(|e| BadgeError::InvalidConfigValueError {
        field: "badges".to_string(),
        value: raw.to_string(),
        reason: format!("Invalid quoting: {}", e),
    })
}

fn parse_flag(field: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(BadgeError::InvalidConfigValueError {
                field: field.to_string(),
                value: v.to_string(),
                reason: "Expected true or false".to_string(),
            }),
        },
    }
}

/// Treats unset, blank and the literal `None` (what an unset action input renders as) alike.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != "None")
}

impl ActionConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `INPUT_*` keys resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 必填項目先檢查，缺少時不做任何 I/O
        let raw_badges = non_empty(lookup("INPUT_BADGES"));
        let badges = parse_badge_list(validation::validate_required_field("badges", &raw_badges)?)?;

        let repository = non_empty(lookup("INPUT_REPOSITORY"));
        let repository = validation::validate_required_field("repository", &repository)?.clone();

        let gh_token = non_empty(lookup("INPUT_GH_TOKEN"));
        let gh_token = validation::validate_required_field("gh_token", &gh_token)?.clone();

        let badge_size = match non_empty(lookup("INPUT_BADGE_SIZE")) {
            Some(raw) => raw.trim().parse().map_err(|_| BadgeError::InvalidConfigValueError {
                field: "badge_size".to_string(),
                value: raw.clone(),
                reason: "Expected a positive integer".to_string(),
            })?,
            None => DEFAULT_BADGE_SIZE,
        };

        let log_format = match non_empty(lookup("INPUT_LOG_FORMAT")) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            repository,
            gh_token,
            gh_api_url: non_empty(lookup("INPUT_GH_API_URL"))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            commit_message: non_empty(lookup("INPUT_COMMIT_MESSAGE"))
                .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()),
            badge_size,
            badges,
            catalog_url: non_empty(lookup("INPUT_CATALOG_URL"))
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            export_catalog: non_empty(lookup("INPUT_EXPORT_CATALOG")),
            strict: parse_flag("strict", lookup("INPUT_STRICT"))?,
            dry_run: parse_flag("dry_run", lookup("INPUT_DRY_RUN"))?,
            log_format,
        })
    }
}

impl Validate for ActionConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_repository("repository", &self.repository)?;
        validation::validate_non_empty_string("gh_token", &self.gh_token)?;
        validation::validate_url("gh_api_url", &self.gh_api_url)?;
        validation::validate_url("catalog_url", &self.catalog_url)?;
        validation::validate_non_empty_string("commit_message", &self.commit_message)?;

        if self.badges.is_empty() {
            return Err(BadgeError::MissingConfigError {
                field: "badges".to_string(),
            });
        }

        if let Some(path) = &self.export_catalog {
            validation::validate_path("export_catalog", path)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

impl ConfigProvider for ActionConfig {
    fn badges(&self) -> &[String] {
        &self.badges
    }

    fn commit_message(&self) -> &str {
        &self.commit_message
    }

    fn export_path(&self) -> Option<&str> {
        self.export_catalog.as_deref()
    }

    fn table_mode(&self) -> TableMode {
        if self.strict {
            TableMode::Strict
        } else {
            TableMode::Lenient
        }
    }

    fn section_policy(&self) -> SectionPolicy {
        if self.strict {
            SectionPolicy::Strict
        } else {
            SectionPolicy::FirstMatch
        }
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("INPUT_REPOSITORY", "octo/octo"),
            ("INPUT_GH_TOKEN", "t0ken"),
            ("INPUT_BADGES", "Python 'GitHub Actions' Rust"),
        ]
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = ActionConfig::from_lookup(lookup_from(&required())).unwrap();
        assert_eq!(config.gh_api_url, DEFAULT_API_URL);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.commit_message, DEFAULT_COMMIT_MESSAGE);
        assert_eq!(config.badge_size, 110);
        assert_eq!(config.badges, vec!["Python", "GitHub Actions", "Rust"]);
        assert!(!config.strict);
        assert!(config.export_catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_badges_fails_fast() {
        let err = ActionConfig::from_lookup(lookup_from(&[("INPUT_REPOSITORY", "o/r")])).unwrap_err();
        assert!(matches!(err, BadgeError::MissingConfigError { ref field } if field == "badges"));
    }

    #[test]
    fn test_literal_none_counts_as_missing() {
        let err = ActionConfig::from_lookup(lookup_from(&[
            ("INPUT_REPOSITORY", "o/r"),
            ("INPUT_GH_TOKEN", "t"),
            ("INPUT_BADGES", "None"),
        ]))
        .unwrap_err();
        assert!(matches!(err, BadgeError::MissingConfigError { .. }));
    }

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let mut vars = required();
        vars[2] = ("INPUT_BADGES", "Python 'GitHub Actions");
        let err = ActionConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, BadgeError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_strict_flag_selects_strict_policies() {
        let mut vars = required();
        vars.push(("INPUT_STRICT", "true"));
        vars.push(("INPUT_EXPORT_CATALOG", "badges.json"));
        let config = ActionConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.table_mode(), TableMode::Strict);
        assert_eq!(config.section_policy(), SectionPolicy::Strict);
        assert_eq!(config.export_path(), Some("badges.json"));
    }

    #[test]
    fn test_invalid_values() {
        let mut vars = required();
        vars.push(("INPUT_BADGE_SIZE", "big"));
        assert!(ActionConfig::from_lookup(lookup_from(&vars)).is_err());

        let mut vars = required();
        vars.push(("INPUT_DRY_RUN", "maybe"));
        assert!(ActionConfig::from_lookup(lookup_from(&vars)).is_err());

        let mut vars = required();
        vars.push(("INPUT_GH_API_URL", "not a url"));
        let config = ActionConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
