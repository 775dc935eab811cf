use crate::config::ActionConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Command-line front end. Every flag falls back to the matching `INPUT_*` variable.
///
/// Values stay raw strings here; blank inputs, defaults and flag spellings are
/// resolved by [`ActionConfig::from_lookup`] so flags and environment behave alike.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stack-badges")]
#[command(about = "Inject markdown badges for your tech stack into a repository README")]
pub struct CliArgs {
    #[arg(long, env = "INPUT_REPOSITORY", help = "Target repository as owner/name")]
    pub repository: Option<String>,

    #[arg(long, env = "INPUT_GH_TOKEN", hide_env_values = true)]
    pub gh_token: Option<String>,

    #[arg(long, env = "INPUT_GH_API_URL", help = "GitHub API base URL [default: https://api.github.com]")]
    pub gh_api_url: Option<String>,

    #[arg(long, env = "INPUT_COMMIT_MESSAGE")]
    pub commit_message: Option<String>,

    #[arg(long, env = "INPUT_BADGE_SIZE", help = "Badge size hint [default: 110]")]
    pub badge_size: Option<String>,

    #[arg(long, env = "INPUT_BADGES", help = "Badge names, shell-quoted: Python 'GitHub Actions'")]
    pub badges: Option<String>,

    #[arg(long, env = "INPUT_CATALOG_URL")]
    pub catalog_url: Option<String>,

    #[arg(long, env = "INPUT_EXPORT_CATALOG", help = "Write the parsed catalog to this JSON file")]
    pub export_catalog: Option<String>,

    #[arg(
        long,
        env = "INPUT_STRICT",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Skip malformed rows and reject ambiguous sections"
    )]
    pub strict: Option<String>,

    #[arg(
        long,
        env = "INPUT_DRY_RUN",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Print the new README instead of committing it"
    )]
    pub dry_run: Option<String>,

    #[arg(long, env = "INPUT_LOG_FORMAT", help = "compact or json [default: compact]")]
    pub log_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    fn input(&self, key: &str) -> Option<String> {
        let value = match key {
            "INPUT_REPOSITORY" => &self.repository,
            "INPUT_GH_TOKEN" => &self.gh_token,
            "INPUT_GH_API_URL" => &self.gh_api_url,
            "INPUT_COMMIT_MESSAGE" => &self.commit_message,
            "INPUT_BADGE_SIZE" => &self.badge_size,
            "INPUT_BADGES" => &self.badges,
            "INPUT_CATALOG_URL" => &self.catalog_url,
            "INPUT_EXPORT_CATALOG" => &self.export_catalog,
            "INPUT_STRICT" => &self.strict,
            "INPUT_DRY_RUN" => &self.dry_run,
            "INPUT_LOG_FORMAT" => &self.log_format,
            _ => return None,
        };
        value.clone()
    }

    pub fn into_config(self) -> Result<ActionConfig> {
        ActionConfig::from_lookup(|key| self.input(key))
    }
}
