use crate::domain::model::ReadmeFile;
use crate::domain::ports::ReadmeRepository;
use crate::utils::error::{BadgeError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "stack-badges";

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    path: String,
    sha: String,
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateFileRequest<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
}

/// GitHub REST client for the repository README.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repository: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, repository: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token: token.to_string(),
        }
    }

    fn repo_url(&self, suffix: &str) -> String {
        format!("{}/repos/{}{}", self.api_url, self.repository, suffix)
    }

    /// Contents endpoint for `path`, one encoded URL segment per path component.
    fn contents_url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.repo_url("/contents"))?;
        url.path_segments_mut()
            .map_err(|_| BadgeError::InvalidConfigValueError {
                field: "gh_api_url".to_string(),
                value: self.api_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.token)
    }

    /// Fails with an authentication error when the repository is not reachable with the token.
    pub async fn check_access(&self) -> Result<()> {
        let url = self.repo_url("");
        tracing::debug!("Checking repository access: {}", url);
        let response = self.request(Method::GET, &url).send().await?;

        if !response.status().is_success() {
            return Err(BadgeError::AuthError {
                message: format!(
                    "cannot access repository {} (HTTP {})",
                    self.repository,
                    response.status().as_u16()
                ),
            });
        }
        Ok(())
    }
}

fn decode_content(content: &str) -> Result<String> {
    // GitHub wraps the base64 payload every 60 characters
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

impl ReadmeRepository for GitHubClient {
    async fn get_readme(&self) -> Result<ReadmeFile> {
        self.check_access().await?;

        let url = self.repo_url("/readme");
        tracing::debug!("Fetching README: {}", url);
        let response = self.request(Method::GET, &url).send().await?;

        if !response.status().is_success() {
            return Err(BadgeError::ReadmeUnavailable {
                message: format!("HTTP {}", response.status().as_u16()),
            });
        }

        let body: ContentsResponse = response.json().await?;
        if let Some(encoding) = body.encoding.as_deref() {
            if encoding != "base64" {
                return Err(BadgeError::ReadmeUnavailable {
                    message: format!("unsupported content encoding: {}", encoding),
                });
            }
        }

        Ok(ReadmeFile {
            content: decode_content(&body.content)?,
            path: body.path,
            sha: body.sha,
        })
    }

    async fn update_readme(&self, readme: &ReadmeFile, new_content: &str, message: &str) -> Result<()> {
        let url = self.contents_url(&readme.path)?;
        let payload = UpdateFileRequest {
            message,
            content: STANDARD.encode(new_content.as_bytes()),
            sha: &readme.sha,
        };

        tracing::debug!("Updating {} ({} bytes)", readme.path, new_content.len());
        let response = self.request(Method::PUT, url.as_str()).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(BadgeError::HttpStatusError {
                endpoint: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
