use reqwest::Url;
use tokio::sync::Semaphore;

use crate::prelude::*;

/// Pure passthrough to GitHub's repository listing. No caching, no retry;
/// any failure at all is reported to the caller as not-found.
pub struct GithubClient {
    client: reqwest::Client,

    /// Maximum number of concurrent outbound requests to GitHub
    limit: Semaphore,
}

impl GithubClient {
    pub fn new() -> Result<GithubClient, reqwest::Error> {
        Ok(GithubClient {
            client: super::create_service_client()?,
            limit: Semaphore::new(16),
        })
    }

    /// Five most recently created public repositories of `username`,
    /// relayed verbatim.
    pub async fn list_repos(
        &self,
        services: &config::Services,
        username: &str,
    ) -> Result<serde_json::Value, Error> {
        // usernames are a path segment; reject anything that could
        // escape it
        if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::GithubNotFound);
        }

        let _guard = self.limit.acquire().await?;

        let mut url = Url::parse(&format!("https://api.github.com/users/{username}/repos"))
            .map_err(|_| Error::GithubNotFound)?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("per_page", "5");
            query.append_pair("sort", "created:asc");

            if let (Some(id), Some(secret)) =
                (&services.github_client_id, &services.github_client_secret)
            {
                query.append_pair("client_id", id);
                query.append_pair("client_secret", secret);
            }
        }

        log::debug!("Fetching GitHub repos for {username}");

        let res = self.client.get(url).send().await.map_err(|_| Error::GithubNotFound)?;

        if !res.status().is_success() {
            return Err(Error::GithubNotFound);
        }

        res.json().await.map_err(|_| Error::GithubNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn path_escaping_usernames_are_rejected() {
        let client = GithubClient::new().unwrap();
        let services = config::Services::default();

        for bad in ["", "../orgs", "a/b", "a?b", "a b"] {
            assert!(matches!(
                client.list_repos(&services, bad).await,
                Err(Error::GithubNotFound)
            ));
        }
    }
}
