use reqwest::{Client, Error as ReqwestError};

pub mod github;

pub fn create_service_client() -> Result<Client, ReqwestError> {
    reqwest::ClientBuilder::new()
        .user_agent("devconnect/1.0")
        .gzip(true)
        .deflate(true)
        .redirect(reqwest::redirect::Policy::limited(1))
        .connect_timeout(std::time::Duration::from_secs(10))
        .build()
}

pub struct Services {
    pub github: github::GithubClient,
}

impl Services {
    pub fn start() -> Result<Services, ReqwestError> {
        Ok(Services {
            github: github::GithubClient::new()?,
        })
    }
}
