//! src/domain/github.rs
use validator::validate_url;

const GITHUB_PREFIX: &str = "https://github.com/";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("A GitHub profile must start with {}", GITHUB_PREFIX)]
    NotGithub,
}

#[derive(Debug, Clone)]
pub struct GithubProfile(String);

impl GithubProfile {
    pub fn parse(s: String) -> Result<Self, Error> {
        if !validate_url(&s) {
            return Err(Error::InvalidUrl(s));
        }

        if !s.starts_with(GITHUB_PREFIX) {
            return Err(Error::NotGithub);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for GithubProfile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
