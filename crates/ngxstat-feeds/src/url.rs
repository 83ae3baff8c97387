//! HTTP(S) source. The body is fetched with one blocking GET; any non-2xx
//! status fails the whole source.

use crate::{read_lines_from, LineSource, SourceError};
use ngxstat_core::config::SourceConfig;
use std::io::BufReader;
use std::time::Duration;

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[derive(Debug, Clone)]
pub struct UrlSource {
    url: String,
    timeout: Duration,
    user_agent: String,
}

impl UrlSource {
    pub fn new(url: impl Into<String>, config: &SourceConfig) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(config.http_timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    fn http_err(&self, source: reqwest::Error) -> SourceError {
        SourceError::Http {
            url: self.url.clone(),
            source,
        }
    }
}

impl LineSource for UrlSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| self.http_err(e))?;

        let response = client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.http_err(e))?;
        tracing::debug!(url = %self.url, status = %response.status(), "fetched access log");

        read_lines_from(BufReader::new(response)).map_err(|source| SourceError::HttpBody {
            url: self.url.clone(),
            source,
        })
    }
}
