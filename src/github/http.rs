//! GitHub REST API fetcher

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use super::{Fetcher, profile_record, project_list};
use crate::config::Settings;
use crate::error::{self, Result};
use crate::report::{RawProfileRecord, RawProjectRecord};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Fetcher backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    api_url: Url,
}

impl HttpFetcher {
    /// Build a fetcher from settings (API base URL, user agent, timeout)
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| error::http_client_failed(e.to_string()))?;

        let api_url = Url::parse(&settings.api_url)
            .map_err(|e| error::http_client_failed(format!("invalid API URL: {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(error::http_client_failed(format!(
                "invalid API URL: {api_url}"
            )));
        }

        Ok(Self { client, api_url })
    }

    /// `{api_url}/users/{username}[/{tail}]` with the username as a single
    /// percent-encoded path segment
    fn user_url(&self, username: &str, tail: Option<&str>) -> Result<Url> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                error::http_client_failed(format!("invalid API URL: {}", self.api_url))
            })?;
            segments.pop_if_empty().push("users").push(username);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    /// GET `url` and decode the body as JSON; every failure is logged and
    /// collapses to `None`
    fn get_json(&self, url: &Url) -> Option<Value> {
        let url = url.as_str();
        debug!(url, "GET");

        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "request failed");
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url, "not found");
            return None;
        }
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "unexpected status");
            return None;
        }

        match response.json::<Value>() {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url, error = %e, "undecodable response body");
                None
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_profile(&self, username: &str) -> Result<Option<RawProfileRecord>> {
        let url = self.user_url(username, None)?;
        let profile = self.get_json(&url).and_then(|body| {
            let record = profile_record(body);
            if record.is_none() {
                warn!(url = url.as_str(), "profile is not a JSON object");
            }
            record
        });
        Ok(profile)
    }

    fn fetch_projects(&self, username: &str) -> Result<Option<Vec<RawProjectRecord>>> {
        let url = self.user_url(username, Some("repos"))?;
        let projects = self.get_json(&url).and_then(|body| {
            let list = project_list(body);
            if list.is_none() {
                warn!(url = url.as_str(), "project list is not a JSON array");
            }
            list
        });
        Ok(projects)
    }
}
