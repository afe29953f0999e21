use std::time::Duration;

use anyhow::{Error, Result};
use bytes::Bytes;
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

/// Blocking HTTP client for the Docker Hub API and logo downloads.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<HttpClient> {
        let client = reqwest::blocking::ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .connect_timeout(Duration::from_secs(10))
            .deflate(true)
            .redirect(Policy::default())
            .build()?;
        Ok(HttpClient { client })
    }

    pub fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        let response = self.execute(Method::GET, url)?;
        Ok(response.json::<R>().map_err(reqwest::Error::without_url)?)
    }

    pub fn get_bytes(&self, url: &str) -> Result<Bytes> {
        let response = self.execute(Method::GET, url)?;
        Ok(response.bytes().map_err(reqwest::Error::without_url)?)
    }

    /// Errors never carry more of the url than `redact` keeps.
    fn execute(&self, method: Method, url: &str) -> Result<Response> {
        let url = Url::parse(url)?;
        debug!("{} {}", method, redact(&url));
        let response = self
            .client
            .request(method, url.clone())
            .send()
            .map_err(|err| Error::new(err.without_url()).context(format!("Request to {} failed", redact(&url))))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::msg(format!(
                "Request to {} failed,status_code:{}",
                redact(&url),
                status.as_str()
            )))
        }
    }
}

/// Drops the path and query, endpoints may carry API keys in either.
pub fn redact(url: &Url) -> String {
    match url.host_str() {
        Some(host) => format!("{}://{}", url.scheme(), host),
        None => url.scheme().to_string(),
    }
}
