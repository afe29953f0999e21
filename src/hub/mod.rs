use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{HUB_BASE_URL, HUB_PAGE_SIZE};
use crate::http::HttpClient;

pub mod image;

/// A repository as shown in the app.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HubRepository {
    pub name: String,
    pub link: String,
    pub description: Option<String>,
    pub stars: u64,
}

#[derive(Deserialize, Debug)]
struct RepositoryPage {
    results: Vec<RepositoryItem>,
}

#[derive(Deserialize, Debug)]
struct RepositoryItem {
    name: String,
    description: Option<String>,
    #[serde(default)]
    star_count: u64,
}

/// Read-only access to the Docker Hub REST API.
pub struct HubClient {
    http: HttpClient,
    base_url: String,
}

impl HubClient {
    pub fn new(http: HttpClient, base_url: &str) -> HubClient {
        HubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// First page of the repositories of `namespace`.
    pub fn list_repositories(&self, namespace: &str) -> Result<Vec<HubRepository>> {
        let url = format!(
            "{}/v2/repositories/{}/?page_size={}",
            self.base_url, namespace, HUB_PAGE_SIZE
        );
        let page = self.http.get_json::<RepositoryPage>(&url)?;
        Ok(page
            .results
            .into_iter()
            .map(|item| repository_record(namespace, item))
            .collect())
    }
}

/// `link` always points at the public site, whatever API host served the page.
fn repository_record(namespace: &str, item: RepositoryItem) -> HubRepository {
    HubRepository {
        link: format!("{}/r/{}/{}", HUB_BASE_URL, namespace, item.name),
        name: item.name,
        description: item.description,
        stars: item.star_count,
    }
}

fn repository_url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"hub\.docker\.com/r/([^/]+/[^/]+)").expect("valid repository url regex"))
}

/// `https://hub.docker.com/r/<namespace>/<name>` into `<namespace>/<name>`.
pub fn extract_repository_name(url: &str) -> Option<String> {
    repository_url_regex()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_from_hub_url() {
        assert_eq!(
            extract_repository_name("https://hub.docker.com/r/sudoacorn/repo1"),
            Some("sudoacorn/repo1".to_string())
        );
        assert_eq!(
            extract_repository_name("https://hub.docker.com/r/sudoacorn/repo1/tags"),
            Some("sudoacorn/repo1".to_string())
        );
    }

    #[test]
    fn other_urls_have_no_repository() {
        assert_eq!(extract_repository_name("https://hub.docker.com/_/redis"), None);
        assert_eq!(extract_repository_name("https://hub.docker.com/r/sudoacorn"), None);
        assert_eq!(extract_repository_name("sudoacorn/repo1"), None);
    }

    #[test]
    fn page_maps_to_records() -> Result<()> {
        let body = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "repo1", "namespace": "sudoacorn", "description": "Description of repo1", "star_count": 10, "pull_count": 1200},
                {"name": "repo2", "namespace": "sudoacorn", "description": null, "star_count": 0, "pull_count": 3}
            ]
        }"#;
        let page = serde_json::from_str::<RepositoryPage>(body)?;
        let repos = page
            .results
            .into_iter()
            .map(|item| repository_record("sudoacorn", item))
            .collect::<Vec<HubRepository>>();
        assert_eq!(
            serde_json::to_string(&repos)?,
            r#"[{"name":"repo1","link":"https://hub.docker.com/r/sudoacorn/repo1","description":"Description of repo1","stars":10},{"name":"repo2","link":"https://hub.docker.com/r/sudoacorn/repo2","description":null,"stars":0}]"#
        );
        Ok(())
    }
}
