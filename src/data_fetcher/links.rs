//! Endpoint discovery through the root resource.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use super::fetcher::Fetcher;
use crate::error::AppError;

/// Named endpoint paths taken from the `links` object of the root resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: BTreeMap<String, String>,
}

impl LinkMap {
    /// Extracts the `links` object from a root document.
    ///
    /// A missing or non-object `links` value gives an empty map. Entries whose
    /// value is not a string are skipped.
    pub fn from_document(document: &Value) -> Self {
        let Some(raw) = document.get("links").and_then(Value::as_object) else {
            return Self::default();
        };

        let links = raw
            .iter()
            .filter_map(|(name, target)| match target.as_str() {
                Some(path) => Some((name.clone(), path.to_string())),
                None => {
                    debug!("Skipping non-string link '{name}'");
                    None
                }
            })
            .collect();

        Self { links }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LinkMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            links: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Fetches the root resource and returns its link map.
///
/// A failed fetch is an error; a document without links is an empty map.
#[instrument(skip(fetcher))]
pub async fn get_links(fetcher: &Fetcher, root_path: &str) -> Result<LinkMap, AppError> {
    let document = fetcher.fetch(root_path).await?;
    let links = LinkMap::from_document(&document);

    if links.is_empty() {
        warn!("Root resource {root_path} returned no links");
    } else {
        info!("Resolved {} links from {root_path}", links.len());
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[test]
    fn test_from_document_extracts_links() {
        let document = json!({
            "links": {
                "currentScoreboard": "/eurobasket/2025/scoreboard.json",
                "teamStatsLeaders": "/eurobasket/2025/team_stats.json",
                "broken": 42
            }
        });

        let links = LinkMap::from_document(&document);
        assert_eq!(links.len(), 2);
        assert_eq!(
            links.get("currentScoreboard"),
            Some("/eurobasket/2025/scoreboard.json")
        );
        assert_eq!(
            links.get("teamStatsLeaders"),
            Some("/eurobasket/2025/team_stats.json")
        );
        assert_eq!(links.get("broken"), None);
    }

    #[test]
    fn test_from_document_without_links() {
        assert!(LinkMap::from_document(&json!({"games": []})).is_empty());
        assert!(LinkMap::from_document(&json!({"links": ["a", "b"]})).is_empty());
        assert!(LinkMap::from_document(&json!(null)).is_empty());
    }

    #[test]
    fn test_collect_into_link_map() {
        let links: LinkMap = [("currentScoreboard", "/s.json")].into_iter().collect();
        assert_eq!(links.get("currentScoreboard"), Some("/s.json"));
    }

    #[tokio::test]
    async fn test_get_links_from_root() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/today.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "links": {"currentScoreboard": "/scoreboard.json"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_client(create_test_http_client(), mock_server.uri());
        let links = get_links(&fetcher, "/today.json").await.unwrap();
        assert_eq!(links.get("currentScoreboard"), Some("/scoreboard.json"));
    }

    #[tokio::test]
    async fn test_get_links_missing_key_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/today.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": []})))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_client(create_test_http_client(), mock_server.uri());
        let links = get_links(&fetcher, "/today.json").await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_get_links_failed_fetch_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_client(create_test_http_client(), mock_server.uri());
        let result = get_links(&fetcher, "/today.json").await;
        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }
}
