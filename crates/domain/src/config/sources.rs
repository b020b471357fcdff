use crate::data_source::DataSource;
use crate::DomainError;
use serde::{Deserialize, Serialize};

/// A monitored endpoint as written in the config file.
///
/// `url` is either absolute (`http://...`, `https://...`) or a path that is
/// joined onto `SourcesConfig::base_url`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceEndpoint {
    pub id: String,

    pub name: String,

    pub url: String,
}

impl SourceEndpoint {
    fn new(id: &str, name: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Data sources monitored by the health checker
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Origin prepended to relative endpoint paths (default: "http://localhost:5173")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<SourceEndpoint>,
}

impl SourcesConfig {
    /// Resolves every endpoint into a validated `DataSource`.
    pub fn resolve(&self) -> Result<Vec<DataSource>, DomainError> {
        self.endpoints
            .iter()
            .map(|endpoint| {
                DataSource::new(
                    endpoint.id.clone(),
                    endpoint.name.clone(),
                    join_url(&self.base_url, &endpoint.url),
                )
            })
            .collect()
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: default_endpoints(),
        }
    }
}

fn join_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_endpoints() -> Vec<SourceEndpoint> {
    vec![
        SourceEndpoint::new(
            "pygeoapi",
            "Heat Exposure (pygeoapi)",
            "/pygeoapi/collections/heatexposure_optimized/items?f=json&limit=1",
        ),
        SourceEndpoint::new(
            "hsy-action",
            "HSY Map Layers",
            "/hsy-action?action_route=GetHierarchicalMapLayerGroups",
        ),
        SourceEndpoint::new("paavo", "Paavo Statistics", "/paavo"),
        SourceEndpoint::new(
            "digitransit",
            "Digitransit Geocoding",
            "/digitransit/geocoding/v1/search?text=Helsinki",
        ),
    ]
}
