use crate::{Error, Result, VisualizationKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data-service URL per visualization kind.
///
/// Serialized as a JSON object keyed by kind tag:
/// `{"scatter_plot": "http://127.0.0.1:8000/scatterplot/data"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointTable {
    endpoints: BTreeMap<VisualizationKind, String>,
}

impl EndpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local development data services for the kinds that have a feed.
    pub fn local_defaults() -> Self {
        Self::new()
            .with_endpoint(
                VisualizationKind::ScatterPlot,
                "http://127.0.0.1:8000/scatterplot/data",
            )
            .with_endpoint(
                VisualizationKind::HeatMapUsingBars,
                "http://127.0.0.1:8001/graph/heatmap-using-bars",
            )
            .with_endpoint(
                VisualizationKind::PieChart,
                "http://127.0.0.1:8000/piechart/data",
            )
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_endpoint(mut self, kind: VisualizationKind, url: impl Into<String>) -> Self {
        self.set(kind, url);
        self
    }

    pub fn set(&mut self, kind: VisualizationKind, url: impl Into<String>) {
        self.endpoints.insert(kind, url.into());
    }

    /// Overlays every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &EndpointTable) {
        for (kind, url) in &other.endpoints {
            self.endpoints.insert(*kind, url.clone());
        }
    }

    /// The configured URL, or `""` when none is configured.
    pub fn resolve(&self, kind: VisualizationKind) -> &str {
        self.endpoints.get(&kind).map_or("", String::as_str)
    }

    /// Like [`EndpointTable::resolve`], but an empty URL is an error.
    pub fn require(&self, kind: VisualizationKind) -> Result<&str> {
        let url = self.resolve(kind).trim();
        if url.is_empty() {
            return Err(Error::MissingEndpoint { kind });
        }
        Ok(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualizationKind, &str)> {
        self.endpoints.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
