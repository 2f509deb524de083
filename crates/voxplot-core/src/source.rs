//! The fetch seam: the only place a render request suspends.

use crate::{EndpointTable, Error, Result, VisualizationKind};
use std::collections::HashMap;
use std::future::Future;

/// Something that can produce the raw JSON body served at a URL.
///
/// Implement this over whatever HTTP client the host application uses.
pub trait RawDataSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// Resolves the endpoint for `kind` and awaits its raw body.
///
/// An unconfigured endpoint fails with [`Error::MissingEndpoint`] before any fetch is attempted.
pub async fn fetch_raw<S: RawDataSource>(
    source: &S,
    endpoints: &EndpointTable,
    kind: VisualizationKind,
) -> Result<String> {
    let url = endpoints.require(kind)?;
    tracing::debug!(%kind, url, "fetching raw chart data");
    source.fetch(url).await
}

/// Serves canned bodies keyed by URL (fixtures, offline replays).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bodies: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }
}

impl RawDataSource for StaticSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.bodies.get(url).cloned().ok_or_else(|| Error::Fetch {
            url: url.to_string(),
            message: "no response body registered".to_string(),
        })
    }
}
